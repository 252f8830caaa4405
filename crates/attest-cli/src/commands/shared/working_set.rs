//! Working-set files: the JSON document passed between `draft`, `answer`,
//! `report` and `save`.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use attest_core::reconcile::WorkingSet;
use attest_schema::SchemaRegistry;

/// Read, schema-check and verify a working-set file.
pub fn read(path: &Path, schemas: &SchemaRegistry) -> anyhow::Result<WorkingSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read working set {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    schemas
        .validate("working_set", &value)
        .with_context(|| format!("{} is not a working set", path.display()))?;

    let set: WorkingSet = serde_json::from_value(value)
        .with_context(|| format!("{} is not a working set", path.display()))?;
    set.verify()
        .with_context(|| format!("{} does not match the catalogue", path.display()))?;

    Ok(set)
}

/// Replace `path` with `set`, via a temporary file in the same directory.
pub fn write(path: &Path, set: &WorkingSet) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut file, set)?;
    file.write_all(b"\n")?;
    file.persist(path)
        .map_err(|error| error.error)
        .with_context(|| format!("failed to write working set {}", path.display()))?;

    tracing::debug!(path = %path.display(), drafts = set.drafts.len(), "wrote working set");
    Ok(())
}
