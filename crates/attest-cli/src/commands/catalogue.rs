use attest_core::catalogue;
use attest_core::enums::Standard;
use attest_core::responses::CatalogueEntry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogueArgs;
use crate::output::output;

/// Handle `attest catalogue`.
pub fn handle(args: &CatalogueArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let standards: Vec<Standard> = match args.standard {
        Some(standard) => vec![standard.into()],
        None => Standard::ALL.to_vec(),
    };

    let entries: Vec<CatalogueEntry> = standards
        .into_iter()
        .flat_map(|standard| {
            catalogue::controls(standard)
                .iter()
                .map(move |control| CatalogueEntry::new(standard, control))
        })
        .collect();

    output(&entries, flags.format)
}
