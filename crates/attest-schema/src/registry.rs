//! Central schema registry for all Attest documents.
//!
//! The `SchemaRegistry` builds JSON Schemas from attest-core types at
//! construction time using [`schemars::schema_for!`] and validates via
//! `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name → schema for every exchanged document.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    /// Build a registry holding the record, working-set, report and CLI
    /// response schemas from attest-core.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Records (3) ---
        register!(schemas, "draft_record", attest_core::entities::DraftRecord);
        register!(schemas, "audit_record", attest_core::entities::AuditRecord);
        register!(schemas, "logged_record", attest_core::entities::LoggedRecord);

        // --- Documents (4) ---
        register!(schemas, "working_set", attest_core::reconcile::WorkingSet);
        register!(schemas, "audit_log", attest_core::entities::AuditLog);
        register!(schemas, "summary", attest_core::report::Summary);
        register!(schemas, "report", attest_core::report::Report);

        // --- CLI response types (5) ---
        register!(
            schemas,
            "catalogue_entry",
            attest_core::responses::CatalogueEntry
        );
        register!(
            schemas,
            "persisted_log",
            attest_core::responses::PersistedLog
        );
        register!(
            schemas,
            "save_response",
            attest_core::responses::SaveResponse
        );
        register!(
            schemas,
            "draft_response",
            attest_core::responses::DraftResponse
        );
        register!(
            schemas,
            "migrate_response",
            attest_core::responses::MigrateResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use attest_core::enums::Compliance;
    use attest_core::reconcile::WorkingSet;
    use attest_core::session::{AuditSession, OrganizationName};
    use chrono::NaiveDate;

    use super::*;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    fn working_set() -> WorkingSet {
        let session = AuditSession::new(OrganizationName::parse("Acme").unwrap(), None);
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        WorkingSet::assemble(&session, now, |_| None)
    }

    #[test]
    fn registry_has_expected_count() {
        // 3 records + 4 documents + 5 responses
        assert_eq!(registry().schema_count(), 12);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("finding").is_none());
    }

    #[test]
    fn fresh_working_set_validates() {
        let json = serde_json::to_value(working_set()).unwrap();
        assert!(registry().validate("working_set", &json).is_ok());
    }

    #[test]
    fn answered_working_set_validates() {
        let mut set = working_set();
        set.drafts[0].compliance = Some(Compliance::PartiallyImplemented);
        let json = serde_json::to_value(set).unwrap();
        assert!(registry().validate("working_set", &json).is_ok());
    }

    #[test]
    fn validate_rejects_invalid_risk_level() {
        let mut json = serde_json::to_value(working_set()).unwrap();
        json["drafts"][3]["risk_level"] = serde_json::json!("Severe");

        let result = registry().validate("working_set", &json);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(errors.iter().any(|e| e.contains("Severe")), "{errors:?}");
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let mut json = serde_json::to_value(working_set()).unwrap();
        json.as_object_mut().unwrap().remove("drafts");
        assert!(registry().validate("working_set", &json).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
