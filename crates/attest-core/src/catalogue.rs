//! Static control catalogue for ISO 27001 (Annex A) and ISO 27002.
//!
//! The catalogue is configuration data, not persisted state. Order matters:
//! it defines the order of every working set and persisted log.

use crate::entities::Control;
use crate::enums::Standard;

/// ISO 27001 Annex A controls covered by an audit.
pub static ISO_27001_CONTROLS: [Control; 6] = [
    Control::new(
        "A.5.1",
        "Policies for information security",
        "Information security policies should be defined and approved by management.",
    ),
    Control::new(
        "A.5.2",
        "Information security roles and responsibilities",
        "Information security roles and responsibilities should be defined and allocated.",
    ),
    Control::new(
        "A.5.3",
        "Segregation of duties",
        "Conflicting duties and areas of responsibility should be segregated.",
    ),
    Control::new(
        "A.5.4",
        "Contact with authorities",
        "Contact with relevant authorities should be maintained.",
    ),
    Control::new(
        "A.5.5",
        "Contact with special interest groups",
        "Contact with special interest groups should be maintained.",
    ),
    Control::new(
        "A.18.1",
        "Compliance with legal and contractual requirements",
        "All relevant statutory, regulatory and contractual requirements should be identified and documented.",
    ),
];

/// ISO 27002 controls covered by an audit.
pub static ISO_27002_CONTROLS: [Control; 6] = [
    Control::new(
        "5.1",
        "Policies for information security",
        "Information security policies should be defined and approved by management.",
    ),
    Control::new(
        "5.2",
        "Information security roles and responsibilities",
        "Information security roles and responsibilities should be defined and allocated.",
    ),
    Control::new(
        "5.3",
        "Segregation of duties",
        "Conflicting duties and areas of responsibility should be segregated.",
    ),
    Control::new(
        "5.4",
        "Contact with authorities",
        "Contact with relevant authorities should be maintained.",
    ),
    Control::new(
        "5.5",
        "Contact with special interest groups",
        "Contact with special interest groups should be maintained.",
    ),
    Control::new(
        "18.1",
        "Compliance with legal and contractual requirements",
        "All relevant statutory, regulatory and contractual requirements should be identified and documented.",
    ),
];

/// Ordered controls for a standard.
#[must_use]
pub fn controls(standard: Standard) -> &'static [Control] {
    match standard {
        Standard::Iso27001 => &ISO_27001_CONTROLS,
        Standard::Iso27002 => &ISO_27002_CONTROLS,
    }
}

/// Look up a single control by id within a standard.
#[must_use]
pub fn find(standard: Standard, control_id: &str) -> Option<&'static Control> {
    controls(standard)
        .iter()
        .find(|control| control.id == control_id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn control_ids_are_unique_per_standard() {
        for standard in Standard::ALL {
            let ids: HashSet<_> = controls(standard).iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), controls(standard).len(), "{standard}");
        }
    }

    #[test]
    fn catalogue_order_is_stable() {
        let ids: Vec<_> = controls(Standard::Iso27001).iter().map(|c| c.id).collect();
        assert_eq!(ids, ["A.5.1", "A.5.2", "A.5.3", "A.5.4", "A.5.5", "A.18.1"]);
    }

    #[test]
    fn find_is_scoped_to_standard() {
        assert!(find(Standard::Iso27001, "A.5.3").is_some());
        assert!(find(Standard::Iso27002, "A.5.3").is_none());
        assert_eq!(
            find(Standard::Iso27002, "18.1").map(|c| c.name),
            Some("Compliance with legal and contractual requirements")
        );
    }
}
