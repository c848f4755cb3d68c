//! Component entity - one line item of the system's parts list

use serde::{Deserialize, Serialize};

/// A component entry: a category of part, how many of it the system uses,
/// and its per-unit failure rate.
///
/// Invariants (enforced at construction sites, i.e. the row builder and the
/// catalog): `quantity` > 0 and `failure_rate` > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Short category label
    #[serde(rename = "type")]
    pub kind: String,

    /// Number of units installed
    pub quantity: u32,

    /// Failures per hour, per single unit
    pub failure_rate: f64,

    /// Free-text description
    pub description: String,
}

impl Component {
    /// Create a component with the default description for its kind.
    pub fn new(kind: impl Into<String>, quantity: u32, failure_rate: f64) -> Self {
        let kind = kind.into();
        let description = default_description(&kind);
        Self {
            kind,
            quantity,
            failure_rate,
            description,
        }
    }

    /// Create a component with an explicit description.
    pub fn with_description(
        kind: impl Into<String>,
        quantity: u32,
        failure_rate: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            quantity,
            failure_rate,
            description: description.into(),
        }
    }
}

/// The default description applied when a parts list provides none.
pub fn default_description(kind: &str) -> String {
    format!("{} component", kind)
}

/// Catalog entry: a common electronic component kind and a typical baseline
/// failure rate (failures per hour) for quick what-if entry.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub kind: &'static str,
    pub failure_rate: f64,
}

/// Baseline failure rates for common electronic component categories.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { kind: "resistor", failure_rate: 0.000001 },
    CatalogEntry { kind: "capacitor", failure_rate: 0.000002 },
    CatalogEntry { kind: "integrated circuit", failure_rate: 0.00001 },
    CatalogEntry { kind: "transistor", failure_rate: 0.000005 },
    CatalogEntry { kind: "connector", failure_rate: 0.000003 },
    CatalogEntry { kind: "inductor", failure_rate: 0.0000015 },
    CatalogEntry { kind: "diode", failure_rate: 0.000004 },
    CatalogEntry { kind: "transformer", failure_rate: 0.000008 },
    CatalogEntry { kind: "relay", failure_rate: 0.000015 },
    CatalogEntry { kind: "sensor", failure_rate: 0.000012 },
];

/// Look up the baseline failure rate for a component kind, if cataloged.
pub fn catalog_failure_rate(kind: &str) -> Option<f64> {
    let kind = kind.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.failure_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_creation() {
        let cmp = Component::new("resistor", 10, 1e-6);
        assert_eq!(cmp.kind, "resistor");
        assert_eq!(cmp.quantity, 10);
        assert_eq!(cmp.failure_rate, 1e-6);
        assert_eq!(cmp.description, "resistor component");
    }

    #[test]
    fn test_explicit_description() {
        let cmp = Component::with_description("resistor", 10, 1e-6, "10k pull-up");
        assert_eq!(cmp.description, "10k pull-up");
    }

    #[test]
    fn test_kind_serialized_as_type() {
        let cmp = Component::new("diode", 2, 4e-6);
        let json = serde_json::to_string(&cmp).unwrap();
        assert!(json.contains("\"type\":\"diode\""));

        let parsed: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cmp);
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(catalog_failure_rate("resistor"), Some(0.000001));
        assert_eq!(catalog_failure_rate("  Relay "), Some(0.000015));
        assert_eq!(catalog_failure_rate("flux capacitor"), None);
    }

    #[test]
    fn test_catalog_rates_positive() {
        for entry in CATALOG {
            assert!(entry.failure_rate > 0.0, "{} has no rate", entry.kind);
        }
    }
}
