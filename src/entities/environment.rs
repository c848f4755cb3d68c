//! Operating environment and its failure-rate derating factor

use serde::{Deserialize, Serialize};

/// An operating environment: a label plus the multiplicative factor applied
/// uniformly to every component failure rate.
///
/// Invariant: `factor` > 0 (checked by the engine's preconditions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Free-text label ("ground fixed", "airborne", ...)
    pub name: String,

    /// Positive multiplier applied to all component failure rates
    pub factor: f64,
}

impl Environment {
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            factor,
        }
    }

    /// Built-in environment presets with conventional derating factors,
    /// from benign lab conditions up to shipboard service.
    pub fn presets() -> Vec<Environment> {
        vec![
            Environment::new("laboratory", 1.0),
            Environment::new("ground fixed", 2.0),
            Environment::new("vehicle mounted", 4.0),
            Environment::new("airborne", 8.0),
            Environment::new("naval", 10.0),
        ]
    }

    /// Find a preset by name, case-insensitively.
    pub fn preset(name: &str) -> Option<Environment> {
        let wanted = name.trim().to_lowercase();
        Self::presets().into_iter().find(|e| e.name == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        let env = Environment::preset("Ground Fixed").unwrap();
        assert_eq!(env.factor, 2.0);
        assert!(Environment::preset("orbital").is_none());
    }

    #[test]
    fn test_presets_ordered_by_harshness() {
        let presets = Environment::presets();
        for pair in presets.windows(2) {
            assert!(pair[0].factor < pair[1].factor);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let env = Environment::new("airborne", 8.0);
        let json = serde_json::to_string(&env).unwrap();
        let parsed: Environment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, env);
    }
}
