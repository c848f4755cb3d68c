//! System configuration - the mutable working copy a caller owns

use serde::{Deserialize, Serialize};

use super::component::Component;
use super::environment::Environment;

/// A system under analysis: its name, mission duration, operating
/// environment, and ordered parts list.
///
/// Component order is meaningful for display only; the reliability math is
/// order-independent. The struct is a plain value - callers own mutation,
/// and the engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// System name
    pub name: String,

    /// Mission duration in hours (non-negative)
    pub mission_time: f64,

    /// Operating environment
    pub environment: Environment,

    /// Ordered component list
    pub components: Vec<Component>,
}

impl SystemConfig {
    pub fn new(name: impl Into<String>, mission_time: f64, environment: Environment) -> Self {
        Self {
            name: name.into(),
            mission_time,
            environment,
            components: Vec::new(),
        }
    }

    /// Append a component to the parts list.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Remove the component at `index`, if it exists.
    pub fn remove_component(&mut self, index: usize) -> Option<Component> {
        if index < self.components.len() {
            Some(self.components.remove(index))
        } else {
            None
        }
    }

    /// Replace the parts list wholesale. Bulk ingestion is a full replace,
    /// never a merge.
    pub fn replace_components(&mut self, components: Vec<Component>) {
        self.components = components;
    }
}
