//! Per-run simulation settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::GenericValue;

/// Settings for one elaborate-and-simulate run of a single test unit.
///
/// Owned by the caller and read-only to the backend. Generics live in a
/// `BTreeMap` so every encoding of the same settings iterates them in the
/// same (name-sorted) order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimSettings {
    /// Logical library containing the top-level unit.
    pub library: String,

    /// Name of the top-level entity/module to elaborate.
    pub unit: String,

    /// Generic values bound to the top level at elaboration time.
    #[serde(default)]
    pub generics: BTreeMap<String, GenericValue>,

    /// Stop after elaboration without running the simulation kernel.
    #[serde(default)]
    pub elaborate_only: bool,

    /// Extra flags appended verbatim to the elaboration command, last.
    #[serde(default)]
    pub elab_flags: Vec<String>,

    /// Extra flags appended verbatim to the simulation command, last.
    #[serde(default)]
    pub sim_flags: Vec<String>,

    /// Also elaborate the vendor `glbl` helper unit (needed by some
    /// vendor primitive libraries).
    #[serde(default)]
    pub enable_glbl: bool,

    /// Simulation timescale override, e.g. `1ns/1ps`.
    #[serde(default)]
    pub timescale: Option<String>,
}

impl SimSettings {
    /// Creates settings for elaborating `library.unit` with no generics.
    pub fn new(library: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            unit: unit.into(),
            ..Self::default()
        }
    }

    /// Binds a generic value, replacing any previous binding of `name`.
    pub fn with_generic(mut self, name: impl Into<String>, value: impl Into<GenericValue>) -> Self {
        self.generics.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let settings = SimSettings::new("lib", "tb_x");
        assert_eq!(settings.library, "lib");
        assert_eq!(settings.unit, "tb_x");
        assert!(settings.generics.is_empty());
        assert!(!settings.elaborate_only);
        assert!(!settings.enable_glbl);
        assert!(settings.timescale.is_none());
    }

    #[test]
    fn generics_iterate_name_sorted() {
        let settings = SimSettings::new("lib", "tb_x")
            .with_generic("width", 8i64)
            .with_generic("depth", 4i64);
        let names: Vec<&str> = settings.generics.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["depth", "width"]);
    }

    #[test]
    fn with_generic_replaces_binding() {
        let settings = SimSettings::new("lib", "tb_x")
            .with_generic("g", 1i64)
            .with_generic("g", 2i64);
        assert_eq!(settings.generics["g"], GenericValue::Integer(2));
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "library": "lib",
            "unit": "tb_x",
            "generics": { "g": { "Integer": 5 } },
            "timescale": "1ns/1ps"
        }"#;
        let settings: SimSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.generics["g"], GenericValue::Integer(5));
        assert_eq!(settings.timescale.as_deref(), Some("1ns/1ps"));
        assert!(!settings.elaborate_only);
    }
}
