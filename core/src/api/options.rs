//! Configuration shared by every type derived from one root.

use crate::values::Name;

/// Options governing extension.
///
/// A root type owns one `Options`; every type derived from it shares them.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Reserved instance-behavior key that selects the constructor and is
    /// never copied into instance behavior.
    pub init_key: Name,

    /// Maximum distance from the root a type may have, and maximum number of
    /// nested inclusions on any path through its parents and mixins.
    pub max_depth: usize,

    /// Whether a non-method entry under `init_key` is an error. When unset,
    /// such an entry is dropped and the constructor is inherited.
    pub strict_init: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            init_key: Name::from("init"),
            max_depth: 256,
            strict_init: true,
        }
    }
}

impl Options {
    /// Apply every field set in `overrides`.
    pub fn override_with(&mut self, overrides: &OptionsOverride) {
        if let Some(init_key) = &overrides.init_key {
            self.init_key = init_key.clone();
        }
        if let Some(max_depth) = overrides.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(strict_init) = overrides.strict_init {
            self.strict_init = strict_init;
        }
    }

    /// Defaults with `overrides` applied.
    pub fn with_overrides(overrides: &OptionsOverride) -> Self {
        let mut options = Self::default();
        options.override_with(overrides);
        options
    }
}

/// Partial [`Options`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsOverride {
    pub init_key: Option<Name>,
    pub max_depth: Option<usize>,
    pub strict_init: Option<bool>,
}
