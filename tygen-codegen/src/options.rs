//! Compiler configuration shared across generator backends.

use serde::{Deserialize, Serialize};

/// Options recognized by the generator backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Map custom (non-built-in) scalars to the untyped `any` keyword
    /// instead of a named type reference.
    pub passthrough_custom_scalars: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_custom_scalars_named() {
        assert!(!CompilerOptions::default().passthrough_custom_scalars);
    }
}
