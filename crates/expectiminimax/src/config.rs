//! Search configuration parameters.

use senet_core::{Result, SenetError};
use serde::{Deserialize, Serialize};

/// Expectiminimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of chance layers below the root decision.
    /// 0 evaluates each root action directly with the heuristic.
    pub max_depth: usize,

    /// Collect node counts and per-action root values.
    /// Never changes the chosen action.
    pub diagnostics: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            diagnostics: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with the specified depth.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Build a config from an unchecked depth.
    ///
    /// # Errors
    /// Returns `SenetError::InvalidDepth` if `depth` is negative.
    pub fn checked(depth: i64, diagnostics: bool) -> Result<Self> {
        let max_depth = usize::try_from(depth).map_err(|_| SenetError::InvalidDepth(depth))?;
        Ok(Self {
            max_depth,
            diagnostics,
        })
    }

    /// Create a config that records a [`SearchTrace`](crate::SearchTrace).
    pub fn for_analysis(max_depth: usize) -> Self {
        Self {
            max_depth,
            diagnostics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 2);
        assert!(!config.diagnostics);
    }

    #[test]
    fn test_with_depth() {
        let config = SearchConfig::with_depth(4);
        assert_eq!(config.max_depth, 4);
        assert!(!config.diagnostics);
    }

    #[test]
    fn test_for_analysis() {
        let config = SearchConfig::for_analysis(1);
        assert_eq!(config.max_depth, 1);
        assert!(config.diagnostics);
    }

    #[test]
    fn test_checked_depth() {
        assert_eq!(SearchConfig::checked(3, true), Ok(SearchConfig::for_analysis(3)));
        assert_eq!(SearchConfig::checked(-1, false), Err(SenetError::InvalidDepth(-1)));
    }

    #[test]
    fn test_config_json() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"max_depth":1,"diagnostics":true}"#).unwrap();
        assert_eq!(config, SearchConfig::for_analysis(1));
    }
}
