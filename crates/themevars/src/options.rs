//! Generation options.
//!
//! Every field has a default, resolved once when the options are built or
//! loaded. A caller without any configuration passes `Options::default()`.
//!
//! Options can be loaded from YAML or JSON with camelCase keys:
//!
//! ```rust
//! use themevars::Options;
//!
//! let options = Options::from_yaml(r#"
//! outputReferences: true
//! prefix: acme
//! formatting:
//!   indentation: "  "
//! "#).unwrap();
//!
//! assert!(options.output_references);
//! assert_eq!(options.formatting.separator, ":");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options controlling stylesheet generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Emit `var(--other)` for tokens that reference another token.
    pub output_references: bool,
    /// Extra leading name segment for every variable.
    pub prefix: Option<String>,
    /// Declaration layout.
    pub formatting: Formatting,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_references(mut self, enabled: bool) -> Self {
        self.output_references = enabled;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = formatting;
        self
    }

    /// Loads options from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads options from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Layout of a single declaration:
/// `<indentation><property_prefix><name><separator> <value><suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Formatting {
    pub indentation: String,
    pub property_prefix: String,
    pub separator: String,
    pub suffix: String,
    /// Append token comments as `/* ... */`.
    pub comments: bool,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            indentation: String::new(),
            property_prefix: "--".to_string(),
            separator: ":".to_string(),
            suffix: ";".to_string(),
            comments: true,
        }
    }
}
