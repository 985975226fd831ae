//! Resolved design tokens and the dictionary that holds them.
//!
//! Tokens arrive here fully resolved: values are concrete strings and any
//! reference to another token has already been identified upstream. This
//! module only models them and loads them from JSON or YAML.
//!
//! ```rust
//! use themevars::Dictionary;
//!
//! let dictionary = Dictionary::from_json(r##"[
//!     {"path": ["color", "surface"], "type": "color", "value": "#000000"},
//!     {"path": "color.brand.light-mode.primary", "type": "color", "value": "#ffffff",
//!      "reference": "{color.base.white}"}
//! ]"##).unwrap();
//!
//! assert_eq!(dictionary.len(), 2);
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::classify::ThemeMarker;
use crate::error::{Result, ThemeVarsError};

/// Matches the curly-brace reference syntax: `{color.base.white}`.
static REFERENCE_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\s*([^{}]+?)\s*\}$").expect("reference pattern is valid"));

// ============================================================================
// TokenPath
// ============================================================================

/// The ordered name segments identifying a token, e.g. `color.brand.primary`.
///
/// A path always has at least one segment, no segment is empty, and it never
/// carries both the light and the dark theme marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PathRepr", into = "Vec<String>")]
pub struct TokenPath(Vec<String>);

impl TokenPath {
    /// Builds a path from segments.
    ///
    /// Fails when there are no segments, any segment is empty, or both theme
    /// markers are present.
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(ThemeVarsError::InvalidPath {
                path: String::new(),
                reason: "path has no segments",
            });
        }
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(ThemeVarsError::InvalidPath {
                path: segments.join("."),
                reason: "empty segment",
            });
        }
        let has = |marker: ThemeMarker| segments.iter().any(|s| s == marker.segment());
        if has(ThemeMarker::Light) && has(ThemeMarker::Dark) {
            return Err(ThemeVarsError::InvalidPath {
                path: segments.join("."),
                reason: "path carries both light-mode and dark-mode",
            });
        }
        Ok(TokenPath(segments))
    }

    /// Parses a dotted path, with or without reference braces.
    ///
    /// Both `color.base.white` and `{color.base.white}` yield the same path.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let dotted = match REFERENCE_SYNTAX.captures(trimmed) {
            Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
            None if trimmed.contains(&['{', '}'][..]) => {
                return Err(ThemeVarsError::InvalidPath {
                    path: input.to_string(),
                    reason: "unbalanced reference braces",
                })
            }
            None => trimmed,
        };
        TokenPath::new(dotted.split('.')).map_err(|err| match err {
            ThemeVarsError::InvalidPath { reason, .. } => ThemeVarsError::InvalidPath {
                path: input.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// The segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` if some segment equals `segment` exactly.
    pub fn contains_segment(&self, segment: &str) -> bool {
        self.0.iter().any(|s| s == segment)
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<TokenPath> for Vec<String> {
    fn from(path: TokenPath) -> Self {
        path.0
    }
}

/// Wire forms accepted for a path: a segment list or a dotted string.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathRepr {
    Segments(Vec<String>),
    Dotted(String),
}

impl TryFrom<PathRepr> for TokenPath {
    type Error = ThemeVarsError;

    fn try_from(repr: PathRepr) -> Result<Self> {
        match repr {
            PathRepr::Segments(segments) => TokenPath::new(segments),
            PathRepr::Dotted(dotted) => TokenPath::parse(&dotted),
        }
    }
}

// ============================================================================
// TokenType
// ============================================================================

/// The category tag of a token.
///
/// Only the categories that take part in theme output get their own variant;
/// everything else is carried verbatim in [`TokenType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenType {
    Color,
    Effect,
    CustomShadow,
    Other(String),
}

impl TokenType {
    /// The tag as written in token files.
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Color => "color",
            TokenType::Effect => "effect",
            TokenType::CustomShadow => "custom-shadow",
            TokenType::Other(tag) => tag,
        }
    }
}

impl From<&str> for TokenType {
    fn from(tag: &str) -> Self {
        match tag {
            "color" => TokenType::Color,
            "effect" => TokenType::Effect,
            "custom-shadow" => TokenType::CustomShadow,
            other => TokenType::Other(other.to_string()),
        }
    }
}

impl From<String> for TokenType {
    fn from(tag: String) -> Self {
        TokenType::from(tag.as_str())
    }
}

impl From<TokenType> for String {
    fn from(token_type: TokenType) -> Self {
        token_type.as_str().to_string()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Token
// ============================================================================

/// A single resolved design token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Identifying path.
    pub path: TokenPath,
    /// Category tag.
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Resolved value, rendered as written.
    #[serde(deserialize_with = "deserialize_scalar")]
    pub value: String,
    /// Token this one was defined from, used when outputting references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<TokenPath>,
    /// Free-form description, emitted as a trailing CSS comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Token {
    /// Creates a token without reference or comment.
    pub fn new(path: TokenPath, token_type: impl Into<TokenType>, value: impl Into<String>) -> Self {
        Self {
            path,
            token_type: token_type.into(),
            value: value.into(),
            reference: None,
            comment: None,
        }
    }

    /// Sets the token this one refers to.
    pub fn with_reference(mut self, reference: TokenPath) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Sets the description comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Accepts strings, numbers and booleans; anything structured is rejected
/// because values must already be resolved to CSS text.
fn deserialize_scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(de::Error::custom("token value is missing")),
        Value::Array(_) | Value::Object(_) => Err(de::Error::custom(
            "token value must be a string, number or bool",
        )),
    }
}

// ============================================================================
// Dictionary
// ============================================================================

/// An ordered collection of tokens.
///
/// Order is insertion order and is what every downstream group preserves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    tokens: Vec<Token>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token, builder style.
    pub fn with(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    /// Loads a dictionary from a JSON array of tokens.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a dictionary from a YAML sequence of tokens.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Iterates tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Looks a token up by path. The first match wins.
    pub fn get(&self, path: &TokenPath) -> Option<&Token> {
        self.tokens.iter().find(|token| &token.path == path)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
