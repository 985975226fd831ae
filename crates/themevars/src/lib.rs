//! # themevars - Theme-aware CSS variables from design tokens
//!
//! `themevars` turns a flat dictionary of resolved design tokens into a CSS
//! stylesheet that switches themes three ways at once:
//!
//! - a theme-neutral `:root` block,
//! - `prefers-color-scheme` media queries following the OS setting,
//! - `[data-theme="light"]` / `[data-theme="dark"]` attribute selectors.
//!
//! ## Core Concepts
//!
//! - [`Token`] / [`Dictionary`]: resolved tokens in a stable order
//! - [`partition`]: splits tokens into [`Group::Light`], [`Group::Dark`] and
//!   [`Group::Rest`] by their `light-mode` / `dark-mode` path segments
//! - [`VariableName`]: a custom property name as words, normalized per group
//! - [`format_css_vars`]: renders the five-block stylesheet
//!
//! ## Quick Start
//!
//! ```rust
//! use themevars::{format_css_vars, Dictionary, FileHeader, Options};
//!
//! let dictionary = Dictionary::from_json(r##"[
//!     {"path": ["color", "surface"], "type": "color", "value": "#000000"},
//!     {"path": ["color", "brand", "light-mode", "primary"], "type": "color", "value": "#ffffff"},
//!     {"path": ["color", "brand", "dark-mode", "primary"], "type": "color", "value": "#111111"}
//! ]"##).unwrap();
//!
//! let css = format_css_vars(&dictionary, &Options::default(), &FileHeader::default());
//!
//! assert!(css.contains(":root {\n--color-surface: #000000;\n}"));
//! assert!(css.contains("[data-theme=\"light\"] {\n--color-brand-mode-primary: #ffffff;\n}"));
//! assert!(css.contains("[data-theme=\"dark\"] {\n--color-brand-mode-primary: #111111;\n}"));
//! ```
//!
//! ## Name Normalization
//!
//! Inside a themed block the theme word is dropped from variable names, so
//! light and dark blocks declare the same property. Theme-neutral names lose
//! their `desktop` word. See [`VariableName::normalized`].
//!
//! Generation never fails; only loading tokens or options from text returns
//! a [`ThemeVarsError`].

pub mod classify;
pub mod document;
pub mod emit;
mod error;
pub mod header;
pub mod name;
pub mod options;
pub mod partition;
pub mod token;

pub use classify::{is_dark_theme_token, is_light_theme_token, ThemeMarker};
pub use document::{format_css_vars, format_css_vars_with};
pub use emit::Emitter;
pub use error::{Result, ThemeVarsError};
pub use header::FileHeader;
pub use name::VariableName;
pub use options::{Formatting, Options};
pub use partition::{partition, Group, Groups};
pub use token::{Dictionary, Token, TokenPath, TokenType};
