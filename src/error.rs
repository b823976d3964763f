//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

pub type Result<T> = std::result::Result<T, LangError>;

#[derive(Error, Debug)]
pub enum LangError {
    // ─────────────────────────────────────────────────────────────
    // Path errors (LANG-010 to LANG-012)
    // ─────────────────────────────────────────────────────────────

    #[error("LANG-010: Invalid path syntax: '{path}' ({reason})")]
    InvalidPath { path: String, reason: String },

    #[error("LANG-011: Cannot dereference '{segment}' on {value_type} in path '{path}'")]
    Dereference {
        segment: String,
        value_type: String,
        path: String,
    },

    #[error("LANG-012: Index {index} out of bounds (len {len}) in path '{path}'")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        path: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Validation errors (LANG-020 to LANG-021)
    // ─────────────────────────────────────────────────────────────

    #[error("LANG-020: expected {name} to be {expected} but was {actual}")]
    Precondition {
        name: String,
        expected: &'static str,
        actual: String,
    },

    #[error("LANG-021: \"{field}\" is missing in {value}")]
    MissingField { field: String, value: String },

    // ─────────────────────────────────────────────────────────────
    // Config errors (LANG-030)
    // ─────────────────────────────────────────────────────────────

    #[error("LANG-030: Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for LangError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            LangError::InvalidPath { .. } => Some("Use paths like a.b.c or a.items[0].name"),
            LangError::Dereference { .. } => {
                Some("Create the intermediate objects before writing; set_with_path never creates them")
            }
            LangError::IndexOutOfBounds { .. } => {
                Some("Write to an existing index or append at exactly the array length")
            }
            LangError::Precondition { .. } => Some("Check the caller passes a value of the expected type"),
            LangError::MissingField { .. } => Some("Add the missing field to the object"),
            LangError::ConfigParse(_) => Some("Check TOML syntax: sections [path] and [timing]"),
            LangError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
