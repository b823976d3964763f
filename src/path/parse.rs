//! Path grammar: dotted segments with optional bracketed sub-keys
//!
//! Supports:
//! - a.b.c (dot notation)
//! - a.b[0].c (bracketed index)
//! - m[key][1] (chained brackets, string keys)
//! - items.0 (numeric segment treated as index)
//!
//! Lenient parsing never fails: empty pieces are skipped and one trailing
//! `]` is stripped from each bracket piece. `parse_strict` rejects anything
//! the lenient parser would have to guess about.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LangError;

/// One well-formed dotted segment: optional base key, then `[key]` groups
static SEGMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\[\]]*(\[[^\[\]]+\])*$").unwrap());

/// A single traversal step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Mapping subscript: .field or [field]
    Field(String),
    /// Sequence subscript: [0] or .0
    Index(usize),
}

impl Step {
    /// Classify a raw key. Canonical non-negative integers become indices.
    pub fn from_key(key: &str) -> Self {
        match key.parse::<usize>() {
            Ok(index) if index.to_string() == key => Step::Index(index),
            _ => Step::Field(key.to_string()),
        }
    }

    /// The key this step uses when subscripting a mapping
    pub fn as_key(&self) -> String {
        match self {
            Step::Field(name) => name.clone(),
            Step::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(name) => f.write_str(name),
            Step::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Turn one `[`-split piece into a step.
///
/// `position` is the piece's place within its dotted segment: the first piece
/// is the base key, every later piece had a `[` before it and loses its `]`.
/// Empty keys address nothing and yield `None`.
pub(crate) fn piece_step(piece: &str, position: usize) -> Option<Step> {
    let key = if position == 0 {
        piece
    } else {
        piece.strip_suffix(']').unwrap_or(piece)
    };

    if key.is_empty() {
        None
    } else {
        Some(Step::from_key(key))
    }
}

/// Steps of one dotted segment, in traversal order
pub(crate) fn segment_steps(segment: &str) -> impl Iterator<Item = Step> + '_ {
    segment
        .split('[')
        .enumerate()
        .filter_map(|(position, piece)| piece_step(piece, position))
}

/// A parsed path expression
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathExpr {
    steps: Vec<Step>,
}

impl PathExpr {
    /// Parse leniently. Never fails; an empty path addresses the root.
    ///
    /// Examples:
    /// - "a.b.c" → [Field(a), Field(b), Field(c)]
    /// - "a.b[0].c" → [Field(a), Field(b), Index(0), Field(c)]
    pub fn parse(path: &str) -> Self {
        let steps = path.split('.').flat_map(segment_steps).collect();
        Self { steps }
    }

    /// Parse, rejecting empty segments and malformed brackets
    pub fn parse_strict(path: &str) -> Result<Self, LangError> {
        let invalid = |reason: &str| LangError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("empty path"));
        }

        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(invalid("empty segment"));
            }
            if !SEGMENT_PATTERN.is_match(segment) {
                return Err(invalid("malformed brackets"));
            }
        }

        Ok(Self::parse(path))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Split into parent address and final step
    pub fn split_last(&self) -> Option<(&Step, &[Step])> {
        self.steps.split_last()
    }
}

impl FromStr for PathExpr {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Field(name) if i > 0 => write!(f, ".{}", name)?,
                _ => write!(f, "{}", step)?,
            }
        }
        Ok(())
    }
}
