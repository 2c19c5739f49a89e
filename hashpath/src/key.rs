//! Mapping keys
//!
//! Decoders hand us two flavours of key: plain text (`"name"`) and symbolic
//! identifiers (`:name`). Both spell a field the same way, so attribute
//! lookup treats them as interchangeable: the exact form is tried first,
//! then the [`Key::alternate`] form.

use serde::{Serialize, Serializer};
use std::fmt;

/// Key of a [`Mapping`](crate::Mapping) entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Textual key, as produced by JSON object decoding
    Text(String),
    /// Symbolic identifier key
    Symbol(String),
}

impl Key {
    /// Create a textual key
    pub fn text(name: impl Into<String>) -> Self {
        Key::Text(name.into())
    }

    /// Create a symbolic key
    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }

    /// Spelling of the key, regardless of its form
    pub fn as_str(&self) -> &str {
        match self {
            Key::Text(name) | Key::Symbol(name) => name,
        }
    }

    /// Whether this is a symbolic key
    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// Same spelling in the other form (textual <-> symbolic)
    pub fn alternate(&self) -> Key {
        match self {
            Key::Text(name) => Key::Symbol(name.clone()),
            Key::Symbol(name) => Key::Text(name.clone()),
        }
    }

    /// Convert into a symbolic key with the same spelling
    pub fn into_symbol(self) -> Key {
        match self {
            Key::Text(name) | Key::Symbol(name) => Key::Symbol(name),
        }
    }

    /// Convert into a textual key with the same spelling
    pub fn into_text(self) -> Key {
        match self {
            Key::Text(name) | Key::Symbol(name) => Key::Text(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(name) => write!(f, "{:?}", name),
            Key::Symbol(name) => write!(f, ":{}", name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Text(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Text(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

// Serialized formats have no notion of symbols; both forms become strings.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
