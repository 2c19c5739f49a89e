//! Hashpath Test Utilities
//!
//! Shared fixtures, builders and proptest strategies for the hashpath
//! integration tests and benchmarks. Most fixtures come in two key styles so
//! every behavior can be checked against symbolic and textual keys alike.

use hashpath::{Key, Mapping, Value};
use std::sync::Once;

pub mod strategies;

/// Which key form a fixture uses for its mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// `Key::Symbol` keys
    Symbol,
    /// `Key::Text` keys
    Text,
}

impl KeyStyle {
    /// Both styles, for looping over in tests
    pub const ALL: [KeyStyle; 2] = [KeyStyle::Symbol, KeyStyle::Text];

    /// Build a key of this style
    pub fn key(self, name: &str) -> Key {
        match self {
            KeyStyle::Symbol => Key::symbol(name),
            KeyStyle::Text => Key::text(name),
        }
    }
}

/// Builder for mapping documents with a fixed key style
pub struct DocumentBuilder {
    style: KeyStyle,
    fields: Mapping,
}

impl DocumentBuilder {
    /// Create a new builder
    pub fn new(style: KeyStyle) -> Self {
        Self {
            style,
            fields: Mapping::new(),
        }
    }

    /// Add a field with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(self.style.key(key), value);
        self
    }

    /// Add a field with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(self.style.key(key), value);
        self
    }

    /// Add a field with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(self.style.key(key), value);
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(self.style.key(key), Value::Null);
        self
    }

    /// Add a field with any value (usually a nested document)
    pub fn value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(self.style.key(key), value);
        self
    }

    /// Add a field with a sequence value
    pub fn sequence(mut self, key: &str, items: Vec<Value>) -> Self {
        self.fields.insert(self.style.key(key), Value::Sequence(items));
        self
    }

    /// Build the document
    pub fn build(self) -> Value {
        Value::Mapping(self.fields)
    }
}

/// Canned documents mirroring common decoded API payloads
pub struct Fixtures;

impl Fixtures {
    /// `{foo: "FOO", bar: "BAR"}`
    pub fn simple(style: KeyStyle) -> Value {
        DocumentBuilder::new(style)
            .string("foo", "FOO")
            .string("bar", "BAR")
            .build()
    }

    /// Two named things with descriptions
    pub fn nested(style: KeyStyle) -> Value {
        DocumentBuilder::new(style)
            .value("foo", Self::thing(style, "FOO", "A thing that foos"))
            .value("bar", Self::thing(style, "BAR", "A thing that bars"))
            .build()
    }

    /// `{name, description}` mapping
    pub fn thing(style: KeyStyle, name: &str, description: &str) -> Value {
        DocumentBuilder::new(style)
            .string("name", name)
            .string("description", description)
            .build()
    }

    /// `{foo: {bar: {baz: "Howdy!"}}}`
    pub fn three_levels(style: KeyStyle) -> Value {
        let baz = DocumentBuilder::new(style).string("baz", "Howdy!").build();
        let bar = DocumentBuilder::new(style).value("bar", baz).build();
        DocumentBuilder::new(style).value("foo", bar).build()
    }

    /// `{foo: ["a", "b", "c"]}`
    pub fn hash_of_arrays(style: KeyStyle) -> Value {
        DocumentBuilder::new(style)
            .sequence("foo", vec!["a".into(), "b".into(), "c".into()])
            .build()
    }

    /// `{foo: [{bar: "BAR"}, {baz: "BAZ"}]}`
    pub fn hash_of_arrays_of_hashes(style: KeyStyle) -> Value {
        DocumentBuilder::new(style)
            .sequence(
                "foo",
                vec![
                    DocumentBuilder::new(style).string("bar", "BAR").build(),
                    DocumentBuilder::new(style).string("baz", "BAZ").build(),
                ],
            )
            .build()
    }

    /// Two posts with two comments each
    pub fn posts(style: KeyStyle) -> Value {
        let post = |title: &str, comments: [&str; 2]| {
            DocumentBuilder::new(style)
                .string("title", title)
                .sequence(
                    "comments",
                    comments
                        .iter()
                        .map(|text| DocumentBuilder::new(style).string("text", text).build())
                        .collect(),
                )
                .build()
        };

        DocumentBuilder::new(style)
            .sequence(
                "posts",
                vec![
                    post("Post 1", ["Comment 1", "Comment 2"]),
                    post("Post 2", ["Comment 3", "Comment 4"]),
                ],
            )
            .build()
    }

    /// `[{name: "alpha"}, {name: "bravo"}, {name: "charlie"}]`
    pub fn names(style: KeyStyle) -> Value {
        Value::Sequence(
            ["alpha", "bravo", "charlie"]
                .iter()
                .map(|name| Self::named(style, name))
                .collect(),
        )
    }

    /// `{name: <name>}`
    pub fn named(style: KeyStyle, name: &str) -> Value {
        DocumentBuilder::new(style).string("name", name).build()
    }

    /// A large log-like sequence for benchmarks
    pub fn large_records(style: KeyStyle, count: usize) -> Value {
        Value::Sequence(
            (0..count)
                .map(|i| {
                    let level = match i % 4 {
                        0 => "DEBUG",
                        1 => "INFO",
                        2 => "WARN",
                        _ => "ERROR",
                    };
                    DocumentBuilder::new(style)
                        .int("id", i as i64)
                        .string("level", level)
                        .value(
                            "user",
                            DocumentBuilder::new(style)
                                .string("name", &format!("user_{}", i % 100))
                                .build(),
                        )
                        .build()
                })
                .collect(),
        )
    }
}

static TRACING: Once = Once::new();

/// Route `tracing` events to the test harness output (once per process)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .with_test_writer()
            .try_init();
    });
}
