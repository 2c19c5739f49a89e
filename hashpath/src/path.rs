//! Path traversal: lenient dotted paths and strict JSON Pointers
//!
//! Only plain segments are understood: field names and non-negative
//! numeric indices. There are no wildcards, slices or negative indices.

use crate::error::{HashpathError, Result};
use crate::key::Key;
use crate::limits::PathLimits;
use crate::value::Mapping;
use crate::wrap::{wrap, Wrapped};
use smallvec::SmallVec;

/// Unescaped pointer segments
pub type Tokens = SmallVec<[String; 8]>;

/// Walk a dotted path, yielding [`Wrapped::Absent`] on the first miss
pub(crate) fn walk_dotted<'a>(start: Wrapped<'a>, path: &str) -> Wrapped<'a> {
    if path.is_empty() {
        return start;
    }

    let mut current = start;
    for segment in path.split('.') {
        current = match current {
            Wrapped::Mapping(map) => map.attr(segment),
            Wrapped::Sequence(seq) => match segment.parse::<usize>() {
                Ok(index) => seq.get(index),
                Err(_) => Wrapped::Absent,
            },
            _ => Wrapped::Absent,
        };
        if current.is_absent() {
            break;
        }
    }
    current
}

/// Parse and validate a JSON Pointer according to RFC 6901
///
/// Returns the unescaped tokens. The empty string is the root and yields
/// no tokens.
pub fn parse_pointer(pointer: &str, limits: &PathLimits) -> Result<Tokens> {
    if pointer.len() > limits.max_pointer_length {
        return Err(HashpathError::PointerTooLong {
            pointer: pointer.to_string(),
            length: pointer.len(),
            max_length: limits.max_pointer_length,
        });
    }

    if pointer.is_empty() {
        return Ok(Tokens::new());
    }

    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(HashpathError::InvalidPointer {
            pointer: pointer.to_string(),
            reason: "Pointer must start with '/' (or be empty for root)".to_string(),
        });
    };

    let mut tokens = Tokens::new();
    for raw in rest.split('/') {
        validate_escape_sequences(raw).map_err(|reason| HashpathError::InvalidPointer {
            pointer: pointer.to_string(),
            reason,
        })?;
        tokens.push(unescape_pointer_token(raw));
    }

    if tokens.len() > limits.max_depth {
        return Err(HashpathError::DepthLimitExceeded {
            pointer: pointer.to_string(),
            depth: tokens.len(),
            max_depth: limits.max_depth,
        });
    }

    Ok(tokens)
}

/// Unescape a JSON Pointer token (`~1` -> `/`, `~0` -> `~`)
pub fn unescape_pointer_token(token: &str) -> String {
    // ~1 before ~0, otherwise "~01" would become "/"
    token.replace("~1", "/").replace("~0", "~")
}

/// Escape a string for use as a JSON Pointer token
pub fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn validate_escape_sequences(token: &str) -> std::result::Result<(), String> {
    let mut chars = token.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '~' {
            match chars.peek() {
                Some('0') | Some('1') => {
                    chars.next();
                }
                Some(other) => {
                    return Err(format!(
                        "Invalid escape sequence '~{}'. Use '~0' for '~' and '~1' for '/'.",
                        other
                    ));
                }
                None => {
                    return Err(
                        "Incomplete escape sequence at end of token. Use '~0' for '~' and '~1' for '/'."
                            .to_string(),
                    );
                }
            }
        }
    }
    Ok(())
}

/// Resolve a pointer strictly, reporting where traversal stopped
///
/// Tokens name textual keys first and fall back to symbolic keys.
pub(crate) fn resolve_pointer<'a>(
    start: Wrapped<'a>,
    pointer: &str,
    limits: &PathLimits,
) -> Result<Wrapped<'a>> {
    limits.validate()?;
    let tokens = parse_pointer(pointer, limits)?;
    tracing::trace!(pointer, depth = tokens.len(), "resolving pointer");

    let mut current = start;
    let mut reached = String::new();

    for token in &tokens {
        reached.push('/');
        reached.push_str(&escape_pointer_token(token));

        current = match current {
            Wrapped::Mapping(map) => match map.as_mapping().resolve(&Key::text(token.as_str())) {
                Some(child) => wrap(child),
                None => {
                    return Err(not_found(pointer, reached, describe_keys(map.as_mapping())));
                }
            },
            Wrapped::Sequence(seq) => match token.parse::<usize>() {
                Ok(index) if index < seq.len() => seq.get(index),
                Ok(_) => {
                    return Err(not_found(
                        pointer,
                        reached,
                        format!("<sequence with {} elements>", seq.len()),
                    ));
                }
                Err(_) => {
                    return Err(not_found(
                        pointer,
                        reached,
                        format!(
                            "<sequence with {} elements, expected numeric index>",
                            seq.len()
                        ),
                    ));
                }
            },
            other => {
                return Err(not_found(
                    pointer,
                    reached,
                    format!("<{}, cannot traverse further>", other.type_name()),
                ));
            }
        };
    }

    Ok(current)
}

fn not_found(pointer: &str, reached_path: String, available_keys: String) -> HashpathError {
    tracing::debug!(pointer, reached = %reached_path, "pointer not found");
    HashpathError::PointerNotFound {
        pointer: pointer.to_string(),
        reached_path,
        available_keys,
    }
}

/// Summarize the keys of a mapping for error messages
pub(crate) fn describe_keys(map: &Mapping) -> String {
    if map.is_empty() {
        return "<empty mapping>".to_string();
    }

    let shown: Vec<String> = map.keys().take(10).map(Key::to_string).collect();
    if map.len() > 10 {
        format!("{}, ... ({} total)", shown.join(", "), map.len())
    } else {
        shown.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;

    fn limits() -> PathLimits {
        PathLimits {
            max_depth: 10,
            max_pointer_length: 256,
        }
    }

    #[test]
    fn parse_pointer_validates_length() {
        let long_pointer = format!("/{}", "a".repeat(300));
        let result = parse_pointer(&long_pointer, &limits());
        assert!(matches!(result, Err(HashpathError::PointerTooLong { .. })));
    }

    #[test]
    fn parse_pointer_validates_depth() {
        let result = parse_pointer("/a/b/c/d/e/f/g/h/i/j/k", &limits());
        assert!(matches!(
            result,
            Err(HashpathError::DepthLimitExceeded { depth: 11, .. })
        ));
    }

    #[test]
    fn parse_pointer_rejects_invalid_start() {
        let result = parse_pointer("data/field", &limits());
        assert!(matches!(result, Err(HashpathError::InvalidPointer { .. })));
    }

    #[test]
    fn parse_pointer_handles_root() {
        assert!(parse_pointer("", &limits()).unwrap().is_empty());
    }

    #[test]
    fn parse_pointer_unescapes_tokens() {
        let tokens = parse_pointer("/a~1b/c~0d/~01", &limits()).unwrap();
        assert_eq!(tokens.as_slice(), ["a/b", "c~d", "~1"]);
    }

    #[test]
    fn parse_pointer_validates_escape_sequences() {
        let result = parse_pointer("/invalid~2", &limits());
        assert!(matches!(result, Err(HashpathError::InvalidPointer { .. })));

        let result = parse_pointer("/trailing~", &limits());
        assert!(matches!(result, Err(HashpathError::InvalidPointer { .. })));
    }

    #[test]
    fn escape_and_unescape_roundtrip() {
        let original = "hello/world~test";
        assert_eq!(unescape_pointer_token(&escape_pointer_token(original)), original);
    }

    #[test]
    fn dotted_path_walks_mappings_and_indices() {
        let doc = Value::from(json!({"posts": [{"comments": [{"text": "Comment 1"}]}]}));
        let root = wrap(&doc);

        assert_eq!(walk_dotted(root, "posts.0.comments.0.text"), "Comment 1");
        assert!(walk_dotted(root, "posts.1.comments").is_absent());
        assert!(walk_dotted(root, "posts.first").is_absent());
        assert!(walk_dotted(root, "posts.0.comments.0.text.more").is_absent());
        assert!(walk_dotted(root, "").is_mapping());
    }

    #[test]
    fn dotted_path_numeric_keys_on_mappings() {
        let doc = Value::from(json!({"2024": {"total": 3}}));
        assert_eq!(walk_dotted(wrap(&doc), "2024.total"), 3i64);
    }

    #[test]
    fn resolve_pointer_handles_escaped_keys() {
        let doc = Value::from(json!({"field/name": {"value": 42}}));
        let found = resolve_pointer(wrap(&doc), "/field~1name/value", &limits()).unwrap();
        assert_eq!(found, 42i64);
    }

    #[test]
    fn resolve_pointer_reports_reached_path() {
        let doc = Value::from(json!({"data": {"users": []}}));
        match resolve_pointer(wrap(&doc), "/data/people/0", &limits()) {
            Err(HashpathError::PointerNotFound {
                reached_path,
                available_keys,
                ..
            }) => {
                assert_eq!(reached_path, "/data/people");
                assert_eq!(available_keys, "\"users\"");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn resolve_pointer_rejects_out_of_range_index() {
        let doc = Value::from(json!({"items": ["a"]}));
        let err = resolve_pointer(wrap(&doc), "/items/3", &limits()).unwrap_err();
        assert!(err.to_string().contains("<sequence with 1 elements>"));

        let err = resolve_pointer(wrap(&doc), "/items/x", &limits()).unwrap_err();
        assert!(err.to_string().contains("expected numeric index"));
    }

    #[test]
    fn resolve_pointer_stops_at_scalars() {
        let doc = Value::from(json!({"data": "string"}));
        let err = resolve_pointer(wrap(&doc), "/data/field", &limits()).unwrap_err();
        assert!(err.to_string().contains("<string, cannot traverse further>"));
    }

    #[test]
    fn describe_keys_truncates() {
        let map: Mapping = (0..12i64).map(|i| (format!("k{:02}", i), i)).collect();
        let described = describe_keys(&map);
        assert!(described.starts_with("\"k00\", \"k01\""));
        assert!(described.ends_with("... (12 total)"));
        assert_eq!(describe_keys(&Mapping::new()), "<empty mapping>");
    }
}
