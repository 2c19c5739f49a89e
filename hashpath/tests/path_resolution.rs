//! Dotted paths, JSON Pointers and strict field access

use hashpath::{wrap, HashpathError, Key, Mapping, PathLimits, Value};
use hashpath_test_utils::{init_tracing, Fixtures, KeyStyle};
use serde_json::json;

#[test]
fn dotted_path_through_posts() {
    for style in KeyStyle::ALL {
        let data = Fixtures::posts(style);
        let root = wrap(&data);

        assert_eq!(root.path("posts.0.title"), "Post 1");
        assert_eq!(root.path("posts.0.comments.0.text"), "Comment 1");
        assert_eq!(root.path("posts.1.comments.1.text"), "Comment 4");
        assert!(root.path("posts.2.title").is_absent());
        assert!(root.path("posts.0.author").is_absent());
    }
}

#[test]
fn dotted_path_agrees_with_accessor_chain() {
    let data = Fixtures::posts(KeyStyle::Symbol);
    let root = wrap(&data);
    let chained = root.attr("posts").last().attr("comments").first();
    assert_eq!(root.path("posts.1.comments.0"), chained);
}

#[test]
fn dotted_path_rejects_wildcards_and_slices() {
    let data = Fixtures::posts(KeyStyle::Text);
    let root = wrap(&data);

    assert!(root.path("posts.*.title").is_absent());
    assert!(root.path("posts.0..1").is_absent());
    assert!(root.path("posts.-1.title").is_absent());
}

#[test]
fn pointer_resolves_nested_values() {
    init_tracing();
    for style in KeyStyle::ALL {
        let data = Fixtures::posts(style);
        let root = wrap(&data);

        let text = root.pointer("/posts/0/comments/1/text").unwrap();
        assert_eq!(text, "Comment 2");
        assert!(root.pointer("").unwrap().is_mapping());
    }
}

#[test]
fn pointer_reports_missing_segment() {
    init_tracing();
    let data = Fixtures::posts(KeyStyle::Text);

    match wrap(&data).pointer("/posts/0/author/name") {
        Err(HashpathError::PointerNotFound {
            pointer,
            reached_path,
            available_keys,
        }) => {
            assert_eq!(pointer, "/posts/0/author/name");
            assert_eq!(reached_path, "/posts/0/author");
            assert!(available_keys.contains("\"comments\""));
            assert!(available_keys.contains("\"title\""));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn pointer_explicit_null_resolves_to_absent() {
    let data = Value::from(json!({"meta": {"next": null}}));
    let found = wrap(&data).pointer("/meta/next").unwrap();
    assert!(found.is_absent());

    let err = wrap(&data).pointer("/meta/next/page").unwrap_err();
    assert!(err.to_string().contains("<null, cannot traverse further>"));
}

#[test]
fn null_textual_key_defers_to_symbolic_everywhere() {
    let mut map = Mapping::new();
    map.insert(Key::text("next"), Value::Null);
    map.insert(Key::symbol("next"), "page2");
    let data = Value::Mapping(map);
    let root = wrap(&data);

    assert_eq!(root.pointer("/next").unwrap(), "page2");
    assert_eq!(root.path("next"), "page2");
    assert_eq!(root.attr_key(&Key::text("next")), "page2");
    assert_eq!(root.attr("next"), "page2");
}

#[test]
fn default_limits_accept_deep_documents() {
    let mut data = Value::from("bottom");
    for _ in 0..40 {
        let mut map = Mapping::new();
        map.insert("n", data);
        data = Value::Mapping(map);
    }
    let dotted = vec!["n"; 40].join(".");
    let pointer = format!("/{}", vec!["n"; 40].join("/"));

    assert_eq!(wrap(&data).path(&dotted), "bottom");
    assert_eq!(wrap(&data).pointer(&pointer).unwrap(), "bottom");
}

#[test]
fn pointer_honours_limits() {
    let data = Fixtures::three_levels(KeyStyle::Text);
    let tight = PathLimits {
        max_depth: 2,
        max_pointer_length: 64,
    };

    assert!(matches!(
        wrap(&data).pointer_with_limits("/foo/bar/baz", &tight),
        Err(HashpathError::DepthLimitExceeded { depth: 3, max_depth: 2, .. })
    ));
    assert_eq!(
        wrap(&data).pointer_with_limits("/foo/bar", &tight).unwrap().attr("baz"),
        "Howdy!"
    );

    let invalid = PathLimits {
        max_depth: 100_000,
        max_pointer_length: 64,
    };
    assert!(matches!(
        wrap(&data).pointer_with_limits("/foo", &invalid),
        Err(HashpathError::LimitsExceedHardMaximum { .. })
    ));
}

#[test]
fn require_succeeds_and_fails_loudly() {
    let data = Fixtures::simple(KeyStyle::Symbol);
    let root = wrap(&data);

    assert_eq!(root.require("foo").unwrap(), "FOO");
    let err = root.require("dorkboy").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Missing field 'dorkboy'"));
    assert!(message.contains(":bar"));
    assert!(message.contains(":foo"));
}

#[test]
fn symbolize_keys_at_the_boundary() {
    let decoded = Value::from(json!({"user": {"name": "alpha", "roles": [{"id": 1}]}}));
    let canonical = decoded.symbolize_keys();
    let root = wrap(&canonical);

    assert_eq!(root.attr("user").attr("name"), "alpha");
    assert_eq!(root.path("user.roles.0.id"), 1i64);
    assert!(root
        .attr("user")
        .mapping()
        .unwrap()
        .contains_key(&Key::symbol("roles")));
}
