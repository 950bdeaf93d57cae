//! Property-based tests for the token parser.
//!
//! Token trees are generated, flattened to tokens, and fed back through the
//! parser to check consumption counts, error detection and tag equivalence.

use argv_tree::{parse, parse_at, ErrorKind, Value};
use proptest::prelude::*;

/// A generated token tree, flattened by `emit`.
#[derive(Clone, Debug)]
enum Node {
    Leaf(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Node {
    fn emit(&self, out: &mut Vec<String>) {
        match self {
            Node::Leaf(token) => out.push(token.clone()),
            Node::Array(items) => {
                out.push("[".to_string());
                for item in items {
                    item.emit(out);
                }
                out.push("]".to_string());
            }
            Node::Object(members) => {
                out.push("{".to_string());
                for (key, item) in members {
                    out.push(format!("@{}", key));
                    item.emit(out);
                }
                out.push("}".to_string());
            }
        }
    }

    fn tokens(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.emit(&mut out);
        out
    }
}

fn leaf_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}",
        "[a-z ]{0,6}".prop_map(|s| format!(":s:{}", s)),
        (-1.0e6f64..1.0e6).prop_map(|n| format!(":n:{}", n)),
        any::<bool>().prop_map(|b| format!(":b:{}", b)),
        Just(":null:".to_string()),
        Just(":u:".to_string()),
    ]
}

fn node() -> impl Strategy<Value = Node> {
    leaf_token().prop_map(Node::Leaf).prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Array),
            prop::collection::vec(("[a-c]", inner), 0..6).prop_map(Node::Object),
        ]
    })
}

/// Bare text that no tag, key marker or delimiter claims.
fn bare_token() -> impl Strategy<Value = String> {
    "[^:@\\[\\]{}][^\\s]{0,10}"
}

proptest! {
    #[test]
    fn prop_container_progress_is_span(tree in node()) {
        let tokens = tree.tokens();
        let step = parse_at(&tokens, 0).unwrap();
        prop_assert_eq!(step.index_progress, tokens.len() - 1);
    }

    #[test]
    fn prop_container_progress_with_prefix(tree in node(), prefix in prop::collection::vec("[a-z]{1,4}", 0..4)) {
        let mut tokens = prefix.clone();
        tokens.extend(tree.tokens());
        tokens.push("tail".to_string());
        let step = parse_at(&tokens, prefix.len()).unwrap();
        prop_assert_eq!(step.index_progress, tokens.len() - 2 - prefix.len());
    }

    #[test]
    fn prop_missing_close_is_detected(items in prop::collection::vec(node(), 0..5), drop_last in 1usize..3) {
        let mut tokens = vec!["[".to_string()];
        for item in &items {
            tokens.extend(item.tokens());
        }
        for _ in 0..drop_last {
            tokens.insert(0, "[".to_string());
        }
        tokens.push("]".to_string());
        // drop_last + 1 opens, one close
        let err = parse(tokens).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ArrayUnclosed);
    }

    #[test]
    fn prop_missing_object_close_is_detected(items in prop::collection::vec(node(), 0..5)) {
        let mut tokens = vec!["{".to_string(), "{".to_string()];
        for item in &items {
            tokens.push("@k".to_string());
            tokens.extend(item.tokens());
        }
        tokens.push("}".to_string());
        let err = parse(tokens).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ObjectUnclosed);
    }

    #[test]
    fn prop_duplicate_key_merge_is_flat(values in prop::collection::vec(node(), 2..8)) {
        let mut tokens = vec!["{".to_string()];
        for value in &values {
            tokens.push("@dup".to_string());
            tokens.extend(value.tokens());
        }
        tokens.push("}".to_string());

        let parsed = parse(tokens).unwrap();
        let merged = parsed.get("dup").and_then(Value::as_array).unwrap();
        prop_assert_eq!(merged.len(), values.len());
        for (item, node) in merged.iter().zip(&values) {
            prop_assert_eq!(item, &parse(node.tokens()).unwrap());
        }
    }

    #[test]
    fn prop_string_tag_forms_agree(text in "\\PC{0,12}") {
        let short = parse([format!(":s:{}", text)]).unwrap();
        let long = parse([format!(":string:{}", text)]).unwrap();
        prop_assert_eq!(&short, &long);
        prop_assert_eq!(short, Value::String(text));
    }

    #[test]
    fn prop_number_tag_forms_agree(
        n in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    ) {
        let short = parse([format!(":n:{}", n)]).unwrap();
        let long = parse([format!(":number:{}", n)]).unwrap();
        prop_assert_eq!(&short, &long);
        prop_assert_eq!(short, Value::from(n));
    }

    #[test]
    fn prop_boolean_tag_forms_agree(text in "\\PC{0,8}") {
        let short = parse([format!(":b:{}", text)]).unwrap();
        let long = parse([format!(":boolean:{}", text)]).unwrap();
        prop_assert_eq!(&short, &long);
        prop_assert_eq!(short, Value::Bool(text != "false"));
    }

    #[test]
    fn prop_bare_tokens_are_strings(token in bare_token()) {
        prop_assert_eq!(parse(vec![token.clone()]).unwrap(), Value::String(token));
    }

    #[test]
    fn prop_display_round_trip(tree in node()) {
        let value = parse(tree.tokens()).unwrap();
        prop_assert_eq!(parse(value.to_string()).unwrap(), value);
    }
}

#[test]
fn null_and_absent_forms_agree() {
    assert_eq!(parse([":null:"]).unwrap(), Value::Null);
    assert_eq!(parse([":undefined:"]).unwrap(), parse([":u:"]).unwrap());
    assert_eq!(parse([":u:"]).unwrap(), Value::Absent);
}
