use argv_tree::{parse, value, ArgMap, Number, Value};

#[test]
fn test_value_macro_null_and_absent() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(absent), Value::Absent);
    assert_ne!(value!(null), value!(absent));
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Float(42.0)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Float(-123.0)));
    assert_eq!(value!(f64::NAN), Value::Number(Number::NaN));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let mixed = value!([1, "hello", true, null, absent]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::Number(Number::Float(1.0)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
            Value::Absent,
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    assert_eq!(value!({}), Value::Object(ArgMap::new()));

    let object = value!({
        "user": { "id": 123, "name": "Bob" },
        "tags": ["admin", "developer"],
    });

    match object {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 2);
            if let Some(Value::Object(user)) = obj.get("user") {
                assert_eq!(user.get("id").and_then(Value::as_f64), Some(123.0));
                assert_eq!(user.get("name").and_then(Value::as_str), Some("Bob"));
            } else {
                panic!("Expected user to be an object");
            }
            assert_eq!(obj.get("tags").and_then(Value::as_array).map(Vec::len), Some(2));
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_value_macro_matches_parser_output() {
    let parsed = parse(
        "{ @user { @id :n:123 @name Bob } @tags [ admin developer ] @missing :undefined: }",
    )
    .unwrap();
    let expected = value!({
        "user": { "id": 123, "name": "Bob" },
        "tags": ["admin", "developer"],
        "missing": absent
    });
    assert_eq!(parsed, expected);
}
