/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// `null` and `absent` produce [`Value::Null`](crate::Value::Null) and
/// [`Value::Absent`](crate::Value::Absent). Any other expression goes
/// through `Value::from`. Negative numbers inside arrays and objects need
/// parentheses: `value!([(-1.5)])`.
///
/// ```rust
/// use argv_tree::{parse, value};
///
/// let expected = value!({ "a": [1, 2], "b": null });
/// assert_eq!(parse("{ @a [ :n:1 :n:2 ] @b :null: }").unwrap(), expected);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (absent) => {
        $crate::Value::Absent
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ArgMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ArgMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
