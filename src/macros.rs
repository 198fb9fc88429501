/// Build a [`Value`](crate::Value) from lisp-shaped Rust tokens.
///
/// Numbers become `Int`/`Float`, bare identifiers and the operator tokens
/// become symbols, parenthesized groups become lists, and `{ ... }`
/// interpolates a Rust expression convertible into a `Value`.
///
/// ```
/// use wisp::lisp;
///
/// let expected = lisp! { (+ 1 2) };
/// assert_eq!(expected.to_string(), "(+ 1 2)");
/// ```
#[macro_export]
macro_rules! lisp {
    ( ( $($element:tt)* ) ) => {
        // The element type must be pinned for the empty group, where
        // nothing else constrains the `collect`.
        $crate::Value::List(
            (vec![ $( $crate::lisp!($element) ),* ] as ::std::vec::Vec<$crate::Value>)
                .into_iter()
                .collect::<$crate::List>()
        )
    };

    ( { $interpolated:expr } ) => {
        $crate::Value::from($interpolated)
    };

    ( $literal:literal ) => {
        $crate::Value::from($literal)
    };

    ( + )  => { $crate::Value::Symbol($crate::Symbol::from_ref("+")) };
    ( - )  => { $crate::Value::Symbol($crate::Symbol::from_ref("-")) };
    ( * )  => { $crate::Value::Symbol($crate::Symbol::from_ref("*")) };
    ( / )  => { $crate::Value::Symbol($crate::Symbol::from_ref("/")) };
    ( = )  => { $crate::Value::Symbol($crate::Symbol::from_ref("=")) };
    ( < )  => { $crate::Value::Symbol($crate::Symbol::from_ref("<")) };
    ( > )  => { $crate::Value::Symbol($crate::Symbol::from_ref(">")) };
    ( <= ) => { $crate::Value::Symbol($crate::Symbol::from_ref("<=")) };
    ( >= ) => { $crate::Value::Symbol($crate::Symbol::from_ref(">=")) };

    ( $symbol:ident ) => {
        $crate::Value::Symbol($crate::Symbol::from_ref(stringify!($symbol)))
    };
}
