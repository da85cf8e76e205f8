/// Unwraps the `Err` side of a result, panicking with the `Ok` value otherwise.
///
/// An optional predicate method on the error can be supplied with `is = `,
/// e.g. `assert_err!(res, is = is_mapper)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr, is = $pred:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$pred(),
            "expected error to satisfy `{}`; actual={:?}",
            stringify!($pred),
            err
        );
        err
    }};
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={}", e),
        }
    };
}
