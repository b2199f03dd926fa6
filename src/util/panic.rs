/// Asserts that `$run` panics. Given `message = error`, also asserts that the panic message is the
/// [`Display`](std::fmt::Display) output of `error`.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, message = $expected:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                assert_eq!(
                    payload.downcast_ref::<String>().cloned().unwrap_or_default(),
                    $expected.to_string(),
                    "The panic should carry the message of the error."
                );
                println!("^ panic caught");
            },
        }
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
