macro_rules! test_trace {
    ($($tt:tt)*) => {
        #[cfg(any(test, feature = "tracing"))]
        tracing::trace!($($tt)*)
    }
}
