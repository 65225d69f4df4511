#[macro_export]
macro_rules! log_and_err {
    ($err:expr, $($arg:tt)*) => {{
        log::error!($($arg)*);
        Err($err)
    }}
}
