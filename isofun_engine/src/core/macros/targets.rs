//! Declares the log targets used with the [`tracing`] macros (e.g. [`tracing::debug`])
//!
//! Every target is prefixed with the crate name, so `FUNC = "func"` expands to
//! `pub const FUNC: &str = "isofun_engine::func"`.

#[macro_export]
macro_rules! tracing_targets {
    {$( $name:ident $(=$val:expr)? ),* $(,)?} => {
        $( $crate::tracing_targets!(@value $name $(=$val)? ); )*
    };

    (@value $name:ident = $val:expr) => {pub const $name: &'static str = concat!(env!("CARGO_PKG_NAME"), "::", $val);};
    (@value $name:ident)             => {$crate::tracing_targets!($name = stringify!($name));};
}
