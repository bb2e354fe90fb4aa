// Macros to emit events when the `tracing` feature is enabled. Without the
// feature they expand to nothing.

#[doc(hidden)]
#[macro_export]
macro_rules! __scalars_trace_internal {
    ($trace_type:ident; $($element:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::$trace_type!($($element)*);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __scalars_trace_debug {
    ($($element:tt)*) => {{
        $crate::__scalars_trace_internal!(debug; $($element)*)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __scalars_trace_error {
    ($($element:tt)*) => {{
        $crate::__scalars_trace_internal!(error; $($element)*)
    }};
}
