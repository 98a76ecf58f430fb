pub(crate) mod measure_metrics;
pub(crate) mod metrics;
pub(crate) mod root_span;

pub(crate) static APP_NAME: &str = "todo_service";

pub(crate) use root_span::RootSpan;

#[macro_export]
macro_rules! trace_err {
    ($expr:expr, $($arg:tt)*) => {
        $expr.map_err(|e| {
            ::tracing::error!(%e, $($arg)*);
            e
        })
    };
}
