use std::future::Future;

use super::metrics::{self};

use opentelemetry::KeyValue;
use tokio::time::Instant;

pub async fn measure_and_record_service<F, T, E>(
    operation_name: &'static str,
    f: impl FnOnce() -> F,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let start = Instant::now();
    let result = f().await;
    let elapsed = start.elapsed().as_millis() as f64;

    let (status, error_kind) = match &result {
        Err(e) => ("error", format!("error: {}", e)),
        Ok(_) => ("ok", "NA".to_string()),
    };

    metrics::SERVICE_OPERATION_DURATION_HISTOGRAM.record(
        elapsed,
        &[
            KeyValue::new("operation", operation_name),
            KeyValue::new("status", status),
            KeyValue::new("error_kind", error_kind),
        ],
    );

    result
}

pub fn measure_and_record_storage<T, E>(
    operation_name: &'static str,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E>
where
    E: std::fmt::Display,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis() as f64;

    let (status, err_kind) = match &result {
        Err(e) => ("error", format!("error: {}", e)),
        Ok(_) => ("ok", "NA".to_string()),
    };

    metrics::STORAGE_OPERATION_DURATION_HISTOGRAM.record(
        elapsed,
        &[
            KeyValue::new("operation", operation_name),
            KeyValue::new("storage", "sled"),
            KeyValue::new("status", status),
            KeyValue::new("err_kind", err_kind),
        ],
    );

    result
}

pub fn record_transaction(operation_name: &'static str, committed: bool) {
    let outcome = if committed { "committed" } else { "aborted" };

    metrics::STORAGE_TRANSACTION_COUNTER.add(
        1,
        &[
            KeyValue::new("operation", operation_name),
            KeyValue::new("outcome", outcome),
        ],
    );
}
