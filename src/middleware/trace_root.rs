use axum::{body::Body, extract::Request, http::Response, middleware::Next};
use tracing::{info, warn};

use crate::{middleware::normalize_uri, utils::RootSpan};

/// Opens the per-request [`RootSpan`] and exposes it to handlers as an extension.
pub(crate) async fn trace_root(mut req: Request, next: Next) -> Response<Body> {
    let root_span = RootSpan::new(
        req.method().as_str(),
        &normalize_uri(&req.uri().to_string()),
    );

    req.extensions_mut().insert(root_span.clone());

    let resp = root_span.instrument(next.run(req)).await;
    let status = resp.status();

    root_span.record().http_status_code(&status);

    if status.is_client_error() || status.is_server_error() {
        root_span
            .record()
            .status("error")
            .keep_sampled();
        root_span.in_scope(|| warn!(status = %status, "request failed"));
    } else {
        root_span.record().status("ok");
        root_span.in_scope(|| info!(status = %status, "request served"));
    }

    resp
}
