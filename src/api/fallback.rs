use axum::http::{StatusCode, Uri};

pub async fn fallback(uri: Uri) -> StatusCode {
    tracing::info!(path = %uri, "Got request for");
    StatusCode::NOT_FOUND
}
