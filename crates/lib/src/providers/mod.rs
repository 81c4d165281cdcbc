pub mod ai;
pub mod search;

use tracing::warn;

/// Reads the body of a non-success upstream response for error reporting.
///
/// A failed read is logged and described in the returned text instead of
/// being dropped.
pub(crate) async fn read_error_body(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(%status, "Failed to read upstream error body: {e}");
            format!("<unreadable response body: {e}>")
        }
    }
}
