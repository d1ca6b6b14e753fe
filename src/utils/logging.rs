use serde::Serialize;

/// Logs a validated request body as pretty JSON at debug level.
///
/// Serialization is skipped entirely when debug logging is disabled.
pub(crate) fn debug_request_body<T>(endpoint: &'static str, body: &T)
where
    T: Serialize,
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let pretty_json = serde_json::to_string_pretty(body)
        .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>"));
    tracing::debug!(endpoint, body = %pretty_json, "Extracted request body");
}
