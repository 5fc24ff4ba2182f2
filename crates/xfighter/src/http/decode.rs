/*
[INPUT]:  Raw HTTP status and body plus the statuses an operation accepts
[OUTPUT]: Typed payload or a classified XfighterError
[POS]:    HTTP layer - response classification shared by every endpoint
[UPDATE]: When the service changes its error envelope or status usage
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::http::client::RawResponse;
use crate::http::{Result, XfighterError};

/// Statuses accepted by every documented endpoint
pub const EXPECT_OK: &[StatusCode] = &[StatusCode::OK];

/// Classify a raw response and decode it into `T`.
///
/// Checks run in this order: body must be JSON, `"ok": false` is a service
/// error whatever the status, the status must be in `expected`, and the JSON
/// must fit `T`. A body that fits neither the status nor the shape is
/// reported as [`XfighterError::UnhandledApiResponse`].
pub fn decode_response<T: DeserializeOwned>(
    raw: &RawResponse,
    expected: &[StatusCode],
) -> Result<T> {
    let value: Value = serde_json::from_str(&raw.body).map_err(|err| {
        warn!(status = %raw.status, error = %err, "response body is not JSON");
        XfighterError::InvalidJson {
            body: raw.body.clone(),
        }
    })?;

    if value.get("ok").and_then(Value::as_bool) == Some(false) {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        warn!(status = %raw.status, %message, "service rejected request");
        return Err(XfighterError::Request {
            status: raw.status,
            message,
        });
    }

    if !expected.contains(&raw.status) {
        warn!(status = %raw.status, "unexpected response status");
        return Err(unhandled(raw));
    }

    serde_json::from_value(value).map_err(|err| {
        warn!(status = %raw.status, error = %err, "response does not match expected shape");
        unhandled(raw)
    })
}

fn unhandled(raw: &RawResponse) -> XfighterError {
    XfighterError::UnhandledApiResponse {
        status: raw.status,
        body: raw.body.clone(),
    }
}
