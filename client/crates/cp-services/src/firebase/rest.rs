use crate::{ServiceError, ServiceResult};

use reqwest::StatusCode;
use serde_json::Value;

/// Send a request and return its JSON body, turning non-2xx responses into
/// [`ServiceError::Api`] carrying the service's message verbatim.
pub(crate) async fn execute(req: reqwest::RequestBuilder) -> ServiceResult<Value> {
    let response = req.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;

    let body: Value = if bytes.is_empty() {
        Value::Null
    } else if status.is_success() {
        serde_json::from_slice(&bytes)?
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    if !status.is_success() {
        return Err(api_error(status, &body));
    }

    Ok(body)
}

/// Google APIs report `{"error": {"code": 400, "message": "...", "status": "..."}}`.
fn api_error(status: StatusCode, body: &Value) -> ServiceError {
    let error = body.get("error");

    let code = error
        .and_then(|e| e.get("status"))
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| status.as_u16().to_string());

    let message = error
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    ServiceError::api(code, message)
}
