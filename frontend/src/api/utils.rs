use crate::auth::{auth_token, bearer};
use gloo_net::http::{Request, RequestBuilder, Response};
use log::warn;
use serde::de::DeserializeOwned;
use shared::error::{ApiError, ErrorBody};

/// Creates a request with the Authorization header from the token store.
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url), // Default to GET
    };

    match auth_token() {
        Some(token) => req.header("Authorization", &bearer(&token)),
        None => {
            // Requests still go out; the backend answers 401.
            warn!("No auth token found for {} {}", method, url);
            req
        }
    }
}

/// Creates a GET request with authentication
pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated_request("POST", url)
}

pub async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| {
        warn!("Request failed: {}", e);
        ApiError::Network(e.to_string())
    })
}

pub async fn send_json<B: serde::Serialize>(
    request: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    request
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| {
            warn!("Request failed: {}", e);
            ApiError::Network(e.to_string())
        })
}

/// Turns a response into `T`, mapping non-2xx statuses to [`ApiError`].
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !ok {
        return Err(ApiError::from_status(status, error_message(&text)));
    }
    decode_body(&text)
}

/// Parses a success body. An empty body reads as JSON `null`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let body = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(body).map_err(ApiError::from)
}

/// Message carried by an error body, JSON or plain text.
pub fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(parsed) => parsed.into_message(),
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.chars().take(200).collect()),
    }
}
