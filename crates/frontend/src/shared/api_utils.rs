//! API utilities for frontend-backend communication
//!
//! All requests go to the same origin the dashboard is served from, with
//! `same-origin` credentials so the backend session cookie is sent along.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

fn same_origin(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::SameOrigin)
        .header("Accept", "application/json")
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }
    Ok(response)
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = same_origin(Request::get(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(response)?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// PUT `body` as JSON; the response body is ignored
pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    log::debug!("PUT {}", url);
    let response = same_origin(Request::put(url))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(response).map(|_| ())
}

/// POST without a body; the response body is ignored
pub async fn post_empty(url: &str) -> Result<(), ApiError> {
    log::debug!("POST {}", url);
    let response = same_origin(Request::post(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(response).map(|_| ())
}

/// Percent-encodes a single path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("abc123"), "abc123");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }
}
