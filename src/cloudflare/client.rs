use reqwest::{
    Client, Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    cloudflare::ClientSettings,
    error::{ClientError, ClientResult},
    types::Envelope,
};

/// Authenticated Cloudflare API client bound to one token.
///
/// The bearer token and the JSON content type are installed as default
/// headers, so every request issued through [`CloudflareClient::request`]
/// carries them.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    http: Client,
    base_url: String,
    pub(crate) verify_account_id: String,
}

impl CloudflareClient {
    /// Builds a client for `token` using the given settings.
    ///
    /// The token is trimmed before use.
    ///
    /// # Errors
    ///
    /// - `Validation` if the token is empty or cannot be sent as a header value
    /// - `Network` if the underlying HTTP client cannot be constructed
    pub fn new(settings: &ClientSettings, token: &str) -> ClientResult<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ClientError::validation("Please paste a token first."));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            ClientError::validation("The token contains characters that cannot be sent in a header.")
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;

        Ok(CloudflareClient {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            verify_account_id: settings.verify_account_id.clone(),
        })
    }

    /// Issues a request and validates the response envelope.
    ///
    /// `path` is appended to the base URL as is and must already contain any
    /// path parameters. The returned envelope is complete, so callers can read
    /// `result_info` next to `result`.
    ///
    /// # Errors
    ///
    /// - `Network` for transport failures and timeouts
    /// - `Protocol` if the body is not JSON or does not match `T`
    /// - `Api` for non-2xx statuses and envelopes without `success: true`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> ClientResult<Envelope<T>> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method, &url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        decode_envelope(status, path, &text)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, String)]>,
    ) -> ClientResult<Envelope<T>> {
        self.request(Method::GET, path, query, None).await
    }
}

/// Decodes a raw response body into an envelope.
///
/// The `success` flag is read from the untyped document before `result` is
/// looked at, so an unsuccessful envelope is reported as `Api` whatever its
/// `result` holds.
pub fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    path: &str,
    body: &str,
) -> ClientResult<Envelope<T>> {
    let document: Value =
        serde_json::from_str(body).map_err(|_| ClientError::protocol(status.as_u16(), body))?;

    let success = document
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !status.is_success() || !success {
        return Err(ClientError::Api {
            status: status.as_u16(),
            path: path.to_string(),
            errors: document.get("errors").cloned().unwrap_or(Value::Null),
            messages: document.get("messages").cloned().unwrap_or(Value::Null),
        });
    }

    serde_json::from_value(document).map_err(|_| ClientError::protocol(status.as_u16(), body))
}
