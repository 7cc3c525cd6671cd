use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Error, Result,
    types::{ApiErrorResponse, Token},
};

/// Authenticated handle on the Spotify Web API.
///
/// Every request carries the stored access token as a bearer token. Nothing
/// is retried and expired tokens are not refreshed: the first failure is
/// returned to the caller.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    token: Token,
}

impl SpotifyClient {
    pub fn new(base_url: &str, token: Token) -> Self {
        Self::with_http(Client::new(), base_url, token)
    }

    pub fn with_http(http: Client, base_url: &str, token: Token) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Whether `url` points below the API base URL.
    pub(crate) fn is_api_url(&self, url: &str) -> bool {
        url.strip_prefix(&self.base_url)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token.access_token)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let res = self.request(Method::GET, url).send().await?;
        parse(res).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, %method, "sending");
        let res = self.request(method, &url).json(body).send().await?;
        parse(res).await
    }
}

async fn parse<T: DeserializeOwned>(res: Response) -> Result<T> {
    if !res.status().is_success() {
        return Err(api_error(res).await);
    }
    Ok(res.json::<T>().await?)
}

/// Turns a non-success response into [`Error::Api`].
///
/// Uses the message of Spotify's `{"error": {"status", "message"}}` body when
/// present and the raw body otherwise.
pub(crate) async fn api_error(res: Response) -> Error {
    let status = res.status();
    let body = match res.text().await {
        Ok(body) => body,
        Err(e) => return Error::Http(e),
    };

    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        _ => body.trim().to_string(),
    };

    Error::Api { status, message }
}
