use chrono::Utc;
use reqwest::{Client, Url};

use crate::{
    Error, Result,
    config::Config,
    spotify::{SpotifyClient, client::api_error},
    types::{Token, TokenResponse},
    utils,
};

/// Everything one login attempt needs, created once per process.
///
/// Holds the configuration, the anti-forgery `state` generated for this
/// attempt and the HTTP client shared with the API client built after the
/// code exchange.
#[derive(Debug)]
pub struct Session {
    config: Config,
    state: String,
    http: Client,
}

impl Session {
    /// Starts a login attempt with a freshly generated random state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the client id or secret is missing.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_state(config, utils::generate_state())
    }

    pub fn with_state(config: Config, state: impl Into<String>) -> Result<Self> {
        config.credentials()?;
        Ok(Self {
            config,
            state: state.into(),
            http: Client::new(),
        })
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the authorization URL the browser is sent to.
    ///
    /// # Example
    ///
    /// ```
    /// let url = session.authorize_url()?;
    /// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
    /// ```
    pub fn authorize_url(&self) -> Result<Url> {
        let (client_id, _) = self.config.credentials()?;
        Url::parse_with_params(
            &self.config.auth_url,
            &[
                ("client_id", client_id),
                ("response_type", "code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("state", self.state.as_str()),
                ("scope", self.config.scope.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid SPOTIFY_AUTH_URL: {e}")))
    }

    /// Checks a `state` received on the callback against this session's value.
    pub fn verify_state(&self, received: Option<&str>) -> bool {
        received.is_some_and(|state| utils::constant_time_eq(state, &self.state))
    }

    /// Exchanges an authorization code for a token.
    ///
    /// Authenticates with the client id and secret (HTTP basic auth) against
    /// the accounts service token endpoint. The `redirect_uri` must be the one
    /// sent with the authorization request.
    ///
    /// # Errors
    ///
    /// - [`Error::TokenExchange`] when the endpoint rejects the code
    /// - [`Error::Http`] for network failures or an unreadable response
    pub async fn exchange_code(&self, code: &str) -> Result<Token> {
        let (client_id, client_secret) = self.config.credentials()?;

        let res = self
            .http
            .post(&self.config.token_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            let err = api_error(res).await;
            return Err(Error::TokenExchange(err.to_string()));
        }

        let token: TokenResponse = res.json().await?;
        Ok(token.into_token(Utc::now()))
    }

    /// Builds an authenticated API client around `token`.
    pub fn client(&self, token: Token) -> SpotifyClient {
        SpotifyClient::with_http(self.http.clone(), &self.config.api_url, token)
    }
}
