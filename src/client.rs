use crate::error::{ApiError, MonoError};
use crate::models::{ClientInfo, Transaction, parse_client_info, parse_transactions};
use crate::range::StatementRange;
use log::{debug, info};
use reqwest::{Client as HttpClient, Response, StatusCode};
use std::env;
use std::time::Duration;

const BASE_URL: &str = "https://api.monobank.ua";
const TOKEN_HEADER: &str = "X-Token";
const TOKEN_ENV_VAR: &str = "MONOBANK_TOKEN";

/// Sentinel account id the API resolves to the client's primary account.
pub const DEFAULT_ACCOUNT: &str = "0";

#[derive(Debug, Clone)]
pub struct Client {
    token: String,
    http: HttpClient,
    base_url: String,
}

impl Client {
    /// Create a new client with the default base URL.
    pub fn new(token: impl Into<String>) -> Result<Self, MonoError> {
        let token = token.into();
        if token.is_empty() {
            return Err(MonoError::EmptyToken);
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        info!("Initialized Monobank API client with default base URL");
        Ok(Self {
            token,
            http,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Create a client from the `MONOBANK_TOKEN` environment variable.
    /// Fails immediately when the variable is unset; there is no fallback
    /// credential source.
    pub fn from_env() -> Result<Self, MonoError> {
        let token = env::var(TOKEN_ENV_VAR).map_err(|_| MonoError::MissingToken(TOKEN_ENV_VAR))?;
        Self::new(token)
    }

    /// Override the base URL (useful for tests or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        info!("Updated Monobank API base URL to {}", self.base_url);
        self
    }

    /// Fetch the public currency-rate table as raw bytes; decoding is left
    /// to the caller. No token is sent.
    pub async fn fetch_currency_table(&self) -> Result<Vec<u8>, MonoError> {
        debug!("Fetching currency table");
        let response = self.get("/bank/currency", false).await?;
        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(MonoError::from)
    }

    /// Fetch the client profile with its accounts and jars.
    pub async fn fetch_client_info(&self) -> Result<ClientInfo, MonoError> {
        debug!("Fetching client info");
        let body = self.get_text("/personal/client-info").await?;
        parse_client_info(&body)
    }

    /// Fetch the statement for one account over a resolved window.
    /// Use [`DEFAULT_ACCOUNT`] for the primary account.
    pub async fn fetch_statement(
        &self,
        account_id: &str,
        range: &StatementRange,
    ) -> Result<Vec<Transaction>, MonoError> {
        let path = statement_path(account_id, range);
        debug!(
            "Fetching statement for account {} from {} to {}",
            account_id, range.from, range.to
        );
        let body = self.get_text(&path).await?;
        parse_transactions(&body)
    }

    async fn get_text(&self, path: &str) -> Result<String, MonoError> {
        let response = self.get(path, true).await?;
        response.text().await.map_err(MonoError::from)
    }

    async fn get(&self, path: &str, authenticated: bool) -> Result<Response, MonoError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET request to {url}");
        let mut request = self.http.get(url);
        if authenticated {
            request = request.header(TOKEN_HEADER, &self.token);
        }
        let response = request.send().await?;
        debug!("Received status {}", response.status());
        handle_status(response.status())?;
        Ok(response)
    }
}

fn statement_path(account_id: &str, range: &StatementRange) -> String {
    format!(
        "/personal/statement/{}/{}/{}",
        account_id, range.from, range.to
    )
}

fn handle_status(status: StatusCode) -> Result<(), MonoError> {
    if status.is_success() {
        return Ok(());
    }
    let api_error = match status {
        StatusCode::BAD_REQUEST => ApiError::InvalidRequest,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        _ => ApiError::UnexpectedStatus(status),
    };
    Err(MonoError::Api(api_error))
}
