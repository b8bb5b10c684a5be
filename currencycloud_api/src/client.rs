//! HTTP client for the Currencycloud v2 API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::Mutex;
use url::Url;

use crate::{
    config::{Credentials, Environment},
    errors::truncate_body,
    params::{
        AccountCreateParams, AccountSearchParams, AccountUpdateParams, ConversionCancelParams,
        ConversionCreateParams, ConversionSearchParams, DateChangeParams, Params,
        ProfitAndLossSearchParams, SplitParams,
    },
    types::{
        Account, AccountList, CancellationQuote, Conversion, ConversionCancellation,
        ConversionDateChange, ConversionList, ConversionSplit, ConversionSplitHistory,
        ProfitAndLossList,
    },
    Error,
};

const X_AUTH_TOKEN: &str = "X-Auth-Token";

/// Response from the login endpoint.
#[derive(Deserialize)]
struct AuthResponse {
    auth_token: String,
}

/// HTTP client for the Currencycloud v2 API.
///
/// Logs in lazily on the first request, attaches the session token as
/// `X-Auth-Token` to every call, and when the vendor rejects the token
/// (sessions expire after 30 minutes idle) re-authenticates and replays
/// the request once.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    token: Mutex<Option<String>>,
}

impl Client {
    /// Creates a new client for the given environment.
    pub fn new(credentials: Credentials, environment: Environment) -> Result<Self, Error> {
        Self::with_base_url(environment.base_url(), credentials)
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("currencycloud-rust/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            credentials,
            token: Mutex::new(None),
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Logs in with the configured credentials and returns the new token.
    async fn login(&self) -> Result<String, Error> {
        tracing::debug!("POST /v2/authenticate/api");
        let url = self.get_url("/v2/authenticate/api")?;
        let pairs = [
            ("login_id", self.credentials.login_id.as_str()),
            ("api_key", self.credentials.api_key.as_str()),
        ];
        let resp = self.http.post(url).form(&pairs).send().await?;
        let auth: AuthResponse = Self::read_response(resp).await?;
        Ok(auth.auth_token)
    }

    /// Returns the current session token, logging in first if there is none.
    ///
    /// The mutex is held across the login so concurrent first requests share
    /// one session instead of racing the authentication endpoint.
    async fn ensure_token(&self) -> Result<String, Error> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref() {
            return Ok(token.clone());
        }
        let token = self.login().await?;
        *guard = Some(token.clone());
        Ok(token)
    }

    /// Discards the stored token and logs in again.
    async fn reauthenticate(&self) -> Result<String, Error> {
        let mut guard = self.token.lock().await;
        let token = self.login().await?;
        *guard = Some(token.clone());
        Ok(token)
    }

    /// Closes the current session and drops the stored token.
    ///
    /// A no-op when the client never logged in.
    pub async fn close_session(&self) -> Result<(), Error> {
        let mut guard = self.token.lock().await;
        let Some(token) = guard.take() else {
            return Ok(());
        };
        tracing::debug!("POST /v2/authenticate/close_session");
        let url = self.get_url("/v2/authenticate/close_session")?;
        let resp = self
            .http
            .post(url)
            .header(X_AUTH_TOKEN, &token)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            tracing::error!("close_session failed with status {}", status);
            return Err(Error::from_status(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Sends an authenticated request, re-authenticating and replaying once
    /// when the vendor reports the session token expired.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, Error> {
        let token = self.ensure_token().await?;
        match self.execute(method.clone(), path, pairs, &token).await {
            Err(Error::AuthenticationFailed(detail)) => {
                tracing::debug!("session token rejected ({}), re-authenticating", detail);
                let token = self.reauthenticate().await?;
                self.execute(method, path, pairs, &token).await
            }
            other => other,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        pairs: &[(&'static str, String)],
        token: &str,
    ) -> Result<T, Error> {
        tracing::debug!("{} {}", method, path);
        let url = self.get_url(path)?;
        let req = self.http.request(method.clone(), url).header(X_AUTH_TOKEN, token);
        // The vendor takes form-encoded bodies on POST and query strings on GET.
        let req = if method == Method::GET {
            req.query(pairs)
        } else {
            req.form(pairs)
        };
        let resp = req.send().await.map_err(|e| {
            tracing::error!("request to {} failed: {}", path, e);
            Error::Network(e)
        })?;
        Self::read_response(resp).await
    }

    async fn read_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::error!("request failed with status {}", status);
            return Err(Error::from_status(status.as_u16(), &body));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("failed to parse response: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, Error> {
        self.request(Method::GET, path, pairs).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, Error> {
        self.request(Method::POST, path, pairs).await
    }

    // Accounts ---------------------------------------------------------------

    /// Creates a sub-account under the authenticated account.
    pub async fn create_account(&self, params: &AccountCreateParams) -> Result<Account, Error> {
        self.post("/v2/accounts/create", &params.to_pairs()).await
    }

    /// Fetches a single account by its ID.
    pub async fn retrieve_account(&self, account_id: &str) -> Result<Account, Error> {
        self.get(&format!("/v2/accounts/{}", account_id), &[]).await
    }

    /// Updates an existing account; omitted fields are left unchanged.
    pub async fn update_account(
        &self,
        account_id: &str,
        params: &AccountUpdateParams,
    ) -> Result<Account, Error> {
        self.post(&format!("/v2/accounts/{}", account_id), &params.to_pairs())
            .await
    }

    /// Fetches a paginated list of accounts matching the given filters.
    pub async fn find_accounts(&self, params: &AccountSearchParams) -> Result<AccountList, Error> {
        self.get("/v2/accounts/find", &params.to_pairs()).await
    }

    /// Fetches the account the authenticated credentials belong to.
    pub async fn current_account(&self) -> Result<Account, Error> {
        self.get("/v2/accounts/current", &[]).await
    }

    // Conversions ------------------------------------------------------------

    /// Books a conversion.
    pub async fn create_conversion(
        &self,
        params: &ConversionCreateParams,
    ) -> Result<Conversion, Error> {
        self.post("/v2/conversions/create", &params.to_pairs()).await
    }

    /// Fetches a single conversion by its ID.
    pub async fn retrieve_conversion(&self, conversion_id: &str) -> Result<Conversion, Error> {
        self.get(&format!("/v2/conversions/{}", conversion_id), &[])
            .await
    }

    /// Fetches a paginated list of conversions matching the given filters.
    pub async fn find_conversions(
        &self,
        params: &ConversionSearchParams,
    ) -> Result<ConversionList, Error> {
        self.get("/v2/conversions/find", &params.to_pairs()).await
    }

    /// Cancels a conversion, realizing any gain or loss on the unwound trade.
    pub async fn cancel_conversion(
        &self,
        conversion_id: &str,
        params: &ConversionCancelParams,
    ) -> Result<ConversionCancellation, Error> {
        self.post(
            &format!("/v2/conversions/{}/cancel", conversion_id),
            &params.to_pairs(),
        )
        .await
    }

    /// Quotes the gain or loss that cancelling the conversion now would
    /// realize, without cancelling it.
    pub async fn cancellation_quote(
        &self,
        conversion_id: &str,
    ) -> Result<CancellationQuote, Error> {
        self.get(
            &format!("/v2/conversions/{}/cancellation_quote", conversion_id),
            &[],
        )
        .await
    }

    /// Moves a conversion's settlement date, charging the returned fee.
    pub async fn date_change(
        &self,
        conversion_id: &str,
        params: &DateChangeParams,
    ) -> Result<ConversionDateChange, Error> {
        self.post(
            &format!("/v2/conversions/{}/date_change", conversion_id),
            &params.to_pairs(),
        )
        .await
    }

    /// Quotes the fee for moving a conversion's settlement date, without
    /// applying the change.
    pub async fn date_change_quote(
        &self,
        conversion_id: &str,
        params: &DateChangeParams,
    ) -> Result<ConversionDateChange, Error> {
        self.get(
            &format!("/v2/conversions/{}/date_change_quote", conversion_id),
            &params.to_pairs(),
        )
        .await
    }

    /// Splits a conversion into parent and child conversions.
    pub async fn split_conversion(
        &self,
        conversion_id: &str,
        params: &SplitParams,
    ) -> Result<ConversionSplit, Error> {
        self.post(
            &format!("/v2/conversions/{}/split", conversion_id),
            &params.to_pairs(),
        )
        .await
    }

    /// Previews the parent/child amounts a split would produce, without
    /// splitting.
    pub async fn split_preview(
        &self,
        conversion_id: &str,
        params: &SplitParams,
    ) -> Result<ConversionSplit, Error> {
        self.get(
            &format!("/v2/conversions/{}/split_preview", conversion_id),
            &params.to_pairs(),
        )
        .await
    }

    /// Fetches the split tree a conversion belongs to.
    pub async fn split_history(
        &self,
        conversion_id: &str,
    ) -> Result<ConversionSplitHistory, Error> {
        self.get(
            &format!("/v2/conversions/{}/split_history", conversion_id),
            &[],
        )
        .await
    }

    /// Fetches gain/loss events recorded against the account's conversions.
    pub async fn retrieve_profit_and_loss(
        &self,
        params: &ProfitAndLossSearchParams,
    ) -> Result<ProfitAndLossList, Error> {
        self.get("/v2/conversions/profit_and_loss", &params.to_pairs())
            .await
    }
}
