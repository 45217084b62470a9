use crate::error::ApiError;
use crate::types::{LoginResponse, ProfileResponse, UserProfile};

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the authenticated user's profile from `/me`.
    ///
    /// Any non-2xx status is reported as [`ApiError::Rejected`]; the server
    /// does not distinguish expired from invalid tokens and neither do we.
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = format!("{}/me", self.base_url);

        tracing::debug!("Fetching profile from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!("Profile request rejected with status {}", status);
            return Err(ApiError::Rejected(status));
        }

        let body: ProfileResponse = response.json().await?;

        body.user.ok_or(ApiError::MissingUser)
    }

    /// Exchange email and password for a bearer token via `POST /login`.
    ///
    /// The backend answers failed logins with HTTP 200 and `status: "fail"`,
    /// so success is decided by the body rather than the status code.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/login", self.base_url);

        tracing::debug!("Logging in via {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[("email", email), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected(status));
        }

        let body: LoginResponse = response.json().await?;

        if body.status != "success" {
            let msg = body.msg.unwrap_or_else(|| "unknown error".to_string());
            tracing::info!("Login rejected by server: {}", msg);
            return Err(ApiError::LoginFailed(msg));
        }

        body.token
            .ok_or_else(|| ApiError::LoginFailed("token missing from response".to_string()))
    }
}
