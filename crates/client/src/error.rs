use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server refused the credential. Any non-2xx status lands here;
    /// 401, 403 and 5xx are all treated as "bad token".
    #[error("profile request rejected with status {0}")]
    Rejected(StatusCode),
    #[error("user data not found in response")]
    MissingUser,
    #[error("login failed: {0}")]
    LoginFailed(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
