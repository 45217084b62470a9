use serde::{Deserialize, Serialize};

/// The authenticated user's statistics as returned by the profile endpoint.
///
/// Old accounts can predate some of the counters, so everything except the
/// username defaults to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub quizzes_taken: u64,
    /// Average score per quiz. Not a 0-100 percentage; see
    /// [`crate::page::format_accuracy`] for how it is displayed.
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub streak: u64,
}

/// Body of `GET /me`. The backend wraps the profile in a `user` field;
/// a body without it is treated as malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Body of `POST /login`. Failed logins come back with HTTP 200 and
/// `status: "fail"`, so the body carries the actual result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}
