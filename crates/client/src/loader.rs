use crate::client::ApiClient;
use crate::credentials::CredentialStore;
use crate::error::ApiError;
use crate::page::{LOGIN_PAGE, Page, render_profile};

/// What a single load attempt did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Profile fetched and all fields written.
    Rendered,
    /// Missing or rejected credential; the page was sent to the login page.
    RedirectedToLogin,
    /// Some other failure was logged; the page was left untouched.
    Failed,
}

/// Loads the dashboard: one best-effort attempt per call, no retries, no
/// timeout. Failures beyond a bad credential never reach the user.
pub struct ProfileLoader {
    store: CredentialStore,
    client: ApiClient,
    login_url: String,
}

impl ProfileLoader {
    pub fn new(store: CredentialStore, client: ApiClient) -> Self {
        Self {
            store,
            client,
            login_url: LOGIN_PAGE.to_string(),
        }
    }

    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }

    pub async fn run(&self, page: &mut dyn Page) -> LoadOutcome {
        let token = match self.store.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::info!("No stored credential, redirecting to {}", self.login_url);
                page.navigate(&self.login_url);
                return LoadOutcome::RedirectedToLogin;
            }
            Err(e) => {
                tracing::error!("Failed to read stored credential: {e:#}");
                return LoadOutcome::Failed;
            }
        };

        match self.client.fetch_profile(&token).await {
            Ok(user) => {
                render_profile(page, &user);
                LoadOutcome::Rendered
            }
            Err(ApiError::Rejected(status)) => {
                tracing::info!("Credential rejected ({}), clearing stored token", status);

                // Best effort: a token that cannot be deleted will just be
                // rejected again on the next load.
                if let Err(e) = self.store.clear() {
                    tracing::error!("Failed to clear rejected credential: {e:#}");
                }

                page.navigate(&self.login_url);
                LoadOutcome::RedirectedToLogin
            }
            Err(e) => {
                tracing::error!("Failed to load dashboard data: {}", e);
                LoadOutcome::Failed
            }
        }
    }
}
