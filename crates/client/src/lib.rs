//! Client for the quizdash backend.
//!
//! Reads the stored bearer credential, fetches the authenticated user's
//! profile from the backend, and renders it onto the dashboard page.
//! Missing or rejected credentials send the page back to login.

pub mod client;
pub mod credentials;
pub mod error;
pub mod loader;
pub mod page;
pub mod types;

pub use client::ApiClient;
pub use credentials::CredentialStore;
pub use error::ApiError;
pub use loader::{LoadOutcome, ProfileLoader};
pub use page::{Page, TerminalPage};
pub use types::UserProfile;
