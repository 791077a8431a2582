//! Login, logout and password change.

use tracing::{error, info, instrument, warn};

use super::messages;
use super::outcome::{Navigation, Notice, Outcome};
use super::redirect::StaticPage;
use crate::client::{ApiClient, Reply};
use crate::errors::Result;

pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Username is trimmed, the password is sent as typed.
    ///
    /// A rejection never says whether the user or the password was wrong.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Outcome {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Outcome::notice(Notice::error(messages::LOGIN_EMPTY));
        }

        match self.client.login(username, password).await {
            Ok(Reply::Accepted(())) => Outcome::navigate(Navigation::Page(StaticPage::Admin)),
            Ok(Reply::Rejected(_)) => Outcome::notice(Notice::error(messages::LOGIN_INVALID)),
            Err(e) => {
                error!("Login error: {}", e);
                Outcome::notice(Notice::error(messages::LOGIN_ERROR))
            }
        }
    }

    /// End the session and go home.
    ///
    /// The response body is ignored. Only a transport failure keeps the
    /// user where they are, and it is only logged.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Outcome {
        match self.client.logout().await {
            Ok(()) => {
                info!("Logged out");
                Outcome::navigate(Navigation::Home)
            }
            Err(e) => {
                error!("Error during logout: {}", e);
                Outcome::none()
            }
        }
    }

    /// Page-load guard for the change password page.
    pub async fn require_admin(&self) -> Result<Option<Navigation>> {
        if self.client.admin_check().await? {
            Ok(None)
        } else {
            Ok(Some(Navigation::Page(StaticPage::Login)))
        }
    }

    /// Both fields must be filled and equal (case-sensitive).
    #[instrument(skip_all)]
    pub async fn change_password(&self, password: &str, confirm: &str) -> Outcome {
        if password.is_empty() || confirm.is_empty() {
            return Outcome::notice(Notice::error(messages::FIELDS_EMPTY));
        }
        if password != confirm {
            return Outcome::notice(Notice::error(messages::PASSWORD_MISMATCH));
        }

        match self.client.change_pass(password).await {
            Ok(Reply::Accepted(())) => {
                info!("Password changed");
                Outcome::notice(Notice::success(messages::PASSWORD_CHANGED))
                    .then(Navigation::Page(StaticPage::Login))
            }
            Ok(Reply::Rejected(message)) => {
                warn!("Password change refused: {}", message.unwrap_or_default());
                Outcome::notice(Notice::error(messages::CHANGE_FAILED))
            }
            Err(e) => {
                error!("Error changing password: {}", e);
                Outcome::notice(Notice::error(messages::CHANGE_ERROR))
            }
        }
    }
}
