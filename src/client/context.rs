//! Lazy-initialized service context
//!
//! The hostname is only resolved when a flow first needs the backend, so
//! offline commands (theme, config) never touch the network.

use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

use super::api_client::ApiClient;
use super::cookies::CookieJar;
use super::transport::Transport;
use super::ureq_transport::UreqTransport;
use crate::config::StaticConfig;
use crate::errors::Result;
use crate::services::{
    AdminService, AuthService, HostnameResolver, QrRenderer, RedirectResolver, ShortenService,
    ThemeController,
};
use crate::storage::{FileSettingsStore, SettingsStore};

/// Shared state for one CLI invocation or TUI session.
pub struct ServiceContext {
    config: Arc<StaticConfig>,
    settings: Arc<dyn SettingsStore>,
    cookies: Option<Arc<CookieJar>>,
    transport: Arc<dyn Transport>,
    hostname: OnceCell<String>,
}

impl ServiceContext {
    /// Settings file from `state.path`, ureq transport with a persistent
    /// cookie jar.
    pub fn new(config: Arc<StaticConfig>) -> Self {
        let settings = FileSettingsStore::arc(&config.state.path);
        Self::with_store(config, settings)
    }

    /// ureq transport over an existing settings store.
    pub fn with_store(config: Arc<StaticConfig>, settings: Arc<dyn SettingsStore>) -> Self {
        let cookies = Arc::new(CookieJar::persistent(settings.clone()));
        let transport: Arc<dyn Transport> =
            Arc::new(UreqTransport::from_config(&config, cookies.clone()));
        Self {
            config,
            settings,
            cookies: Some(cookies),
            transport,
            hostname: OnceCell::new(),
        }
    }

    /// Context over a custom transport (cookies are the transport's concern).
    pub fn with_transport(
        config: Arc<StaticConfig>,
        settings: Arc<dyn SettingsStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            settings,
            cookies: None,
            transport,
            hostname: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &Arc<StaticConfig> {
        &self.config
    }

    pub fn settings(&self) -> &Arc<dyn SettingsStore> {
        &self.settings
    }

    /// Whether a session cookie is stored locally.
    pub fn has_session(&self) -> bool {
        self.cookies.as_ref().is_some_and(|jar| !jar.is_empty())
    }

    /// Resolved hostname, fetched at most once.
    pub async fn hostname(&self) -> Result<&str> {
        let config = &self.config;
        let transport = self.transport.clone();
        self.hostname
            .get_or_try_init(|| async move {
                HostnameResolver::from_config(config, transport)
                    .resolve()
                    .await
            })
            .await
            .map(String::as_str)
    }

    pub async fn api_client(&self) -> Result<ApiClient> {
        let hostname = self.hostname().await?;
        debug!("Using {} transport", self.transport.name());
        Ok(ApiClient::new(self.transport.clone(), hostname))
    }

    pub async fn redirect_resolver(&self) -> Result<RedirectResolver> {
        Ok(RedirectResolver::new(self.api_client().await?))
    }

    pub async fn shorten_service(&self) -> Result<ShortenService> {
        Ok(ShortenService::new(self.api_client().await?))
    }

    pub async fn admin_service(&self) -> Result<AdminService> {
        Ok(AdminService::new(self.api_client().await?))
    }

    pub async fn auth_service(&self) -> Result<AuthService> {
        Ok(AuthService::new(self.api_client().await?))
    }

    pub fn theme(&self) -> ThemeController {
        ThemeController::new(self.settings.clone())
    }

    pub fn qr_renderer(&self) -> QrRenderer {
        QrRenderer::new(self.config.qr.clone())
    }
}
