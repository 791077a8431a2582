//! TUI application state and the operations behind each key

mod admin_operations;
mod auth_operations;
mod home_operations;
mod navigation;
mod state;

pub use state::{App, CurrentScreen, LoginField, PasswordField};

#[cfg(test)]
pub(crate) fn test_app(fake: &std::sync::Arc<crate::client::testing::FakeTransport>) -> App {
    use crate::client::ServiceContext;
    use crate::config::{SiteConfig, StaticConfig};
    use crate::storage::MemorySettingsStore;
    use std::sync::Arc;

    let config = StaticConfig {
        site: SiteConfig {
            hostname: Some("https://s.example.com".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    App::new(ServiceContext::with_transport(
        Arc::new(config),
        MemorySettingsStore::arc(),
        fake.clone(),
    ))
}
