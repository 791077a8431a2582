//! Service layer for the front-end flows
//!
//! Each flow takes user input, talks to the backend through `ApiClient` and
//! returns an outcome value. Presentation (CLI or TUI) renders the outcome
//! and applies any navigation.

mod admin;
mod auth;
mod hostname;
pub mod messages;
mod outcome;
mod qr;
mod redirect;
mod shorten;
mod theme;

pub use admin::{AdminPage, AdminService, DeleteOrigin, DeleteReport, RecordsView};
pub use auth::AuthService;
pub use hostname::{CONF_DOCUMENT, HostnameResolver, parse_hostname};
pub use outcome::{Navigation, Notice, NoticeLevel, Outcome};
pub use qr::{ORIGINAL_QR_SIZE, QrPalette, QrRenderer, SHORT_QR_SIZE, SvgQr};
pub use redirect::{RedirectOutcome, RedirectPlan, RedirectResolver, StaticPage, plan};
pub use shorten::{
    CardKind, InputSource, ResultCard, ShortenOutcome, ShortenService, check_input, original_qr,
};
pub use theme::{DARKMODE_ACTIVE, DARKMODE_KEY, Theme, ThemeController, ViewContext};
