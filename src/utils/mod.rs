pub mod clipboard;
pub mod url;

pub use url::{contains_non_ascii, normalize_scheme, remove_base_url_if_exist};
