//! User-facing messages shared by the CLI and TUI.

pub const INIT_FAILED: &str = "An error occurred during initialization. Please try again.";
pub const REDIRECTING: &str = "Redirecting...";

// Home
pub const URL_HAS_SPACES: &str = "URL should not contain spaces.";
pub const SHORTEN_FAILED: &str = "Failed to shorten the URL. Please try again.";
pub const SHORTEN_ERROR: &str =
    "An error occurred while creating the shortened URL. Please try again.";
pub const NON_ASCII_WARNING: &str =
    "WARNING!!! Your URL contains non-ASCII characters. Please be careful!";
pub const COPIED_PREFIX: &str = "Copied the text: ";

// Admin
pub const NO_RECORDS: &str = "No records found.";
pub const PURGED: &str = "Purged everything!";
pub const PURGE_FAILED: &str = "Failed to purge records.";
pub const PURGE_ERROR: &str = "An error occurred while purging records.";
pub const RECORD_MISSING: &str = "The record does not exist.";
pub const ROW_DELETE_FAILED: &str = "Something went wrong, the page will be refreshed!";
pub const RECORD_DELETED: &str = "Record deleted successfully!";
pub const DELETE_ERROR: &str = "An error occurred while deleting the record. Please try again.";
pub const RECORDS_ERROR: &str = "Failed to retrieve records. Please try again later.";

// Auth
pub const LOGIN_EMPTY: &str = "Please enter both username and password";
pub const LOGIN_INVALID: &str = "Invalid username or password";
pub const LOGIN_ERROR: &str = "An error occurred while trying to log in. Please try again later.";
pub const FIELDS_EMPTY: &str = "Please fill in all fields";
pub const PASSWORD_MISMATCH: &str = "Password does not match";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
pub const CHANGE_FAILED: &str = "Failed to change password. Please try again.";
pub const CHANGE_ERROR: &str = "An error occurred while changing the password.";

pub fn copied(text: &str) -> String {
    format!("{}{}", COPIED_PREFIX, text)
}
