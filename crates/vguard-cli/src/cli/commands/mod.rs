//! CLI command handlers, one per file.

mod completions;
mod email;
mod length;
mod password;
mod reset_token;
mod sanitize;
mod social_url;
mod url;

pub use completions::{run_completions, run_man};
pub use email::run_email;
pub use length::{run_length, LengthArgs};
pub use password::run_password;
pub use reset_token::run_reset_token;
pub use sanitize::run_sanitize;
pub use social_url::run_social_url;
pub use url::{run_url, UrlArgs};
