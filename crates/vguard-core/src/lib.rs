//! Validation boundary for untrusted input.
//!
//! - [`input`]: email, password, reset-token and generic field checks, plus
//!   HTML escaping for display.
//! - [`url_guard`]: SSRF protection for outbound fetches of user URLs.
//! - [`sanitize`]: non-failing cleaners for logs, filenames and markup.
//!
//! Every validator is a pure, synchronous function returning `Ok(())` or a
//! typed error from [`error`]. None of them hold state, so they can be called
//! from any number of threads at once.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod sanitize;
pub mod url_guard;

pub use error::{UrlErrorKind, UrlValidationError, ValidationError, ValidationErrorKind};
pub use url_guard::{validate_social_media_url, validate_url, UrlValidationOptions};
