//! Scalar string validation for untrusted user input.
//!
//! Every check is a single pass that returns `Ok(())` or a [`ValidationError`]
//! naming the rule that failed. Nothing here touches I/O or shared state, and
//! every matching primitive runs in time linear in the input length.
//!
//! Lengths are counted in Unicode scalar values.
//!
//! [`ValidationError`]: crate::error::ValidationError

mod email;
mod escape;
mod field;
mod password;
mod token;

pub use email::{validate_email, MAX_EMAIL_LENGTH};
pub(crate) use email::matches_email_pattern;
pub use escape::sanitize_input;
pub use field::{
    require_match, require_non_empty, require_non_empty_string, validate_length,
    validate_length_default, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};
pub use password::{validate_password, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
pub use token::{validate_reset_token, MIN_RESET_TOKEN_LENGTH};
