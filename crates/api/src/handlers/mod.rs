//! Request handlers, one module per resource.

pub mod generate;
pub mod images;
pub mod posts;
pub mod projects;
pub mod settings;
pub mod skills;
pub mod studio_auth;
pub mod submissions;
pub mod testimonials;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::ImageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Reject blank required fields with a validation error.
pub(crate) fn require_non_empty(value: &str, field: &'static str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Field '{field}' must not be empty"
        ))));
    }
    Ok(())
}

/// Lightweight email shape check: non-empty local part, a dotted domain,
/// no whitespace. Deliverability is the mail system's problem.
pub(crate) fn validate_email(email: &str) -> AppResult<()> {
    let ok = email.len() <= 320
        && !email.contains(char::is_whitespace)
        && email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            });

    if ok {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        ))))
    }
}

/// Reject references to manifest images that do not exist, so a bad
/// `image_id` surfaces as a 400 instead of a foreign-key 500.
pub(crate) async fn ensure_image_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if ImageRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Referenced image {id} does not exist"
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_accepts_content() {
        assert!(require_non_empty("hello", "name").is_ok());
    }

    #[test]
    fn non_empty_rejects_blank() {
        assert!(require_non_empty("", "name").is_err());
        assert!(require_non_empty("   ", "name").is_err());
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(validate_email("jo@example.com").is_ok());
        assert!(validate_email("a.b+tag@sub.example.org").is_ok());
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jo@nodot").is_err());
        assert!(validate_email("jo@.example.com").is_err());
        assert!(validate_email("jo@example.com.").is_err());
        assert!(validate_email("jo space@example.com").is_err());
    }
}
