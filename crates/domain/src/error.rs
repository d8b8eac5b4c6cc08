//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SliceHubError`] via `#[from]` — no `String` variants, no downcasting.

/// Top-level error for the catalog domain.
#[derive(Debug, thiserror::Error)]
pub enum SliceHubError {
    /// A domain invariant or required-input check failed.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced row does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed; the source is adapter-specific.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Domain validation failures.
///
/// Display strings are part of the wire contract: handlers surface them
/// verbatim inside the `errors` array of a 400 response.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required request field was absent (or zero, which the API contract
    /// treats the same way).
    #[error("Missing required fields")]
    MissingFields,

    /// The association price falls outside the allowed range.
    #[error("Price must be between 1 and 30")]
    PriceOutOfRange,
}

/// A lookup by primary key found nothing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable name of the missing resource(s), e.g. `"Restaurant"`.
    pub entity: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_wire_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Missing required fields"
        );
        assert_eq!(
            ValidationError::PriceOutOfRange.to_string(),
            "Price must be between 1 and 30"
        );
        assert_eq!(
            NotFoundError {
                entity: "Restaurant"
            }
            .to_string(),
            "Restaurant not found"
        );
    }

    #[test]
    fn should_convert_inner_errors_into_top_level_variants() {
        let err: SliceHubError = ValidationError::PriceOutOfRange.into();
        assert!(matches!(err, SliceHubError::Validation(_)));

        let err: SliceHubError = NotFoundError { entity: "Pizza" }.into();
        assert!(matches!(err, SliceHubError::NotFound(_)));
    }
}
