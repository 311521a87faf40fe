use uuid::Uuid;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Parse an identifier supplied by the boundary layer. Malformed ids are
    /// a validation failure, not an internal error.
    pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(raw.trim())
            .map_err(|_| AppError::ValidationError(format!("'{}' is not a valid id", raw)))
    }

    pub fn validate_ranking_limit(limit: i64) -> Result<(), AppError> {
        if limit <= 0 {
            return Err(AppError::ValidationError(
                "Limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_canonical_uuid() {
        let id = Validator::parse_id("bb0ded1b-a0bf-4480-a40e-fdf50ad573c3");
        assert!(id.is_ok());
    }

    #[test]
    fn test_parse_id_trims_whitespace() {
        let id = Validator::parse_id("  bb0ded1b-a0bf-4480-a40e-fdf50ad573c3 ");
        assert!(id.is_ok());
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = Validator::parse_id("not-an-id").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_ranking_limit_rejects_zero_and_negative() {
        assert!(Validator::validate_ranking_limit(0).is_err());
        assert!(Validator::validate_ranking_limit(-3).is_err());
        assert!(Validator::validate_ranking_limit(1).is_ok());
    }
}
