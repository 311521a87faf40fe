use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Validated paging window, shared by every list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBounds {
    pub offset: i64,
    pub limit: i64,
}

impl PageBounds {
    /// Validate 1-based `page`/`limit` client inputs and derive the row
    /// offset: `offset = (page - 1) * limit`.
    pub fn from_request(page: i64, limit: i64) -> AppResult<Self> {
        if page < 1 {
            return Err(AppError::ValidationError(
                "Page must be greater than 0".to_string(),
            ));
        }
        if limit < 1 {
            return Err(AppError::ValidationError(
                "Limit must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            offset: (page - 1) * limit,
            limit,
        })
    }

    /// A window starting at or past `total` yields an empty page rather
    /// than an error; callers short-circuit on this.
    pub fn is_out_of_range(&self, total: i64) -> bool {
        self.offset > 0 && self.offset >= total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_zero_offset() {
        let bounds = PageBounds::from_request(1, 10).unwrap();
        assert_eq!(bounds, PageBounds { offset: 0, limit: 10 });
    }

    #[test]
    fn test_offset_skips_previous_pages() {
        let bounds = PageBounds::from_request(2, 5).unwrap();
        assert_eq!(bounds, PageBounds { offset: 5, limit: 5 });
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let err = PageBounds::from_request(0, 10).unwrap_err();
        assert!(matches!(
            err,
            AppError::ValidationError(ref msg) if msg == "Page must be greater than 0"
        ));
    }

    #[test]
    fn test_limit_zero_is_rejected() {
        let err = PageBounds::from_request(1, 0).unwrap_err();
        assert!(matches!(
            err,
            AppError::ValidationError(ref msg) if msg == "Limit must be greater than 0"
        ));
    }

    #[test]
    fn test_window_past_total_is_out_of_range() {
        let bounds = PageBounds::from_request(3, 10).unwrap();
        assert!(bounds.is_out_of_range(20));
        assert!(bounds.is_out_of_range(7));
        assert!(!bounds.is_out_of_range(21));
    }

    #[test]
    fn test_first_page_is_never_out_of_range() {
        let bounds = PageBounds::from_request(1, 10).unwrap();
        assert!(!bounds.is_out_of_range(0));
    }
}
