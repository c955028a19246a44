use crate::utils::error::{DirectoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DirectoryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 驗證單一場館欄位不可為空白
pub fn validate_non_empty_string(venue_id: &str, field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidVenueError {
            venue_id: venue_id.to_string(),
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    venue_id: &str,
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不在任何範圍內
    if !(min..=max).contains(&value) {
        return Err(DirectoryError::InvalidVenueError {
            venue_id: venue_id.to_string(),
            field: field_name.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.path", "venues.json").is_ok());
        assert!(validate_path("data.path", "").is_err());
        assert!(validate_path("data.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("display.highlight_limit", 3, 1).is_ok());
        assert!(validate_positive_number("display.highlight_limit", 0, 1).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("display.default_view", "map", &["grid", "map"]).is_ok());
        assert!(validate_one_of("display.default_view", "table", &["grid", "map"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("1", "rating", 5u8, 0, 5).is_ok());
        assert!(validate_range("1", "rating", 6u8, 0, 5).is_err());
        assert!(validate_range("1", "latitude", -91.0, -90.0, 90.0).is_err());
        assert!(validate_range("1", "latitude", f64::NAN, -90.0, 90.0).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("grid".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("view", &present).unwrap(), "grid");
        assert!(validate_required_field("view", &missing).is_err());
    }
}
