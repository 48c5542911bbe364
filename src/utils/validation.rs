use crate::utils::error::{Result, SimError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_bounds(field_name: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("[{}, {}]", min, max),
            reason: "Bounds must be finite numbers".to_string(),
        });
    }
    if min > max {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("[{}, {}]", min, max),
            reason: "Minimum must not exceed maximum".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parse an iteration count typed at a prompt. Used by the interactive bin
/// inside its bounded retry loop.
pub fn parse_iterations(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let parsed: usize = trimmed
        .replace(',', "")
        .parse()
        .map_err(|_| SimError::InvalidUserInput {
            input: trimmed.to_string(),
            reason: "expected a whole number of iterations".to_string(),
        })?;

    if parsed == 0 {
        return Err(SimError::InvalidUserInput {
            input: trimmed.to_string(),
            reason: "iteration count must be positive".to_string(),
        });
    }

    Ok(parsed)
}

/// Parse a range bound typed at a prompt.
pub fn parse_bound(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let parsed: f64 = trimmed.parse().map_err(|_| SimError::InvalidUserInput {
        input: trimmed.to_string(),
        reason: "expected a number".to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(SimError::InvalidUserInput {
            input: trimmed.to_string(),
            reason: "bound must be finite".to_string(),
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("iterations", 10000, 1).is_ok());
        assert!(validate_positive_number("iterations", 0, 1).is_err());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds("likelihood", 2.0, 5.0).is_ok());
        assert!(validate_bounds("likelihood", 3.0, 3.0).is_ok());
        assert!(validate_bounds("likelihood", 5.0, 2.0).is_err());
        assert!(validate_bounds("likelihood", f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_parse_iterations() {
        assert_eq!(parse_iterations("10000").unwrap(), 10000);
        assert_eq!(parse_iterations(" 10,000 ").unwrap(), 10000);
        assert!(parse_iterations("0").is_err());
        assert!(parse_iterations("ten").is_err());
        assert!(parse_iterations("-5").is_err());
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("2.5").unwrap(), 2.5);
        assert_eq!(parse_bound(" -1 ").unwrap(), -1.0);
        assert!(parse_bound("inf").is_err());
        assert!(parse_bound("two").is_err());
    }
}
