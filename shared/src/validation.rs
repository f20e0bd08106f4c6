//! Validation utilities for the Production Management Platform

use rust_decimal::Decimal;

/// Validate material code format (3-10 uppercase alphanumeric)
pub fn validate_material_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 3 {
        return Err("Material code must be at least 3 characters");
    }
    if code.len() > 10 {
        return Err("Material code must be at most 10 characters");
    }
    if !code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return Err("Material code must be uppercase alphanumeric only");
    }
    Ok(())
}

/// Validate that a quantity is strictly positive
pub fn validate_positive(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate that a quantity is not negative
pub fn validate_non_negative(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate username format (3-32 chars, lowercase alphanumeric plus . _ -)
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
    {
        return Err("Username must be lowercase alphanumeric, '.', '_' or '-'");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_valid_material_codes() {
        assert!(validate_material_code("PTK001").is_ok());
        assert!(validate_material_code("GAZ").is_ok());
        assert!(validate_material_code("MSR100").is_ok());
        assert!(validate_material_code("ABCDEFGHIJ").is_ok());
    }

    #[test]
    fn test_invalid_material_codes() {
        assert!(validate_material_code("PT").is_err()); // Too short
        assert!(validate_material_code("ABCDEFGHIJK").is_err()); // Too long
        assert!(validate_material_code("ptk001").is_err()); // Lowercase
        assert!(validate_material_code("PTK-01").is_err()); // Special char
    }

    #[test]
    fn test_quantity_validation() {
        assert!(validate_positive(Decimal::from(1)).is_ok());
        assert!(validate_positive(Decimal::ZERO).is_err());
        assert!(validate_positive(Decimal::from_str("-5").unwrap()).is_err());

        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::from_str("-0.1").unwrap()).is_err());
    }

    #[test]
    fn test_username_validation() {
        assert!(validate_username("mehmet").is_ok());
        assert!(validate_username("op.vardiya-2").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("Mehmet").is_err());
        assert!(validate_username("user name").is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("admin123").is_ok());
        assert!(validate_password("12345").is_err());
    }
}
