//! Parsing of raw form input.
//!
//! Every numeric field accepts a plain digit sequence (surrounding
//! whitespace ignored). Empty input means zero.

use crate::error::ValidationError;
use crate::ids::ProductId;
use crate::order::MAX_DISCOUNT_PERCENT;

/// Parse the quantity field.
pub fn parse_quantity(input: &str) -> Result<u32, ValidationError> {
    match digits(input)? {
        None => Ok(0),
        Some(d) => d
            .parse::<u32>()
            .map_err(|_| ValidationError::QuantityTooLarge(d.to_string())),
    }
}

/// Parse the discount field, rejecting values above 100.
pub fn parse_discount(input: &str) -> Result<u32, ValidationError> {
    let value = match digits(input)? {
        None => return Ok(0),
        // Longer than u64 is out of range all the same.
        Some(d) => d.parse::<u64>().unwrap_or(u64::MAX),
    };
    if value > u64::from(MAX_DISCOUNT_PERCENT) {
        return Err(ValidationError::DiscountOutOfRange(value));
    }
    Ok(value as u32)
}

/// Parse the product selection. Empty input clears the selection.
pub fn parse_selection(input: &str) -> Result<Option<ProductId>, ValidationError> {
    match digits(input)? {
        None => Ok(None),
        Some(d) => d
            .parse::<u64>()
            .map(|id| Some(ProductId::new(id)))
            .map_err(|_| ValidationError::NotANumber(input.to_string())),
    }
}

fn digits(input: &str) -> Result<Option<&str>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber(input.to_string()));
    }
    Ok(Some(trimmed))
}
