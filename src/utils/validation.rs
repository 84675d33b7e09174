use crate::utils::error::{InventoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Trims `value` and rejects it with `message` when nothing is left.
pub fn validate_non_empty_string(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::validation(message));
    }
    Ok(trimmed.to_string())
}

/// Strict y/n answer: `y` is true, `n` is false, case-insensitive.
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(InventoryError::validation("Invalid input!")),
    }
}

/// Lenient confirmation: only `y` confirms, everything else declines.
pub fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
