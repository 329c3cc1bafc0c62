//! Identifier case conversion for the Forge application.
//! The same conversions are used for filesystem paths and for generated
//! symbol names, so malformed input is rejected instead of being turned
//! into a corrupt path.

use crate::error::{Error, Result};

/// Converts a camel case identifier to its dash case form.
/// Already dash case input passes through unchanged.
///
/// # Arguments
/// * `identifier` - Camel case identifier (e.g. `MyBlog`)
///
/// # Returns
/// * `Result<String>` - Dash case form (e.g. `my-blog`)
///
/// # Errors
/// * `Error::InvalidIdentifierError` if the identifier is empty or contains
///   characters outside ASCII alphanumerics, `-` and `_`
pub fn to_dash_case(identifier: &str) -> Result<String> {
    ensure_identifier(identifier, |c| c.is_ascii_alphanumeric() || c == '-' || c == '_')?;
    Ok(cruet::to_kebab_case(identifier))
}

/// Converts a dash case identifier to its camel case form.
///
/// # Errors
/// * `Error::InvalidIdentifierError` if the identifier is empty or contains
///   characters outside ASCII alphanumerics, `-` and `_`
pub fn to_camel_case(identifier: &str) -> Result<String> {
    ensure_identifier(identifier, |c| c.is_ascii_alphanumeric() || c == '-' || c == '_')?;
    Ok(cruet::to_camel_case(identifier))
}

fn ensure_identifier(identifier: &str, is_allowed: impl Fn(char) -> bool) -> Result<()> {
    let starts_with_letter =
        identifier.chars().next().is_some_and(|c| c.is_ascii_alphabetic());

    if !starts_with_letter || !identifier.chars().all(is_allowed) {
        return Err(Error::InvalidIdentifierError { identifier: identifier.to_string() });
    }

    Ok(())
}
