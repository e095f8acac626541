use kata_common::error::{KataError, Result};

/// The canonical first program.
pub fn hello() -> &'static str {
    "Hello, World!"
}

/// Builds a personalized greeting.
///
/// The name must contain at least one non-whitespace character; printing
/// is left to the caller.
pub fn personalized(name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(KataError::validation("name must not be empty"));
    }
    Ok(format!("Hello, {name}!"))
}
