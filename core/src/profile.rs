use kata_common::error::{KataError, Result};

/// What a profile says you do when you have not said otherwise.
pub const DEFAULT_OCCUPATION: &str = "Student";

/// A fixed-key profile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub occupation: String,
}

impl Profile {
    /// Builds a profile, defaulting the occupation to
    /// [`DEFAULT_OCCUPATION`] when none is given.
    ///
    /// The name must be non-empty and the age non-negative. Age arrives
    /// as `i64` so a negative value can be reported as a domain error
    /// rather than being unrepresentable at the boundary.
    pub fn new(name: &str, age: i64, occupation: Option<&str>) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(KataError::validation("name must not be empty"));
        }
        if age < 0 {
            return Err(KataError::validation(format!(
                "age must not be negative, got {age}"
            )));
        }
        let age = u32::try_from(age).map_err(|_| {
            KataError::validation(format!("age {age} is out of range"))
        })?;

        Ok(Self {
            name: name.to_string(),
            age,
            occupation: occupation.unwrap_or(DEFAULT_OCCUPATION).to_string(),
        })
    }
}
