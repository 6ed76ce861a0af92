//! Name validation for projects and teams.

use crate::error::CoreError;

/// Maximum length (in characters) of a project or team name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Trim a user-supplied name and check it is usable.
///
/// `kind` names the field in error messages (e.g. `"Project name"`).
pub fn normalize_name(kind: &str, raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(format!("{kind} must not be empty")));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{kind} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name.to_string())
}
