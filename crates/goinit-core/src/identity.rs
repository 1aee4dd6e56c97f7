use crate::error::ScaffoldError;
use crate::prompt::Prompter;

/// Local part of an email address, `None` when it is empty.
pub fn identity_from_email(email: &str) -> Option<String> {
    let email = email.trim();
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        None
    } else {
        Some(local.to_string())
    }
}

/// Derive the identity from the configured email, prompting only when none is usable.
pub fn resolve_identity(
    email: Option<&str>,
    prompter: &mut dyn Prompter,
    placeholder: &str,
) -> Result<String, ScaffoldError> {
    if let Some(identity) = email.and_then(identity_from_email) {
        return Ok(identity);
    }
    let answer = prompter
        .input("GitHub username", placeholder)
        .map_err(ScaffoldError::Prompt)?;
    Ok(or_default(answer, placeholder))
}

pub fn default_module_name(host: &str, identity: &str, project_name: &str) -> String {
    format!("{host}/{identity}/{project_name}")
}

/// Ask for the module path, offering `default` for a blank answer.
pub fn resolve_module_name(
    prompter: &mut dyn Prompter,
    default: &str,
) -> Result<String, ScaffoldError> {
    let answer = prompter
        .input("Module name", default)
        .map_err(ScaffoldError::Prompt)?;
    Ok(or_default(answer, default))
}

fn or_default(answer: String, default: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
