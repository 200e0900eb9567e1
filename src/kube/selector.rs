//! Label selector construction

/// Characters that would change the meaning of a selector expression
const RESERVED: &[char] = &[',', '=', '!', '(', ')'];

/// Invalid label key or value
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("label key must not be empty")]
    EmptyKey,

    #[error("invalid label key '{0}'")]
    InvalidKey(String),

    #[error("invalid label value '{0}'")]
    InvalidValue(String),
}

/// Build the selector for runs carrying `key`
///
/// With a value the selector is an equality match (`key=value`), otherwise
/// an existence match (`key`).
pub fn label_selector(key: &str, value: Option<&str>) -> Result<String, SelectorError> {
    if key.is_empty() {
        return Err(SelectorError::EmptyKey);
    }
    if !is_plain(key) {
        return Err(SelectorError::InvalidKey(key.to_string()));
    }

    match value.filter(|v| !v.is_empty()) {
        Some(value) if !is_plain(value) => Err(SelectorError::InvalidValue(value.to_string())),
        Some(value) => Ok(format!("{}={}", key, value)),
        None => Ok(key.to_string()),
    }
}

fn is_plain(s: &str) -> bool {
    !s.chars().any(|c| c.is_whitespace() || RESERVED.contains(&c))
}
