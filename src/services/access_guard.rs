use crate::error::AppError;

/// Header carrying the caller credential.
pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Exact, case-sensitive comparison of the presented credential with the
/// configured one. A missing credential never matches.
pub fn authorize(presented: Option<&str>, expected: &str) -> Result<(), AppError> {
    match presented {
        Some(token) if token == expected => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}
