pub mod activate;
pub mod signin;

/// Trims surrounding whitespace. Storage compares emails exactly.
pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_string()
}
