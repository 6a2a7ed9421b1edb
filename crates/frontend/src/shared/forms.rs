//! Conversions between form inputs and optional DTO fields.

/// Blank input means "not set". The text is kept as typed because inputs
/// are bound to the form signal.
pub fn opt_string(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Display value for optional columns
pub fn or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_none() {
        assert_eq!(opt_string("   ".into()), None);
        assert_eq!(opt_string("Av. Lima ".into()), Some("Av. Lima ".into()));
        assert_eq!(or_dash(&Some(" ".into())), "-");
        assert_eq!(or_dash(&Some("999 888 777".into())), "999 888 777");
    }
}
