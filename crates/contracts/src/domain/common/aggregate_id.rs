/// Identifier used by every backend table.
pub type EntityId = i64;

/// Conversions between an aggregate id and the string form used in tab keys
/// and DOM ids.
pub trait AggregateId: Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Identificador inválido '{}': {}", s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_ids() {
        assert_eq!(i64::from_string(" 42 "), Ok(42));
        assert!(i64::from_string("abc").is_err());
        assert_eq!(7i64.as_string(), "7");
    }
}
