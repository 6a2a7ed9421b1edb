//! Money columns come back from the services either as JSON numbers or as
//! decimal strings (`"1500.00"`); both are accepted.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

fn parse(value: StringOrFloat) -> Result<f64, String> {
    match value {
        StringOrFloat::Float(f) => Ok(f),
        StringOrFloat::String(s) if s.trim().is_empty() => Ok(0.0),
        StringOrFloat::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid decimal '{}': {}", s, e)),
    }
}

pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(v) => parse(v).map_err(de::Error::custom),
        None => Ok(0.0),
    }
}

pub fn deserialize_decimal_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(v) => parse(v).map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// Rounds to cents, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "deserialize_decimal")]
        saldo: f64,
        #[serde(default, deserialize_with = "deserialize_decimal_option")]
        limite: Option<f64>,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let row: Row = serde_json::from_str(r#"{"saldo":"1500.50","limite":20}"#).unwrap();
        assert_eq!(row.saldo, 1500.5);
        assert_eq!(row.limite, Some(20.0));

        let row: Row = serde_json::from_str(r#"{"saldo":null}"#).unwrap();
        assert_eq!(row.saldo, 0.0);
        assert_eq!(row.limite, None);

        assert!(serde_json::from_str::<Row>(r#"{"saldo":"abc"}"#).is_err());
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(3.14159), 3.14);
    }
}
