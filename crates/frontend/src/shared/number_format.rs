//! Money and percentage formatting for tables and the dashboard.

pub const CURRENCY_SYMBOL: &str = "S/";

/// Two decimals with thousands separated by commas: `1234.5` -> `"1,234.50"`
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{dec_part}")
}

pub fn format_money(value: f64) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_number(value))
}

/// `12.5` -> `"12.50 %"`
pub fn format_percent(value: f64) -> String {
    format!("{:.2} %", value)
}

/// Parses user input, accepting a comma as decimal separator. Empty is zero.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let cleaned = input.trim().replace(' ', "").replace(',', ".");
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("\"{}\" no es un número válido", input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(1234567.5), "1,234,567.50");
        assert_eq!(format_number(-1500.0), "-1,500.00");
    }

    #[test]
    fn money_and_percent() {
        assert_eq!(format_money(2500.0), "S/ 2,500.00");
        assert_eq!(format_percent(12.5), "12.50 %");
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount("1500,50"), Ok(1500.5));
        assert_eq!(parse_amount(""), Ok(0.0));
        assert!(parse_amount("abc").is_err());
    }
}
