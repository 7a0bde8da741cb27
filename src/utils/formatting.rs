//! Formatting helpers for CLI outputs. Stored values keep full precision;
//! rounding happens only here and in the chart series.

/// Round to 2 decimal places (money and displayed hours).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn money(symbol: &str, v: f64) -> String {
    format!("{}{:.2}", symbol, v)
}

pub fn hours(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(7.333333), 7.33);
        assert_eq!(round2(112.499), 112.5);
        assert_eq!(round2(8.5), 8.5);
    }

    #[test]
    fn formats_money() {
        assert_eq!(money("$", 170.0), "$170.00");
        assert_eq!(money("€", 112.5), "€112.50");
    }
}
