use rust_decimal::{Decimal, RoundingStrategy};

use business::domain::formatter::PriceFormatter;

/// Formats amounts as `{symbol} {integer}{decimal_separator}{fraction}` with
/// grouped thousands, e.g. `R$ 1.234,50`.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    pub symbol: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
    pub fraction_digits: u32,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::brl()
    }
}

impl CurrencyFormatter {
    /// Brazilian real, pt-BR conventions.
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
            fraction_digits: 2,
        }
    }

    fn group_thousands(&self, digits: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3 * self.thousands_separator.len());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format(&self, value: Decimal) -> String {
        let rounded =
            value.round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let plain = format!("{:.*}", self.fraction_digits as usize, rounded.abs());
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut formatted = format!("{}{} {}", sign, self.symbol, self.group_thousands(integer));
        if !fraction.is_empty() {
            formatted.push_str(&self.decimal_separator);
            formatted.push_str(fraction);
        }
        formatted
    }
}
