use std::env;

use currency::CurrencyFormatter;

/// Display conventions for prices
#[derive(Debug, Clone)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
}

impl CurrencyConfig {
    /// Load currency configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_CURRENCY_SYMBOL: Currency symbol (default: "R$")
    /// - CART_DECIMAL_SEPARATOR: Decimal separator (default: ",")
    /// - CART_THOUSANDS_SEPARATOR: Thousands separator (default: ".")
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = CurrencyFormatter::brl();

        Self {
            symbol: var("CART_CURRENCY_SYMBOL").unwrap_or(defaults.symbol),
            decimal_separator: var("CART_DECIMAL_SEPARATOR").unwrap_or(defaults.decimal_separator),
            thousands_separator: var("CART_THOUSANDS_SEPARATOR")
                .unwrap_or(defaults.thousands_separator),
        }
    }

    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter {
            symbol: self.symbol.clone(),
            decimal_separator: self.decimal_separator.clone(),
            thousands_separator: self.thousands_separator.clone(),
            ..CurrencyFormatter::brl()
        }
    }
}
