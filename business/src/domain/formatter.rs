use rust_decimal::Decimal;

/// Port for rendering a monetary amount for display.
///
/// Locale and currency rules are owned by the adapter.
pub trait PriceFormatter: Send + Sync {
    fn format(&self, value: Decimal) -> String;
}
