mod formatter;

pub use formatter::CurrencyFormatter;
