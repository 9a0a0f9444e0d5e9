/// Cart errors surfaced to consumers of the cart provider.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("useCart must be used within a CartProvider")]
    MissingProvider,
    #[error("cart.provider_closed")]
    ProviderClosed,
}
