/// Screen identifier of the cart detail screen.
pub const CART_SCREEN: &str = "Cart";

/// Port for the host application's navigation system.
pub trait Navigator: Send + Sync {
    fn navigate(&self, screen: &str);
}
