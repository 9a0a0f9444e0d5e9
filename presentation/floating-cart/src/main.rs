use dotenvy::dotenv;

use floating_cart::config::app_config::AppConfig;
use floating_cart::setup::dependency_injection::DependencyContainer;

/// Floating cart entry point
///
/// Wires the cart provider to device storage, waits for hydration and
/// renders the floating cart summary once.
///
/// Layout:
/// - config/: Storage and currency configuration
/// - setup/: Dependency injection
/// - view/: The floating cart summary
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(path = %config.storage.path.display(), key = %config.storage.key, "using cart storage");

    // 4. Wire dependencies and activate the cart
    let container = DependencyContainer::new(&config);
    let mut floating_cart = container.floating_cart()?;

    // 5. Render once the stored cart is loaded
    let hydration = container.cart_scope.use_cart()?.hydrated().await?;
    tracing::info!(?hydration, "cart ready");

    let view = floating_cart.render();
    tracing::info!(
        items = %view.item_count_label,
        total = %view.total_price,
        "floating cart"
    );

    Ok(())
}
