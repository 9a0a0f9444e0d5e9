use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::application::cart::add_to_cart::AddToCartUseCaseImpl;
use crate::application::cart::decrement::DecrementCartItemUseCaseImpl;
use crate::application::cart::hydrate::HydrateCartUseCaseImpl;
use crate::application::cart::increment::IncrementCartItemUseCaseImpl;
use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, NewCartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use crate::domain::cart::use_cases::decrement::{
    DecrementCartItemParams, DecrementCartItemUseCase,
};
use crate::domain::cart::use_cases::hydrate::HydrateCartUseCase;
use crate::domain::cart::use_cases::increment::{
    IncrementCartItemParams, IncrementCartItemUseCase,
};
use crate::domain::cart::value_objects::{CartItemId, HydrationOutcome, MutationOutcome};
use crate::domain::logger::Logger;

enum CartCommand {
    AddToCart(NewCartItem),
    Increment(CartItemId),
    Decrement(CartItemId),
}

struct QueuedCommand {
    command: CartCommand,
    reply: oneshot::Sender<MutationOutcome>,
}

/// Wires the cart state to its use cases and owns the single-writer queue.
pub struct CartProvider {
    pub state: Arc<CartState>,
    pub hydrate: Arc<dyn HydrateCartUseCase>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub increment: Arc<dyn IncrementCartItemUseCase>,
    pub decrement: Arc<dyn DecrementCartItemUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl CartProvider {
    pub fn new(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        let state = Arc::new(CartState::new());

        Self {
            hydrate: Arc::new(HydrateCartUseCaseImpl {
                state: state.clone(),
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            add_to_cart: Arc::new(AddToCartUseCaseImpl {
                state: state.clone(),
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            increment: Arc::new(IncrementCartItemUseCaseImpl {
                state: state.clone(),
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            decrement: Arc::new(DecrementCartItemUseCaseImpl {
                state: state.clone(),
                repository,
                logger: logger.clone(),
            }),
            state,
            logger,
        }
    }

    /// Spawns the writer task on the current Tokio runtime and returns the
    /// scope consumers read the cart from.
    ///
    /// Hydration is the writer's first job, so commands sent before it
    /// finishes are applied on top of the stored cart. Readers see an empty
    /// cart until then.
    pub fn activate(self) -> CartScope {
        let (commands, queue) = mpsc::unbounded_channel();
        let (hydrated_tx, hydrated) = watch::channel(None);

        let handle = CartHandle {
            state: self.state.clone(),
            commands,
            hydrated,
            logger: self.logger.clone(),
        };

        tokio::spawn(self.run(queue, hydrated_tx));

        CartScope { cart: Some(handle) }
    }

    async fn run(
        self,
        mut queue: mpsc::UnboundedReceiver<QueuedCommand>,
        hydrated: watch::Sender<Option<HydrationOutcome>>,
    ) {
        let outcome = self.hydrate.execute().await;
        hydrated.send_replace(Some(outcome));

        while let Some(queued) = queue.recv().await {
            let outcome = match queued.command {
                CartCommand::AddToCart(item) => {
                    self.add_to_cart.execute(AddToCartParams { item }).await
                }
                CartCommand::Increment(id) => {
                    self.increment
                        .execute(IncrementCartItemParams { id })
                        .await
                }
                CartCommand::Decrement(id) => {
                    self.decrement
                        .execute(DecrementCartItemParams { id })
                        .await
                }
            };
            // The caller is free to drop the pending mutation.
            let _ = queued.reply.send(outcome);
        }

        self.logger.debug("Cart writer stopped, all handles dropped");
    }
}

/// Cloneable access to an activated cart: read-only snapshots, change
/// notifications and fire-and-forget mutations.
#[derive(Clone)]
pub struct CartHandle {
    state: Arc<CartState>,
    commands: mpsc::UnboundedSender<QueuedCommand>,
    hydrated: watch::Receiver<Option<HydrationOutcome>>,
    logger: Arc<dyn Logger>,
}

impl CartHandle {
    pub fn products(&self) -> Arc<Cart> {
        self.state.snapshot()
    }

    /// Receiver that is marked changed each time the cart changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.state.subscribe()
    }

    /// Waits until the stored snapshot has been loaded.
    pub async fn hydrated(&self) -> Result<HydrationOutcome, CartError> {
        let mut hydrated = self.hydrated.clone();
        let outcome = hydrated
            .wait_for(Option::is_some)
            .await
            .map_err(|_| CartError::ProviderClosed)?;
        (*outcome).ok_or(CartError::ProviderClosed)
    }

    pub fn add_to_cart(&self, item: NewCartItem) -> PendingMutation {
        self.dispatch(CartCommand::AddToCart(item))
    }

    pub fn increment(&self, id: impl Into<CartItemId>) -> PendingMutation {
        self.dispatch(CartCommand::Increment(id.into()))
    }

    pub fn decrement(&self, id: impl Into<CartItemId>) -> PendingMutation {
        self.dispatch(CartCommand::Decrement(id.into()))
    }

    fn dispatch(&self, command: CartCommand) -> PendingMutation {
        let (reply, outcome) = oneshot::channel();
        if self.commands.send(QueuedCommand { command, reply }).is_err() {
            self.logger.warn("Cart writer is gone, mutation dropped");
        }
        PendingMutation { outcome }
    }
}

/// A queued mutation. Dropping it does not cancel the mutation.
#[must_use = "await the outcome or drop it explicitly for fire-and-forget"]
pub struct PendingMutation {
    outcome: oneshot::Receiver<MutationOutcome>,
}

impl PendingMutation {
    pub async fn outcome(self) -> Result<MutationOutcome, CartError> {
        self.outcome.await.map_err(|_| CartError::ProviderClosed)
    }
}

/// Explicit context handed to cart consumers.
#[derive(Clone, Default)]
pub struct CartScope {
    cart: Option<CartHandle>,
}

impl CartScope {
    /// A scope with no active provider.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn use_cart(&self) -> Result<CartHandle, CartError> {
        self.cart.clone().ok_or(CartError::MissingProvider)
    }
}
