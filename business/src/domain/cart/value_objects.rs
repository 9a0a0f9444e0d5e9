use serde::{Deserialize, Serialize};

/// Opaque identifier of a product in the cart.
/// Stable for the whole lifetime of the cart item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(String);

impl CartItemId {
    /// Creates a new CartItemId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CartItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CartItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Result of a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// State changed and the snapshot was written.
    Applied,
    /// Nothing matched, state and storage untouched.
    Unchanged,
    /// State changed but the snapshot write failed.
    NotPersisted,
}

impl MutationOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, MutationOutcome::Unchanged)
    }
}

impl std::fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationOutcome::Applied => write!(f, "applied"),
            MutationOutcome::Unchanged => write!(f, "unchanged"),
            MutationOutcome::NotPersisted => write!(f, "not_persisted"),
        }
    }
}

/// Result of loading the persisted snapshot at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// A snapshot was found; holds the number of restored items.
    Restored(usize),
    /// No snapshot exists yet.
    Empty,
    /// The snapshot could not be read or parsed and was ignored.
    Discarded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_cart_item_id_from_str() {
        let id = CartItemId::new("p1");
        assert_eq!(id.as_str(), "p1");
    }

    #[test]
    fn should_display_cart_item_id() {
        let id = CartItemId::new("sku-42");
        assert_eq!(format!("{}", id), "sku-42");
    }

    #[test]
    fn should_compare_cart_item_ids_for_equality() {
        let id_1: CartItemId = "same".into();
        let id_2: CartItemId = "same".to_string().into();
        let id_3 = CartItemId::new("other");

        assert_eq!(id_1, id_2);
        assert_ne!(id_1, id_3);
    }

    #[test]
    fn should_report_changed_only_for_effective_mutations() {
        assert!(MutationOutcome::Applied.changed());
        assert!(MutationOutcome::NotPersisted.changed());
        assert!(!MutationOutcome::Unchanged.changed());
    }
}
