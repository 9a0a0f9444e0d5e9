use std::sync::{Mutex, PoisonError};

use business::domain::navigation::Navigator;

/// Navigator that records the visited screens and logs each transition.
#[derive(Default)]
pub struct RouteHistory {
    screens: Mutex<Vec<String>>,
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.screens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RouteHistory {
    fn navigate(&self, screen: &str) {
        tracing::info!(target: "navigation", screen, "navigating");
        self.screens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(screen.to_string());
    }
}
