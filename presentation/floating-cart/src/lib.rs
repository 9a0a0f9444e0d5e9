pub mod config;
pub mod navigation;
pub mod setup;
pub mod view;
