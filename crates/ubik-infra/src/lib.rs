//! # Ubik Infrastructure
//!
//! Concrete implementations of the ports defined in `ubik-core`:
//! a mock backend with artificial latency, an in-memory key-value store
//! and a navigator that records visited routes.

pub mod gateway;
pub mod navigation;
pub mod store;

pub use gateway::{MockGateway, MockGatewayConfig};
pub use navigation::RecordingNavigator;
pub use store::InMemoryKeyValueStore;
