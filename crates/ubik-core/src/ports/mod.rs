//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that adapters in `ubik-infra` implement.

mod gateway;
mod navigation;
mod store;

pub use gateway::{AuthGateway, GatewayError, RegistrationGateway};
pub use navigation::{NavigationError, Navigator, Route};
pub use store::{KeyValueStore, StoreError};
