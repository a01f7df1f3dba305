//! Gateway implementations. Only the mock exists until the backend
//! contract is settled.

mod mock;

pub use mock::{MockGateway, MockGatewayConfig};
