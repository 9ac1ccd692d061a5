pub mod bundle;
pub mod client;
pub mod resolver;
pub mod store;
pub mod types;

pub use resolver::HoldingsResolver;
pub use types::Holding;
