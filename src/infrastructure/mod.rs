pub mod gateways;
pub mod registry;
pub mod sink;
pub mod token;
