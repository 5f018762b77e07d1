pub mod gateway;
pub mod payment;
pub mod ports;
