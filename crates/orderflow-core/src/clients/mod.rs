//! Client modules for external services

pub mod order_server;

pub use order_server::{OrderSender, OrderServerClient};
