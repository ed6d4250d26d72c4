//! Client modules for external API interactions

pub mod exa_client;

pub use exa_client::ExaClient;
