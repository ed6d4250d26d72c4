//! Configuration and upstream wire types shared by both entrypoints

pub mod config;
pub mod models;
