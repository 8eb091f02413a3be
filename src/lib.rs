//! Macro Log Library
//!
//! Daily macro totals and a reusable food library, persisted through an
//! injected key-value store.

pub mod app;
pub mod build_info;
pub mod config;
pub mod db;
pub mod mcp;
pub mod models;
pub mod signal;
pub mod store;
pub mod tools;
pub mod ui;
