//! Library exports for hifriends-nav, shared between the host shell and tests.

pub mod config;
pub mod guard;
pub mod models;
pub mod navigator;
pub mod routes;
pub mod session;
pub mod store;
pub mod title;
