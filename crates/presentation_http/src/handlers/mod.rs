//! HTTP request handlers

pub mod health;
pub mod root;
pub mod weather;
