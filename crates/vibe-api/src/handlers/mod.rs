//! HTTP handlers

pub mod catalog;
pub mod health;
pub mod organization;
pub mod site_config;
pub mod tree;
