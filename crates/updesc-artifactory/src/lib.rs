//! Artifactory protocol: URL layout, authentication, build metadata lookup
//! and update descriptor publishing.

pub mod auth;
pub mod build_api;
pub mod client;
pub mod publish;
pub mod repository;
