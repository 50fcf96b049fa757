//! Logic modules — turn category words and hostnames into front-end choices.
//!
//! # Modules
//!
//! - `resolver` — Icon resolution from category words
//! - `routes` — Hostname-based route table selection

pub mod resolver;
pub mod routes;
