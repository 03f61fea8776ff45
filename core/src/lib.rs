//! Civic issue desk: filtering and staff-assignment recommendation over
//! an in-memory collection of reported municipal issues.

pub mod command;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod event;
pub mod filter;
pub mod geo;
pub mod identity;
pub mod issue;
pub mod recommend;
pub mod seed;
pub mod snapshot;
pub mod types;
