//! rollcall - a read-only HTTP API over a SQLite class roster
//!
//! Two endpoints: list every student in a class table, and look up a
//! student's row id by PRN.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;
