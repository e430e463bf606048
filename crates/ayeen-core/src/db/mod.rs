//! Database layer for Ayeen

mod connection;
mod migrations;

pub use connection::Database;
