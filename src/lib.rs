pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod items;
pub mod middleware;

#[cfg(test)]
pub mod testing;
