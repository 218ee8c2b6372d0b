pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod responses;
pub mod router;
pub mod state;
pub mod store;
pub mod templates;

#[cfg(test)]
mod tests;
