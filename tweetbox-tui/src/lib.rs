// Library interface for the tweetbox client (used by the binary and tests)
pub mod api;
pub mod app;
pub mod compose;
pub mod config;
pub mod feed;

#[macro_use]
pub mod logging;

pub mod server_config;
pub mod session;
pub mod terminal;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod testing;
