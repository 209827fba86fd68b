pub mod config;
pub mod dynamics;
pub mod output;
pub mod state;
