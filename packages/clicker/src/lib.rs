#![doc = include_str!("../README.md")]

mod app;
mod config;
mod controller;
mod error;
mod state;
mod transport;
mod view;

pub use app::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use state::*;
pub use transport::*;
pub use view::*;

pub use clicker_types as types;
