#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coord;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod mask;
pub mod player;
pub mod prelude;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::{random_layout, try_layout};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
