#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coord;
pub mod events;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod vessel;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use events::{Broadcast, EventLog, MatchEvent, Notifier, NullNotifier};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use vessel::*;
