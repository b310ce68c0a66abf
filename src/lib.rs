#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod loader;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod report;
mod ship;
pub mod strategies;
mod strategy;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use loader::load_board;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use report::{LogReporter, NullReporter, RecordingReporter, ReportEvent, Reporter};
#[cfg(feature = "std")]
pub use report::ConsoleReporter;
pub use ship::*;
pub use strategies::{MovementKind, NaiveMovement, NaiveTargeting, TargetingKind};
pub use strategy::*;
