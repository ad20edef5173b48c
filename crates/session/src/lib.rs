//! Game session for ChessMaster
//!
//! Holds the one mutable game the UI drives and turns user input, timer
//! expiries and resets into explicit state transitions:
//!
//! ```text
//!   Idle --user move--> AwaitingOpponentMove --timer fired--> Idle
//!     \                        |                               |
//!      +------ terminal -------+---------- terminal -----------+--> GameOver
//! ```
//!
//! The delayed opponent reply is an [`OpponentTimer`] task that can be
//! cancelled; every scheduled reply carries a ticket, and a reset makes all
//! outstanding tickets stale.

mod chat;
mod config;
mod error;
mod game;
mod timer;

pub use chat::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use timer::*;
