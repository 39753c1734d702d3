//! Interactive play-through.
//!
//! - `console`: the line-oriented I/O boundary
//! - `state`: progress and outcome of a session
//! - `runner`: the loop tying levels, equations and input together

pub mod console;
pub mod runner;
pub mod state;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use runner::{Session, FORFEIT_COMMAND, PROMPT};
pub use state::{LossReason, Outcome, SessionState};
