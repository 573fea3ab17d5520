//! Terminal side of the game: reading decisions and reporting progress.

pub mod input;
pub mod report;

pub use input::{Console, LineConsole, ScriptedConsole};
pub use report::Reporter;
