//! Two-player console game.
//!
//! `Game` runs the rules in `crate::rules` against a `Console` for input
//! and a `Reporter` for output:
//!
//! ```
//! use brain_dice::console::{Reporter, ScriptedConsole};
//! use brain_dice::core::{Decision, GameRng};
//! use brain_dice::game::Game;
//!
//! // Both players bank after every roll.
//! let console = ScriptedConsole::new(std::iter::repeat(Decision::Bank).take(10_000));
//! let mut game = Game::new(GameRng::new(42), console, Reporter::plain(std::io::sink()));
//!
//! let result = game.run().unwrap();
//! assert!(result.scores[result.winner] >= 13);
//! ```

mod session;

pub use session::Game;
