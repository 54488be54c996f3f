//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! state, so the search engine and the game session share them freely.

pub mod draw;
pub mod win;

pub use draw::{is_draw, outcome};
pub use win::{WIN_COMBOS, check_winner, evaluate};
