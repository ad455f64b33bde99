//! Win and tie evaluation.

mod tie;
mod win;

pub use tie::is_full;
pub use win::check_winner;
