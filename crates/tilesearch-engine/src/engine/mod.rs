//! Move application and tile spawning.
//!
//! - [`slide_row_left`] - the single-row primitive every move is built from
//! - [`is_movable`] / [`Grid::can_move`] - legality check without mutating the grid
//! - [`Grid::apply_move`] - slide, merge and spawn the next tile
//! - [`SpawnSequence`] / [`spawn`] - deterministic corner spawning
//!
//! # Move Pipeline
//!
//! | Direction | Pipeline                                                  |
//! |-----------|-----------------------------------------------------------|
//! | Left      | slide-left                                                |
//! | Right     | invert → slide-left → invert                              |
//! | Up        | transpose → slide-left → transpose                        |
//! | Down      | transpose → invert → slide-left → invert → transpose      |

pub use self::{moves::*, spawn::*};

mod moves;
mod spawn;
