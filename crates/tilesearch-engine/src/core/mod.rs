pub use self::{direction::*, grid::*, transform::*};

pub(crate) mod direction;
pub(crate) mod grid;
pub(crate) mod transform;
