//! Layout calculation modules
//!
//! This module handles all the geometric calculations for a photo sheet:
//! - Slot grid (how many photos fit, where each slot sits on the page)
//! - Slot resolution (which image fills each slot, pagination)
//! - Crop resolution (cover crop, pan and zoom)
//! - Page planning (everything above, per page)

mod crop;
mod grid;
mod plan;
mod slots;
mod types;

pub use crop::*;
pub use grid::*;
pub use plan::*;
pub use slots::*;
pub use types::*;
