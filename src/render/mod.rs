mod background;
mod cmap;
mod composite;

pub use background::build_background;
pub use cmap::{DEPTH_CMAP, NCOLORS};
pub use composite::composite_frame;
