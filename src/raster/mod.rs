mod grid;
mod header;

pub use grid::{read_flt, transpose, Grid, GridError};
pub use header::{HeaderParser, RasterHeader};
