use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::{read_flt, transpose, Grid, GridError};
    use crate::utils::{with_run_dir, write_flt};

    #[test]
    fn transpose_reorders_column_major_into_row_major() {
        // 2 rows x 3 cols, stored column by column
        let raw = vec![
            11.0, 21.0, // col 0
            12.0, 22.0, // col 1
            13.0, 23.0, // col 2
        ];

        let data = transpose(&raw, 2, 3);

        assert_eq!(vec![11.0, 12.0, 13.0, 21.0, 22.0, 23.0], data);
    }

    #[test]
    fn value_addresses_row_major_cells() {
        let grid = Grid::from_column_major(2, 2, &[1.0, 3.0, 2.0, 4.0]);

        assert_eq!((2, 2), grid.dimensions());
        assert_eq!(1.0, grid.value(0, 0));
        assert_eq!(2.0, grid.value(0, 1));
        assert_eq!(3.0, grid.value(1, 0));
        assert_eq!(4.0, grid.value(1, 1));
    }

    #[test]
    fn read_flt_round_trips_a_synthetic_raster() {
        with_run_dir(|base| {
            let path = base.join("raster").join("roundtrip.flt");

            // value encodes its own logical position
            let nrows = 3;
            let ncols = 4;
            let row_major: Vec<f32> = (0..nrows * ncols)
                .map(|i| (i / ncols * 100 + i % ncols) as f32)
                .collect();
            write_flt(&path, nrows, ncols, &row_major).unwrap();

            let grid = read_flt(&path, nrows, ncols).unwrap();

            for row in 0..nrows {
                for col in 0..ncols {
                    assert_eq!((row * 100 + col) as f32, grid.value(row, col));
                }
            }
        })
        .unwrap();
    }

    #[test]
    fn read_flt_fails_on_missing_file() {
        with_run_dir(|base| {
            let res = read_flt(&base.join("raster").join("nope.flt"), 2, 2);

            assert!(matches!(res, Err(GridError::Open { .. })));
        })
        .unwrap();
    }

    #[test]
    fn read_flt_fails_loudly_on_truncated_input() {
        with_run_dir(|base| {
            let path = base.join("raster").join("short.flt");
            write_flt(&path, 1, 3, &[1.0, 2.0, 3.0]).unwrap();

            let res = read_flt(&path, 2, 3);

            match res {
                Err(GridError::Truncated { expected, got, .. }) => {
                    assert_eq!(6, expected);
                    assert_eq!(3, got);
                }
                other => panic!("expected truncation error, got {:?}", other),
            }
        })
        .unwrap();
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error("Couldn't open raster {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't read raster {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Raster {} is truncated: expected {} values, got {}", .path.display(), .expected, .got)]
    Truncated {
        path: PathBuf,
        expected: usize,
        got: usize,
    },
}

/// One raster layer (elevation or depth) at one point in time.
///
/// Values are held row-major with row 0 at the top (north), matching the
/// image coordinate convention. The on-disk FLT layout is column-major;
/// [`read_flt`] transposes on load.
#[derive(Debug, PartialEq)]
pub struct Grid {
    nrows: usize,
    ncols: usize,
    data: Vec<f32>,
}

impl Grid {
    pub fn from_column_major(nrows: usize, ncols: usize, raw: &[f32]) -> Self {
        Grid {
            nrows,
            ncols,
            data: transpose(raw, nrows, ncols),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.ncols, self.nrows)
    }

    pub fn value(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.ncols + col]
    }
}

/// Reorder a column-major value slice (`raw[col * nrows + row]`) into
/// row-major order.
pub fn transpose(raw: &[f32], nrows: usize, ncols: usize) -> Vec<f32> {
    let mut data = vec![0.0f32; nrows * ncols];

    for col in 0..ncols {
        for row in 0..nrows {
            data[row * ncols + col] = raw[col * nrows + row];
        }
    }

    data
}

/// Read `nrows * ncols` little-endian `f32` values stored column-major and
/// fold them into a row-major [`Grid`].
///
/// A file holding fewer values than the header promises is an error, never
/// a partially filled grid.
pub fn read_flt(path: &Path, nrows: usize, ncols: usize) -> Result<Grid, GridError> {
    let mut file = File::open(path).map_err(|e| GridError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let expected = nrows * ncols;
    let mut bytes = Vec::with_capacity(expected * 4);
    file.read_to_end(&mut bytes).map_err(|e| GridError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes.len() < expected * 4 {
        return Err(GridError::Truncated {
            path: path.to_path_buf(),
            expected,
            got: bytes.len() / 4,
        });
    }

    let raw: Vec<f32> = bytes
        .chunks_exact(4)
        .take(expected)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    Ok(Grid::from_column_major(nrows, ncols, &raw))
}
