use std::fs::DirBuilder;
use std::path::{Path, PathBuf};
use tempdir::TempDir;

/// Hand `f` a throwaway run directory named `sim` with an empty `raster/`
/// subdirectory, laid out the way the pipeline expects its inputs.
pub fn with_run_dir(f: fn(PathBuf) -> ()) -> std::io::Result<()> {
    let dir = TempDir::new("flt2mp4-run")?;
    let base = dir.path().join("sim");
    DirBuilder::new().create(&base)?;
    DirBuilder::new().create(base.join("raster"))?;

    f(base);

    dir.close()
}

/// Write `row_major` values to `path` in the on-disk FLT layout:
/// column-major little-endian `f32`, the way the solver stores its saves.
pub fn write_flt(
    path: &Path,
    nrows: usize,
    ncols: usize,
    row_major: &[f32],
) -> std::io::Result<()> {
    let mut bytes = Vec::with_capacity(nrows * ncols * 4);

    for col in 0..ncols {
        for row in 0..nrows {
            bytes.extend_from_slice(&row_major[row * ncols + col].to_le_bytes());
        }
    }

    std::fs::write(path, bytes)
}
