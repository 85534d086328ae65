use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::bail;
use image::RgbImage;

use crate::raster::{self, HeaderParser, RasterHeader};
use crate::render::{build_background, composite_frame};
use crate::settings::RenderSettings;
use crate::utils::encode_png;
use crate::video::FfmpegAssembler;


/// File-naming convention of one simulation run.
///
/// Everything hangs off the run directory and its stem `p` (the last path
/// component): rasters live under `P/raster/`, rendered frames and the
/// video land in `P` itself.
pub struct RunLayout {
    base: PathBuf,
    stem: String,
}

impl RunLayout {
    pub fn new(base: &Path) -> anyhow::Result<Self> {
        let stem = match base.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => bail!("Run path {} has no directory name", base.display()),
        };

        Ok(RunLayout {
            base: base.to_path_buf(),
            stem,
        })
    }

    pub fn header(&self) -> PathBuf {
        self.base.join("raster").join(format!("{}.hd.hdr", self.stem))
    }

    pub fn terrain(&self) -> PathBuf {
        self.base.join("raster").join(format!("{}.z.flt", self.stem))
    }

    pub fn depth(&self, nsave: u32) -> PathBuf {
        self.base
            .join("raster")
            .join(format!("{}.hd.{:04}.flt", self.stem, nsave))
    }

    pub fn frame(&self, nsave: u32) -> PathBuf {
        self.base.join(format!("{}_{:04}.png", self.stem, nsave))
    }

    pub fn frame_pattern(&self) -> String {
        self.base
            .join(format!("{}_%04d.png", self.stem))
            .display()
            .to_string()
    }

    pub fn video(&self) -> PathBuf {
        self.base.join(format!("{}.mp4", self.stem))
    }
}

/// Drive the full pipeline for one run: header, background, frame loop
/// and, when `assemble` is set, the video hand-off.
///
/// A failure before the frame loop (header, terrain grid, bad settings)
/// aborts the run. Inside the loop a timestep whose depth grid cannot be
/// read or whose frame cannot be encoded is skipped and reported, and the
/// loop continues.
pub fn run(prefix: &Path, settings: &RenderSettings, assemble: bool) -> anyhow::Result<()> {
    let layout = RunLayout::new(prefix)?;

    if settings.nsaveskip == 0 {
        bail!("nsaveskip must be at least 1");
    }

    println!("▶️  Loading header {}", layout.header().display());
    let header = HeaderParser::from_file(&layout.header())?;
    if header.ncols == 0 || header.nrows == 0 {
        bail!(
            "Header {} carries no grid dimensions",
            layout.header().display()
        );
    }
    println!("✔️  Loaded header: {} x {}", header.ncols, header.nrows);

    let now = Instant::now();
    println!("▶️  Building background from {}", layout.terrain().display());
    let terrain = raster::read_flt(&layout.terrain(), header.nrows, header.ncols)?;
    let background = build_background(&terrain, settings.zmin, settings.zmax);
    println!("✔️  Built background in {}ms", now.elapsed().as_millis());

    let now = Instant::now();
    let frames = render_frames(&layout, &header, &background, settings);
    println!(
        "✔️  Rendered {} frame(s) in {}ms",
        frames.len(),
        now.elapsed().as_millis()
    );

    if assemble {
        if frames.is_empty() {
            bail!("No frames could be rendered, nothing to assemble");
        }

        let assembler = FfmpegAssembler::new(settings.framerate);
        assembler.assemble(&layout.frame_pattern(), &layout.video())?;

        println!("\n    🎉  Success: {} generated", layout.video().display());
    }

    Ok(())
}

fn render_frames(
    layout: &RunLayout,
    header: &RasterHeader,
    background: &RgbImage,
    settings: &RenderSettings,
) -> Vec<PathBuf> {
    let mut produced = Vec::new();
    let mut nsave = 0;

    while nsave <= settings.numsaves {
        let depth_path = layout.depth(nsave);
        println!("▶️  Loading {}", depth_path.display());

        match raster::read_flt(&depth_path, header.nrows, header.ncols) {
            Err(e) => println!("❌  Skipping frame {:04}: {}", nsave, e),
            Ok(depth) => {
                let frame = composite_frame(
                    background,
                    &depth,
                    header.nodata,
                    settings.depth_tol,
                    settings.pink_depth,
                );

                let frame_path = layout.frame(nsave);
                if let Err(e) = encode_png(&frame_path, &frame) {
                    println!("❌  Skipping frame {:04}: {}", nsave, e);
                } else {
                    println!("✔️  Wrote {}", frame_path.display());
                    produced.push(frame_path);
                }
            }
        }

        nsave += settings.nsaveskip;
    }

    produced
}
