use std::fs::File;
use std::io::{BufReader, Error, ErrorKind};
use std::path::Path;

use serde::Deserialize;

/// Run constants for one rendering pass.
///
/// None of these are exposed as CLI flags. The defaults apply as-is; a
/// `render.json` next to the run's rasters may override individual fields.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    /// highest timestep index to look for (inclusive)
    pub numsaves: u32,
    /// stride between rendered timesteps
    pub nsaveskip: u32,
    /// depths at or below this are dry cells
    pub depth_tol: f32,
    /// depth at which the palette saturates
    pub pink_depth: f32,
    pub zmin: f32,
    pub zmax: f32,
    pub framerate: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            numsaves: 10,
            nsaveskip: 1,
            depth_tol: 0.1,
            pink_depth: 2.0,
            zmin: -5.0,
            zmax: 5.0,
            framerate: 10,
        }
    }
}

pub trait SettingsParser {
    fn parse(&self, path: &Path) -> Result<RenderSettings, Box<Error>>;
}

pub struct DummySettingsParser {
    pub succeeds: bool,
}

impl SettingsParser for DummySettingsParser {
    fn parse(&self, _: &Path) -> Result<RenderSettings, Box<Error>> {
        if self.succeeds {
            Ok(RenderSettings::default())
        } else {
            Err(Box::new(Error::new(ErrorKind::Other, "dummy error")))
        }
    }
}

pub struct SerdeSettingsParser {}

impl SettingsParser for SerdeSettingsParser {
    /// An absent file is not an error: the constants are fixed and the file
    /// is purely an override. A file that exists but doesn't deserialize is
    /// fatal.
    fn parse(&self, path: &Path) -> Result<RenderSettings, Box<Error>> {
        if !path.is_file() {
            return Ok(RenderSettings::default());
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        match serde_json::from_reader(reader) {
            Ok(settings) => Ok(settings),
            Err(err) => Err(Box::new(Error::new(ErrorKind::Other, err.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use crate::settings::{RenderSettings, SerdeSettingsParser, SettingsParser};
    use crate::utils::with_run_dir;

    #[test]
    fn absent_file_yields_defaults() {
        let parser = SerdeSettingsParser {};
        let res = parser.parse(Path::new("/definitely/not/render.json"));

        assert_eq!(RenderSettings::default(), res.unwrap());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        with_run_dir(|base| {
            let path = base.join("render.json");
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(br#"{"numsaves": 3, "pinkDepth": 1.5}"#).unwrap();

            let settings = SerdeSettingsParser {}.parse(&path).unwrap();

            assert_eq!(3, settings.numsaves);
            assert_eq!(1.5, settings.pink_depth);
            assert_eq!(1, settings.nsaveskip);
            assert_eq!(0.1, settings.depth_tol);
        })
        .unwrap();
    }

    #[test]
    fn malformed_file_errors_out() {
        with_run_dir(|base| {
            let path = base.join("render.json");
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(b"{ not json").unwrap();

            assert!(SerdeSettingsParser {}.parse(&path).is_err());
        })
        .unwrap();
    }
}
