use std::path::Path;
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum VideoError {
    #[error("Couldn't launch `{command}`: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Wrapper around the system `ffmpeg` binary.
///
/// Video encoding stays external: the assembler's contract is a command
/// template over the numbered frame sequence plus the process exit code.
/// `ffmpeg` must be on `PATH`; if it is missing or exits non-zero the
/// error carries the full command line. No retries.
pub struct FfmpegAssembler {
    framerate: u32,
}

impl FfmpegAssembler {
    pub fn new(framerate: u32) -> Self {
        FfmpegAssembler { framerate }
    }

    fn args(&self, frame_pattern: &str, output: &Path) -> Vec<String> {
        vec![
            "-framerate".to_string(),
            self.framerate.to_string(),
            "-i".to_string(),
            frame_pattern.to_string(),
            // yuv420p keeps the output playable by stock h264 decoders
            "-pix_fmt".to_string(),
            "yuv420p".to_string(),
            "-y".to_string(),
            output.display().to_string(),
        ]
    }

    pub fn assemble(&self, frame_pattern: &str, output: &Path) -> Result<(), VideoError> {
        let args = self.args(frame_pattern, output);
        let command = format!("ffmpeg {}", args.join(" "));

        println!("▶️  Running command: {}", command);

        let status = Command::new("ffmpeg")
            .args(&args)
            .status()
            .map_err(|e| VideoError::Launch {
                command: command.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(VideoError::Failed { command, status });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::FfmpegAssembler;

    #[test]
    fn args_follow_the_command_template() {
        let assembler = FfmpegAssembler::new(10);

        let args = assembler.args("sim/sim_%04d.png", Path::new("sim/sim.mp4"));

        assert_eq!(
            vec![
                "-framerate", "10", "-i", "sim/sim_%04d.png", "-pix_fmt", "yuv420p", "-y",
                "sim/sim.mp4",
            ],
            args
        );
    }

    #[test]
    fn framerate_is_configurable() {
        let assembler = FfmpegAssembler::new(24);

        let args = assembler.args("p_%04d.png", Path::new("p.mp4"));

        assert_eq!("24", args[1]);
    }
}
