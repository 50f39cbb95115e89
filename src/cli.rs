use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "raycaster")]
#[command(about = "Render the built-in scene with Phong shading and hard shadows")]
pub struct Args {
    /// Shorthand for --debug-level debug
    #[arg(short, long)]
    pub verbose: bool,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "1920", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "1080", help = "Image height in pixels")]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "20", help = "Vertical field of view in degrees")]
    pub fov: f32,

    /// Render on the calling thread only
    #[arg(long, help = "Render on a single thread, row by row")]
    pub sequential: bool,

    /// Output file path (.tga 32-bit, .png 8-bit, .exr HDR linear)
    #[arg(short, long, default_value = "output.tga", help = "Output file path (.tga 32-bit, .png 8-bit, .exr HDR linear)")]
    pub output: String,
}

impl Args {
    /// Effective log level, taking --verbose into account
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug.max(self.debug_level.clone().into())
        } else {
            self.debug_level.clone().into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_render() {
        let args = Args::parse_from(["raycaster"]);
        assert_eq!((args.width, args.height), (1920, 1080));
        assert_eq!(args.fov, 20.0);
        assert_eq!(args.output, "output.tga");
        assert!(!args.sequential);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn verbose_raises_level_to_debug() {
        let args = Args::parse_from(["raycaster", "-v"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let args = Args::parse_from(["raycaster", "-v", "--debug-level", "trace"]);
        assert_eq!(args.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn explicit_arguments() {
        let args = Args::parse_from([
            "raycaster", "--width", "320", "--height", "200", "--fov", "45", "-o", "out.png", "--sequential",
        ]);
        assert_eq!((args.width, args.height), (320, 200));
        assert_eq!(args.fov, 45.0);
        assert_eq!(args.output, "out.png");
        assert!(args.sequential);
    }
}
