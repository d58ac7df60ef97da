use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "lumen", version, about = "A full-screen color light for your terminal")]
pub struct CliArgs {
    /// JSON configuration file
    #[clap(long, short, parse(from_os_str), env = "LUMEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Width of the painted bar in columns
    #[clap(long, short, default_value = "48")]
    pub width: usize,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run an animated scene (police, fire or storm)
    Play {
        scene: String,

        /// Speed multiplier, above 1.0 runs faster
        #[clap(long, short)]
        speed: Option<f64>,

        /// Stop after this many seconds instead of waiting for Ctrl-C
        #[clap(long = "seconds", short = 't')]
        seconds: Option<f64>,

        /// Brightness in percent
        #[clap(long, short, default_value = "100")]
        intensity: u32,
    },
    /// Paint one static color given as 3 or 6 hex digits
    Show {
        color: String,

        /// Brightness in percent
        #[clap(long, short, default_value = "100")]
        intensity: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let args =
            CliArgs::try_parse_from(["lumen", "play", "storm", "--speed", "2", "-t", "1.5"]).unwrap();
        assert_eq!(args.width, 48);
        assert_eq!(
            args.command,
            Command::Play {
                scene: "storm".to_string(),
                speed: Some(2.0),
                seconds: Some(1.5),
                intensity: 100,
            }
        );
    }

    #[test]
    fn test_parse_show_with_globals() {
        let args = CliArgs::try_parse_from([
            "lumen",
            "--width",
            "10",
            "--config",
            "lumen.json",
            "show",
            "#FF8800",
            "--intensity",
            "40",
        ])
        .unwrap();
        assert_eq!(args.width, 10);
        assert_eq!(args.config, Some(PathBuf::from("lumen.json")));
        assert_eq!(
            args.command,
            Command::Show {
                color: "#FF8800".to_string(),
                intensity: 40,
            }
        );
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(CliArgs::try_parse_from(["lumen"]).is_err());
    }
}
