use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use toro_engine::{ConfigError, LifeConfig, SeedSource};

#[derive(Parser, Debug)]
#[command(name = "toro")]
#[command(author, version, about = "Conway's Game of Life on a wrap-around grid, in your terminal")]
pub struct Cli {
    /// Side length of a random NxN grid [default: 40]
    #[arg(long, allow_negative_numbers = true, conflicts_with = "input")]
    pub size: Option<i64>,

    /// Grid definition file: one row per line, `x` alive, `.` dead
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Seed for the random grid, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between frames, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Write logs to this file. Without it logs go to stderr, which draws
    /// over the grid unless redirected (`2>toro.log`). Level is set with
    /// RUST_LOG [default: warn]
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Turn the parsed flags into a validated run configuration.
    pub fn into_config(self) -> Result<LifeConfig, ConfigError> {
        let config = LifeConfig {
            source: SeedSource::from_flags(self.size, self.input)?,
            frame_delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("toro").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap().into_config().unwrap();
        assert_eq!(config.source, SeedSource::Random { dimension: 40 });
        assert_eq!(config.frame_delay, Duration::from_millis(100));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn size_and_seed() {
        let config = parse(&["--size", "25", "--seed", "7"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.source, SeedSource::Random { dimension: 25 });
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn input_file() {
        let config = parse(&["--input", "glider.txt", "--delay-ms", "20"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.source, SeedSource::File("glider.txt".into()));
        assert_eq!(config.frame_delay, Duration::from_millis(20));
    }

    #[test]
    fn log_file_is_optional() {
        assert_eq!(parse(&[]).unwrap().log_file, None);
        let cli = parse(&["--log-file", "toro.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("toro.log")));
    }

    #[test]
    fn size_and_input_are_rejected_by_the_parser() {
        let err = parse(&["--size", "10", "--input", "g.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn negative_size_reaches_config_validation() {
        let cli = parse(&["--size", "-3"]).unwrap();
        assert!(matches!(
            cli.into_config(),
            Err(ConfigError::NegativeSize { value: -3 })
        ));
    }

    #[test]
    fn long_delay_is_rejected() {
        let cli = parse(&["--delay-ms", "60000"]).unwrap();
        assert!(matches!(
            cli.into_config(),
            Err(ConfigError::InvalidFrameDelay { .. })
        ));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
