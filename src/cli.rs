use crate::compare::DEFAULT_BLOCK_SIZES;
use crate::error::{CompareError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blockcmp")]
#[command(about = "Compare files block by block at multiple granularities", long_about = None)]
#[command(version)]
#[command(after_help = "EXAMPLES:
    # Compare two firmware images with the default block sizes
    blockcmp old.img new.img

    # Only look at 512-byte and 4K blocks
    blockcmp old.img new.img --bsizes 512,4096

    # Compare a 1 MiB region starting at 128 KiB
    blockcmp old.img new.img --offset 131072 --size 1048576

    # Compare every pairing of three dumps instead of neighbors only
    blockcmp a.bin b.bin c.bin --all

    # Machine-readable output (NDJSON)
    blockcmp old.img new.img --json

A block is mismatched as soon as a single byte in it differs, so the
single-byte row counts exactly the differing bytes while larger rows show
how densely the differences cluster.")]
pub struct Cli {
    /// Files to compare (at least two)
    #[arg(required = true, num_args = 2..)]
    pub files: Vec<PathBuf>,

    /// Comma-separated block sizes to evaluate
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_BLOCK_SIZES)]
    pub bsizes: Vec<i64>,

    /// Byte offset where the comparison starts
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i64,

    /// Number of bytes to compare; -1 means up to the end of the longer file
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub size: i64,

    /// Compare every pairing of the input files instead of neighbors only
    #[arg(long)]
    pub all: bool,

    /// Output JSON (newline-delimited JSON for scripting)
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only show errors)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Reject inputs that are missing or not regular files, before any
    /// comparison work starts.
    pub fn validate(&self) -> Result<()> {
        for path in &self.files {
            let is_regular = std::fs::metadata(path)
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_regular {
                return Err(CompareError::NotRegularFile { path: path.clone() });
            }
        }
        Ok(())
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.quiet || self.json {
            return tracing::Level::ERROR;
        }

        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["blockcmp", "a.bin", "b.bin"]);
        assert_eq!(cli.bsizes, DEFAULT_BLOCK_SIZES);
        assert_eq!(cli.offset, 0);
        assert_eq!(cli.size, -1);
        assert!(!cli.all);
        assert!(!cli.json);
    }

    #[test]
    fn test_bsizes_comma_separated() {
        let cli = Cli::parse_from(["blockcmp", "a", "b", "--bsizes", "512,1,4096"]);
        assert_eq!(cli.bsizes, vec![512, 1, 4096]);
    }

    #[test]
    fn test_negative_size_accepted_by_parser() {
        // Semantic validation happens in Window::new; the parser just has to
        // let the hyphen through
        let cli = Cli::parse_from(["blockcmp", "a", "b", "--size", "-1"]);
        assert_eq!(cli.size, -1);
        let cli = Cli::parse_from(["blockcmp", "a", "b", "--offset", "-3"]);
        assert_eq!(cli.offset, -3);
    }

    #[test]
    fn test_requires_two_files() {
        assert!(Cli::try_parse_from(["blockcmp", "only-one"]).is_err());
        assert!(Cli::try_parse_from(["blockcmp"]).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let cli = Cli::parse_from(["blockcmp", "/no/such/a.bin", "/no/such/b.bin"]);
        assert!(matches!(
            cli.validate().unwrap_err(),
            CompareError::NotRegularFile { .. }
        ));
    }

    #[test]
    fn test_log_level_gating() {
        let cli = Cli::parse_from(["blockcmp", "a", "b", "--json"]);
        assert_eq!(cli.log_level(), tracing::Level::ERROR);
        let cli = Cli::parse_from(["blockcmp", "a", "b", "-vv"]);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }
}
