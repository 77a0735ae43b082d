use clap::Parser;

/// Extended help shown after `loyalty --help`.
pub const AFTER_HELP: &str = "\
Input:
  <input> is an FEC individual-contributions file: one record per line,
  21 fields separated by `|`, no header row.
  <percentile_file> holds a single whole number between 1 and 100.
  <output> is created or truncated before the run starts.

Output rows:
  CMTE_ID|ZIP5|YEAR|PERCENTILE_VALUE|TOTAL|COUNT
  One row per contribution from a donor who already gave in an earlier year.

Diagnostics:
  Skipped records are reported on stderr. Set RUST_LOG (for example
  `RUST_LOG=debug`) to change verbosity.
";

#[derive(Debug, Parser)]
#[command(
    name = "loyalty",
    version,
    about = "repeat-donor percentile stream for campaign contribution files",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Pipe-delimited contributions file
    pub input: String,
    /// File containing the percentile (1-100)
    pub percentile_file: String,
    /// Destination for repeat-donor rows
    pub output: String,
    /// Emit the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::parse_from;

    #[test]
    fn parses_three_positional_paths() {
        let parsed = parse_from([
            "loyalty",
            "input/itcont.txt",
            "input/percentile.txt",
            "output/repeat_donors.txt",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(cli.input, "input/itcont.txt");
            assert_eq!(cli.percentile_file, "input/percentile.txt");
            assert_eq!(cli.output, "output/repeat_donors.txt");
            assert!(!cli.json);
        }
    }

    #[test]
    fn missing_output_path_is_rejected() {
        let parsed = parse_from(["loyalty", "itcont.txt", "percentile.txt"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn extra_positional_is_rejected() {
        let parsed = parse_from(["loyalty", "a", "b", "c", "d"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn json_flag_is_accepted_anywhere() {
        let parsed = parse_from(["loyalty", "--json", "a", "b", "c"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(cli.json);
        }
    }

    #[test]
    fn help_uses_clap_display_help() {
        let parsed = parse_from(["loyalty", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
