//! CLI argument parsing via clap.

use artsy::build_info;
use clap::Parser;

/// Turn text into ASCII art, right in your terminal.
#[derive(Debug, Parser)]
#[command(name = "artsy", version = build_info::cli_version_text())]
pub struct Args {
    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn parses_without_flags() {
        let args = Args::parse_from(["artsy"]);
        assert!(!args.no_color);
    }

    #[test]
    fn parses_no_color_flag() {
        let args = Args::parse_from(["artsy", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Args::try_parse_from(["artsy", "spurious"]).is_err());
    }
}
