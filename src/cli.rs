use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "backup-archive")]
#[command(version)]
#[command(about = "Inspect gzip-compressed backup archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  backup-archive juju-backup.tgz           print the backup metadata\n  \
  backup-archive -lv juju-backup.tgz       list entries with sizes\n  \
  backup-archive -p juju-backup.tgz | tar t   send the tar stream via pipe\n  \
  backup-archive https://example.com/juju-backup.tgz   read a remote archive")]
pub struct Cli {
    /// Archive path or HTTP URL
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,

    /// List entries
    #[arg(short = 'l')]
    pub list: bool,

    /// Verbose listing and logging
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Write the decompressed tar stream to stdout
    #[arg(short = 'p', conflicts_with = "list")]
    pub pipe: bool,

    /// Quiet mode
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Maximum HTTP retries on timeout or connection failure
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub retries: u32,
}

impl Cli {
    pub fn is_http_url(&self) -> bool {
        self.archive.starts_with("http://") || self.archive.starts_with("https://")
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.pipe
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet > 1 {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["backup-archive", "-lv", "backup.tgz"]).unwrap();
        assert!(cli.list);
        assert!(cli.verbose);
        assert!(!cli.is_http_url());
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.retries, 10);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn pipe_conflicts_with_list() {
        assert!(Cli::try_parse_from(["backup-archive", "-l", "-p", "backup.tgz"]).is_err());
    }

    #[test]
    fn detects_urls() {
        let cli = Cli::try_parse_from(["backup-archive", "https://example.com/b.tgz"]).unwrap();
        assert!(cli.is_http_url());
    }
}
