use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xbeers")]
#[command(about = "Print an HTML page of a user's distinct beers, grouped by brewery country", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Username to query data from
    #[arg(short = 'u', long = "user", value_name = "USERNAME")]
    pub username: String,

    /// Use authenticated mechanism (prompts for the password)
    #[arg(short, long)]
    pub auth: bool,

    /// Config file (defaults to <config dir>/xbeers/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn user_is_required() {
        let err = Cli::try_parse_from(["xbeers"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn short_and_long_forms() {
        let cli = Cli::try_parse_from(["xbeers", "-u", "alice", "-a"]).unwrap();
        assert_eq!(cli.username, "alice");
        assert!(cli.auth);
        assert_eq!(cli.log_level, "warn");
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from([
            "xbeers",
            "--user",
            "bob",
            "--config",
            "/tmp/x.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.username, "bob");
        assert!(!cli.auth);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["xbeers", "-u", "a", "--log-level", "loud"]).is_err());
    }
}
