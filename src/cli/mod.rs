//! CLI argument parsing

use std::ffi::OsString;

use clap::Parser;

use crate::config::{api, defaults, env};

/// Long flags that may also be written with a single dash (`-org my-org`)
const LONG_FLAGS: &[&str] = &[
    "org",
    "project",
    "pat",
    "log-level",
    "timeout",
    "batch",
    "base-url",
    "help",
    "version",
];

/// Azure DevOps variable library lister
#[derive(Parser, Debug)]
#[command(name = "azdo-varlibs")]
#[command(version)]
#[command(about = "List Azure DevOps variable libraries", long_about = None)]
pub struct Cli {
    /// Azure DevOps organization (falls back to AZDO_ORG)
    #[arg(long)]
    pub org: Option<String>,

    /// Azure DevOps project (falls back to AZDO_PROJECT)
    #[arg(long)]
    pub project: Option<String>,

    /// Personal access token (falls back to AZDO_PAT)
    #[arg(long)]
    pub pat: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Request timeout in seconds
    #[arg(
        long,
        default_value_t = defaults::TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Batch mode - no progress spinner
    #[arg(short, long, default_value_t = false)]
    pub batch: bool,

    /// Service root URL
    #[arg(long, env = env::BASE_URL, default_value = api::BASE_URL, hide = true)]
    pub base_url: String,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-org`/`-org=value` style flags into their `--org` form.
///
/// The first argument (program name) and everything after `--` are left
/// untouched, as are short flags and values that are not known long flags.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }
        match arg.to_str() {
            Some(s) if is_single_dash_long_flag(s) => normalized.push(format!("-{}", s).into()),
            _ => normalized.push(arg),
        }
    }

    normalized
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn test_cli_default_values() {
        let cli = parse(&["azdo-varlibs"]);
        assert!(cli.org.is_none());
        assert!(cli.project.is_none());
        assert!(cli.pat.is_none());
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.timeout, defaults::TIMEOUT_SECS);
        assert!(!cli.batch);
    }

    #[test]
    fn test_cli_single_dash_long_flags() {
        let cli = parse(&[
            "azdo-varlibs",
            "-org",
            "contoso",
            "-project",
            "web",
            "-pat",
            "secret",
        ]);
        assert_eq!(cli.org.as_deref(), Some("contoso"));
        assert_eq!(cli.project.as_deref(), Some("web"));
        assert_eq!(cli.pat.as_deref(), Some("secret"));
    }

    #[test]
    fn test_cli_double_dash_and_equals_forms() {
        let cli = parse(&[
            "azdo-varlibs",
            "--org",
            "contoso",
            "-project=web",
            "--pat=secret",
        ]);
        assert_eq!(cli.org.as_deref(), Some("contoso"));
        assert_eq!(cli.project.as_deref(), Some("web"));
        assert_eq!(cli.pat.as_deref(), Some("secret"));
    }

    #[test]
    fn test_cli_empty_flag_value_is_kept() {
        let cli = parse(&["azdo-varlibs", "-org", ""]);
        assert_eq!(cli.org.as_deref(), Some(""));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = parse(&["azdo-varlibs", "-l", "debug", "-b"]);
        assert_eq!(cli.log_level, "debug");
        assert!(cli.batch);
    }

    #[test]
    fn test_cli_timeout() {
        let cli = parse(&["azdo-varlibs", "-timeout", "5"]);
        assert_eq!(cli.timeout, 5);
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        let result = Cli::try_parse_from(normalize_args(["azdo-varlibs", "-timeout", "0"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_leaves_values_and_program_name() {
        let args = normalize_args(["-org", "-x", "value", "-l", "--pat", "p"]);
        assert_eq!(args, vec!["-org", "-x", "value", "-l", "--pat", "p"]);
    }

    #[test]
    fn test_normalize_stops_after_double_dash() {
        let args = normalize_args(["bin", "-org", "a", "--", "-project"]);
        assert_eq!(args, vec!["bin", "--org", "a", "--", "-project"]);
    }

    #[test]
    fn test_is_single_dash_long_flag() {
        assert!(is_single_dash_long_flag("-org"));
        assert!(is_single_dash_long_flag("-pat=abc"));
        assert!(is_single_dash_long_flag("-log-level"));
        assert!(!is_single_dash_long_flag("--org"));
        assert!(!is_single_dash_long_flag("-l"));
        assert!(!is_single_dash_long_flag("-organization"));
        assert!(!is_single_dash_long_flag("org"));
    }
}
