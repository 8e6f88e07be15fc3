use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CliInvocation {
    PrintHelp,
    PrintVersion,
    Menu { filename: Option<PathBuf> },
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CliParseError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("missing value for flag: {0}")]
    MissingFlagValue(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

pub fn parse_invocation(args: &[String]) -> Result<CliInvocation, CliParseError> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(CliInvocation::PrintHelp);
    }
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return Ok(CliInvocation::PrintVersion);
    }

    let mut filename: Option<PathBuf> = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--filename" | "-f" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliParseError::MissingFlagValue(arg.to_string()))?;
                filename = Some(PathBuf::from(value));
            }
            _ if arg.starts_with("--filename=") => {
                let value = &arg["--filename=".len()..];
                if value.is_empty() {
                    return Err(CliParseError::MissingFlagValue("--filename".to_string()));
                }
                filename = Some(PathBuf::from(value));
            }
            _ if arg.starts_with("-f") && arg.len() > 2 => {
                filename = Some(PathBuf::from(&arg[2..]));
            }
            _ if arg.starts_with('-') => {
                return Err(CliParseError::UnknownFlag(arg.to_string()));
            }
            _ => {
                return Err(CliParseError::UnexpectedArgument(arg.to_string()));
            }
        }
    }

    Ok(CliInvocation::Menu { filename })
}

pub fn help_text() -> String {
    format!(
        "{name} -- pick a configuration version from the commit history\n\nUSAGE:\n  {name} --filename FILE\n  {name} --help | --version\n\nShows the commit history FILE as a menu, at most 5 versions per page.\n'N' moves to the next page and 'P' to the previous one, when there is one.\n'Q' quits without changing the configuration.\n\nFLAGS:\n  -f, --filename FILE  Commit history file (required)\n\nFILE FORMAT:\n  |<unix-time>|<user>|<via>|<comment>|   one commit per line\n\nEXIT STATUS:\n  The chosen version number, or 0 for no change (version 0 is the running config).\n\nENV:\n  CFGMENU_LOG   tracing filter for diagnostics on stderr (default: off)\n",
        name = env!("CARGO_PKG_NAME")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn parse_without_filename_yields_menu_without_file() {
        let parsed = parse_invocation(&args(&["cfgmenu"])).expect("parse");
        assert_eq!(parsed, CliInvocation::Menu { filename: None });
    }

    #[test]
    fn parse_short_and_long_filename_flags() {
        for flag in ["-f", "--filename"] {
            let parsed =
                parse_invocation(&args(&["cfgmenu", flag, "/config/commits"])).expect("parse");
            assert_eq!(
                parsed,
                CliInvocation::Menu {
                    filename: Some(PathBuf::from("/config/commits"))
                }
            );
        }
    }

    #[test]
    fn parse_attached_filename_values() {
        let parsed =
            parse_invocation(&args(&["cfgmenu", "--filename=/tmp/commits"])).expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Menu {
                filename: Some(PathBuf::from("/tmp/commits"))
            }
        );

        let parsed = parse_invocation(&args(&["cfgmenu", "-f/tmp/commits"])).expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Menu {
                filename: Some(PathBuf::from("/tmp/commits"))
            }
        );
    }

    #[test]
    fn parse_last_filename_wins() {
        let parsed =
            parse_invocation(&args(&["cfgmenu", "-f", "a", "--filename", "b"])).expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Menu {
                filename: Some(PathBuf::from("b"))
            }
        );
    }

    #[test]
    fn parse_filename_flag_requires_value() {
        let error = parse_invocation(&args(&["cfgmenu", "-f"])).expect_err("missing value");
        assert_eq!(error, CliParseError::MissingFlagValue("-f".to_string()));

        let error =
            parse_invocation(&args(&["cfgmenu", "--filename="])).expect_err("missing value");
        assert_eq!(error, CliParseError::MissingFlagValue("--filename".to_string()));
    }

    #[test]
    fn parse_rejects_unknown_flags_and_positionals() {
        let error = parse_invocation(&args(&["cfgmenu", "--limit", "3"])).expect_err("flag");
        assert_eq!(error, CliParseError::UnknownFlag("--limit".to_string()));

        let error = parse_invocation(&args(&["cfgmenu", "commits"])).expect_err("positional");
        assert_eq!(
            error,
            CliParseError::UnexpectedArgument("commits".to_string())
        );
    }

    #[test]
    fn parse_help_and_version_win() {
        let parsed = parse_invocation(&args(&["cfgmenu", "-f", "x", "--help"])).expect("parse");
        assert_eq!(parsed, CliInvocation::PrintHelp);

        let parsed = parse_invocation(&args(&["cfgmenu", "-V"])).expect("parse");
        assert_eq!(parsed, CliInvocation::PrintVersion);
    }

    #[test]
    fn help_mentions_filename_flag() {
        assert!(help_text().contains("--filename FILE"));
    }
}
