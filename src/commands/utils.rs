//! Argument filtering and naming helpers for the plot command.

use std::ffi::OsString;
use std::path::Path;

/// How many values a recognised option takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Flag,
    One,
    Many,
}

/// Options the CLI understands, as (long, short, arity)
const KNOWN_OPTIONS: &[(&str, Option<char>, Arity)] = &[
    ("power", Some('p'), Arity::Many),
    ("dir", Some('d'), Arity::One),
    ("skip", None, Arity::One),
    ("verbose", Some('v'), Arity::Flag),
    ("help", Some('h'), Arity::Flag),
    ("version", Some('V'), Arity::Flag),
];

/// Classify one option token; `Some((arity, has_attached_value))`
fn classify(token: &str) -> Option<(Arity, bool)> {
    if let Some(long) = token.strip_prefix("--") {
        let (name, attached) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        return KNOWN_OPTIONS
            .iter()
            .find(|(l, _, _)| *l == name)
            .map(|(_, _, arity)| (*arity, attached));
    }

    let mut chars = token.strip_prefix('-')?.chars();
    let short = chars.next()?;
    let attached = chars.next().is_some();
    KNOWN_OPTIONS
        .iter()
        .find(|(_, s, _)| *s == Some(short))
        .map(|(_, _, arity)| (*arity, attached))
}

/// Drop arguments the CLI does not recognise
///
/// **Public** - applied to argv before clap parses it
///
/// Unknown options are removed, along with any bare values that do not
/// belong to a recognised option. The program name is always kept.
pub fn retain_known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut expecting: Option<Arity> = None;

    for arg in args {
        let text = arg.to_string_lossy().into_owned();
        let is_option = text.starts_with('-') && text.len() > 1;

        if is_option {
            match classify(&text) {
                Some((arity, attached)) => {
                    expecting = match (arity, attached) {
                        (Arity::Many, true) => Some(Arity::Many),
                        (Arity::Many, false) | (Arity::One, false) => Some(arity),
                        _ => None,
                    };
                    kept.push(arg);
                }
                None => expecting = None,
            }
            continue;
        }

        match expecting {
            Some(Arity::Many) => kept.push(arg),
            Some(Arity::One) => {
                kept.push(arg);
                expecting = None;
            }
            _ => {}
        }
    }

    kept
}

/// Benchmark name of a trace: file name without directory or extension
pub fn benchmark_name(trace: &Path) -> String {
    trace
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
