//! Reading list flags back out of parsed `clap` matches.
//!
//! The `try_*` functions report failures as [`LookupError`]. The plain
//! functions treat a missing or mistyped flag as a programming error and
//! panic.

use clap::ArgMatches;
use clap::parser::{MatchesError, ValueSource};
use thiserror::Error;

use crate::value::{FlagKind, Primary, StringList, V2};

/// Reasons a list flag could not be read from [`ArgMatches`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// No flag with this id was registered, or it was registered without a
    /// default and never given. Flags built by [`crate::list_arg`] always
    /// carry a default.
    #[error("flag `{flag}` is not defined")]
    Unknown {
        /// Id passed to the lookup.
        flag: String,
    },

    /// The flag holds a value of another kind.
    #[error("flag `{flag}` is not a {expected} flag: {source}")]
    KindMismatch {
        /// Id passed to the lookup.
        flag: String,
        /// Kind the caller asked for.
        expected: &'static str,
        /// Underlying `clap` failure.
        #[source]
        source: MatchesError,
    },

    /// Any other failure reported by `clap`.
    #[error("failed to read flag `{flag}`: {source}")]
    Matches {
        /// Id passed to the lookup.
        flag: String,
        /// Underlying `clap` failure.
        #[source]
        source: MatchesError,
    },
}

impl LookupError {
    fn classify<K: FlagKind>(flag: &str, source: MatchesError) -> Self {
        let name = flag.to_owned();
        match source {
            MatchesError::UnknownArgument { .. } => Self::Unknown { flag: name },
            MatchesError::Downcast { .. } => Self::KindMismatch {
                flag: name,
                expected: K::NAME,
                source,
            },
            _ => Self::Matches { flag: name, source },
        }
    }
}

/// Read the elements of list flag `flag` of kind `K`.
///
/// The last occurrence on the command line wins; with no occurrence the
/// flag's default is used. An empty default reads as an empty list.
///
/// # Errors
///
/// Returns [`LookupError::Unknown`] when `flag` was never registered and
/// [`LookupError::KindMismatch`] when it holds a value of another type.
pub fn try_list_from_flag<K: FlagKind>(
    matches: &ArgMatches,
    flag: &str,
) -> Result<Vec<String>, LookupError> {
    let last = matches
        .try_get_many::<StringList<K>>(flag)
        .map_err(|source| LookupError::classify::<K>(flag, source))?
        .and_then(|mut values| values.next_back());
    let Some(list) = last else {
        return Err(LookupError::Unknown {
            flag: flag.to_owned(),
        });
    };
    let source = matches.value_source(flag);
    tracing::debug!(flag, kind = K::NAME, ?source, "list flag lookup");
    // `--flag ""` stores one empty element; only the empty default means none.
    if source == Some(ValueSource::DefaultValue) && list.as_slice() == [""] {
        return Ok(Vec::new());
    }
    Ok(list.as_slice().to_vec())
}

/// Read list flag `flag` of kind `K`, panicking on misuse.
///
/// # Panics
///
/// Panics when `flag` is not registered or is not a list flag of kind `K`.
#[must_use]
pub fn list_from_flag<K: FlagKind>(matches: &ArgMatches, flag: &str) -> Vec<String> {
    try_list_from_flag::<K>(matches, flag).unwrap_or_else(|err| {
        tracing::error!(flag, kind = K::NAME, error = %err, "list flag misuse");
        panic!("{err}")
    })
}

/// Read a [`crate::StringsValue`] flag.
///
/// # Errors
///
/// See [`try_list_from_flag`].
pub fn try_strings_from_flag(matches: &ArgMatches, flag: &str) -> Result<Vec<String>, LookupError> {
    try_list_from_flag::<Primary>(matches, flag)
}

/// Read a [`crate::StringsValueV2`] flag.
///
/// # Errors
///
/// See [`try_list_from_flag`].
pub fn try_strings_from_flag_v2(
    matches: &ArgMatches,
    flag: &str,
) -> Result<Vec<String>, LookupError> {
    try_list_from_flag::<V2>(matches, flag)
}

/// Read a [`crate::StringsValue`] flag.
///
/// # Panics
///
/// Panics when `flag` is not registered as a [`crate::StringsValue`] flag.
#[must_use]
pub fn strings_from_flag(matches: &ArgMatches, flag: &str) -> Vec<String> {
    list_from_flag::<Primary>(matches, flag)
}

/// Read a [`crate::StringsValueV2`] flag.
///
/// # Panics
///
/// Panics when `flag` is not registered as a [`crate::StringsValueV2`] flag.
#[must_use]
pub fn strings_from_flag_v2(matches: &ArgMatches, flag: &str) -> Vec<String> {
    list_from_flag::<V2>(matches, flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{strings_arg, strings_arg_v2};
    use clap::Command;

    fn matches(args: &[&str]) -> Result<ArgMatches, clap::Error> {
        Command::new("demo")
            .arg(strings_arg("peers", "a,b"))
            .arg(strings_arg_v2("hosts", ""))
            .try_get_matches_from(args)
    }

    #[test]
    fn mismatched_kind_is_classified() -> Result<(), clap::Error> {
        let parsed = matches(&["demo"])?;
        let err = try_strings_from_flag_v2(&parsed, "peers").err();
        assert!(
            matches!(err, Some(LookupError::KindMismatch { expected: "strings (v2)", .. })),
            "unexpected lookup result: {err:?}"
        );
        Ok(())
    }

    #[test]
    fn unknown_flag_is_classified() -> Result<(), clap::Error> {
        let parsed = matches(&["demo"])?;
        let err = try_strings_from_flag(&parsed, "missing").err();
        assert!(
            matches!(&err, Some(LookupError::Unknown { flag }) if flag == "missing"),
            "unexpected lookup result: {err:?}"
        );
        Ok(())
    }

    #[test]
    fn unset_flag_with_empty_initial_is_empty() -> Result<(), clap::Error> {
        let parsed = matches(&["demo"])?;
        assert!(strings_from_flag_v2(&parsed, "hosts").is_empty());
        Ok(())
    }

    #[test]
    fn explicit_empty_value_is_one_empty_element() -> Result<(), clap::Error> {
        let parsed = matches(&["demo", "--hosts", ""])?;
        assert_eq!(strings_from_flag_v2(&parsed, "hosts"), [""]);
        Ok(())
    }

    #[test]
    fn flag_registered_without_default_reads_as_unknown() -> Result<(), clap::Error> {
        let parsed = Command::new("demo")
            .arg(
                clap::Arg::new("bare")
                    .long("bare")
                    .value_parser(clap::value_parser!(crate::StringsValue)),
            )
            .try_get_matches_from(["demo"])?;
        let err = try_strings_from_flag(&parsed, "bare").err();
        assert!(
            matches!(err, Some(LookupError::Unknown { .. })),
            "unexpected lookup result: {err:?}"
        );
        Ok(())
    }

    #[test]
    fn error_message_names_flag() {
        let err = LookupError::Unknown {
            flag: "peers".to_owned(),
        };
        assert_eq!(err.to_string(), "flag `peers` is not defined");
    }
}
