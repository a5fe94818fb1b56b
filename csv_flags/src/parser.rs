//! Registering list values with `clap`.
//!
//! [`StringListParser`] is the `clap` value parser for [`StringList`]; it is
//! also reachable through `clap::value_parser!(StringsValue)`. The
//! [`strings_arg`] and [`strings_arg_v2`] builders register a named long flag
//! whose every occurrence replaces the previous value.

use std::ffi::OsStr;
use std::marker::PhantomData;

use clap::builder::{TypedValueParser, ValueParserFactory};
use clap::{Arg, ArgAction, Command};

use crate::value::{FlagKind, FlagValue, Primary, StringList, V2};

/// `clap` value parser producing a [`StringList`] of kind `K`.
///
/// Non-UTF-8 input is converted lossily; no text is rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringListParser<K> {
    kind: PhantomData<K>,
}

impl<K: FlagKind> StringListParser<K> {
    /// Create a parser for kind `K`.
    #[must_use]
    pub const fn new() -> Self {
        Self { kind: PhantomData }
    }
}

impl<K: FlagKind> TypedValueParser for StringListParser<K> {
    type Value = StringList<K>;

    fn parse_ref(
        &self,
        _cmd: &Command,
        _arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let mut list = StringList::default();
        match list.set(&value.to_string_lossy()) {
            Ok(()) => Ok(list),
            Err(never) => match never {},
        }
    }
}

impl<K: FlagKind> ValueParserFactory for StringList<K> {
    type Parser = StringListParser<K>;

    fn value_parser() -> Self::Parser {
        StringListParser::new()
    }
}

/// Build a long flag `--<id>` holding a list value of kind `K`.
///
/// `initial` always becomes the flag's default, so a registered flag holds a
/// value even when it is absent from the command line. An empty `initial`
/// reads back as an empty list; `--<id> ""` reads back as one empty element.
/// Repeated occurrences are all recorded; lookups read the last one.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use csv_flags::{list_arg, strings_from_flag, Primary};
///
/// let matches = Command::new("demo")
///     .arg(list_arg::<Primary>("peers", "a,b"))
///     .get_matches_from(["demo", "--peers", "x,y"]);
/// assert_eq!(strings_from_flag(&matches, "peers"), ["x", "y"]);
/// ```
#[must_use]
pub fn list_arg<K: FlagKind>(id: &'static str, initial: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("LIST")
        .num_args(1)
        .action(ArgAction::Append)
        .value_parser(StringListParser::<K>::new())
        .default_value(initial)
}

/// Build a flag holding a [`crate::StringsValue`].
#[must_use]
pub fn strings_arg(id: &'static str, initial: &'static str) -> Arg {
    list_arg::<Primary>(id, initial)
}

/// Build a flag holding a [`crate::StringsValueV2`].
#[must_use]
pub fn strings_arg_v2(id: &'static str, initial: &'static str) -> Arg {
    list_arg::<V2>(id, initial)
}
