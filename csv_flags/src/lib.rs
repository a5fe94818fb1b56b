//! Comma-separated string list values for `clap` command-line flags.
//!
//! A flag such as `--peers a,b,c` is held as a [`StringsValue`]: the raw text
//! is split on every comma and rendered back by joining with commas. Values
//! are registered with [`strings_arg`] and read back with
//! [`strings_from_flag`].
//!
//! [`StringsValueV2`] is the same list under a second, distinct type. Flags
//! registered through [`strings_arg_v2`] must be read with
//! [`strings_from_flag_v2`]; reading across kinds is a programming error.
//!
//! Lists also deserialize from configuration. [`TextEnv`] reads environment
//! variables without typing them, so `APP_PEERS=007,1.50` splits exactly like
//! `--peers 007,1.50`.
//!
//! ```
//! use clap::Command;
//! use csv_flags::{strings_arg, strings_from_flag};
//!
//! let matches = Command::new("node")
//!     .arg(strings_arg("peers", ""))
//!     .get_matches_from(["node", "--peers", "10.0.0.1,10.0.0.2"]);
//! assert_eq!(strings_from_flag(&matches, "peers"), ["10.0.0.1", "10.0.0.2"]);
//! ```

mod lookup;
mod parser;
mod serialization;
mod text_env;
mod value;

pub use lookup::{
    LookupError, list_from_flag, strings_from_flag, strings_from_flag_v2, try_list_from_flag,
    try_strings_from_flag, try_strings_from_flag_v2,
};
pub use parser::{StringListParser, list_arg, strings_arg, strings_arg_v2};
pub use text_env::TextEnv;
pub use value::{
    FlagKind, FlagValue, Primary, SEPARATOR, StringList, StringsValue, StringsValueV2, V2,
};
