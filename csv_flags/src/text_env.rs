//! Environment provider that hands values over as untyped text.
//!
//! `figment::providers::Env` parses each value, so `APP_PORTS=007` arrives as
//! the number `7` and `APP_RATIO=1.50` as `1.5`. [`TextEnv`] wraps `Env` but
//! emits every value as the exact string found in the environment, so a list
//! read from `APP_PEERS` splits the same way as `--peers` on the command line.
//! Scope it to list keys with [`TextEnv::only`] when other keys need typed
//! values.

use figment::providers::Env;
use figment::{
    Profile, Provider,
    error::Error,
    util::nest,
    value::{Dict, Map, Value},
};
use std::ops::Deref;

/// Environment provider that never reinterprets values.
#[derive(Clone)]
pub struct TextEnv {
    inner: Env,
}

impl TextEnv {
    /// Create an unprefixed provider.
    #[must_use]
    pub fn raw() -> Self {
        Env::raw().into()
    }

    /// Create a provider reading variables that start with `prefix`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use csv_flags::TextEnv;
    /// let env = TextEnv::prefixed("APP_").only(&["peers"]);
    /// let _ = env;
    /// ```
    #[must_use]
    pub fn prefixed(prefix: &str) -> Self {
        Env::prefixed(prefix).into()
    }

    /// Keep only the listed keys (after prefix removal).
    #[must_use]
    pub fn only(self, keys: &[&str]) -> Self {
        self.inner.only(keys).into()
    }

    /// Drop the listed keys (after prefix removal).
    #[must_use]
    pub fn ignore(self, keys: &[&str]) -> Self {
        self.inner.ignore(keys).into()
    }

    /// Split keys at `pattern` into nested dictionaries.
    #[must_use]
    pub fn split(self, pattern: &str) -> Self {
        self.inner.split(pattern).into()
    }
}

impl Provider for TextEnv {
    fn metadata(&self) -> figment::Metadata {
        self.inner.metadata()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.inner.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        for (key, raw) in self.inner.iter() {
            let Some(nested) = nest(key.as_str(), Value::from(raw)).into_dict() else {
                return Err(Error::from(format!(
                    "environment key `{key}` produced a non-object value"
                )));
            };
            dict.extend(nested);
        }
        Ok(self.inner.profile.collect(dict))
    }
}

impl From<Env> for TextEnv {
    fn from(inner: Env) -> Self {
        Self { inner }
    }
}

impl Deref for TextEnv {
    type Target = Env;

    fn deref(&self) -> &Env {
        &self.inner
    }
}
