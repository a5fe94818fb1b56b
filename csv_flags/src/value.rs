//! Comma-separated string list values.
//!
//! [`StringList`] holds an ordered list of strings behind the textual
//! [`FlagValue`] interface: [`FlagValue::set`] splits raw text on every comma
//! and [`FlagValue::render`] joins the elements back together. No quoting or
//! escaping is applied, so an element containing a comma is split again when
//! its rendering is re-parsed.
//!
//! The `K` parameter selects the registration kind. [`StringsValue`] and
//! [`StringsValueV2`] share one implementation but are distinct types, so a
//! flag registered under one kind cannot be read back as the other.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Separator used when parsing and rendering list values.
pub const SEPARATOR: &str = ",";

/// A value that can be assigned from, and rendered to, command-line text.
pub trait FlagValue {
    /// Error reported when raw text is rejected.
    type Error;

    /// Replace the held value with one parsed from `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when `raw` cannot be parsed.
    fn set(&mut self, raw: &str) -> Result<(), Self::Error>;

    /// Render the held value as command-line text.
    fn render(&self) -> String;
}

/// Marker naming the registry a [`StringList`] is registered against.
pub trait FlagKind: Clone + Copy + fmt::Debug + Default + Send + Sync + 'static {
    /// Human-readable kind name used in diagnostics.
    const NAME: &'static str;
}

/// Registration kind of [`StringsValue`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Primary;

impl FlagKind for Primary {
    const NAME: &'static str = "strings";
}

/// Registration kind of [`StringsValueV2`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct V2;

impl FlagKind for V2 {
    const NAME: &'static str = "strings (v2)";
}

/// Ordered list of strings parsed from comma-separated text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringList<K> {
    values: Vec<String>,
    kind: PhantomData<K>,
}

/// List value for flags registered through the original registration path.
pub type StringsValue = StringList<Primary>;

/// List value for flags registered through the V2 registration path.
pub type StringsValueV2 = StringList<V2>;

impl<K: FlagKind> StringList<K> {
    /// Build a list from its initial comma-separated text.
    ///
    /// An empty `initial` yields a list with no elements. This differs from
    /// [`FlagValue::set`] with empty text, which stores one empty element.
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_flags::StringsValue;
    ///
    /// assert!(StringsValue::new("").is_empty());
    /// assert_eq!(StringsValue::new("a,b").as_slice(), ["a", "b"]);
    /// ```
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let mut list = Self::default();
        if initial.is_empty() {
            return list;
        }
        match list.set(initial) {
            Ok(()) => list,
            Err(never) => match never {},
        }
    }

    /// Wrap already separated elements without parsing them.
    #[must_use]
    pub const fn from_vec(values: Vec<String>) -> Self {
        Self {
            values,
            kind: PhantomData,
        }
    }

    /// Elements in the order they were given.
    #[must_use]
    pub const fn as_slice(&self) -> &[String] {
        self.values.as_slice()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the list holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the list, returning its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.values
    }

    pub(crate) fn split(raw: &str) -> Vec<String> {
        raw.split(SEPARATOR).map(str::to_owned).collect()
    }
}

impl<K: FlagKind> FlagValue for StringList<K> {
    type Error = Infallible;

    fn set(&mut self, raw: &str) -> Result<(), Infallible> {
        self.values = Self::split(raw);
        tracing::trace!(
            kind = K::NAME,
            elements = self.values.len(),
            "replaced list value"
        );
        Ok(())
    }

    fn render(&self) -> String {
        self.values.join(SEPARATOR)
    }
}

impl<K: FlagKind> fmt::Display for StringList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parses with [`FlagValue::set`] semantics, so `""` yields one empty element.
impl<K: FlagKind> FromStr for StringList<K> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_vec(Self::split(s)))
    }
}

impl<K: FlagKind> From<StringList<K>> for Vec<String> {
    fn from(list: StringList<K>) -> Self {
        list.values
    }
}

impl<K: FlagKind> From<Vec<String>> for StringList<K> {
    fn from(values: Vec<String>) -> Self {
        Self::from_vec(values)
    }
}

impl<'a, K: FlagKind> IntoIterator for &'a StringList<K> {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
