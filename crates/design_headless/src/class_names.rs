//! Conditional class-name composition.

use std::fmt;

/// Ordered builder that merges conditional class fragments into a single `class` attribute.
///
/// Fragments keep insertion order; empty or whitespace-only fragments are skipped so optional
/// caller classes never produce stray separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    fragments: Vec<String>,
}

impl ClassNames {
    /// Starts an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a class list with a base class.
    pub fn with_base(base: impl AsRef<str>) -> Self {
        Self::new().push(base)
    }

    /// Appends a fragment.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let fragment = fragment.as_ref().trim();
        if !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
        self
    }

    /// Appends a fragment when `condition` holds.
    pub fn push_if(self, condition: bool, fragment: impl AsRef<str>) -> Self {
        if condition {
            self.push(fragment)
        } else {
            self
        }
    }

    /// Appends a fragment when present.
    pub fn push_opt<S: AsRef<str>>(self, fragment: Option<S>) -> Self {
        match fragment {
            Some(fragment) => self.push(fragment),
            None => self,
        }
    }

    /// Appends every fragment whose flag is set, in iteration order.
    pub fn extend<I, S>(self, fragments: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        fragments
            .into_iter()
            .fold(self, |names, (fragment, enabled)| names.push_if(enabled, fragment))
    }

    /// Returns whether no fragment has been added.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Joins the fragments with single spaces.
    pub fn build(&self) -> String {
        self.fragments.join(" ")
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<ClassNames> for String {
    fn from(names: ClassNames) -> Self {
        names.build()
    }
}
