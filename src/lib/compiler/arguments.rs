//! Types and procedures that represents a command line argument,
//! or collections of command line arguments

use std::{borrow::Cow, ops::Deref};

/// Type for represent a command line component.
///
/// A component may carry more than one shell word (ie: `-x c`, or the free form flags
/// written by the user), since they are joined verbatim into the final shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument<'a>(Cow<'a, str>);

impl<'a> Argument<'a> {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for Argument<'a> {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Argument<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self(value)
    }
}

impl<'a> core::fmt::Display for Argument<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strong type for represent a linear collection of [`Argument`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arguments<'a>(Vec<Argument<'a>>);

impl<'a> Arguments<'a> {
    /// Returns a new collection of [`Argument`] with the specified capacity
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    /// Creates and stores a new [`Argument`] to the end of this collection
    pub fn push<T>(&mut self, val: T)
    where
        T: Into<Argument<'a>>,
    {
        self.0.push(val.into())
    }

    /// Given an optional, adds the wrapper inner value if there's some element,
    /// otherwise leaves
    pub fn push_opt<T>(&mut self, arg: Option<T>)
    where
        T: Into<Argument<'a>>,
    {
        if let Some(val) = arg {
            self.0.push(val.into())
        }
    }

    /// Joins the non empty components with a single whitespace
    pub fn join(&self) -> String {
        self.0
            .iter()
            .filter(|arg| !arg.is_empty())
            .map(|arg| arg.value().trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> Deref for Arguments<'a> {
    type Target = [Argument<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for Arguments<'a> {
    type Item = Argument<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> FromIterator<Argument<'a>> for Arguments<'a> {
    fn from_iter<I: IntoIterator<Item = Argument<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_drops_empty_components() {
        let mut args = Arguments::with_capacity(4);
        args.push("g++");
        args.push("");
        args.push(String::from("-std=c++20"));
        args.push_opt(None::<&str>);
        args.push("   ");
        args.push_opt(Some("-O2"));

        assert_eq!(args.len(), 5);
        assert_eq!(args.join(), "g++ -std=c++20 -O2");
    }

    #[test]
    fn test_join_keeps_multi_word_components_verbatim() {
        let args: Arguments = ["-x c", "-Wall  -Wextra", "main.cpp"]
            .into_iter()
            .map(Argument::from)
            .collect();

        assert_eq!(args.join(), "-x c -Wall  -Wextra main.cpp");
    }
}
