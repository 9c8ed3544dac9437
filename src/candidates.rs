//! Ordered, de-duplicated list of installable package names.

use std::collections::HashSet;

/// Package names eligible for selection, in package-manager output order.
///
/// Names are unique and non-empty. Pushing a duplicate or an empty name is a
/// no-op, so the first occurrence keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name, returning `true` if it was new.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    /// Drop every name contained in `excluded`, keeping order.
    pub fn exclude<I, S>(&mut self, excluded: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded: HashSet<String> = excluded
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        if excluded.is_empty() {
            return;
        }
        self.names.retain(|name| !excluded.contains(name));
        self.seen.retain(|name| !excluded.contains(name));
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.push(name);
        }
        list
    }
}
