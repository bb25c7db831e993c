//! Insertion-ordered set of viewed sections.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

use super::SectionId;

/// Distinct sections seen during a session.
///
/// Backed by a `Vec` for insertion order and a `HashSet` for membership.
/// There is no removal operation: the set only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewedSections {
    order: Vec<SectionId>,
    members: HashSet<SectionId>,
}

impl ViewedSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set containing only `first`.
    pub fn starting_with(first: SectionId) -> Self {
        let mut set = Self::new();
        set.insert(first);
        set
    }

    /// Add a section. Returns `true` if it was not present before.
    pub fn insert(&mut self, section: SectionId) -> bool {
        if self.members.contains(&section) {
            return false;
        }
        self.members.insert(section.clone());
        self.order.push(section);
        true
    }

    pub fn contains(&self, section: &SectionId) -> bool {
        self.members.contains(section)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SectionId> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[SectionId] {
        &self.order
    }

    pub fn to_vec(&self) -> Vec<SectionId> {
        self.order.clone()
    }

    /// Join the members in insertion order.
    pub fn join(&self, separator: &str) -> String {
        self.order
            .iter()
            .map(SectionId::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<'a> IntoIterator for &'a ViewedSections {
    type Item = &'a SectionId;
    type IntoIter = std::slice::Iter<'a, SectionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<SectionId> for ViewedSections {
    fn from_iter<I: IntoIterator<Item = SectionId>>(iter: I) -> Self {
        let mut set = Self::new();
        for section in iter {
            set.insert(section);
        }
        set
    }
}

impl Serialize for ViewedSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.order.serialize(serializer)
    }
}
