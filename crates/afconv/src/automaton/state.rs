//! State types for automata.

use std::fmt;

/// Label of an atomic NFA state, e.g. `q0`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateLabel(String);

impl StateLabel {
    /// Create a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<&str> for StateLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for StateLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A set kept as a sorted sequence without duplicates.
///
/// Equality, ordering and hashing all derive from the sorted contents, so two
/// sets built from the same elements in any order are interchangeable as map keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalSet<T: Ord> {
    items: Vec<T>,
}

/// A set of NFA states; the identity of a DFA state built by subset construction.
pub type StateSet = CanonicalSet<StateLabel>;

/// Targets of a nondeterministic transition.
pub type Targets = CanonicalSet<State>;

impl<T: Ord> CanonicalSet<T> {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a set containing a single element.
    pub fn singleton(item: T) -> Self {
        Self { items: vec![item] }
    }

    /// Insert an element, returning `false` if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        match self.items.binary_search(&item) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, item);
                true
            }
        }
    }

    /// Check if an element is in the set.
    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Get the elements as a sorted slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Check if this set shares at least one element with `other`.
    pub fn intersects(&self, other: &CanonicalSet<T>) -> bool {
        let (mut a, mut b) = (self.items.iter().peekable(), other.items.iter().peekable());
        while let (Some(x), Some(y)) = (a.peek(), b.peek()) {
            match x.cmp(y) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => return true,
            }
        }
        false
    }
}

impl<T: Ord + Clone> CanonicalSet<T> {
    /// Union this set with another, modifying self in place.
    pub fn union_with(&mut self, other: &CanonicalSet<T>) {
        for item in other.iter() {
            self.insert(item.clone());
        }
    }
}

impl<T: Ord> Default for CanonicalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for CanonicalSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }
}

impl<T: Ord> IntoIterator for CanonicalSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a CanonicalSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for CanonicalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for CanonicalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

/// A state of any automaton produced along the conversion pipeline.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    /// A state of the input NFA.
    Atomic(StateLabel),
    /// A DFA state: the set of NFA states it stands for.
    Composite(StateSet),
    /// A state introduced by a transform, such as the single final state of a
    /// normalized automaton. Never equal to an atomic or composite state.
    Synthetic(StateLabel),
}

impl State {
    /// Create an atomic state.
    pub fn atomic(label: impl Into<String>) -> Self {
        State::Atomic(StateLabel::new(label))
    }

    /// A composite state over the given NFA labels, in any order.
    pub fn composite<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        State::Composite(labels.into_iter().map(StateLabel::new).collect())
    }

    /// The underlying NFA state set, if this is a composite state.
    pub fn as_composite(&self) -> Option<&StateSet> {
        match self {
            State::Composite(set) => Some(set),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Atomic(label) | State::Synthetic(label) => write!(f, "{label}"),
            State::Composite(set) => write!(f, "{set}"),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Atomic(label) => write!(f, "{label}"),
            State::Composite(set) => write!(f, "{set}"),
            State::Synthetic(label) => write!(f, "{label}'"),
        }
    }
}
