// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Discrete fuzzy sets.

mod degree;

use crate::lattice::{join_all, HasBottom, JoinSemiLattice, MeetSemiLattice};
pub use degree::{Degree, InvalidDegree};
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use tracing::{event, instrument, Level};

/// A fuzzy set over elements of type `E`.
///
/// Each element has a membership degree in `(0, 1]`; elements which are not in the set have
/// membership zero.  Elements keep the order in which they were first added.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet<E: Hash + Eq> {
    elements: IndexMap<E, Degree>,
}

impl<E: Hash + Eq> FuzzySet<E> {
    /// Create an empty fuzzy set.
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
        }
    }

    /// Build a fuzzy set by adding all `(element, degree)` pairs in order.
    ///
    /// Fail on the first pair with an invalid degree.
    pub fn try_from_iter<I>(pairs: I) -> Result<Self, InvalidDegree>
    where
        I: IntoIterator<Item = (E, f64)>,
    {
        pairs.into_iter().try_fold(Self::new(), |mut set, (element, degree)| {
            set.add(element, degree)?;
            Ok(set)
        })
    }

    /// Set the membership `degree` of `element`.
    ///
    /// Fail with [`InvalidDegree`] and leave the set untouched if `degree` is not within `[0, 1]`.
    ///
    /// A degree of zero is accepted but ignored: it neither inserts `element` nor changes an
    /// existing degree of `element`.  Use [`FuzzySet::remove`] to take an element out of the set.
    pub fn add(&mut self, element: E, degree: f64) -> Result<(), InvalidDegree> {
        match Degree::new(degree) {
            Ok(Some(degree)) => {
                self.elements.insert(element, degree);
                Ok(())
            }
            Ok(None) => {
                event!(Level::TRACE, "Ignoring zero membership degree");
                Ok(())
            }
            Err(error) => {
                event!(Level::DEBUG, "Rejecting membership degree {}", degree);
                Err(error)
            }
        }
    }

    /// Remove `element` from this set, if present.
    pub fn remove<Q>(&mut self, element: &Q)
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.shift_remove(element);
    }

    /// Get the membership degree of `element`, or zero if `element` is not in this set.
    pub fn get_membership<Q>(&self, element: &Q) -> f64
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.get(element).map_or(0.0, |d| d.value())
    }

    /// Whether `element` has non-zero membership in this set.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains_key(element)
    }

    /// The number of elements with non-zero membership.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether this set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over all elements and their membership degrees, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, f64)> + '_ {
        self.elements.iter().map(|(e, d)| (e, d.value()))
    }
}

impl<E: Hash + Eq + Clone> FuzzySet<E> {
    /// The fuzzy union of `self` and `other`.
    ///
    /// Every element of either set gets the maximum of its degrees in both sets.  Elements of
    /// `self` come first, followed by the elements only in `other`.
    #[instrument(skip_all)]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (element, degree) in &other.elements {
            result
                .elements
                .entry(element.clone())
                .and_modify(|current| *current = current.join(*degree))
                .or_insert(*degree);
        }
        event!(
            Level::DEBUG,
            "Union of {} and {} elements has {} elements",
            self.len(),
            other.len(),
            result.len()
        );
        result
    }

    /// The fuzzy intersection of `self` and `other`.
    ///
    /// Only elements in both sets are kept, each with the minimum of its degrees in both sets, in
    /// the order of `self`.
    #[instrument(skip_all)]
    pub fn intersection(&self, other: &Self) -> Self {
        let elements: IndexMap<E, Degree> = self
            .elements
            .iter()
            .filter_map(|(element, degree)| {
                other
                    .elements
                    .get(element)
                    .map(|theirs| (element.clone(), degree.meet(*theirs)))
            })
            .collect();
        event!(
            Level::DEBUG,
            "Intersection of {} and {} elements has {} elements",
            self.len(),
            other.len(),
            elements.len()
        );
        Self { elements }
    }

    /// The fuzzy union of all `sets`.
    ///
    /// Return the empty set if `sets` is empty.
    pub fn union_all<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        join_all(sets)
    }
}

impl<E: Hash + Eq> Default for FuzzySet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Hash + Eq> HasBottom for FuzzySet<E> {
    /// The empty set.
    fn bottom() -> Self {
        Self::new()
    }
}

impl<E: Hash + Eq + Clone> JoinSemiLattice for FuzzySet<E> {
    fn join(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<E: Hash + Eq + Clone> MeetSemiLattice for FuzzySet<E> {
    fn meet(self, other: Self) -> Self {
        self.intersection(&other)
    }
}

impl<E: Hash + Eq + fmt::Display> fmt::Display for FuzzySet<E> {
    /// Render as `{element: degree, ...}` in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (element, degree)) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", element, degree)?;
        }
        f.write_str("}")
    }
}
