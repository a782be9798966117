// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lattice traits for membership degrees and fuzzy sets.
//!
//! Zadeh union and intersection are the join and meet of the lattice of fuzzy sets, which in turn
//! are the pointwise join and meet of membership degrees.

/// A join semi lattice.
pub trait JoinSemiLattice {
    /// Compute the least upper bound of `self` and `other`.
    fn join(self, other: Self) -> Self;
}

/// A meet semi lattice.
pub trait MeetSemiLattice {
    /// Compute the greatest lower bound of `self` and `other`.
    fn meet(self, other: Self) -> Self;
}

/// A lattice which has a top element.
pub trait HasTop {
    /// The element which is greater or equal to all other elements.
    fn top() -> Self;
}

/// A lattice which has a bottom element.
pub trait HasBottom {
    /// The element which is less or equal to all other elements.
    fn bottom() -> Self;
}

/// Join all `items`, starting from the bottom element.
///
/// Return the bottom element if `items` is empty.
pub fn join_all<T, I>(items: I) -> T
where
    T: JoinSemiLattice + HasBottom,
    I: IntoIterator<Item = T>,
{
    items.into_iter().fold(T::bottom(), T::join)
}
