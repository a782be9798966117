// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(warnings, missing_docs, clippy::all)]

//! Discrete fuzzy sets with Zadeh union and intersection.

pub mod fuzzy;
pub mod lattice;

pub use fuzzy::{Degree, FuzzySet, InvalidDegree};
pub use lattice::{HasBottom, HasTop, JoinSemiLattice, MeetSemiLattice};
