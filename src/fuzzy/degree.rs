// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Membership degrees of fuzzy sets.

use crate::lattice::{HasTop, JoinSemiLattice, MeetSemiLattice};
use std::fmt;
use thiserror::Error;

/// A membership degree outside of `[0, 1]`.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
#[error("membership degree must be between 0 and 1, got {0}")]
pub struct InvalidDegree(pub f64);

/// A non-zero membership degree, in `(0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Degree(f64);

impl Degree {
    /// Validate a raw membership degree.
    ///
    /// Fail with [`InvalidDegree`] if `value` is not within `[0, 1]`, which includes NaN.  Return
    /// `None` for a degree of exactly zero, because zero membership is the absence of an element and
    /// never a stored degree.
    pub fn new(value: f64) -> Result<Option<Self>, InvalidDegree> {
        if !(0.0..=1.0).contains(&value) {
            Err(InvalidDegree(value))
        } else if value > 0.0 {
            Ok(Some(Self(value)))
        } else {
            Ok(None)
        }
    }

    /// The raw value of this degree.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl HasTop for Degree {
    /// Full membership.
    fn top() -> Self {
        Degree(1.0)
    }
}

impl JoinSemiLattice for Degree {
    fn join(self, other: Self) -> Self {
        Degree(self.0.max(other.0))
    }
}

impl MeetSemiLattice for Degree {
    fn meet(self, other: Self) -> Self {
        Degree(self.0.min(other.0))
    }
}

impl fmt::Display for Degree {
    /// Always render a fractional part, i.e. `1.0` rather than `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod test {
    use crate::fuzzy::degree::*;
    use pretty_assertions::assert_eq;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for Degree {
        fn arbitrary(g: &mut Gen) -> Self {
            // Spread over (0, 1] in exactly representable steps
            Degree((u8::arbitrary(g) as f64 + 1.0) / 256.0)
        }
    }

    #[test]
    fn degree_in_range() {
        assert_eq!(Degree::new(0.5), Ok(Some(Degree(0.5))));
        assert_eq!(Degree::new(1.0), Ok(Some(Degree(1.0))));
        assert_eq!(Degree::new(f64::MIN_POSITIVE), Ok(Some(Degree(f64::MIN_POSITIVE))));
    }

    #[test]
    fn degree_zero() {
        assert_eq!(Degree::new(0.0), Ok(None));
        assert_eq!(Degree::new(-0.0), Ok(None));
    }

    #[test]
    fn degree_out_of_range() {
        assert_eq!(Degree::new(-0.1), Err(InvalidDegree(-0.1)));
        assert_eq!(Degree::new(1.5), Err(InvalidDegree(1.5)));
        assert_eq!(
            Degree::new(f64::INFINITY),
            Err(InvalidDegree(f64::INFINITY))
        );
        assert!(Degree::new(f64::NAN).is_err());
    }

    #[test]
    fn invalid_degree_message() {
        assert_eq!(
            InvalidDegree(1.5).to_string(),
            "membership degree must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn degree_display() {
        assert_eq!(Degree(0.7).to_string(), "0.7");
        assert_eq!(Degree(1.0).to_string(), "1.0");
    }

    #[test]
    fn degree_top() {
        assert_eq!(Degree::top(), Degree(1.0));
    }

    #[quickcheck]
    fn degree_join_gt(left: Degree, right: Degree) {
        let top = left.join(right);
        assert!(top >= left, "{:?} >= {:?}", top, left);
        assert!(top >= right, "{:?} >= {:?}", top, right);
        assert!(top == left || top == right);
    }

    #[quickcheck]
    fn degree_join_top(d: Degree) {
        assert_eq!(d.join(Degree::top()), Degree::top());
    }

    #[quickcheck]
    fn degree_meet_lt(left: Degree, right: Degree) {
        let bottom = left.meet(right);
        assert!(bottom <= left, "{:?} <= {:?}", bottom, left);
        assert!(bottom <= right, "{:?} <= {:?}", bottom, right);
        assert!(bottom == left || bottom == right);
    }

    #[quickcheck]
    fn degree_meet_top(d: Degree) {
        assert_eq!(d.meet(Degree::top()), d);
    }
}
