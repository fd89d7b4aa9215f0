use crate::ProjectivePoint;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 16;

/// Lookup table containing precomputed values `[0, p, 2p, ..., 15p]`, as consumed by 4-bit
/// fixed-window scalar multiplication.
#[derive(Clone, Copy, Debug)]
pub struct LookupTable<'c> {
    points: [ProjectivePoint<'c>; LUT_SIZE],
}

impl<'c> LookupTable<'c> {
    /// Compute a new lookup table from the given point.
    pub fn new(p: ProjectivePoint<'c>) -> Self {
        let mut points = [ProjectivePoint::identity(p.curve()); LUT_SIZE];
        points[1] = p;

        for i in 2..LUT_SIZE {
            points[i] = if i % 2 == 0 {
                points[i / 2].double()
            } else {
                points[i - 1] + &p
            };
        }

        Self { points }
    }

    /// Given `0 <= x < 16`, returns `x * p` in constant time.
    ///
    /// Every entry is read regardless of `x`.
    pub fn select(&self, x: u8) -> ProjectivePoint<'c> {
        debug_assert!(usize::from(x) < LUT_SIZE);

        let mut t = self.points[0];

        for (j, point) in self.points.iter().enumerate().skip(1) {
            let c = x.ct_eq(&(j as u8));
            t.conditional_assign(point, c);
        }

        t
    }
}
