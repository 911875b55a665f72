//! Numeric capacity abstraction.

use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

/// Tolerance used for floating-point flow comparisons.
pub const FLOW_TOLERANCE: f64 = 1e-9;

/// A numeric type usable as edge capacity and flow.
///
/// Integer implementations compare exactly (`TOLERANCE == 0`).
pub trait Capacity:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Slack allowed when comparing flows.
    const TOLERANCE: Self;

    /// Whether the value is NaN. Always `false` for integers.
    fn is_nan(self) -> bool {
        false
    }

    /// Absolute value.
    fn magnitude(self) -> Self;

    /// Lossy conversion for error reporting.
    fn to_f64(self) -> f64;

    /// `self + rhs`, or `None` if it does not fit.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if it does not fit.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Strictly greater than the tolerance.
    fn is_positive(self) -> bool {
        self > Self::TOLERANCE
    }

    /// Within tolerance of zero.
    fn is_negligible(self) -> bool {
        self.magnitude() <= Self::TOLERANCE
    }
}

impl Capacity for i64 {
    const ZERO: Self = 0;
    const TOLERANCE: Self = 0;

    fn magnitude(self) -> Self {
        self.abs()
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }
}

impl Capacity for f64 {
    const ZERO: Self = 0.0;
    const TOLERANCE: Self = FLOW_TOLERANCE;

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn magnitude(self) -> Self {
        self.abs()
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }
}
