//! Optional numeric bounds.
//!
//! A bound is either configured or absent. A configured bound of zero is
//! a real bound and is enforced like any other value.

use crate::core::error::DomainError;
use std::fmt;

/// Inclusive range with optional ends (Value Object)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange<T> {
    min: Option<T>,
    max: Option<T>,
}

/// Which end of a [`NumericRange`] a value fell outside of
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeViolation<T> {
    BelowMinimum { value: T, min: T },
    AboveMaximum { value: T, max: T },
}

impl<T: fmt::Display> fmt::Display for RangeViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::BelowMinimum { value, min } => {
                write!(f, "'{}' is less than {}", value, min)
            }
            RangeViolation::AboveMaximum { value, max } => {
                write!(f, "'{}' is greater than {}", value, max)
            }
        }
    }
}

impl<T> NumericRange<T>
where
    T: Copy + PartialOrd + fmt::Display,
{
    /// Create a range, rejecting bounds that cannot be ordered (NaN) and
    /// a minimum that lies above the maximum.
    pub fn new(min: Option<T>, max: Option<T>) -> Result<Self, DomainError> {
        for bound in [min, max].into_iter().flatten() {
            // Only NaN-like values fail to compare with themselves
            if bound.partial_cmp(&bound).is_none() {
                return Err(DomainError::UnorderedBound(bound.to_string()));
            }
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(DomainError::InvertedRange {
                    min: lo.to_string(),
                    max: hi.to_string(),
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Check a value against both configured ends. The minimum is checked
    /// first.
    pub fn check(&self, value: T) -> Result<(), RangeViolation<T>> {
        if let Some(min) = self.min {
            if value < min {
                return Err(RangeViolation::BelowMinimum { value, min });
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(RangeViolation::AboveMaximum { value, max });
            }
        }
        Ok(())
    }

    /// Prompt clause describing the accepted values, or `None` when
    /// nothing is constrained.
    pub fn describe(&self) -> Option<String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(format!("between {} and {}", min, max)),
            (Some(min), None) => Some(format!("of at least {}", min)),
            (None, Some(max)) => Some(format!("of at most {}", max)),
            (None, None) => None,
        }
    }
}
