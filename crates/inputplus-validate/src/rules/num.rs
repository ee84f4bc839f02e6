//! Numeric input.

use crate::constraints::{Constraints, Prevalidated};
use crate::error::{ParamError, Rejection};
use crate::validator::Validator;

/// Which numbers a [`NumRule`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumKind {
    /// Integers or floats.
    Num,
    /// Integers only.
    Int,
    /// Any float, including integer literals.
    Float,
}

/// Optional inclusive and exclusive bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub less_than: Option<f64>,
    pub greater_than: Option<f64>,
}

impl NumBounds {
    /// No bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound.
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Exclusive upper bound.
    pub fn less_than(mut self, bound: impl Into<f64>) -> Self {
        self.less_than = Some(bound.into());
        self
    }

    /// Exclusive lower bound.
    pub fn greater_than(mut self, bound: impl Into<f64>) -> Self {
        self.greater_than = Some(bound.into());
        self
    }
}

/// Accepts numbers within [`NumBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumRule {
    kind: NumKind,
    bounds: NumBounds,
}

impl NumRule {
    /// Create a rule for the given kind of number.
    pub fn new(kind: NumKind, bounds: NumBounds) -> Self {
        Self { kind, bounds }
    }

    /// Get the kind of number accepted.
    pub fn kind(&self) -> NumKind {
        self.kind
    }

    /// Get the configured bounds.
    pub fn bounds(&self) -> &NumBounds {
        &self.bounds
    }

    /// Reject contradictory bounds.
    pub fn validate_params(&self) -> Result<(), ParamError> {
        let NumBounds {
            min,
            max,
            less_than,
            greater_than,
        } = self.bounds;

        for (name, bound) in [
            ("min", min),
            ("max", max),
            ("less_than", less_than),
            ("greater_than", greater_than),
        ] {
            if let Some(value) = bound {
                if value.is_nan() {
                    return Err(ParamError::invalid(format!("{name} must be a number")));
                }
            }
        }

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ParamError::invalid(format!(
                    "min ({min}) must not be greater than max ({max})"
                )));
            }
        }

        if let (Some(greater_than), Some(less_than)) = (greater_than, less_than) {
            if greater_than >= less_than {
                return Err(ParamError::invalid(format!(
                    "greater_than ({greater_than}) must be less than less_than ({less_than})"
                )));
            }
        }

        Ok(())
    }

    fn parse(&self, candidate: &str) -> Result<f64, Rejection> {
        match self.kind {
            NumKind::Int => candidate
                .parse::<i64>()
                .map(|n| n as f64)
                .map_err(|_| Rejection::new(format!("'{candidate}' is not an integer."))),
            NumKind::Num | NumKind::Float => candidate
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| Rejection::new(format!("'{candidate}' is not a number."))),
        }
    }
}

impl Validator for NumRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }

        let value = self.parse(candidate)?;

        if let Some(min) = self.bounds.min {
            if value < min {
                return Err(Rejection::new(format!("Number must be at minimum {min}.")));
            }
        }
        if let Some(max) = self.bounds.max {
            if value > max {
                return Err(Rejection::new(format!("Number must be at maximum {max}.")));
            }
        }
        if let Some(bound) = self.bounds.less_than {
            if value >= bound {
                return Err(Rejection::new(format!("Number must be less than {bound}.")));
            }
        }
        if let Some(bound) = self.bounds.greater_than {
            if value <= bound {
                return Err(Rejection::new(format!(
                    "Number must be greater than {bound}."
                )));
            }
        }

        Ok(())
    }
}
