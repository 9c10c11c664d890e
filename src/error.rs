//! Errors for the fixed-step solver

use crate::Float;

/// Validation errors returned by [`crate::Ivp::solve`] and method parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidStepSize(Float),
    ReversedInterval(Float, Float),
    UnknownMethod(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepSize(h) => {
                write!(f, "step size h must be strictly positive (got {})", h)
            }
            Error::ReversedInterval(x0, xend) => {
                write!(f, "interval must satisfy x0 < xend (got [{}, {}])", x0, xend)
            }
            Error::UnknownMethod(tag) => {
                write!(f, "unknown method tag {:?} (expected \"euler\", \"RK2\" or \"RK4\")", tag)
            }
        }
    }
}

impl std::error::Error for Error {}
