//! Explicit single-step update rules (Euler, RK2, RK4)

mod euler;
mod rk2;
mod rk4;

pub use euler::euler;
pub use rk2::rk2;
pub use rk4::rk4;

use std::str::FromStr;

use crate::{Error, Float, ODE};

/// Stepping rule selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// Explicit Euler, first order
    Euler,
    /// Explicit midpoint, second order
    #[default]
    RK2,
    /// Classical Runge-Kutta, fourth order
    RK4,
}

impl Method {
    /// Advance the solution by one step of size `h` from `(x, y)`.
    pub fn step<F: ODE>(self, f: &F, x: Float, y: Float, h: Float) -> Float {
        match self {
            Method::Euler => euler(f, x, y, h),
            Method::RK2 => rk2(f, x, y, h),
            Method::RK4 => rk4(f, x, y, h),
        }
    }

    /// Derivative evaluations performed per step.
    pub fn stages(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::RK2 => 2,
            Method::RK4 => 4,
        }
    }
}

/// Parse the method tags `"euler"`, `"RK2"` and `"RK4"`.
///
/// Any other tag is rejected with [`Error::UnknownMethod`] rather than
/// silently producing nothing, so a misspelled tag surfaces at the parse
/// site instead of as an absent result.
impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" => Ok(Method::Euler),
            "RK2" => Ok(Method::RK2),
            "RK4" => Ok(Method::RK4),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}
