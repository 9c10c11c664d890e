//! Fixed-step explicit single-step methods (Euler, RK2, RK4) for scalar ODE initial value problems.

mod error;
mod grid;
mod ivp;
mod ode;
mod solution;

pub mod methods;
pub mod prelude;

pub use error::Error;
pub use ivp::Ivp;
pub use methods::Method;
pub use ode::ODE;
pub use solution::Solution;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
