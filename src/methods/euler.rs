//! Explicit Euler update rule.

use crate::{Float, ODE};

/// Advance `(x, y)` by one explicit Euler step of size `h`.
///
/// Single derivative evaluation at the left endpoint, first-order accurate.
pub fn euler<F: ODE>(f: &F, x: Float, y: Float, h: Float) -> Float {
    y + h * f.ode(x, y)
}
