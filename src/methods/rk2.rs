//! Explicit midpoint (RK2) update rule.

use crate::{Float, ODE};

/// Advance `(x, y)` by one explicit midpoint step of size `h`.
///
/// Evaluates the derivative at the left endpoint and at the Euler-predicted
/// midpoint, in that order, and advances with the midpoint slope alone.
pub fn rk2<F: ODE>(f: &F, x: Float, y: Float, h: Float) -> Float {
    let k1 = f.ode(x, y);
    let k2 = f.ode(x + C2 * h, y + h * A21 * k1);

    y + h * B2 * k2
}

// Explicit midpoint coefficients
const C2: Float = 0.5;
const A21: Float = 0.5;
const B2: Float = 1.0;
