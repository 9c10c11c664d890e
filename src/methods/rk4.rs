//! Classic explicit Runge-Kutta 4 (RK4) update rule.

use crate::{Float, ODE};

/// Advance `(x, y)` by one classical RK4 step of size `h`.
///
/// Four derivative evaluations in the fixed order k1, k2, k3, k4, combined
/// with the classical 1/6, 2/6, 2/6, 1/6 weights.
pub fn rk4<F: ODE>(f: &F, x: Float, y: Float, h: Float) -> Float {
    let k1 = f.ode(x, y);
    let k2 = f.ode(x + C2 * h, y + h * A21 * k1);
    let k3 = f.ode(x + C3 * h, y + h * A32 * k2);
    let k4 = f.ode(x + C4 * h, y + h * A43 * k3);

    y + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
