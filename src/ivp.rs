//! Fixed-step solver for a scalar ODE initial value problem.

use bon::Builder;

use crate::{Error, Float, Method, ODE, Solution, grid};

/// A scalar initial value problem dy/dx = f(x, y), y(x0) = y0, integrated
/// over `[x0, xend]` with a fixed step size `h`.
///
/// The problem definition is set once at construction and never mutated;
/// [`solve`](Ivp::solve) borrows it immutably, so one `Ivp` can be solved
/// repeatedly (and from different threads) with different methods.
///
/// # Example
///
/// ```ignore
/// use odestep::prelude::*;
///
/// let ivp = Ivp::builder()
///     .f(|_x: f64, y: f64| y)
///     .x0(0.0)
///     .xend(1.0)
///     .y0(1.0)
///     .h(0.5)
///     .build();
///
/// let sol = ivp.solve(Method::RK4)?;
/// ```
#[derive(Builder)]
pub struct Ivp<F: ODE> {
    /// Right-hand side of the ODE.
    f: F,
    /// Left end of the integration interval.
    x0: Float,
    /// Right end of the integration interval.
    xend: Float,
    /// Initial value y(x0).
    y0: Float,
    /// Step size, strictly positive.
    h: Float,
}

impl<F: ODE> Ivp<F> {
    /// Integrate the problem with the selected stepping rule.
    ///
    /// Builds the grid x_i = x0 + i*h over `[x0, xend + h)`, seeds the
    /// solution with `y0` and fills it left to right, one step at a time.
    /// The grid keeps the trailing point past `xend` when the spacing does
    /// not divide the interval evenly.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStepSize`] if `h` is not strictly positive and
    /// [`Error::ReversedInterval`] if `x0 >= xend`, both before any
    /// derivative evaluation takes place.
    pub fn solve(&self, method: Method) -> Result<Solution, Error> {
        // A NaN step size fails this comparison as well.
        if !(self.h > 0.0) {
            return Err(Error::InvalidStepSize(self.h));
        }
        if self.x0 >= self.xend {
            return Err(Error::ReversedInterval(self.x0, self.xend));
        }

        let x = grid::build(self.x0, self.xend, self.h);
        let mut y = vec![0.0; x.len()];
        y[0] = self.y0;

        for i in 0..x.len() - 1 {
            y[i + 1] = method.step(&self.f, x[i], y[i], self.h);
        }

        let nstep = x.len() - 1;
        let nfev = nstep * method.stages();

        Ok(Solution { x, y, nfev, nstep })
    }
}
