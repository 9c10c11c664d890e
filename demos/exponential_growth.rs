//! # Example: Exponential Growth
//!
//! Solve dy/dx = y on [0, 1] with y(0) = 1 and a fixed step size,
//! comparing all three stepping rules against the analytic solution
//! y = e^x.

use odestep::prelude::*;

struct Growth;

impl ODE for Growth {
    fn ode(&self, _x: Float, y: Float) -> Float {
        y
    }
}

fn main() {
    let ivp = Ivp::builder()
        .f(Growth)
        .x0(0.0)
        .xend(1.0)
        .y0(1.0)
        .h(0.1)
        .build();

    for method in [Method::Euler, Method::RK2, Method::RK4] {
        match ivp.solve(method) {
            Ok(sol) => {
                println!("--- {:?} ---", method);
                println!("Number of function evaluations: {}", sol.nfev);
                println!("Number of steps taken: {}", sol.nstep);
                for (xi, yi) in sol.iter() {
                    println!("x = {:.4}, y = {:.6}, exact = {:.6}", xi, yi, xi.exp());
                }
            }
            Err(e) => eprintln!("Integration failed: {}", e),
        }
    }
}
