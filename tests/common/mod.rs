#![allow(dead_code)]

use odestep::prelude::*;

/// dy/dx = 0, constant solution.
pub struct Flat;

impl ODE for Flat {
    fn ode(&self, _x: Float, _y: Float) -> Float {
        0.0
    }
}

/// dy/dx = k, linear solution y = y0 + k*(x - x0).
pub struct Constant(pub Float);

impl ODE for Constant {
    fn ode(&self, _x: Float, _y: Float) -> Float {
        self.0
    }
}

/// dy/dx = y, solution y = y0 * e^(x - x0).
pub struct Growth;

impl ODE for Growth {
    fn ode(&self, _x: Float, y: Float) -> Float {
        y
    }
}

pub const METHODS: [Method; 3] = [Method::Euler, Method::RK2, Method::RK4];

/// dy/dx = y on [0, 1] with y(0) = 1, the fixture most tests share.
pub fn unit_growth(h: Float) -> Ivp<Growth> {
    Ivp::builder().f(Growth).x0(0.0).xend(1.0).y0(1.0).h(h).build()
}
