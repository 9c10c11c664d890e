//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odestep::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Ivp`, `Method`, `Solution`, `Error`, `Float`.

pub use crate::{Error, Float, Ivp, Method, ODE, Solution};
