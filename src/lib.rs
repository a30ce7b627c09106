#![allow(non_snake_case)]

use types::Float;
pub extern crate nalgebra as na;

pub mod anchor;
pub mod config;
pub mod constraint;
pub mod energy;
pub mod integrators;
pub mod plot;
pub mod rope;
pub mod simulate;
pub mod types;
pub mod util;

// Wasm bindings
pub mod interface;

/// Default downward acceleration, in rope units per step at the reference
/// fixed rate
pub const DEFAULT_GRAVITY: [Float; 2] = [0., -1.];
