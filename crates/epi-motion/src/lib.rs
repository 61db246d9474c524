//! `epi-motion` — fixed-timestep motion integration for the `epi_sim`
//! framework.
//!
//! One module: [`field`], home of [`MotionField`].

pub mod field;

#[cfg(test)]
mod tests;

pub use field::MotionField;
