//! Card effects.
//!
//! ## Key Types
//!
//! - `Effect`: what a played card does to the turn order
//! - `apply_effect`: applies it to a `TableState`

pub mod effect;
pub mod resolver;

pub use effect::Effect;
pub use resolver::apply_effect;
