// Inference core: standardize → linear scores → softmax ranking → top-class
// attribution. Pure functions over artifacts loaded once at startup; the only
// HTTP-aware piece is handlers.

pub mod artifacts;
pub mod explain;
pub mod features;
pub mod handlers;
pub mod normalize;
pub mod predict;
