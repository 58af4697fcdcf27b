// Adapters layer: concrete override sources.

pub mod env;
