// Domain layer: cart models, notices and ports. Adapters live under crate::adapters.

pub mod model;
pub mod notice;
pub mod ports;
