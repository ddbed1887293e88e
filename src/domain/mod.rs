// Domain layer: value types and ports shared by the katas. No logic beyond the types themselves.

pub mod model;
pub mod ports;
