// Domain layer: grouping models and ports (interfaces).

pub mod model;
pub mod ports;
