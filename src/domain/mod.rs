// Domain layer: value types and the ports the site depends on.

pub mod model;
pub mod ports;
