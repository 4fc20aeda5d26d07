// Domain layer: configuration model, derived graph types and ports. No I/O here.

pub mod graph;
pub mod model;
pub mod ports;
