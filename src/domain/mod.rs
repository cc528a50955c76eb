// Domain layer: canonical models, wire shapes and ports. No I/O.

pub mod dto;
pub mod model;
pub mod ports;
