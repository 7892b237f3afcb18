// Domain layer: payload/response models and the ports the invoker is built on.

pub mod model;
pub mod ports;
