// Domain layer: request/response models and the ports (view, service, capabilities, storage).

pub mod model;
pub mod ports;
