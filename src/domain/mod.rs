// Domain layer: the capability contract, its domain specialisations and the request/response model.

pub mod model;
pub mod ports;
