// Domain layer: throwaway entities and the capability traits the demos are written against.

pub mod model;
pub mod ports;
