// Domain layer: core models, ports, and the pure price/hours helpers.

pub mod hours;
pub mod model;
pub mod ports;
pub mod price;
