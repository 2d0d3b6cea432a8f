// Domain layer: form data model and ports to the outside world.

pub mod model;
pub mod ports;
