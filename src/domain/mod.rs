// Domain layer: the check outcome and the library port. No SDL types here.

pub mod model;
pub mod ports;
