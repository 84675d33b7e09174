// Domain layer: pet records and the ports the menu talks through.

pub mod model;
pub mod ports;
