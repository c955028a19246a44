// Domain layer: venue model, filter criteria, selection state and ports.

pub mod criteria;
pub mod model;
pub mod ports;
pub mod selection;
