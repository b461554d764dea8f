// Domain layer: the person model, the document schema and the ports the core talks through.

pub mod model;
pub mod ports;
pub mod schema;
