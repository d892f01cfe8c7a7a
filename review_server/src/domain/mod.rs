// Domain layer: entities, errors, ports and pure aggregate logic.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod reviews;
