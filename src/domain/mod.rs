// Domain layer: message model and ports. Concrete parsers/renderers live in adapters.

pub mod model;
pub mod ports;
