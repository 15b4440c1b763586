// Domain layer: lead and quote models, price tables and ports (interfaces).

pub mod catalog;
pub mod lead;
pub mod model;
pub mod money;
pub mod options;
pub mod ports;
pub mod quote;
