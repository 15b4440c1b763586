// Adapters layer: concrete implementations for external systems (backend http, booking widget).

pub mod booking;
pub mod http;
