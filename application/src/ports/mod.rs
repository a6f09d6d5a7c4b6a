//! Ports (interfaces) driven by the application layer

pub mod answer_gateway;
pub mod transcript;
