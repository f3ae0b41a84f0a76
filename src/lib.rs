pub mod constants;
pub mod data;
pub mod dependency;
pub mod logic;
pub mod render;
pub mod service;
pub mod types;

pub use service::Navigator;
