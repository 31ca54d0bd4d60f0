pub mod app;
pub mod coord;
pub mod core;
pub mod queue;
pub mod sim;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
