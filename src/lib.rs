pub mod algorithm;
pub mod cnc;
pub mod component;
pub mod network;
pub mod utils;
