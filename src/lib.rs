pub mod config;
pub mod foliowm;
pub mod script;
