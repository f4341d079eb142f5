pub mod cli;
pub mod config;
pub mod demo;
pub mod dwelling;
pub mod logging;
pub mod tip;
