// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod gui;
pub mod progress;
pub mod scrape;
pub mod store;
pub mod tally;
