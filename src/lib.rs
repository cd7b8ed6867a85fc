pub mod api;
pub mod commands;
pub mod configuration;
pub mod display;
pub mod errors;
pub mod fetcher;
pub mod input;
pub mod interactive;
pub mod logging;
pub mod model;
pub mod report;
