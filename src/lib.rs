pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod headers;
pub mod layers;
pub mod models;
pub mod params;
pub mod repositories;
pub mod utils;
