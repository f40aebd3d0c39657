pub mod configuration;
pub mod db;
pub mod errors;
pub mod forms;
pub mod models;
mod routes;
pub mod startup;
pub mod telemetry;
