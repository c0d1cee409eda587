//! Form Builder - build forms, collect responses, export them as CSV
//!
//! The [`store`] keeps forms and their responses in memory and removes a
//! form's responses together with it. [`export`] renders responses as CSV.
//! The remaining modules make up the Ratatui front end.

pub mod app;
pub mod config;
pub mod export;
pub mod model;
pub mod platform;
pub mod routes;
pub mod state;
pub mod store;
pub mod ui;
