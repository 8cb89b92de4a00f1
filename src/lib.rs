pub mod api_docs;
pub mod app;
pub mod config;
pub mod database;
pub mod entities;
pub mod error;
pub mod grading;
pub mod middleware;
pub mod repositories;
pub mod resolution;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod view;
