pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use database::activities_repo::{ActivityRepository, InMemoryActivityRepository};
pub use error::ActivityError;
pub use models::{Activity, ActivityDirectory};
