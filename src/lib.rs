pub mod config;
pub mod domain;
pub mod greet_service;
pub mod health;
pub mod routes;
pub mod startup;
pub mod telem;
