pub mod errors;
pub mod db;
pub mod service;
pub mod project;
