// Infrastructure layer - configuration and the shipped widget catalog
pub mod catalog_repository;
pub mod config;
