// Application layer - use cases over the domain
pub mod dashboard_service;
pub mod selection_service;
pub mod widget_renderer;
pub mod widget_repository;
