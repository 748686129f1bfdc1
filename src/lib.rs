// Order operations dashboard - region-scoped metric widgets served over HTTP
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
