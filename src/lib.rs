pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod format;
pub mod logging;
pub mod render;

// Data-shaping core: normalize, filter, group, aggregate
pub mod shaping;

// Orchestration layer: collaborator ports, debounce policy, view controller
pub mod app;

// Infrastructure adapters behind the fetch ports
pub mod fetch;
