//! Infrastructure adapters behind the fetch ports: the live HTTP source and
//! the built-in demo dataset.

pub mod demo;
pub mod http;

pub use demo::{demo_candidates, DemoDataSource};
pub use http::HttpDataSource;
