//! Services orchestrating the domain aggregates over the ports.

mod posts;

pub use posts::PostService;
