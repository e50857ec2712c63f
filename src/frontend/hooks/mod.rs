//! Reusable hooks for the detector view

mod use_detector;
mod use_health_poller;

pub use use_detector::*;
pub use use_health_poller::*;
