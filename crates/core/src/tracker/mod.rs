//! Tracker module - the service the UI layer talks to.

mod tracker_service;
mod tracker_traits;


pub use tracker_service::TrackerService;
pub use tracker_traits::TrackerServiceTrait;
