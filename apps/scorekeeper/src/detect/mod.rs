//! Detection feed: the seam to the external card-recognition model and
//! the temporal debounce that turns raw sightings into "card played" events.

pub mod debounce;
pub mod detector;

pub use debounce::DebounceFilter;
pub use detector::{CardDetector, Detection};
