//! Match events and the sinks that receive them.
//!
//! ## Design
//!
//! The engine reports; it never renders. Each resolved half-turn becomes a
//! short sequence of `MatchEvent`s pushed into an `EventSink` supplied by
//! the caller. Audio is just another event: the engine names an
//! `AudioCue`, the sink owns the device and the `Volume`.

pub mod audio;
pub mod event;
pub mod sink;

pub use audio::{AudioCommand, AudioCue, Volume};
pub use event::{MatchEvent, MatchSnapshot};
pub use sink::{EventSink, RecordingSink};
