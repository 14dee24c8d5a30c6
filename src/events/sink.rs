//! Event sinks.
//!
//! The match loop never reaches for global UI or audio state. Callers pass
//! an `EventSink` into each match call instead.

use super::event::MatchEvent;

/// Receives match events in the order they happen.
pub trait EventSink {
    fn emit(&mut self, event: &MatchEvent);
}

/// Discards every event.
impl EventSink for () {
    fn emit(&mut self, _event: &MatchEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &MatchEvent) {
        (**self).emit(event);
    }
}

/// Stores every event, mostly for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<MatchEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&MatchEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::events::AudioCue;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.emit(&MatchEvent::Audio(AudioCue::GameplayMusic));
        sink.emit(&MatchEvent::StaminaBonus {
            side: Side::Player,
            amount: 20,
        });

        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[0], MatchEvent::Audio(AudioCue::GameplayMusic));
        assert_eq!(sink.count(|e| e.side() == Some(Side::Player)), 1);

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_sink_through_mut_ref() {
        fn emit_twice(mut sink: impl EventSink) {
            sink.emit(&MatchEvent::Audio(AudioCue::Victory));
            sink.emit(&MatchEvent::Audio(AudioCue::Defeat));
        }

        let mut sink = RecordingSink::new();
        emit_twice(&mut sink);
        emit_twice(());

        assert_eq!(sink.events().len(), 2);
    }

    #[test]
    fn test_event_serializes() {
        let event = MatchEvent::Rolled {
            side: Side::Opponent,
            attack: crate::core::Attack::Secondary,
            roll: 4,
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
