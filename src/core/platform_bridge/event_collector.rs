//=========================================================================
// Event Collector
//=========================================================================
//
// Engine-side drain of the platform event channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input batches → TickControl
//
// Draining is bounded per tick so a flooding platform cannot starve the
// engine loop; the remainder is picked up next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Engine loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    /// Upper bound on events drained per tick.
    pub(crate) const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Drains pending events without blocking.
    ///
    /// Returns `Exit` on `QuitRequested`. A disconnected channel is not a
    /// reason to stop: the engine can run headless with all senders gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    if !batch.is_empty() {
                        self.input_batches.push(batch);
                    }
                    drained += 1;
                }
                Ok(PlatformEvent::QuitRequested) => {
                    debug!(target: "engine", "Quit requested by platform");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(target: "engine", "Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Input batches collected by the last `collect_frame`.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn collect_aggregates_multiple_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![key_down(KeyCode::KeyA)])).unwrap();
        tx.send(PlatformEvent::Inputs(vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.batches().len(), 2);
    }

    #[test]
    fn empty_batches_are_skipped() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![])).unwrap();
        collector.collect_frame();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn collect_returns_exit_on_quit() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::QuitRequested).unwrap();
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_clears_previous_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![key_down(KeyCode::Space)])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.batches().len(), 1);

        collector.collect_frame();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn disconnect_keeps_running() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);
        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
    }

    #[test]
    fn drain_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..(EventCollector::MAX_EVENTS_PER_FRAME + 5) {
            tx.send(PlatformEvent::Inputs(vec![key_down(KeyCode::KeyA)])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.batches().len(), EventCollector::MAX_EVENTS_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.batches().len(), 5);
    }
}
