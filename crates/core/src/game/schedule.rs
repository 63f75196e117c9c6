//! Scheduled continuations. Every suspension point in the turn protocol
//! lives on this queue and is delivered by `tick`; continuations carry the
//! epoch that scheduled them and are dropped if a reset happened since.

use super::*;

#[derive(Clone, Debug)]
pub(super) struct ScheduledEvent {
    pub(super) fire_at_ms: u64,
    pub(super) seq: u64,
    pub(super) epoch: u64,
    pub(super) kind: EventKind,
}

#[derive(Clone, Debug)]
pub(super) enum EventKind {
    StepTick { steps_taken: u8, roll: u8 },
    ResolveFlight { final_position: usize, freeze: bool, lines: Vec<String> },
    AdvanceTurn,
}

impl Game {
    pub(super) fn schedule(&mut self, delay_ms: u64, kind: EventKind) {
        let event = ScheduledEvent {
            fire_at_ms: self.clock_ms + delay_ms,
            seq: self.next_event_seq,
            epoch: self.epoch,
            kind,
        };
        self.next_event_seq += 1;
        self.pending.push(event);
    }

    /// Advance the engine clock by `elapsed_ms` and deliver every due
    /// continuation in (fire time, schedule order).
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);
        loop {
            let due = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, event)| event.fire_at_ms <= self.clock_ms)
                .min_by_key(|(_, event)| (event.fire_at_ms, event.seq))
                .map(|(index, _)| index);
            let Some(index) = due else {
                break;
            };

            let event = self.pending.swap_remove(index);
            if event.epoch != self.epoch {
                continue;
            }
            match event.kind {
                EventKind::StepTick { steps_taken, roll } => self.on_step_tick(steps_taken, roll),
                EventKind::ResolveFlight { final_position, freeze, lines } => {
                    self.on_flight_resolved(final_position, freeze, lines);
                }
                EventKind::AdvanceTurn => self.on_advance_turn(),
            }
        }
    }
}
