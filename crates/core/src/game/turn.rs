//! Step animation, arrival resolution, and turn advancement.

use super::*;
use crate::types::TileKind;

impl Game {
    pub(super) fn on_step_tick(&mut self, steps_taken: u8, roll: u8) {
        let last = self.board.last_tile_id();
        let index = self.state.active_player_index;
        // Movement cannot overshoot the final tile mid-animation.
        let next_position = (self.state.players[index].position + 1).min(last);
        self.state.players[index].position = next_position;
        self.sounds.push(SoundEvent::Step);

        let steps_taken = steps_taken + 1;
        if steps_taken >= roll || next_position == last {
            self.resolve_arrival(next_position, roll);
        } else {
            self.schedule(STEP_INTERVAL_MS, EventKind::StepTick { steps_taken, roll });
        }
    }

    fn resolve_arrival(&mut self, position: usize, roll: u8) {
        let index = self.state.active_player_index;
        let (name, avatar, player_id) = {
            let player = &self.state.players[index];
            (player.name.clone(), player.avatar, player.id)
        };
        let mut lines = vec![flavor::landing_line(&name, roll, position)];

        let last = self.board.last_tile_id();
        let outcome = effects::resolve_effect(self.board.tile(position), position, last);

        if let Some(kind) = outcome.narrative {
            if let Some(line) = flavor::effect_line(kind, avatar, &name, &mut self.rng) {
                lines.push(line);
            }
            if let Some(sound) = effect_sound(kind) {
                self.sounds.push(sound);
            }
        }

        if outcome.deferred {
            // The teleport only lands when the cutscene ends; until then the
            // player stays rendered on the departure tile.
            self.flight = Some(FlightAnimation {
                player_id,
                start_tile: position,
                end_tile: outcome.new_position,
            });
            self.schedule(
                FLIGHT_DURATION_MS,
                EventKind::ResolveFlight {
                    final_position: outcome.new_position,
                    freeze: outcome.freeze,
                    lines,
                },
            );
            return;
        }

        self.finish_arrival(outcome.new_position, outcome.freeze, lines);
    }

    pub(super) fn on_flight_resolved(
        &mut self,
        final_position: usize,
        freeze: bool,
        lines: Vec<String>,
    ) {
        self.flight = None;
        self.finish_arrival(final_position, freeze, lines);
    }

    fn finish_arrival(&mut self, final_position: usize, freeze: bool, mut lines: Vec<String>) {
        let last = self.board.last_tile_id();
        let (landed_on_story, zone) = {
            let tile = self.board.tile(final_position);
            (tile.kind == TileKind::Story, tile.zone)
        };
        if landed_on_story || final_position == 0 || final_position == last {
            lines.push(flavor::story_line(final_position, last, zone));
        }

        let index = self.state.active_player_index;
        self.state.players[index].position = final_position;
        self.state.players[index].frozen = freeze;
        self.state.is_moving = false;

        if final_position == last {
            self.state.players[index].finished = true;
            self.phase = GamePhase::GameOver;
            lines.push(flavor::win_line(&self.state.players[index].name));
            self.state.history.append(&mut lines);
            self.sounds.push(SoundEvent::Win);
            self.sounds.push(SoundEvent::BgmStop);
            self.roll_claimed = false;
        } else {
            self.state.history.append(&mut lines);
            self.schedule(TURN_ADVANCE_DELAY_MS, EventKind::AdvanceTurn);
        }
    }

    pub(super) fn on_advance_turn(&mut self) {
        let player_count = self.state.players.len();
        let next_index = (self.state.active_player_index + 1) % player_count;
        self.state.active_player_index = next_index;
        if next_index == 0 {
            self.state.turn_count += 1;
        }
        self.roll_claimed = false;
    }
}

fn effect_sound(kind: TileKind) -> Option<SoundEvent> {
    match kind {
        TileKind::Boost | TileKind::Shortcut => Some(SoundEvent::Boost),
        TileKind::Penalty => Some(SoundEvent::Penalty),
        TileKind::Freeze => Some(SoundEvent::Freeze),
        TileKind::Plane => Some(SoundEvent::Plane),
        TileKind::Normal | TileKind::Story => None,
    }
}
