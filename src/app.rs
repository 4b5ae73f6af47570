//! Session runner: input polling and the fixed-step scheduler
//!
//! One logical thread owns the whole world and advances it tick by tick.
//! Pacing sleeps away the remainder of each frame budget; the game-over
//! pause is the sim's freeze timer, never a blocking sleep.

use std::thread;
use std::time::Instant;

use crate::render::{Canvas, draw_frame};
use crate::sim::{GamePhase, GameState, HeldKeys, TickInput, tick};

/// Per-tick input collaborator: discrete events plus the held-key snapshot.
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Scripted input for the headless demo binary: drifts around the field and
/// fires on a fixed cadence, with an optional quit deadline.
#[derive(Debug)]
pub struct ScriptedPilot {
    ticks: u64,
    quit_after: Option<u64>,
}

impl ScriptedPilot {
    pub fn new(quit_after: Option<u64>) -> Self {
        Self {
            ticks: 0,
            quit_after,
        }
    }
}

impl InputSource for ScriptedPilot {
    fn poll(&mut self) -> TickInput {
        let t = self.ticks;
        self.ticks += 1;
        if self.quit_after.is_some_and(|deadline| t >= deadline) {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }
        // Sweep through the 8 directions, a second per leg, firing twice a leg
        let leg = (t / 50) % 8;
        let held = match leg {
            0 => HeldKeys {
                right: true,
                ..Default::default()
            },
            1 => HeldKeys {
                right: true,
                down: true,
                ..Default::default()
            },
            2 => HeldKeys {
                down: true,
                ..Default::default()
            },
            3 => HeldKeys {
                down: true,
                left: true,
                ..Default::default()
            },
            4 => HeldKeys {
                left: true,
                ..Default::default()
            },
            5 => HeldKeys {
                left: true,
                up: true,
                ..Default::default()
            },
            6 => HeldKeys {
                up: true,
                ..Default::default()
            },
            _ => HeldKeys {
                up: true,
                right: true,
                ..Default::default()
            },
        };
        TickInput {
            quit: false,
            fire: t % 25 == 0,
            held,
        }
    }
}

/// Drive a session to completion at the configured tick rate.
///
/// Each iteration polls input, ticks once, renders, then sleeps whatever is
/// left of the frame budget. Returns when the session is over: immediately
/// on quit, after the freeze-frame on game over.
pub fn run_session(
    state: &mut GameState,
    input: &mut impl InputSource,
    canvas: &mut impl Canvas,
) {
    let budget = state.config.tick_duration();
    let mut last_phase = state.phase;

    while !state.session_over() {
        let frame_start = Instant::now();

        let commands = input.poll();
        tick(state, &commands);

        if state.phase != last_phase {
            match state.phase {
                GamePhase::GameOver => log::info!(
                    "game over at tick {}, final score {}",
                    state.time_ticks,
                    state.score.value()
                ),
                GamePhase::Quit => log::info!("quit at tick {}", state.time_ticks),
                GamePhase::Running => {}
            }
            last_phase = state.phase;
        }

        draw_frame(state, canvas);

        if let Some(rest) = budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
