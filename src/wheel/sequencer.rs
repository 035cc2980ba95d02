// SPDX-License-Identifier: MPL-2.0
//! The choose/reveal state machine.
//!
//! `Idle → Sequencing → Revealed → Idle` is the only state machine in the
//! application. The winner is drawn the instant `choose` is invoked and
//! withheld until the reveal delay elapses; the caller drives time by
//! passing `Instant`s, which keeps the whole flow deterministic in tests.

use super::choice::Choice;
use super::store::ChoiceStore;
use crate::config::{RESULT_MESSAGE_DELAY, REVEAL_DELAY};
use rand::Rng;
use std::time::{Duration, Instant};

/// Current state of the selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Editable; all mutation operations enabled.
    #[default]
    Idle,
    /// A draw is pending disclosure; edits are locked.
    Sequencing,
    /// The winner is on display.
    Revealed,
}

/// One-shot outcome of advancing the sequencer clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed.
    None,
    /// The winner was just disclosed. Celebration effects fire exactly
    /// once, on this outcome.
    Revealed,
}

/// Orchestrates the timed phases of a "choose" action.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    phase: Phase,
    winner: Option<Choice>,
    started_at: Option<Instant>,
    revealed_at: Option<Instant>,
}

impl Sequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    #[must_use]
    pub fn is_sequencing(&self) -> bool {
        self.phase == Phase::Sequencing
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Starts a choose sequence, drawing the winner immediately with a
    /// uniform draw over the store's current size.
    ///
    /// No-op unless the phase is `Idle` and the store is non-empty.
    /// Returns whether sequencing started.
    pub fn choose<R: Rng>(&mut self, store: &ChoiceStore, rng: &mut R, now: Instant) -> bool {
        if self.phase != Phase::Idle || store.is_empty() {
            return false;
        }

        let index = rng.random_range(0..store.len());
        // The index is in range by construction; a missing entry here
        // would be a store bug, not a runtime condition.
        self.winner = store.get_at(index).cloned();
        self.phase = Phase::Sequencing;
        self.started_at = Some(now);
        self.revealed_at = None;
        true
    }

    /// Advances the clock. While sequencing, discloses the winner once
    /// the reveal delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.phase != Phase::Sequencing {
            return TickOutcome::None;
        }
        let Some(started) = self.started_at else {
            return TickOutcome::None;
        };
        if now.duration_since(started) < REVEAL_DELAY {
            return TickOutcome::None;
        }

        self.phase = Phase::Revealed;
        self.revealed_at = Some(now);
        TickOutcome::Revealed
    }

    /// Dismisses the reveal, discarding the winner. No-op unless
    /// currently revealed. Returns whether the phase changed.
    pub fn close(&mut self) -> bool {
        if self.phase != Phase::Revealed {
            return false;
        }
        self.phase = Phase::Idle;
        self.winner = None;
        self.started_at = None;
        self.revealed_at = None;
        true
    }

    /// The drawn winner. `Some` from the instant `choose` succeeds until
    /// `close`; callers must not disclose it before the phase reaches
    /// `Revealed`.
    #[must_use]
    pub fn winner(&self) -> Option<&Choice> {
        self.winner.as_ref()
    }

    /// Time spent in `Sequencing`, for the pulse animation.
    #[must_use]
    pub fn sequencing_elapsed(&self, now: Instant) -> Option<Duration> {
        if self.phase != Phase::Sequencing {
            return None;
        }
        self.started_at.map(|s| now.duration_since(s))
    }

    /// Time since the reveal, for confetti and the delayed message.
    #[must_use]
    pub fn revealed_elapsed(&self, now: Instant) -> Option<Duration> {
        if self.phase != Phase::Revealed {
            return None;
        }
        self.revealed_at.map(|r| now.duration_since(r))
    }

    /// Whether the informational line on the result card is due.
    #[must_use]
    pub fn result_message_due(&self, now: Instant) -> bool {
        self.revealed_elapsed(now)
            .is_some_and(|elapsed| elapsed >= RESULT_MESSAGE_DELAY)
    }
}
