// SPDX-License-Identifier: MPL-2.0
//! Domain core of the decision wheel: the choice collection, the layout
//! math, and the choose/reveal state machine. Everything here is plain
//! Rust with injected randomness and caller-driven time, so it is fully
//! testable without a window.

mod choice;
mod layout;
mod sequencer;
mod store;

pub use choice::{looks_like_link, Choice, ChoiceId};
pub use layout::{item_scale, placements, radii, Placement};
pub use sequencer::{Phase, Sequencer, TickOutcome};
pub use store::ChoiceStore;
