// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets.

pub mod confetti;

pub use confetti::Confetti;
