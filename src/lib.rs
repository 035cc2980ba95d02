// SPDX-License-Identifier: MPL-2.0
//! `iced_wheel` is a small decision wheel built with the Iced GUI framework.
//!
//! Choices are arranged around a central "CHOOSE" label; pressing it locks
//! the wheel, waits out a suspense delay, and reveals a uniformly drawn
//! winner with confetti and a sound cue. The crate also demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_wheel/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod responsive;
pub mod ui;
pub mod wheel;
