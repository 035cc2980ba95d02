// SPDX-License-Identifier: MPL-2.0
//! UI layer: screens, overlays, shared components, and design tokens.

pub mod components;
pub mod design_tokens;
pub mod orientation;
pub mod read_more;
pub mod result_card;
pub mod styles;
pub mod wheel_screen;
pub mod widgets;
