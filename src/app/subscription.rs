// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! The animation tick runs only while something on screen depends on
//! time: the sequencing pulse, or the reveal's confetti window.

use super::Message;
use crate::config::ANIMATION_TICK;
use iced::{event, time, Subscription};

/// Window events the app always listens for: resizes feed the
/// responsive layout, close requests allow cleanup.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Periodic animation tick, active only while an animation is live.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
