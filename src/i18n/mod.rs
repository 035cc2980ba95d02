// SPDX-License-Identifier: MPL-2.0
//! Internationalization with Fluent. Locale files are embedded in the
//! binary; resolution order is CLI flag, config file, OS locale, en-US.

pub mod fluent;
