// SPDX-License-Identifier: MPL-2.0
//! `onair` is the control core of a live-stream video player.
//!
//! It turns engine notifications and user input into transport state, an
//! auto-hiding control overlay and a portrait/landscape layout, with
//! localized labels and error notifications on top.

#![doc(html_root_url = "https://docs.rs/onair/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
