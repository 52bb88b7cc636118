// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a categorized photo portfolio gallery built with the Iced
//! GUI framework.
//!
//! It loads a portfolio document once, derives an "ALL PHOTOS" category plus
//! one tab per real category, remembers the last selected tab across
//! restarts and reveals each category in fixed-size batches.
//!
//! The gallery core ([`gallery`]) is headless and drives any
//! [`gallery::GalleryRenderer`]; the Iced application in [`app`] is one such
//! renderer.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod portfolio;
pub mod ui;
