// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`gallery_view`] - the Iced implementation of the gallery renderer
//! - [`category_tabs`], [`empty_state`], [`error_state`] - gallery parts
//! - [`thumbnails`] - LRU cache of remote thumbnails
//! - [`notifications`] - toast notifications for non-blocking warnings
//! - [`styles`] - centralized styling
//! - [`design_tokens`] - design system constants

pub mod category_tabs;
pub mod design_tokens;
pub mod empty_state;
pub mod error_state;
pub mod gallery_view;
pub mod notifications;
pub mod styles;
pub mod thumbnails;
