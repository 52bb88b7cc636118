// SPDX-License-Identifier: MPL-2.0
//! Domain value types shared by the gallery core, configuration and UI.

pub mod newtypes;

pub use newtypes::{GridColumns, PageSize};
