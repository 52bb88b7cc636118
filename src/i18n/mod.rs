// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Fluent bundles are embedded at build time from `assets/i18n/*.ftl`. The
//! locale is picked from the CLI, then the config file, then the system
//! locale, and falls back to `en-US`.
//!
//! Category names come from the portfolio data and are never translated.

pub mod fluent;
