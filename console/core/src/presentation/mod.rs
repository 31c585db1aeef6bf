// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! # Presentation Layer (`toolkit-console-core`)
//!
//! Same-origin HTTP surface consumed by the console. **No business logic
//! lives here**: every route delegates to [`crate::application::ProxyService`].
//!
//! | Module | Transport | Description |
//! |--------|-----------|-------------|
//! | [`api`] | HTTP (Axum) | One JSON route per proxied backend action, plus `/health` |

pub mod api;
