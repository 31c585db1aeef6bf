// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

pub mod actions;
pub mod params;
pub mod proxy;

pub use actions::ProxyAction;
pub use params::{Field, ProxyParams};
pub use proxy::{ProxyError, ProxyService, MISSING_PARAMETERS};
