// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the calview-core crate.
//!
//! These tests load provider files, materialize views and run searches through the public API,
//! the way a presentation layer would.

mod config_driven;
mod search_ranking;
mod superseding_search;
mod view_materialization;
