// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod anchor;
mod util;

pub use anchor::DateAnchor;
pub use util::{end_of_day, monday_of, resolve_time_zone, start_of_day};
