// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Anchor distribution algorithm.
//!
//! A distribution pass runs [`scale`] → [`allocation`] → ([`grid`] +
//! [`spacing`] per zone) and is orchestrated by [`engine`].

pub mod allocation;
pub mod engine;
pub mod grid;
pub mod scale;
pub mod spacing;
