// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interactive editing rules for zones and anchors.
//!
//! These functions are pure: they take the state before a pointer action
//! and return the state after it. The canvas feeds them pointer positions
//! in percentage coordinates.

pub mod anchor_editor;
pub mod gesture;
pub mod zone_editor;
