// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Planning data model.

pub mod anchor;
pub mod point;
pub mod project;
pub mod zone;
