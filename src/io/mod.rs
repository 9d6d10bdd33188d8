// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for blueprint images, settings files and reports.

pub mod media;
pub mod report;
pub mod serialization;
