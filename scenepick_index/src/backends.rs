// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in spatial backends.

pub mod flatvec;
#[cfg(feature = "backend_grid")]
pub mod grid;
