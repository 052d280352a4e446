// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod blob_path;
pub mod league;

pub use blob_path::{bucket_fragment, Dataset, LeagueBlobPaths, JSON_CONTENT_TYPE};
pub use league::{League, LeagueId, RawLeague};
