// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! League records as served by the football API.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// League identifier. The API sends integers, but any JSON number or string
/// is accepted and used verbatim in request URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeagueId {
    Numeric(i64),
    /// Floats and integers beyond `i64`
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueId::Numeric(id) => write!(f, "{}", id),
            LeagueId::Number(id) => write!(f, "{}", id),
            LeagueId::Text(id) => f.write_str(id),
        }
    }
}

/// Wire form of a league, before validation.
///
/// Only absent or null fields are rejected; an empty name is a valid name.
#[derive(Debug, Deserialize, Validate)]
pub struct RawLeague {
    #[validate(required)]
    pub id: Option<LeagueId>,
    #[validate(required)]
    pub name: Option<String>,
}

/// A validated league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
}

impl League {
    pub fn new(id: impl Into<LeagueId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Validate one element of the `/leagues` response.
    ///
    /// `index` is the position in the response and ends up in the error.
    pub fn from_record(index: usize, record: &serde_json::Value) -> Result<Self, AppError> {
        let malformed = |reason: String| AppError::MalformedLeague { index, reason };

        let raw = RawLeague::deserialize(record).map_err(|e| malformed(e.to_string()))?;
        raw.validate().map_err(|e| malformed(e.to_string()))?;

        match (raw.id, raw.name) {
            (Some(id), Some(name)) => Ok(Self { id, name }),
            _ => Err(malformed("missing id or name".to_string())),
        }
    }
}

impl From<i64> for LeagueId {
    fn from(id: i64) -> Self {
        LeagueId::Numeric(id)
    }
}

impl From<&str> for LeagueId {
    fn from(id: &str) -> Self {
        LeagueId::Text(id.to_string())
    }
}
