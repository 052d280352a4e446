// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Blob naming for archived league data.
//!
//! Layout: `<root>/<fragment>/<dataset>/<League Name>.json`, where the
//! fragment is the lower-cased league name with spaces turned into hyphens
//! plus a `-bucket` suffix. The file name keeps the league name as-is.

/// Content type of every uploaded blob.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// The two datasets archived per league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Fixtures,
    Standings,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Fixtures, Dataset::Standings];

    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Fixtures => "fixtures",
            Dataset::Standings => "standings",
        }
    }
}

/// Directory fragment for a league, e.g. `"Premier League"` -> `"premier-league-bucket"`.
///
/// Distinct names can map to the same fragment ("La Liga" and "la liga").
pub fn bucket_fragment(league_name: &str) -> String {
    format!("{}-bucket", league_name.to_lowercase().replace(' ', "-"))
}

/// Blob paths for one league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueBlobPaths {
    pub fragment: String,
    pub fixtures: String,
    pub standings: String,
}

impl LeagueBlobPaths {
    pub fn new(root: &str, league_name: &str) -> Self {
        let fragment = bucket_fragment(league_name);
        let path = |dataset: Dataset| {
            format!(
                "{}/{}/{}/{}.json",
                root,
                fragment,
                dataset.as_str(),
                league_name
            )
        };

        Self {
            fixtures: path(Dataset::Fixtures),
            standings: path(Dataset::Standings),
            fragment,
        }
    }

    pub fn path(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Fixtures => &self.fixtures,
            Dataset::Standings => &self.standings,
        }
    }
}
