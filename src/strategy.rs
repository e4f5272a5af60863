//! Strategy selection for document merges.
//!
//! Strategy names arrive from configuration, so parsing has two modes:
//! [`MergeStrategy::from_str`] for callers that want to reject a bad name
//! up front, and [`MergeStrategy::resolve`] for the pipeline path, where an
//! unknown name must never abort a reconciliation run and instead falls
//! back to [`MergeStrategy::Recurse`] with a warning.


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named algorithm used to reconcile two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Deep merge; overlay wins on non-mapping conflicts.
    Recurse,
    /// Delegate to the aggregation collaborator with a starting depth of 1.
    Aggregate,
    /// Replace shared top-level keys verbatim, then run a recursive pass.
    Overwrite,
    /// Pair shared keys as `[base, overlay]`, driven by base's keys.
    List,
    /// Pick between `aggregate` and `recurse` from the document's
    /// declared format hint.
    Smart,
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown merging strategy '{name}'")]
pub struct UnknownStrategy {
    /// The name that failed to parse.
    pub name: String,
}

impl FromStr for MergeStrategy {
    type Err = UnknownStrategy;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "recurse" => Ok(Self::Recurse),
            "aggregate" => Ok(Self::Aggregate),
            "overwrite" => Ok(Self::Overwrite),
            "list" => Ok(Self::List),
            "smart" => Ok(Self::Smart),
            other => Err(UnknownStrategy { name: other.into() }),
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Recurse => "recurse",
            Self::Aggregate => "aggregate",
            Self::Overwrite => "overwrite",
            Self::List => "list",
            Self::Smart => "smart",
        })
    }
}

impl MergeStrategy {
    /// Parses `name` leniently, falling back to [`Self::Recurse`].
    ///
    /// Unknown names are logged at warn level and never fail; a merge must
    /// not abort a larger reconciliation pipeline over a typo in a
    /// strategy knob.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structured_merge::MergeStrategy;
    ///
    /// assert_eq!(MergeStrategy::resolve("list"), MergeStrategy::List);
    /// assert_eq!(MergeStrategy::resolve("bogus"), MergeStrategy::Recurse);
    /// ```
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(
                strategy = name,
                "unknown merging strategy, falling back to recurse"
            );
            Self::Recurse
        })
    }

    /// Resolves [`Self::Smart`] against the originating document's format
    /// hint; other strategies pass through unchanged.
    ///
    /// `yamlex` documents (and `yamlex_`-prefixed dialects) carry
    /// aggregation markers, so `smart` resolves to [`Self::Aggregate`] for
    /// them and to [`Self::Recurse`] for everything else.
    #[must_use]
    pub fn for_hint(self, hint: &str) -> Self {
        match self {
            Self::Smart => {
                if hint == "yamlex" || hint.starts_with("yamlex_") {
                    Self::Aggregate
                } else {
                    Self::Recurse
                }
            }
            other => other,
        }
    }
}
