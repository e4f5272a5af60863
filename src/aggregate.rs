//! Aggregation collaborator for the `aggregate` strategy.
//!
//! The exact aggregation semantics belong to the caller's serialisation
//! layer, so the strategy only commits to a seam: an [`Aggregator`] invoked
//! with a starting depth of 1. [`DepthBounded`] is the stock
//! implementation used by [`crate::merge`].


use crate::document::Document;

/// Collaborator that combines colliding values instead of replacing them.
///
/// `level` is the number of mapping levels, counted from the root, whose
/// direct children may still aggregate. The `aggregate` strategy always
/// starts at `level = 1` so that at least the root data aggregates.
pub trait Aggregator {
    /// Combines `base` and `overlay` with `level` aggregation budget left.
    fn aggregate(&self, base: &Document, overlay: &Document, level: u32) -> Document;
}

/// Depth-bounded aggregation.
///
/// While budget remains, colliding sequences concatenate and colliding
/// scalars collect into a sequence, base's contribution first. Once the
/// budget is spent, collisions fall back to recursive-replace: mappings
/// still merge key by key, everything else is overwritten by the overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthBounded;

impl Aggregator for DepthBounded {
    fn aggregate(&self, base: &Document, overlay: &Document, level: u32) -> Document {
        match (base, overlay) {
            (Document::Mapping(ours), Document::Mapping(theirs)) => {
                let mut merged = ours.clone();
                for (key, incoming) in theirs {
                    let value = match merged.get(key) {
                        Some(existing) => {
                            let next = if existing.is_mapping() && incoming.is_mapping() {
                                level.saturating_sub(1)
                            } else {
                                level
                            };
                            self.aggregate(existing, incoming, next)
                        }
                        None => incoming.clone(),
                    };
                    merged.insert(key.clone(), value);
                }
                Document::Mapping(merged)
            }
            _ if level == 0 => overlay.clone(),
            (Document::Sequence(ours), Document::Sequence(theirs)) => {
                let mut items = ours.clone();
                items.extend(theirs.iter().cloned());
                Document::Sequence(items)
            }
            (Document::Sequence(ours), scalar) => {
                let mut items = ours.clone();
                items.push(scalar.clone());
                Document::Sequence(items)
            }
            (scalar, Document::Sequence(theirs)) => {
                let mut items = vec![scalar.clone()];
                items.extend(theirs.iter().cloned());
                Document::Sequence(items)
            }
            (ours, theirs) => Document::Sequence(vec![ours.clone(), theirs.clone()]),
        }
    }
}
