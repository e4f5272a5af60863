//! Merge strategies for combining two parsed configuration documents.
//!
//! The primitives come in two forms with an explicit mutation contract:
//! [`update`] and [`merge_overwrite`] mutate the destination in place,
//! while [`merge_recurse`] and [`merge_list`] leave their inputs untouched
//! and return a new mapping. The [`merge`] dispatcher selects a strategy
//! by name and never fails: overlay wins on type conflicts, missing keys
//! are treated as empty, and unknown strategy names fall back to
//! `recurse`.


use crate::aggregate::{Aggregator, DepthBounded};
use crate::document::{Document, Mapping};
use crate::strategy::MergeStrategy;

/// Recursively folds `overlay` into `dest`, mutating `dest` in place.
///
/// For every key in `overlay`: when both sides hold mappings the entries
/// merge recursively, otherwise overlay's value replaces base's wholesale
/// (sequences are not concatenated). Keys only present in `dest` are left
/// untouched, and empty-string keys in `overlay` are skipped entirely.
///
/// A key missing from `dest` takes overlay's sub-tree as-is, which also
/// carries overlay's order-preserving tag. On conflicts the surviving
/// value keeps the tag of whichever side supplied it.
pub fn update(dest: &mut Mapping, overlay: &Mapping) {
    for (key, value) in overlay {
        if key.is_empty() {
            continue;
        }
        if let Document::Mapping(incoming) = value {
            if let Some(Document::Mapping(existing)) = dest.get_mut(key) {
                update(existing, incoming);
                continue;
            }
        }
        dest.insert(key.clone(), value.clone());
    }
}

/// Recursive merge with value semantics.
///
/// Clones `base` and folds `overlay` into the clone with [`update`];
/// neither input is mutated.
///
/// # Examples
///
/// ```rust
/// use structured_merge::{Document, Mapping, merge_recurse};
///
/// let base: Mapping = [("a", 1_i64), ("b", 2_i64)].into_iter().collect();
/// let overlay: Mapping = [("b", 9_i64)].into_iter().collect();
/// let merged = merge_recurse(&base, &overlay);
/// assert_eq!(merged.get("b"), Some(&Document::from(9_i64)));
/// assert_eq!(base.get("b"), Some(&Document::from(2_i64)));
/// ```
#[must_use]
pub fn merge_recurse(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut merged = base.clone();
    update(&mut merged, overlay);
    merged
}

/// Base-driven pairing of the two top-level mappings.
///
/// The result holds exactly `base`'s keys: a key also present in
/// `overlay` maps to the sequence `[base value, overlay value]`, any
/// other key keeps its base value. Keys only in `overlay` are dropped.
/// The result is a new plain mapping.
#[must_use]
pub fn merge_list(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut paired = Mapping::new();
    for (key, value) in base {
        let entry = match overlay.get(key) {
            Some(other) => Document::Sequence(vec![value.clone(), other.clone()]),
            None => value.clone(),
        };
        paired.insert(key.clone(), entry);
    }
    paired
}

/// Overwrite-then-recurse merge, mutating `dest` in place.
///
/// First pass: every key of `overlay` already present in `dest` is
/// replaced verbatim, with no recursion. Second pass: a full [`update`]
/// run over the result, which still deep-merges whatever the first pass
/// did not touch and brings in overlay-only keys.
pub fn merge_overwrite(dest: &mut Mapping, overlay: &Mapping) {
    for (key, value) in overlay {
        if dest.contains_key(key) {
            dest.insert(key.clone(), value.clone());
        }
    }
    update(dest, overlay);
}

/// Merges `overlay` into `base` under the strategy named by `strategy`.
///
/// The entry point for configuration-rendering and state-reconciliation
/// pipelines. `hint` is the originating document's declared format and is
/// consulted only by the `smart` strategy. Unknown strategy names log a
/// warning and behave as `recurse`; no input makes this function fail.
/// The `aggregate` strategy uses the stock [`DepthBounded`] aggregator —
/// use [`merge_with`] to supply another one.
///
/// # Examples
///
/// ```rust
/// use structured_merge::{Document, Mapping, merge};
///
/// let base: Mapping = [("a", 1_i64), ("b", 2_i64)].into_iter().collect();
/// let overlay: Mapping = [("b", 3_i64), ("c", 4_i64)].into_iter().collect();
/// let merged = merge(&base, &overlay, "recurse", "yaml");
/// let result = merged.as_mapping().cloned().unwrap_or_default();
/// assert_eq!(result.get("b"), Some(&Document::from(3_i64)));
/// assert_eq!(result.get("c"), Some(&Document::from(4_i64)));
/// ```
#[must_use]
pub fn merge(base: &Mapping, overlay: &Mapping, strategy: &str, hint: &str) -> Document {
    merge_with(
        base,
        overlay,
        MergeStrategy::resolve(strategy),
        hint,
        &DepthBounded,
    )
}

/// [`merge`] with the original defaults: `smart` strategy, `yaml` hint.
#[must_use]
pub fn merge_smart(base: &Mapping, overlay: &Mapping, hint: &str) -> Document {
    merge_with(base, overlay, MergeStrategy::Smart, hint, &DepthBounded)
}

/// Strongly typed merge dispatcher with an injectable aggregator.
///
/// `strategy` is resolved against `hint` first, so passing
/// [`MergeStrategy::Smart`] here behaves exactly like the string form.
#[must_use]
pub fn merge_with(
    base: &Mapping,
    overlay: &Mapping,
    strategy: MergeStrategy,
    hint: &str,
    aggregator: &dyn Aggregator,
) -> Document {
    match strategy.for_hint(hint) {
        MergeStrategy::Recurse | MergeStrategy::Smart => {
            Document::Mapping(merge_recurse(base, overlay))
        }
        MergeStrategy::Aggregate => {
            // level 1: aggregate at least the root data
            aggregator.aggregate(
                &Document::Mapping(base.clone()),
                &Document::Mapping(overlay.clone()),
                1,
            )
        }
        MergeStrategy::Overwrite => {
            let mut merged = base.clone();
            merge_overwrite(&mut merged, overlay);
            Document::Mapping(merged)
        }
        MergeStrategy::List => Document::Mapping(merge_list(base, overlay)),
    }
}
