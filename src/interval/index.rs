//! Augmented binary search tree over interval start times.

use super::Interval;

/// Tree node; owns its interval and caches the maximum end time of its
/// subtree so whole branches can be skipped during overlap queries.
#[derive(Debug, Clone)]
struct IndexNode<T> {
    interval: Interval<T>,
    subtree_max_end: i64,
    left: Option<Box<IndexNode<T>>>,
    right: Option<Box<IndexNode<T>>>,
}

impl<T> IndexNode<T> {
    fn new(interval: Interval<T>) -> Self {
        let subtree_max_end = interval.end();
        Self {
            interval,
            subtree_max_end,
            left: None,
            right: None,
        }
    }
}

/// Interval set indexed for overlap queries.
///
/// A BST keyed by interval start where each node additionally tracks the
/// maximum end time in its subtree. A query descends left only while the
/// left subtree can still reach past the query's start, and right only while
/// the node starts before the query ends, pruning branches that cannot
/// overlap.
///
/// The tree is deliberately unbalanced: insertion order dictates its shape,
/// so adversarial orders (strictly increasing starts) degrade to O(n) per
/// operation. Expected pools are small (a week of classroom slots).
/// Duplicates are permitted; there is no per-interval removal. Rebuild via
/// [`clear`](Self::clear) and re-insertion instead.
#[derive(Debug, Clone)]
pub struct IntervalIndex<T> {
    root: Option<Box<IndexNode<T>>>,
    len: usize,
}

impl<T> Default for IntervalIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntervalIndex<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds `interval` unconditionally, updating the cached subtree maxima
    /// along the insertion path. Equal starts descend right, so insertion
    /// order is preserved among duplicates.
    pub fn insert(&mut self, interval: Interval<T>) {
        insert_into(&mut self.root, interval);
        self.len += 1;
    }

    /// True iff any stored interval overlaps `query`.
    pub fn has_overlap<Q>(&self, query: &Interval<Q>) -> bool {
        has_overlap_in(self.root.as_deref(), query)
    }

    /// All stored intervals overlapping `query`, in tree-visit order.
    pub fn find_overlapping<Q>(&self, query: &Interval<Q>) -> Vec<&Interval<T>> {
        let mut matches = Vec::new();
        collect_overlapping(self.root.as_deref(), query, &mut matches);
        matches
    }

    /// All stored intervals in ascending start order (in-order traversal).
    pub fn intervals(&self) -> Vec<&Interval<T>> {
        let mut all = Vec::with_capacity(self.len);
        collect_in_order(self.root.as_deref(), &mut all);
        all
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

fn insert_into<T>(slot: &mut Option<Box<IndexNode<T>>>, interval: Interval<T>) {
    match slot {
        None => *slot = Some(Box::new(IndexNode::new(interval))),
        Some(node) => {
            if node.subtree_max_end < interval.end() {
                node.subtree_max_end = interval.end();
            }
            if interval.start() < node.interval.start() {
                insert_into(&mut node.left, interval);
            } else {
                insert_into(&mut node.right, interval);
            }
        }
    }
}

fn has_overlap_in<T, Q>(node: Option<&IndexNode<T>>, query: &Interval<Q>) -> bool {
    let node = match node {
        Some(node) => node,
        None => return false,
    };

    if node.interval.overlaps(query) {
        return true;
    }

    // Left subtree can only overlap if some interval in it ends past the
    // query's start.
    if let Some(left) = node.left.as_deref() {
        if left.subtree_max_end > query.start() && has_overlap_in(Some(left), query) {
            return true;
        }
    }

    // Right subtree starts at or after this node; once the node itself
    // starts past the query's end, so does everything to its right.
    if node.interval.start() < query.end() && has_overlap_in(node.right.as_deref(), query) {
        return true;
    }

    false
}

fn collect_overlapping<'a, T, Q>(
    node: Option<&'a IndexNode<T>>,
    query: &Interval<Q>,
    matches: &mut Vec<&'a Interval<T>>,
) {
    let node = match node {
        Some(node) => node,
        None => return,
    };

    if node.interval.overlaps(query) {
        matches.push(&node.interval);
    }

    if let Some(left) = node.left.as_deref() {
        if left.subtree_max_end > query.start() {
            collect_overlapping(Some(left), query, matches);
        }
    }

    if node.interval.start() < query.end() {
        collect_overlapping(node.right.as_deref(), query, matches);
    }
}

fn collect_in_order<'a, T>(node: Option<&'a IndexNode<T>>, all: &mut Vec<&'a Interval<T>>) {
    if let Some(node) = node {
        collect_in_order(node.left.as_deref(), all);
        all.push(&node.interval);
        collect_in_order(node.right.as_deref(), all);
    }
}
