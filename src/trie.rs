//! Fixed-radix trie keyed by sequences of bounded integers
//!
//! Every node owns a dense array of child slots, one per legal key value, so a
//! step down the tree is an index rather than a search. Paths only ever match
//! exactly: a lookup never returns the values of a shorter or longer path.
//!
//! Nodes are created lazily on insertion and never removed.

use crate::error::{Result, TheoryError};
use crate::types::constants::HalfSteps;
use num_traits::PrimInt;
use std::fmt;

/// Inclusive range `[min, max]` of legal key values, with `max > min`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange<K> {
    min: K,
    max: K,
    width: usize,
}

/// Widest range a trie accepts. Every node allocates one child slot per key.
pub const MAX_KEY_WIDTH: usize = 4096;

/// `hi - lo` as a slot count, or `None` if it does not fit in `usize`
fn span<K: PrimInt>(lo: K, hi: K) -> Option<usize> {
    match (lo.to_i128(), hi.to_i128()) {
        (Some(lo), Some(hi)) => usize::try_from(hi.checked_sub(lo)?).ok(),
        // u128 values past i128::MAX
        _ => hi.checked_sub(&lo)?.to_usize(),
    }
}

impl<K: PrimInt> KeyRange<K> {
    /// Fails when `max <= min`, or when the range holds more than
    /// `MAX_KEY_WIDTH` keys
    pub fn new(min: K, max: K) -> Result<Self> {
        let lo = min.to_i128().unwrap_or(i128::MAX);
        let hi = max.to_i128().unwrap_or(i128::MAX);

        if max <= min {
            return Err(TheoryError::InvalidRange { min: lo, max: hi });
        }

        let width = span(min, max)
            .and_then(|w| w.checked_add(1))
            .filter(|&w| w <= MAX_KEY_WIDTH)
            .ok_or(TheoryError::RangeTooWide {
                min: lo,
                max: hi,
                limit: MAX_KEY_WIDTH,
            })?;

        Ok(KeyRange { min, max, width })
    }

    pub fn min(&self) -> K {
        self.min
    }

    pub fn max(&self) -> K {
        self.max
    }

    /// Number of legal key values, i.e. the radix of every node
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, key: K) -> bool {
        key >= self.min && key <= self.max
    }

    /// Child slot for `key`, or `None` if it is out of range
    fn slot(&self, key: K) -> Option<usize> {
        if !self.contains(key) {
            return None;
        }
        span(self.min, key)
    }
}

impl KeyRange<HalfSteps> {
    /// Half and whole steps only
    pub const STEPS: Self = KeyRange {
        min: 1,
        max: 2,
        width: 2,
    };

    /// Half, whole and augmented (three half step) seconds
    pub const SCALE_STEPS: Self = KeyRange {
        min: 1,
        max: 3,
        width: 3,
    };

    /// Any interval between two distinct pitch classes inside an octave
    pub const CHORD_INTERVALS: Self = KeyRange {
        min: 1,
        max: 11,
        width: 11,
    };
}

struct Node<V> {
    children: Vec<Option<Box<Node<V>>>>,
    values: Vec<V>,
}

impl<V> Node<V> {
    fn new(width: usize) -> Self {
        Node {
            children: (0..width).map(|_| None).collect(),
            values: Vec::new(),
        }
    }

    fn children(&self) -> impl Iterator<Item = &Node<V>> {
        self.children.iter().flatten().map(|child| &**child)
    }

    fn node_count(&self) -> usize {
        1 + self.children().map(Node::node_count).sum::<usize>()
    }

    fn value_count(&self) -> usize {
        self.values.len() + self.children().map(Node::value_count).sum::<usize>()
    }
}

/// A prefix tree from key sequences to zero or more values per path
pub struct Trie<K, V> {
    range: KeyRange<K>,
    root: Node<V>,
}

impl<K: PrimInt, V> Trie<K, V> {
    /// Create an empty trie whose keys must lie in `min..=max`.
    /// Fails when `max <= min`.
    pub fn new(min: K, max: K) -> Result<Self> {
        Ok(Self::with_range(KeyRange::new(min, max)?))
    }

    pub fn with_range(range: KeyRange<K>) -> Self {
        Trie {
            range,
            root: Node::new(range.width()),
        }
    }

    pub fn range(&self) -> KeyRange<K> {
        self.range
    }

    /// Append `value` to the values stored at `path`, creating nodes as needed.
    ///
    /// Earlier values at the same path are kept. Returns `false`, leaving the
    /// trie untouched, if any key in the path is out of range.
    pub fn add_value(&mut self, path: &[K], value: V) -> bool {
        let slots: Option<Vec<usize>> = path.iter().map(|&key| self.range.slot(key)).collect();
        let Some(slots) = slots else {
            return false;
        };

        let width = self.range.width();
        let mut node = &mut self.root;
        for slot in slots {
            node = &mut **node.children[slot].get_or_insert_with(|| Box::new(Node::new(width)));
        }
        node.values.push(value);
        true
    }

    /// All values stored at exactly `path`, in insertion order.
    ///
    /// Empty when the path leaves the key range or runs off the tree.
    pub fn find_values(&self, path: &[K]) -> &[V] {
        let mut node = &self.root;
        for &key in path {
            let Some(slot) = self.range.slot(key) else {
                return &[];
            };
            match &node.children[slot] {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.values
    }

    /// Number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of stored values across all paths
    pub fn value_count(&self) -> usize {
        self.root.value_count()
    }
}

impl<K: PrimInt + fmt::Display, V> fmt::Display for Trie<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trie ({} to {}) with {} node(s) and {} value(s)",
            self.range.min,
            self.range.max,
            self.node_count(),
            self.value_count()
        )
    }
}

impl<K: PrimInt + fmt::Debug, V> fmt::Debug for Trie<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("range", &self.range)
            .field("nodes", &self.node_count())
            .field("values", &self.value_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find_value() {
        let cases: [(HalfSteps, HalfSteps, [HalfSteps; 3], &str); 3] = [
            (0, 2, [0, 1, 2], "A"),
            (1, 3, [1, 2, 3], "B"),
            (-5, -3, [-5, -4, -3], "C"),
        ];

        for (min, max, path, value) in cases {
            let mut trie = Trie::new(min, max).unwrap();
            assert!(trie.add_value(&path, value));
            assert_eq!(trie.find_values(&path), &[value]);
        }
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(Trie::<HalfSteps, ()>::new(3, 3).is_err());
        assert_eq!(
            Trie::<HalfSteps, ()>::new(4, 1).unwrap_err(),
            TheoryError::InvalidRange { min: 4, max: 1 }
        );
        assert!(KeyRange::new(i8::MIN, i8::MAX).is_ok());
        assert_eq!(KeyRange::new(i8::MIN, i8::MAX).unwrap().width(), 256);
    }

    #[test]
    fn test_extreme_bounds_are_rejected_not_overflowed() {
        assert_eq!(
            Trie::<i64, ()>::new(i64::MIN, i64::MAX).unwrap_err(),
            TheoryError::RangeTooWide {
                min: i64::MIN as i128,
                max: i64::MAX as i128,
                limit: MAX_KEY_WIDTH,
            }
        );
        assert!(Trie::<u32, ()>::new(0, u32::MAX).is_err());
        assert!(Trie::<i128, ()>::new(i128::MIN, i128::MAX).is_err());
        assert!(KeyRange::new(0u16, 4095).is_ok());
        assert!(KeyRange::new(0u16, 4096).is_err());
    }

    #[test]
    fn test_unsigned_bounds_above_i64() {
        let mut trie = Trie::new(u64::MAX - 10, u64::MAX).unwrap();
        assert_eq!(trie.range().width(), 11);
        assert!(trie.add_value(&[u64::MAX, u64::MAX - 10], "top"));
        assert!(!trie.add_value(&[0], "bottom"));
        assert_eq!(trie.find_values(&[u64::MAX, u64::MAX - 10]), &["top"]);
    }

    #[test]
    fn test_multiple_values_share_a_path() {
        let mut trie = Trie::new(1u8, 11).unwrap();
        trie.add_value(&[4, 3, 5], "first");
        trie.add_value(&[4, 3, 5], "second");
        assert_eq!(trie.find_values(&[4, 3, 5]), &["first", "second"]);
        assert_eq!(trie.value_count(), 2);
    }

    #[test]
    fn test_no_partial_matches() {
        let mut trie = Trie::new(1, 11).unwrap();
        trie.add_value(&[4, 3, 5], 'x');
        assert!(trie.find_values(&[4, 3]).is_empty());
        assert!(trie.find_values(&[4, 3, 5, 1]).is_empty());
        assert!(trie.find_values(&[3, 4, 5]).is_empty());
        assert!(trie.find_values(&[]).is_empty());
    }

    #[test]
    fn test_out_of_range_keys() {
        let mut trie = Trie::with_range(KeyRange::CHORD_INTERVALS);
        assert!(!trie.add_value(&[4, 12], 1));
        assert!(!trie.add_value(&[0], 1));
        assert_eq!(trie.node_count(), 1);

        trie.add_value(&[4, 3], 1);
        assert!(trie.find_values(&[4, 0]).is_empty());
        assert!(trie.find_values(&[-4, 3]).is_empty());
        assert!(trie.find_values(&[12]).is_empty());
    }

    #[test]
    fn test_nodes_are_shared_by_prefixes() {
        let mut trie = Trie::with_range(KeyRange::SCALE_STEPS);
        trie.add_value(&[2, 2, 1], "a");
        trie.add_value(&[2, 2, 2], "b");
        trie.add_value(&[2], "c");
        // root, 2, 2-2, 2-2-1, 2-2-2
        assert_eq!(trie.node_count(), 5);
        assert_eq!(trie.find_values(&[2]), &["c"]);
        assert_eq!(
            trie.to_string(),
            "Trie (1 to 3) with 5 node(s) and 3 value(s)"
        );
    }
}
