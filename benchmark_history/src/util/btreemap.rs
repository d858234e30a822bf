//!
//! Utility functions for ordered maps.
//!

use std::collections::BTreeMap;

/// Intersects two `BTreeMap` instances and merges their entries using a
/// specified merger function.
///
/// # Arguments
///
/// * `map1` - The first `BTreeMap` containing keys of type `K` and values of
///   type `V1`.
/// * `map2` - The second `BTreeMap` containing keys of type `K` and values of
///   type `V2`. This map is consumed during the intersection.
/// * `merger` - A closure that takes a key of type `K`, and a value from each
///   map (`V1` and `V2`), and returns a merged result of type `R`.
///
/// # Returns
///
/// An iterator that yields merged results of type `R` for each intersecting key
/// from the maps, in the key order of `map1`.
///
/// # Example
///
/// ```rust
/// use benchmark_history::util::btreemap::intersect_map;
///
/// let first = [(1, 1), (2, 2), (3, 3)];
/// let second = [(1, 10), (3, 30)];
/// let expected: Vec<_> = [111, 333].into();
/// assert_eq!(
/// intersect_map(first.into(), second.into(), |k, v1, v2| 100 * k + v1 + v2)
/// .collect::<Vec<_>>(),
/// expected
/// )
/// ```
pub fn intersect_map<K, V1, V2, R>(
    map1: BTreeMap<K, V1>,
    mut map2: BTreeMap<K, V2>,
    merger: impl Fn(K, V1, V2) -> R,
) -> impl Iterator<Item = R>
where
    K: Ord,
{
    map1.into_iter().filter_map(move |(key, value1)| {
        map2.remove(&key).map(|value2| merger(key, value1, value2))
    })
}

/// Returns the keys present in exactly one of the maps.
///
/// The first element of the returned pair holds keys only found in `map1`,
/// the second one holds keys only found in `map2`.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use benchmark_history::util::btreemap::difference_keys;
///
/// let first: BTreeMap<_, _> = [("a", 1), ("b", 2)].into();
/// let second: BTreeMap<_, _> = [("b", 20), ("c", 30)].into();
/// assert_eq!(difference_keys(&first, &second), (vec!["a"], vec!["c"]));
/// ```
pub fn difference_keys<K, V1, V2>(map1: &BTreeMap<K, V1>, map2: &BTreeMap<K, V2>) -> (Vec<K>, Vec<K>)
where
    K: Ord + Clone,
{
    let only_first = map1
        .keys()
        .filter(|key| !map2.contains_key(key))
        .cloned()
        .collect();
    let only_second = map2
        .keys()
        .filter(|key| !map1.contains_key(key))
        .cloned()
        .collect();
    (only_first, only_second)
}
