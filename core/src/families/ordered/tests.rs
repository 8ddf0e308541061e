#[cfg(test)]
mod tests {
  use std::collections::{BTreeMap, BTreeSet};
  use std::ops::Bound;

  use rstest::rstest;

  use crate::families::{OrderedAdapter, OrderedAssociativeOps};
  use crate::guarded::Guarded;

  fn sample_map() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([(10, "a"), (20, "b"), (30, "c")])
  }

  #[rstest(key, lower, upper)]
  #[case(5, Some(10), Some(10))]
  #[case(10, Some(10), Some(20))]
  #[case(25, Some(30), Some(30))]
  #[case(30, Some(30), None)]
  #[case(31, None, None)]
  fn test_map_bounds(key: i32, lower: Option<i32>, upper: Option<i32>) {
    let map = sample_map();
    assert_eq!(OrderedAssociativeOps::lower_bound(&map, &key).map(|(k, _)| k), lower);
    assert_eq!(OrderedAssociativeOps::upper_bound(&map, &key).map(|(k, _)| k), upper);
  }

  #[test]
  fn test_map_insert_item_keeps_existing_value() {
    let mut map = sample_map();
    assert!(!map.insert_item((10, "z")));
    assert!(map.insert_item((15, "z")));
    assert_eq!(map.find(&10), Some((10, "a")));
    assert_eq!(map.count_key(&15), 1);
  }

  #[test]
  fn test_inverted_range_is_empty() {
    let map = sample_map();
    assert!(map.range_items((Bound::Included(&30), Bound::Included(&10))).is_empty());
    assert!(map.range_items((Bound::Excluded(&10), Bound::Excluded(&10))).is_empty());
    assert_eq!(
      map.range_items((Bound::Included(&10), Bound::Excluded(&30))),
      vec![(10, "a"), (20, "b")]
    );
  }

  #[test]
  fn test_set_remove_key_range() {
    let mut set = (1..=10).collect::<BTreeSet<_>>();
    assert_eq!(set.remove_key_range((Bound::Excluded(&3), Bound::Included(&7))), 4);
    assert_eq!(set.items(), vec![1, 2, 3, 8, 9, 10]);
    assert_eq!(set.equal_range(&8), vec![8]);
    assert_eq!(OrderedAssociativeOps::pop_last(&mut set), Some(10));
  }

  #[test]
  fn test_adapter_ordered_map() {
    let map: Guarded<BTreeMap<i32, String>> = Guarded::new();
    assert_eq!(map.extend_items((0..5).map(|i| (i * 10, i.to_string()))), 5);
    assert_eq!(map.extend_items([(0, "dup".to_string())]), 0);
    assert_eq!(map.first(), Some((0, "0".to_string())));
    assert_eq!(map.last(), Some((40, "4".to_string())));
    assert_eq!(map.range_items(10..30).len(), 2);
    assert_eq!(map.remove_key_range(..20), 2);
    assert_eq!(map.pop_first(), Some((20, "2".to_string())));
    map.retain_keys(|k| *k != 40);
    assert_eq!(map.items(), vec![(30, "3".to_string())]);
    assert!(map.contains_key(&30));
    assert_eq!(map.remove_key(&30), 1);
    assert!(map.is_empty());
  }

  #[test]
  fn test_adapter_key_comparator_follows_key_order() {
    let set: Guarded<BTreeSet<&str>> = ["b", "a"].into_iter().collect();
    let cmp = set.key_comparator();
    let mut keys = vec!["c", "a", "b"];
    keys.sort_by(cmp);
    assert_eq!(keys, set.items().into_iter().chain(["c"]).collect::<Vec<_>>());
  }
}
