#[cfg(test)]
mod tests {
  use std::collections::{LinkedList, VecDeque};
  use std::env;

  use rstest::rstest;
  use synced_collections_utils_rs::CollectionError;
  use tracing_subscriber::EnvFilter;

  use crate::families::{DoubleEndedAdapter, DoubleEndedOps, SequenceAdapter, SequenceOps};
  use crate::guarded::Guarded;

  fn init_logger() {
    env::set_var("RUST_LOG", "debug");
    let _ = tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env())
      .try_init();
  }

  fn exercise_positional<C>(mut c: C)
  where
    C: SequenceOps<Item = i32>, {
    c.extend_back(vec![1, 2, 3]);
    c.insert_at(0, 0).unwrap();
    c.insert_at(4, 4).unwrap();
    assert_eq!(c.insert_at(6, 9), Err(CollectionError::OutOfRange { index: 6, len: 5 }));
    assert_eq!(c.remove_at(2), Ok(2));
    assert_eq!(c.remove_at(4), Err(CollectionError::OutOfRange { index: 4, len: 4 }));
    c.insert_all_at(1, vec![7, 8]).unwrap();
    assert_eq!(c.remove_range(2..4), Ok(vec![8, 1]));
    assert_eq!(
      c.remove_range(3..1),
      Err(CollectionError::InvalidRange { start: 3, end: 1, len: 4 })
    );
    let mut seen = Vec::new();
    c.for_each(|x| seen.push(*x));
    assert_eq!(seen, vec![0, 7, 3, 4]);
    assert_eq!(c.front(), Some(&0));
    assert_eq!(c.back(), Some(&4));
  }

  #[test]
  fn test_positional_ops_agree_across_sequences() {
    init_logger();
    exercise_positional(Vec::new());
    exercise_positional(VecDeque::new());
    exercise_positional(LinkedList::new());
  }

  #[rstest(len, expected)]
  #[case(0, vec![])]
  #[case(2, vec![1, 2])]
  #[case(5, vec![1, 2, 3, 9, 9])]
  fn test_list_resize(len: usize, expected: Vec<i32>) {
    let mut list = LinkedList::from([1, 2, 3]);
    SequenceOps::resize(&mut list, len, 9);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), expected);
  }

  #[test]
  fn test_list_retain_keeps_order() {
    let mut list = LinkedList::from([1, 2, 3, 4, 5, 6]);
    SequenceOps::retain(&mut list, |x| x % 2 == 0);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
  }

  #[test]
  fn test_double_ended_ops() {
    let mut deque = VecDeque::from([2]);
    DoubleEndedOps::push_front(&mut deque, 1);
    SequenceOps::push_back(&mut deque, 3);
    assert_eq!(DoubleEndedOps::pop_front(&mut deque), Some(1));
    assert_eq!(SequenceOps::pop_back(&mut deque), Some(3));
  }

  #[test]
  fn test_adapter_reads_return_copies() {
    let seq = Guarded::<Vec<String>>::new();
    seq.push_back("a".to_string());
    seq.push_back("b".to_string());
    let mut first = seq.at(0).unwrap();
    first.push('!');
    assert_eq!(seq.get(0), Some("a".to_string()));
    assert_eq!(seq.at(2), Err(CollectionError::OutOfRange { index: 2, len: 2 }));
  }

  #[test]
  fn test_adapter_set_and_update_at() {
    let seq: Guarded<VecDeque<i32>> = (1..=3).collect();
    assert_eq!(seq.set(1, 20), Ok(2));
    assert_eq!(seq.update_at(2, |x| {
      *x *= 10;
      *x
    }), Ok(30));
    assert_eq!(seq.set(3, 0), Err(CollectionError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(seq.to_vec(), vec![1, 20, 30]);
  }

  #[test]
  fn test_adapter_assign_and_repeat() {
    let seq: Guarded<LinkedList<i32>> = (0..10).collect();
    seq.assign(vec![4, 5]);
    assert_eq!(seq.to_vec(), vec![4, 5]);
    seq.assign_repeat(3, 7);
    assert_eq!(seq.to_vec(), vec![7, 7, 7]);
    seq.truncate(1);
    assert_eq!(seq.len(), 1);
    assert!(seq.contains(&7));
  }

  #[test]
  fn test_adapter_front_end() {
    let seq = Guarded::<VecDeque<i32>>::new();
    seq.push_front(2);
    seq.push_front(1);
    seq.push_back(3);
    assert_eq!(seq.front(), Some(1));
    assert_eq!(seq.back(), Some(3));
    assert_eq!(seq.pop_front(), Some(1));
    assert_eq!(seq.to_vec(), vec![2, 3]);
  }

  #[test]
  fn test_adapter_range_insert_from_iterator() {
    let seq: Guarded<Vec<i32>> = vec![1, 5].into();
    seq.insert_all_at(1, 2..5).unwrap();
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
    assert!(seq.insert_all_at(9, [0]).is_err());
    assert_eq!(seq.remove_range(0..2), Ok(vec![1, 2]));
    seq.retain(|x| *x != 4);
    assert_eq!(seq.to_vec(), vec![3, 5]);
  }
}
