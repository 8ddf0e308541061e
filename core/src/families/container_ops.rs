use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::mem;

/// The capacity/inspection surface shared by every base container.<br/>
/// すべての基底コンテナに共通する容量・検査操作。
pub trait ContainerOps {
  /// One element of the container; `(K, V)` for maps.
  type Item;

  /// Returns the number of elements.<br/>
  /// 要素数を返します。
  fn len(&self) -> usize;

  /// Returns whether the container holds no elements.<br/>
  /// コンテナが空かどうかを返します。
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Removes every element.<br/>
  /// すべての要素を削除します。
  fn clear(&mut self);

  /// Returns the largest element count the container could theoretically hold.<br/>
  /// 保持できる理論上の最大要素数を返します。
  fn max_size(&self) -> usize {
    isize::MAX as usize / mem::size_of::<Self::Item>().max(1)
  }
}

macro_rules! impl_container_ops {
  ($([$($gen:tt)*] $ty:ty => $item:ty),* $(,)?) => {
    $(
      impl<$($gen)*> ContainerOps for $ty {
        type Item = $item;

        fn len(&self) -> usize {
          <$ty>::len(self)
        }

        fn clear(&mut self) {
          <$ty>::clear(self)
        }
      }
    )*
  };
}

impl_container_ops!(
  [T] Vec<T> => T,
  [T] VecDeque<T> => T,
  [T] LinkedList<T> => T,
  [T] BinaryHeap<T> => T,
  [K, V] BTreeMap<K, V> => (K, V),
  [K] BTreeSet<K> => K,
  [K, V, S] HashMap<K, V, S> => (K, V),
  [K, S] HashSet<K, S> => K,
);
