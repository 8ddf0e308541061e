use thiserror::Error;

/// An error raised by a guarded collection operation.<br/>
/// ガード付きコレクションの操作が失敗した場合に発生するエラー。
///
/// The guard is always released before one of these reaches the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
  #[error("index {index} is out of range for length {len}")]
  OutOfRange { index: usize, len: usize },
  #[error("range {start}..{end} is invalid for length {len}")]
  InvalidRange { start: usize, end: usize, len: usize },
  #[error("key not found")]
  KeyNotFound,
  #[error("operation requires two distinct instances")]
  SameInstance,
  #[error("bit pattern does not fit into {width} bits")]
  Overflow { width: usize },
  #[error("invalid bit character {found:?} at position {position}")]
  InvalidBitString { position: usize, found: char },
}

impl CollectionError {
  pub fn out_of_range(index: usize, len: usize) -> Self {
    CollectionError::OutOfRange { index, len }
  }

  /// Returns `Ok(())` when `index < len`.
  pub fn check_index(index: usize, len: usize) -> Result<(), Self> {
    if index < len {
      Ok(())
    } else {
      Err(Self::out_of_range(index, len))
    }
  }

  /// Returns `Ok(())` when `index <= len`, i.e. `index` is a valid insertion point.
  pub fn check_position(index: usize, len: usize) -> Result<(), Self> {
    if index <= len {
      Ok(())
    } else {
      Err(Self::out_of_range(index, len))
    }
  }

  pub fn check_range(start: usize, end: usize, len: usize) -> Result<(), Self> {
    if start <= end && end <= len {
      Ok(())
    } else {
      Err(CollectionError::InvalidRange { start, end, len })
    }
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::CollectionError;

  #[rstest(index, len, expected)]
  #[case(0, 1, Ok(()))]
  #[case(1, 1, Err(CollectionError::OutOfRange { index: 1, len: 1 }))]
  #[case(0, 0, Err(CollectionError::OutOfRange { index: 0, len: 0 }))]
  #[case(usize::MAX, 3, Err(CollectionError::OutOfRange { index: usize::MAX, len: 3 }))]
  fn test_check_index(index: usize, len: usize, expected: Result<(), CollectionError>) {
    assert_eq!(CollectionError::check_index(index, len), expected);
  }

  #[rstest(index, len, ok)]
  #[case(0, 0, true)]
  #[case(3, 3, true)]
  #[case(4, 3, false)]
  fn test_check_position_allows_end(index: usize, len: usize, ok: bool) {
    assert_eq!(CollectionError::check_position(index, len).is_ok(), ok);
  }

  #[rstest(start, end, len, ok)]
  #[case(1, 1, 1, true)]
  #[case(0, 5, 5, true)]
  #[case(2, 1, 5, false)]
  #[case(0, 6, 5, false)]
  fn test_check_range(start: usize, end: usize, len: usize, ok: bool) {
    let result = CollectionError::check_range(start, end, len);
    assert_eq!(result.is_ok(), ok);
    if !ok {
      assert_eq!(result, Err(CollectionError::InvalidRange { start, end, len }));
    }
  }

  #[test]
  fn test_display() {
    let err = CollectionError::out_of_range(7, 3);
    assert_eq!(err.to_string(), "index 7 is out of range for length 3");
  }
}
