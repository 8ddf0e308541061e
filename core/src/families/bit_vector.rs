use synced_collections_utils_rs::{CollectionError, GuardBackend};

use super::ContainerOps;
use crate::guarded::Guarded;

/// A fixed-width vector of bits; `len()` is the width.<br/>
/// 固定幅のビットベクタ。
///
/// Positions are numbered from the least significant bit. Out-of-range positions
/// fail with `CollectionError::OutOfRange`.
pub trait BitVectorOps: ContainerOps<Item = bool> + Clone {
  fn test(&self, pos: usize) -> Result<bool, CollectionError>;

  fn set(&mut self, pos: usize, value: bool) -> Result<(), CollectionError>;

  fn reset(&mut self, pos: usize) -> Result<(), CollectionError> {
    self.set(pos, false)
  }

  fn flip(&mut self, pos: usize) -> Result<(), CollectionError> {
    let current = self.test(pos)?;
    self.set(pos, !current)
  }

  fn set_all(&mut self);

  fn reset_all(&mut self) {
    self.clear();
  }

  fn flip_all(&mut self);

  fn count_ones(&self) -> usize;

  fn any(&self) -> bool {
    self.count_ones() > 0
  }

  fn none(&self) -> bool {
    self.count_ones() == 0
  }

  fn all(&self) -> bool {
    self.count_ones() == self.len()
  }

  /// The bits as an integer.
  ///
  /// # Errors
  /// `CollectionError::Overflow` when a bit above position 63 is set.
  fn to_u64(&self) -> Result<u64, CollectionError>;

  /// The bits most significant first, as `'0'`/`'1'` characters.
  fn to_bit_string(&self) -> String;

  /// Shifts toward the most significant end; bits shifted past the width are lost.
  fn shift_left(&mut self, n: usize);

  fn shift_right(&mut self, n: usize);

  fn and_with(&mut self, other: &Self);

  fn or_with(&mut self, other: &Self);

  fn xor_with(&mut self, other: &Self);
}

/// Locked surface of every [`BitVectorOps`] container.<br/>
/// ビットベクタに対するロック付き操作。
///
/// The combining operations that involve a second instance run under both guards,
/// taken in instance order, so neither operand can change halfway through.
pub trait BitVectorAdapter: Sized {
  fn width(&self) -> usize;

  fn test(&self, pos: usize) -> Result<bool, CollectionError>;

  fn set(&self, pos: usize, value: bool) -> Result<(), CollectionError>;

  fn reset(&self, pos: usize) -> Result<(), CollectionError>;

  fn flip(&self, pos: usize) -> Result<(), CollectionError>;

  fn set_all(&self);

  fn reset_all(&self);

  fn flip_all(&self);

  fn count_ones(&self) -> usize;

  fn any(&self) -> bool;

  fn none(&self) -> bool;

  fn all(&self) -> bool;

  fn to_u64(&self) -> Result<u64, CollectionError>;

  fn to_bit_string(&self) -> String;

  /// Shifts this instance in place.
  fn shift_left_assign(&self, n: usize);

  fn shift_right_assign(&self, n: usize);

  /// A new instance holding the shifted bits; `self` is left unchanged.
  fn shifted_left(&self, n: usize) -> Self;

  fn shifted_right(&self, n: usize) -> Self;

  /// A new instance holding the complement.
  fn complement(&self) -> Self;

  fn bit_and(&self, other: &Self) -> Self;

  fn bit_or(&self, other: &Self) -> Self;

  fn bit_xor(&self, other: &Self) -> Self;

  fn bit_and_assign(&self, other: &Self);

  fn bit_or_assign(&self, other: &Self);

  fn bit_xor_assign(&self, other: &Self);
}

impl<C, B> Guarded<C, B>
where
  C: BitVectorOps,
  B: GuardBackend<C>,
{
  fn derive_with(&self, f: impl FnOnce(&mut C)) -> Self {
    let mut copy = self.snapshot();
    f(&mut copy);
    Self::from_container(copy)
  }

  fn combine_with(&self, other: &Self, f: impl FnOnce(&mut C, &C)) -> Self {
    let combined = self.with_pair(other, |l, r| {
      let mut out = l.clone();
      f(&mut out, r);
      out
    });
    Self::from_container(combined)
  }
}

impl<C, B> BitVectorAdapter for Guarded<C, B>
where
  C: BitVectorOps,
  B: GuardBackend<C>,
{
  fn width(&self) -> usize {
    self.len()
  }

  fn test(&self, pos: usize) -> Result<bool, CollectionError> {
    self.with_read(|c| c.test(pos))
  }

  fn set(&self, pos: usize, value: bool) -> Result<(), CollectionError> {
    self.with_write(|c| c.set(pos, value))
  }

  fn reset(&self, pos: usize) -> Result<(), CollectionError> {
    self.with_write(|c| c.reset(pos))
  }

  fn flip(&self, pos: usize) -> Result<(), CollectionError> {
    self.with_write(|c| c.flip(pos))
  }

  fn set_all(&self) {
    self.with_write(|c| c.set_all());
  }

  fn reset_all(&self) {
    self.with_write(|c| c.reset_all());
  }

  fn flip_all(&self) {
    self.with_write(|c| c.flip_all());
  }

  fn count_ones(&self) -> usize {
    self.with_read(|c| c.count_ones())
  }

  fn any(&self) -> bool {
    self.with_read(|c| c.any())
  }

  fn none(&self) -> bool {
    self.with_read(|c| c.none())
  }

  fn all(&self) -> bool {
    self.with_read(|c| c.all())
  }

  fn to_u64(&self) -> Result<u64, CollectionError> {
    self.with_read(|c| c.to_u64())
  }

  fn to_bit_string(&self) -> String {
    self.with_read(|c| c.to_bit_string())
  }

  fn shift_left_assign(&self, n: usize) {
    self.with_write(|c| c.shift_left(n));
  }

  fn shift_right_assign(&self, n: usize) {
    self.with_write(|c| c.shift_right(n));
  }

  fn shifted_left(&self, n: usize) -> Self {
    self.derive_with(|c| c.shift_left(n))
  }

  fn shifted_right(&self, n: usize) -> Self {
    self.derive_with(|c| c.shift_right(n))
  }

  fn complement(&self) -> Self {
    self.derive_with(|c| c.flip_all())
  }

  fn bit_and(&self, other: &Self) -> Self {
    self.combine_with(other, |l, r| l.and_with(r))
  }

  fn bit_or(&self, other: &Self) -> Self {
    self.combine_with(other, |l, r| l.or_with(r))
  }

  fn bit_xor(&self, other: &Self) -> Self {
    self.combine_with(other, |l, r| l.xor_with(r))
  }

  fn bit_and_assign(&self, other: &Self) {
    self.with_pair_from(other, |l, r| l.and_with(r));
  }

  fn bit_or_assign(&self, other: &Self) {
    self.with_pair_from(other, |l, r| l.or_with(r));
  }

  fn bit_xor_assign(&self, other: &Self) {
    self.with_pair_from(other, |l, r| l.xor_with(r));
  }
}
