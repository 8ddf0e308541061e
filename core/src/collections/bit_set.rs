use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign};

use synced_collections_utils_rs::{ExclusiveGuard, GuardBackend};

use super::base::FixedBitSet;
use crate::families::BitVectorAdapter;
use crate::guarded::Guarded;

/// A fixed-width bit vector behind one guard.
///
/// `&a & &b`, `&a | &b` and `&a ^ &b` read both operands under both guards and
/// return a new instance. The assigning forms mutate the left operand, shifts included.
pub type GuardedBitSet<const N: usize, B = ExclusiveGuard<FixedBitSet<N>>> = Guarded<FixedBitSet<N>, B>;

impl<const N: usize, B> Guarded<FixedBitSet<N>, B>
where
  B: GuardBackend<FixedBitSet<N>>,
{
  pub fn from_u64(value: u64) -> Self {
    Self::from_container(FixedBitSet::from_u64(value))
  }
}

macro_rules! impl_binary_ops {
  ($($op:ident :: $method:ident => $adapter:ident, $assign_op:ident :: $assign_method:ident => $assign_adapter:ident;)*) => {
    $(
      impl<const N: usize, B> $op for &Guarded<FixedBitSet<N>, B>
      where
        B: GuardBackend<FixedBitSet<N>>,
      {
        type Output = Guarded<FixedBitSet<N>, B>;

        fn $method(self, rhs: Self) -> Self::Output {
          self.$adapter(rhs)
        }
      }

      impl<const N: usize, B> $op for Guarded<FixedBitSet<N>, B>
      where
        B: GuardBackend<FixedBitSet<N>>,
      {
        type Output = Self;

        fn $method(self, rhs: Self) -> Self::Output {
          self.$assign_adapter(&rhs);
          self
        }
      }

      impl<'a, const N: usize, B> $assign_op<&'a Guarded<FixedBitSet<N>, B>> for Guarded<FixedBitSet<N>, B>
      where
        B: GuardBackend<FixedBitSet<N>>,
      {
        fn $assign_method(&mut self, rhs: &'a Guarded<FixedBitSet<N>, B>) {
          self.$assign_adapter(rhs);
        }
      }
    )*
  };
}

impl_binary_ops! {
  BitAnd::bitand => bit_and, BitAndAssign::bitand_assign => bit_and_assign;
  BitOr::bitor => bit_or, BitOrAssign::bitor_assign => bit_or_assign;
  BitXor::bitxor => bit_xor, BitXorAssign::bitxor_assign => bit_xor_assign;
}

impl<const N: usize, B> Not for &Guarded<FixedBitSet<N>, B>
where
  B: GuardBackend<FixedBitSet<N>>,
{
  type Output = Guarded<FixedBitSet<N>, B>;

  fn not(self) -> Self::Output {
    self.complement()
  }
}

impl<const N: usize, B> Shl<usize> for &Guarded<FixedBitSet<N>, B>
where
  B: GuardBackend<FixedBitSet<N>>,
{
  type Output = Guarded<FixedBitSet<N>, B>;

  fn shl(self, n: usize) -> Self::Output {
    self.shifted_left(n)
  }
}

impl<const N: usize, B> Shr<usize> for &Guarded<FixedBitSet<N>, B>
where
  B: GuardBackend<FixedBitSet<N>>,
{
  type Output = Guarded<FixedBitSet<N>, B>;

  fn shr(self, n: usize) -> Self::Output {
    self.shifted_right(n)
  }
}

impl<const N: usize, B> ShlAssign<usize> for Guarded<FixedBitSet<N>, B>
where
  B: GuardBackend<FixedBitSet<N>>,
{
  fn shl_assign(&mut self, n: usize) {
    self.shift_left_assign(n);
  }
}

impl<const N: usize, B> ShrAssign<usize> for Guarded<FixedBitSet<N>, B>
where
  B: GuardBackend<FixedBitSet<N>>,
{
  fn shr_assign(&mut self, n: usize) {
    self.shift_right_assign(n);
  }
}
