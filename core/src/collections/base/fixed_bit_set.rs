use std::fmt::{Display, Formatter};
use std::str::FromStr;

use synced_collections_utils_rs::CollectionError;

use crate::families::{BitVectorOps, ContainerOps};

const WORD_BITS: usize = u64::BITS as usize;

/// A bit vector of exactly `N` bits packed into 64-bit words.<br/>
/// `N` ビット固定幅のビットベクタ。
///
/// Bits above `N` in the last word are kept at zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedBitSet<const N: usize> {
  words: Vec<u64>,
}

impl<const N: usize> FixedBitSet<N> {
  const WORDS: usize = N.div_ceil(WORD_BITS);

  pub fn new() -> Self {
    Self {
      words: vec![0; Self::WORDS],
    }
  }

  /// The low `N` bits of `value`.
  pub fn from_u64(value: u64) -> Self {
    let mut bits = Self::new();
    if let Some(word) = bits.words.first_mut() {
      *word = value;
    }
    bits.mask_tail();
    bits
  }

  pub fn width(&self) -> usize {
    N
  }

  fn mask_tail(&mut self) {
    let used = N % WORD_BITS;
    if used != 0 {
      if let Some(last) = self.words.last_mut() {
        *last &= (1u64 << used) - 1;
      }
    }
  }

  fn locate(pos: usize) -> Result<(usize, u64), CollectionError> {
    CollectionError::check_index(pos, N)?;
    Ok((pos / WORD_BITS, 1u64 << (pos % WORD_BITS)))
  }
}

impl<const N: usize> Default for FixedBitSet<N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> From<u64> for FixedBitSet<N> {
  fn from(value: u64) -> Self {
    Self::from_u64(value)
  }
}

impl<const N: usize> ContainerOps for FixedBitSet<N> {
  type Item = bool;

  fn len(&self) -> usize {
    N
  }

  /// Resets every bit; the width never changes.
  fn clear(&mut self) {
    self.words.iter_mut().for_each(|word| *word = 0);
  }

  fn max_size(&self) -> usize {
    N
  }
}

impl<const N: usize> BitVectorOps for FixedBitSet<N> {
  fn test(&self, pos: usize) -> Result<bool, CollectionError> {
    let (word, mask) = Self::locate(pos)?;
    Ok(self.words[word] & mask != 0)
  }

  fn set(&mut self, pos: usize, value: bool) -> Result<(), CollectionError> {
    let (word, mask) = Self::locate(pos)?;
    if value {
      self.words[word] |= mask;
    } else {
      self.words[word] &= !mask;
    }
    Ok(())
  }

  fn flip(&mut self, pos: usize) -> Result<(), CollectionError> {
    let (word, mask) = Self::locate(pos)?;
    self.words[word] ^= mask;
    Ok(())
  }

  fn set_all(&mut self) {
    self.words.iter_mut().for_each(|word| *word = u64::MAX);
    self.mask_tail();
  }

  fn flip_all(&mut self) {
    self.words.iter_mut().for_each(|word| *word = !*word);
    self.mask_tail();
  }

  fn count_ones(&self) -> usize {
    self.words.iter().map(|word| word.count_ones() as usize).sum()
  }

  fn to_u64(&self) -> Result<u64, CollectionError> {
    if self.words.iter().skip(1).any(|word| *word != 0) {
      return Err(CollectionError::Overflow { width: WORD_BITS });
    }
    Ok(self.words.first().copied().unwrap_or(0))
  }

  fn to_bit_string(&self) -> String {
    (0..N)
      .rev()
      .map(|pos| {
        if self.words[pos / WORD_BITS] & (1u64 << (pos % WORD_BITS)) != 0 {
          '1'
        } else {
          '0'
        }
      })
      .collect()
  }

  fn shift_left(&mut self, n: usize) {
    if n >= N {
      self.clear();
      return;
    }
    let (word_shift, bit_shift) = (n / WORD_BITS, n % WORD_BITS);
    for i in (0..self.words.len()).rev() {
      let mut word = 0;
      if i >= word_shift {
        word = self.words[i - word_shift] << bit_shift;
        if bit_shift != 0 && i > word_shift {
          word |= self.words[i - word_shift - 1] >> (WORD_BITS - bit_shift);
        }
      }
      self.words[i] = word;
    }
    self.mask_tail();
  }

  fn shift_right(&mut self, n: usize) {
    if n >= N {
      self.clear();
      return;
    }
    let (word_shift, bit_shift) = (n / WORD_BITS, n % WORD_BITS);
    let len = self.words.len();
    for i in 0..len {
      let mut word = 0;
      if i + word_shift < len {
        word = self.words[i + word_shift] >> bit_shift;
        if bit_shift != 0 && i + word_shift + 1 < len {
          word |= self.words[i + word_shift + 1] << (WORD_BITS - bit_shift);
        }
      }
      self.words[i] = word;
    }
  }

  fn and_with(&mut self, other: &Self) {
    self.words.iter_mut().zip(&other.words).for_each(|(l, r)| *l &= r);
  }

  fn or_with(&mut self, other: &Self) {
    self.words.iter_mut().zip(&other.words).for_each(|(l, r)| *l |= r);
  }

  fn xor_with(&mut self, other: &Self) {
    self.words.iter_mut().zip(&other.words).for_each(|(l, r)| *l ^= r);
  }
}

impl<const N: usize> Display for FixedBitSet<N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.to_bit_string())
  }
}

/// Parses `'0'`/`'1'` characters, most significant first. Shorter strings fill the low bits.
impl<const N: usize> FromStr for FixedBitSet<N> {
  type Err = CollectionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let chars = s.chars().collect::<Vec<_>>();
    if chars.len() > N {
      return Err(CollectionError::Overflow { width: N });
    }
    let mut bits = Self::new();
    for (position, found) in chars.iter().copied().enumerate() {
      let pos = chars.len() - 1 - position;
      match found {
        '0' => {}
        '1' => bits.set(pos, true)?,
        _ => return Err(CollectionError::InvalidBitString { position, found }),
      }
    }
    Ok(bits)
  }
}
