mod bit_vector;
mod container_ops;
mod hash;
mod ordered;
mod push_pop;
mod sequence;

pub use self::{bit_vector::*, container_ops::*, hash::*, ordered::*, push_pop::*, sequence::*};
pub(crate) use self::ordered::is_valid_range;
