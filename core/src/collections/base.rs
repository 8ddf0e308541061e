//! Base containers std does not provide, shaped after their std counterparts.

mod btree_multi_set;
mod fixed_bit_set;
mod hash_multi_map;
mod hash_multi_set;
mod queue;
mod stack;

pub use self::{btree_multi_set::*, fixed_bit_set::*, hash_multi_map::*, hash_multi_set::*, queue::*, stack::*};
