//! Guarded containers, one alias per category, with the operations specific to it.

mod base;
mod bit_set;
mod deque;
mod hash_map;
mod hash_set;
mod list;
mod ordered_map;
mod ordered_set;
mod priority_queue;
mod queue;
mod stack;
mod vector;

pub use self::{
  base::*, bit_set::*, deque::*, hash_map::*, hash_set::*, list::*, ordered_map::*, ordered_set::*, priority_queue::*,
  queue::*, stack::*, vector::*,
};
