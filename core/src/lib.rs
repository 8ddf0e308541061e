//! Thread-safe adapters over the standard containers.
//!
//! Every container lives inside a [`Guarded`] together with exactly one guard. Each
//! operation takes the guard, runs, and releases it before returning; operations on
//! two instances take both guards in instance-id order.

pub mod collections;
pub mod families;
pub mod guarded;

pub use collections::*;
pub use families::*;
pub use guarded::Guarded;
pub use synced_collections_utils_rs::{CollectionError, ExclusiveGuard, GuardBackend, InstanceId, SharedExclusiveGuard};

pub mod prelude {
  pub use crate::collections::*;
  pub use crate::families::{
    BitVectorAdapter, DoubleEndedAdapter, HashAdapter, OrderedAdapter, PriorityAdapter, PushPopAdapter,
    SequenceAdapter,
  };
  pub use crate::guarded::Guarded;
  pub use synced_collections_utils_rs::{CollectionError, ExclusiveGuard, SharedExclusiveGuard};
}
