pub mod error;
pub mod guard;

pub use error::CollectionError;
pub use guard::{
  read_pair, write_pair, write_read_pair, ExclusiveGuard, GuardBackend, GuardHandle, InstanceId, SharedExclusiveGuard,
};

pub mod prelude {
  pub use super::{CollectionError, ExclusiveGuard, GuardBackend, GuardHandle, InstanceId, SharedExclusiveGuard};
}
