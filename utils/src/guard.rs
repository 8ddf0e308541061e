mod dual_guard;
mod guard_backend;
mod guard_handle;
mod instance_id;

pub use self::{dual_guard::*, guard_backend::*, guard_handle::*, instance_id::*};
