pub mod hook_name;
pub mod key;
pub mod request;

pub use hook_name::HookName;
pub use key::NormalizedKey;
pub use request::{HookRequest, ResolvedCommand};
