pub mod config;
pub mod roles;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ApiConfig, AppConfig, RoleOverride, UiConfig};
pub use roles::{Role, RoleProfile, RoleRegistry, UnknownRole};
pub use session::{KeyMismatch, Session, SessionStorage, SignIn};
