pub mod kind;
pub mod registry;
mod types;


pub use kind::{Kind, WordSize};
pub use registry::TypeRegistry;
pub use types::{DeclSite, TypeDescriptor};
