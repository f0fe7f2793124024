pub mod constant;
pub mod object;
pub mod value;

pub use constant::Constant;
pub use object::Object;
pub use value::{Handle, Value};
