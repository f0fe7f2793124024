use core::fmt;

use crate::{types::TypeDescriptor, values::value::Value};

/// A value paired with the language type it was produced at.
///
/// Objects are immutable: operators always return a fresh Object. The type
/// lives in the registry's arena; the Object only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Object<'t> {
    pub value: Value,
    pub ty: &'t TypeDescriptor<'t>,
}

impl<'t> Object<'t> {
    pub fn new(value: Value, ty: &'t TypeDescriptor<'t>) -> Self {
        Self { value, ty }
    }

    pub fn is_untyped(&self) -> bool {
        self.ty.is_untyped()
    }

    pub fn is_untyped_nil(&self) -> bool {
        self.ty.is_untyped_nil()
    }
}

impl fmt::Display for Object<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.ty, self.value)
    }
}
