use bumpalo::Bump;
use core::cell::{Ref, RefCell};
use hashbrown::HashMap;

use crate::{
    evaluator::InternalError,
    types::{
        kind::Kind,
        types::{DeclSite, TypeDescriptor},
    },
    values::{Object, Value},
};

/// Program-wide store of type descriptors.
///
/// Descriptors are interned in an arena, so every structurally equal
/// descriptor is the same allocation and [`TypeRegistry::identical`] reduces
/// to a pointer comparison in the common case. Named descriptors carry their
/// declaration site, which keeps equally named declarations apart.
pub struct TypeRegistry<'a> {
    arena: &'a Bump,
    interned_strs: RefCell<HashMap<&'a str, &'a str>>,
    interned: RefCell<HashMap<TypeDescriptor<'a>, &'a TypeDescriptor<'a>>>,
}

impl<'a> TypeRegistry<'a> {
    pub fn new(arena: &'a Bump) -> &'a Self {
        arena.alloc(Self {
            arena,
            interned_strs: RefCell::new(HashMap::new()),
            interned: RefCell::new(HashMap::new()),
        })
    }

    fn intern_str(&self, s: &str) -> &'a str {
        if let Some(&interned_str) = self.interned_strs.borrow().get(s) {
            return interned_str;
        }
        let arena_str = self.arena.alloc_str(s);
        self.interned_strs.borrow_mut().insert(arena_str, arena_str);
        arena_str
    }

    fn intern_map(&self) -> Ref<'_, HashMap<TypeDescriptor<'a>, &'a TypeDescriptor<'a>>> {
        self.interned.borrow()
    }

    fn intern(&self, ty: TypeDescriptor<'a>) -> &'a TypeDescriptor<'a> {
        if let Some(&interned_ty) = self.intern_map().get(&ty) {
            return interned_ty;
        }
        let arena_ty = self.arena.alloc(ty.clone());
        self.interned.borrow_mut().insert(ty, arena_ty);
        arena_ty
    }

    // Factory methods for types.
    pub fn basic(&self, kind: Kind) -> &'a TypeDescriptor<'a> {
        self.intern(TypeDescriptor::Basic(kind))
    }
    pub fn bool(&self) -> &'a TypeDescriptor<'a> {
        self.basic(Kind::Bool)
    }
    pub fn int(&self) -> &'a TypeDescriptor<'a> {
        self.basic(Kind::Int)
    }
    pub fn float64(&self) -> &'a TypeDescriptor<'a> {
        self.basic(Kind::Float64)
    }
    pub fn string(&self) -> &'a TypeDescriptor<'a> {
        self.basic(Kind::String)
    }
    pub fn untyped_nil(&self) -> &'a TypeDescriptor<'a> {
        self.basic(Kind::UntypedNil)
    }

    pub fn named(
        &self,
        name: &str,
        site: DeclSite<'_>,
        underlying: &'a TypeDescriptor<'a>,
    ) -> &'a TypeDescriptor<'a> {
        let site = DeclSite {
            package: self.intern_str(site.package),
            offset: site.offset,
        };
        self.intern(TypeDescriptor::Named {
            name: self.intern_str(name),
            site,
            underlying,
        })
    }

    pub fn pointer(&self, elem: &'a TypeDescriptor<'a>) -> &'a TypeDescriptor<'a> {
        self.intern(TypeDescriptor::Pointer(elem))
    }

    pub fn slice(&self, elem: &'a TypeDescriptor<'a>) -> &'a TypeDescriptor<'a> {
        self.intern(TypeDescriptor::Slice(elem))
    }

    pub fn map(
        &self,
        key: &'a TypeDescriptor<'a>,
        value: &'a TypeDescriptor<'a>,
    ) -> &'a TypeDescriptor<'a> {
        self.intern(TypeDescriptor::Map(key, value))
    }

    pub fn chan(&self, elem: &'a TypeDescriptor<'a>) -> &'a TypeDescriptor<'a> {
        self.intern(TypeDescriptor::Chan(elem))
    }

    pub fn func(
        &self,
        params: &[&'a TypeDescriptor<'a>],
        results: &[&'a TypeDescriptor<'a>],
    ) -> &'a TypeDescriptor<'a> {
        self.intern(TypeDescriptor::Func {
            params: self.arena.alloc_slice_copy(params),
            results: self.arena.alloc_slice_copy(results),
        })
    }

    pub fn interface(&self) -> &'a TypeDescriptor<'a> {
        self.intern(TypeDescriptor::Interface)
    }

    // ============================================================================
    // Queries used by the operator engine
    // ============================================================================

    /// Resolve a descriptor to the kind its values are stored as.
    pub fn storage_kind(&self, ty: &TypeDescriptor<'_>) -> Kind {
        ty.storage_kind()
    }

    /// A fresh zero-valued slot of `kind`, ready to be written by an operator.
    pub fn allocate_zero(&self, kind: Kind) -> Result<Value, InternalError> {
        Value::zero(kind.storage()).ok_or(InternalError::NoStorage { kind })
    }

    /// Whether two descriptors denote the same type.
    pub fn identical(&self, a: &TypeDescriptor<'a>, b: &TypeDescriptor<'a>) -> bool {
        core::ptr::eq(a, b) || a == b
    }

    /// Whether a value of type `value` may be assigned to a variable of type
    /// `target`.
    pub fn assignable_to(
        &self,
        value: &'a TypeDescriptor<'a>,
        target: &'a TypeDescriptor<'a>,
    ) -> bool {
        if self.identical(value, target) {
            return true;
        }

        // Identical underlying types, at least one of them not named.
        if (!value.is_named() || !target.is_named())
            && self.identical(value.underlying(), target.underlying())
        {
            return true;
        }

        let target_kind = target.storage_kind();

        // Every type satisfies the empty interface.
        if target_kind == Kind::Interface {
            return true;
        }

        match value {
            TypeDescriptor::Basic(Kind::UntypedNil) => target_kind.is_reference(),
            TypeDescriptor::Basic(Kind::UntypedBool) => target_kind == Kind::Bool,
            TypeDescriptor::Basic(Kind::UntypedString) => target_kind == Kind::String,
            // Numeric constants fit any numeric type by kind; whether the
            // value is representable there is checked when it is converted.
            TypeDescriptor::Basic(
                Kind::UntypedInt | Kind::UntypedRune | Kind::UntypedFloat | Kind::UntypedComplex,
            ) => target_kind.is_integer() || target_kind.is_float() || target_kind.is_complex(),
            _ => false,
        }
    }

    /// Pair a value with its type, checking that the value's representation
    /// is the one the type is stored as.
    pub fn object(
        &self,
        ty: &'a TypeDescriptor<'a>,
        value: Value,
    ) -> Result<Object<'a>, InternalError> {
        let consistent = match (ty, &value) {
            (TypeDescriptor::Basic(Kind::UntypedNil), Value::Constant(c)) => {
                *c == crate::values::Constant::Nil
            }
            (_, Value::Constant(_)) => ty.is_untyped(),
            _ => value.kind() == Some(ty.storage_kind()),
        };
        if !consistent {
            return Err(InternalError::RepresentationMismatch {
                ty: ty.to_string(),
                value: value.to_string(),
            });
        }
        Ok(Object::new(value, ty))
    }
}

impl core::fmt::Debug for TypeRegistry<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.interned.borrow().len())
            .finish()
    }
}
