use core::fmt::{self, Display};

use crate::types::kind::Kind;

/// Where a named type was declared. Together with the name it gives a named
/// type its identity: two declarations of `Celsius` in different scopes are
/// different types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DeclSite<'a> {
    pub package: &'a str,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor<'a> {
    // Predeclared types, including the untyped constant types.
    Basic(Kind),

    // Declared types.
    Named {
        name: &'a str,
        site: DeclSite<'a>,
        underlying: &'a TypeDescriptor<'a>,
    },

    // Reference types.
    Pointer(&'a TypeDescriptor<'a>),
    Slice(&'a TypeDescriptor<'a>),
    Map(&'a TypeDescriptor<'a>, &'a TypeDescriptor<'a>),
    Chan(&'a TypeDescriptor<'a>),
    Func {
        params: &'a [&'a TypeDescriptor<'a>],
        results: &'a [&'a TypeDescriptor<'a>],
    },
    Interface,
}

impl<'a> TypeDescriptor<'a> {
    pub fn is_named(&self) -> bool {
        matches!(self, TypeDescriptor::Named { .. })
    }

    /// Follows named types down to the first unnamed descriptor.
    pub fn underlying(&'a self) -> &'a TypeDescriptor<'a> {
        let mut ty = self;
        while let TypeDescriptor::Named { underlying, .. } = ty {
            ty = underlying;
        }
        ty
    }

    /// The storage kind of this descriptor.
    pub fn storage_kind(&self) -> Kind {
        match self {
            TypeDescriptor::Basic(kind) => kind.storage(),
            TypeDescriptor::Named { underlying, .. } => underlying.storage_kind(),
            TypeDescriptor::Pointer(_) => Kind::Pointer,
            TypeDescriptor::Slice(_) => Kind::Slice,
            TypeDescriptor::Map(_, _) => Kind::Map,
            TypeDescriptor::Chan(_) => Kind::Chan,
            TypeDescriptor::Func { .. } => Kind::Func,
            TypeDescriptor::Interface => Kind::Interface,
        }
    }

    pub fn is_untyped(&self) -> bool {
        matches!(self, TypeDescriptor::Basic(kind) if kind.is_untyped())
    }

    pub fn is_untyped_nil(&self) -> bool {
        matches!(self, TypeDescriptor::Basic(Kind::UntypedNil))
    }
}

impl Display for TypeDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Basic(kind) => write!(f, "{}", kind),
            TypeDescriptor::Named { name, site, .. } => {
                if site.package.is_empty() {
                    write!(f, "{}", name)
                } else {
                    write!(f, "{}.{}", site.package, name)
                }
            }
            TypeDescriptor::Pointer(elem) => write!(f, "*{}", elem),
            TypeDescriptor::Slice(elem) => write!(f, "[]{}", elem),
            TypeDescriptor::Map(key, value) => write!(f, "map[{}]{}", key, value),
            TypeDescriptor::Chan(elem) => write!(f, "chan {}", elem),
            TypeDescriptor::Func { params, results } => {
                write!(f, "func(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ")")?;
                match results {
                    [] => Ok(()),
                    [single] => write!(f, " {}", single),
                    many => {
                        write!(f, " (")?;
                        for (i, result) in many.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{}", result)?;
                        }
                        write!(f, ")")
                    }
                }
            }
            TypeDescriptor::Interface => write!(f, "interface{{}}"),
        }
    }
}
