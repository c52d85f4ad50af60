//! In-memory type model.
//!
//! [`TypeTable`] is the reference implementation of [`TypeSystem`]. Hosts
//! embedded in a real frontend adapt their own model to the trait instead;
//! the table serves drivers that already hold the hierarchy in hand, and
//! every test fixture in the workspace.
//!
//! Types and declarations are interned: handles are indices into flat
//! vectors, so `types_equal` is plain id equality here.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{DeclId, Modifiers, Span, TypeId, TypeSystem};

/// Error for misuse of [`TypeTable`] construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// `instantiate` was called with a base that is itself an instantiation.
    #[error("cannot instantiate `{base}`: it is already an instantiation")]
    InstantiateNonRaw {
        /// Qualified name of the rejected base type.
        base: String,
    },
}

struct TypeData {
    package: String,
    /// Dot-separated name relative to the package (`Outer.Inner`).
    relative: String,
    /// Cached `package.relative`, or just `relative` in the default package.
    qualified: String,
    super_type: Option<TypeId>,
    /// Raw type this is an instantiation of; `None` for raw types.
    raw: Option<TypeId>,
    /// Generic arguments of an instantiation; empty for raw types.
    args: Vec<TypeId>,
}

struct FieldData {
    name: String,
    ty: TypeId,
    owner: TypeId,
    modifiers: Modifiers,
    span: Span,
}

/// In-memory implementation of [`TypeSystem`].
#[derive(Default)]
pub struct TypeTable {
    types: Vec<TypeData>,
    fields: Vec<FieldData>,
    by_qualified_name: FxHashMap<String, TypeId>,
}

impl TypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a raw type.
    ///
    /// `relative` is the dot-separated name inside `package`; nested types
    /// are declared as `"Outer.Inner"`. Declaring a qualified name that
    /// already exists returns the existing handle unchanged.
    #[allow(clippy::cast_possible_truncation)]
    pub fn declare_type(
        &mut self,
        package: &str,
        relative: &str,
        super_type: Option<TypeId>,
    ) -> TypeId {
        let qualified = if package.is_empty() {
            relative.to_owned()
        } else {
            format!("{package}.{relative}")
        };
        if let Some(&existing) = self.by_qualified_name.get(&qualified) {
            return existing;
        }

        let id = TypeId::from_raw(self.types.len() as u32);
        self.by_qualified_name.insert(qualified.clone(), id);
        self.types.push(TypeData {
            package: package.to_owned(),
            relative: relative.to_owned(),
            qualified,
            super_type,
            raw: None,
            args: Vec::new(),
        });
        id
    }

    /// Create a generic instantiation of `base` with `args`.
    ///
    /// The instantiation shares the base's names and supertype and erases
    /// back to `base`. Instantiations are interned: the same base and
    /// argument list always yields the same handle.
    #[allow(clippy::cast_possible_truncation)]
    pub fn instantiate(&mut self, base: TypeId, args: &[TypeId]) -> Result<TypeId, TableError> {
        let base_data = self.type_data(base);
        if base_data.raw.is_some() {
            return Err(TableError::InstantiateNonRaw {
                base: base_data.qualified.clone(),
            });
        }

        if let Some(existing) = self
            .types
            .iter()
            .position(|data| data.raw == Some(base) && data.args == args)
        {
            return Ok(TypeId::from_raw(existing as u32));
        }

        let base_data = self.type_data(base);
        let data = TypeData {
            package: base_data.package.clone(),
            relative: base_data.relative.clone(),
            qualified: base_data.qualified.clone(),
            super_type: base_data.super_type,
            raw: Some(base),
            args: args.to_vec(),
        };
        let id = TypeId::from_raw(self.types.len() as u32);
        self.types.push(data);
        Ok(id)
    }

    /// Declare a member of `owner`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn declare_field(
        &mut self,
        owner: TypeId,
        name: &str,
        ty: TypeId,
        modifiers: Modifiers,
        span: Span,
    ) -> DeclId {
        let id = DeclId::from_raw(self.fields.len() as u32);
        self.fields.push(FieldData {
            name: name.to_owned(),
            ty,
            owner,
            modifiers,
            span,
        });
        id
    }

    /// Look up a type by its fully-qualified name.
    pub fn type_by_qualified_name(&self, qualified: &str) -> Option<TypeId> {
        self.by_qualified_name.get(qualified).copied()
    }

    fn type_data(&self, ty: TypeId) -> &TypeData {
        &self.types[ty.raw() as usize]
    }

    fn field_data(&self, decl: DeclId) -> &FieldData {
        &self.fields[decl.raw() as usize]
    }
}

impl TypeSystem for TypeTable {
    fn modifiers_of(&self, decl: DeclId) -> Modifiers {
        self.field_data(decl).modifiers
    }

    fn name_of(&self, decl: DeclId) -> &str {
        &self.field_data(decl).name
    }

    fn span_of(&self, decl: DeclId) -> Span {
        self.field_data(decl).span
    }

    fn type_of(&self, decl: DeclId) -> TypeId {
        self.field_data(decl).ty
    }

    fn enclosing_type_of(&self, decl: DeclId) -> TypeId {
        self.field_data(decl).owner
    }

    fn qualified_name_of(&self, ty: TypeId) -> &str {
        &self.type_data(ty).qualified
    }

    fn package_of(&self, ty: TypeId) -> &str {
        &self.type_data(ty).package
    }

    fn super_type_of(&self, ty: TypeId) -> Option<TypeId> {
        self.type_data(ty).super_type
    }

    fn erase(&self, ty: TypeId) -> TypeId {
        self.type_data(ty).raw.unwrap_or(ty)
    }

    fn types_equal(&self, a: TypeId, b: TypeId) -> bool {
        // Types are interned, so identity is semantic equality here.
        a == b
    }
}
