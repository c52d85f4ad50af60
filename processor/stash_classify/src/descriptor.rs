//! Descriptor types handed to the downstream generator.

use stash_types::{DeclId, TypeId, TypeSystem};

/// A single accepted annotated member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Simple name of the member.
    pub name: String,
    /// The member's own type.
    pub ty: TypeId,
    /// Declaring type, kept only as a lookup key for grouping.
    pub declaring_type: TypeId,
}

impl AttributeDescriptor {
    /// Build the descriptor for an accepted declaration.
    ///
    /// Total over the filtered batch: every query here is infallible.
    pub(crate) fn from_decl<T: TypeSystem>(types: &T, decl: DeclId) -> Self {
        AttributeDescriptor {
            name: types.name_of(decl).to_owned(),
            ty: types.type_of(decl),
            declaring_type: types.enclosing_type_of(decl),
        }
    }
}

/// A declaring class that owns at least one accepted attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Package qualifier of the declaring type; empty for the default
    /// package.
    pub package_name: String,
    /// Package-relative name with nesting flattened (`Outer$Inner`), the
    /// identifier used for the generated handler.
    pub binary_name: String,
    /// Package-relative name with nesting preserved (`Outer.Inner`).
    pub relative_name: String,
    /// Fully-qualified name of the nearest ancestor that also owns
    /// accepted attributes, if any.
    pub parent_qualified_name: Option<String>,
    /// Handle to the declaring type, identity only.
    pub ty: TypeId,
}

impl ClassDescriptor {
    /// Split the type's qualified name into its package-relative forms and
    /// attach the already-resolved parent link.
    pub(crate) fn from_type<T: TypeSystem>(
        types: &T,
        ty: TypeId,
        parent_qualified_name: Option<String>,
    ) -> Self {
        let package = types.package_of(ty);
        let qualified = types.qualified_name_of(ty);
        // Default-package types have nothing to strip.
        let relative = qualified
            .strip_prefix(package)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(qualified);

        ClassDescriptor {
            package_name: package.to_owned(),
            binary_name: relative.replace('.', "$"),
            relative_name: relative.to_owned(),
            parent_qualified_name,
            ty,
        }
    }
}
