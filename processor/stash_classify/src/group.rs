//! Grouping by declaring type and parent-link resolution.

use stash_types::{TypeId, TypeSystem};

use crate::{AttributeDescriptor, ClassDescriptor, ErasureIndex};

/// One declaring class together with its accepted attributes.
///
/// Attribute order preserves batch order, so repeated runs generate the
/// same handler bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroup {
    pub class: ClassDescriptor,
    pub attributes: Vec<AttributeDescriptor>,
}

/// Classification result: every declaring class mapped to its attributes.
///
/// Keys are unique up to erased-type equality and iterate in first-
/// appearance order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassMap {
    groups: Vec<ClassGroup>,
}

impl ClassMap {
    /// Look up the group whose key erases to the same type as `ty`.
    pub fn get<T: TypeSystem>(&self, types: &T, ty: TypeId) -> Option<&ClassGroup> {
        let erased = types.erase(ty);
        self.groups
            .iter()
            .find(|group| types.types_equal(types.erase(group.class.ty), erased))
    }

    /// Iterate groups in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassGroup> {
        self.groups.iter()
    }

    /// Number of declaring classes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether the batch produced any groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for ClassMap {
    type Item = ClassGroup;
    type IntoIter = std::vec::IntoIter<ClassGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClassMap {
    type Item = &'a ClassGroup;
    type IntoIter = std::slice::Iter<'a, ClassGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group descriptors by erased declaring type and resolve parent links.
///
/// Two descriptors join the same group when their declaring types erase to
/// semantically equal types, so generic instantiations collapse onto the
/// raw class. The parent link is resolved once, when a group is first
/// created.
pub(crate) fn group<T: TypeSystem>(
    types: &T,
    index: &ErasureIndex,
    attributes: Vec<AttributeDescriptor>,
) -> ClassMap {
    let mut map = ClassMap::default();

    for attribute in attributes {
        let erased = types.erase(attribute.declaring_type);
        if let Some(existing) = map
            .groups
            .iter_mut()
            .find(|group| types.types_equal(types.erase(group.class.ty), erased))
        {
            existing.attributes.push(attribute);
            continue;
        }

        let parent = find_parent_qualified_name(types, index, attribute.declaring_type);
        tracing::trace!(
            class = types.qualified_name_of(attribute.declaring_type),
            parent = parent.as_deref(),
            "new class group"
        );
        let class = ClassDescriptor::from_type(types, attribute.declaring_type, parent);
        map.groups.push(ClassGroup {
            class,
            attributes: vec![attribute],
        });
    }

    map
}

/// Walk the supertype chain and return the fully-qualified name of the
/// first ancestor whose erasure is in the membership universe.
///
/// Ancestors owning no accepted attributes are skipped transparently; a
/// chain that exhausts without a member resolves to `None`.
fn find_parent_qualified_name<T: TypeSystem>(
    types: &T,
    index: &ErasureIndex,
    ty: TypeId,
) -> Option<String> {
    let mut current = ty;
    loop {
        let candidate = types.super_type_of(current)?;
        if index.contains(types, candidate) {
            return Some(types.qualified_name_of(candidate).to_owned());
        }
        current = candidate;
    }
}
