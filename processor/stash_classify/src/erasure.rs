//! Erased declaring-type membership universe.

use stash_types::{TypeId, TypeSystem};

use crate::AttributeDescriptor;

/// The set of erased declaring types across one batch.
///
/// This is the membership universe the ancestor walk consults: a supertype
/// is a parent link only if its erasure is in here. Semantic equality comes
/// from the type system, so membership is a linear probe over the erased
/// set rather than a hash lookup.
#[derive(Debug, Default)]
pub struct ErasureIndex {
    erased: Vec<TypeId>,
}

impl ErasureIndex {
    /// Collect the erasure of every descriptor's declaring type.
    ///
    /// Must see the whole batch: ancestor resolution consults the complete
    /// universe, so grouping cannot start before this finishes.
    pub fn build<T: TypeSystem>(types: &T, attributes: &[AttributeDescriptor]) -> Self {
        let mut index = ErasureIndex::default();
        for attribute in attributes {
            let erased = types.erase(attribute.declaring_type);
            if !index.contains_erased(types, erased) {
                index.erased.push(erased);
            }
        }
        index
    }

    /// Test whether `ty` erases to a member of the universe.
    ///
    /// Both sides are normalized: the query is erased before comparison.
    pub fn contains<T: TypeSystem>(&self, types: &T, ty: TypeId) -> bool {
        self.contains_erased(types, types.erase(ty))
    }

    /// Number of distinct erased declaring types.
    pub fn len(&self) -> usize {
        self.erased.len()
    }

    /// Check whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.erased.is_empty()
    }

    fn contains_erased<T: TypeSystem>(&self, types: &T, erased: TypeId) -> bool {
        self.erased
            .iter()
            .any(|&member| types.types_equal(member, erased))
    }
}
