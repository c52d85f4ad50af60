//! Member classification and hierarchy linking.
//!
//! Given a batch of annotated member declarations, the classifier validates
//! each against the modifier policy, groups the survivors by declaring
//! type, and links every declaring type to the nearest ancestor that also
//! owns annotated members in the same batch. The downstream generator
//! consumes the resulting [`ClassMap`] to emit one handler per class, with
//! each handler delegating to its parent link's handler so state saving
//! composes across inheritance.
//!
//! The pipeline runs in five stages, strictly forward:
//!
//! 1. modifier policy filter (rejects are reported and dropped)
//! 2. attribute descriptor construction
//! 3. erased declaring-type universe
//! 4. grouping by erased declaring type
//! 5. ancestor resolution against the universe
//!
//! Stage 5 consults the complete universe from stage 3, so the whole batch
//! is materialized before any parent link is resolved.

mod descriptor;
mod erasure;
mod filter;
mod group;

pub use descriptor::{AttributeDescriptor, ClassDescriptor};
pub use erasure::ErasureIndex;
pub use group::{ClassGroup, ClassMap};

use stash_diagnostic::DiagnosticQueue;
use stash_types::{DeclId, TypeSystem};

/// Batch classifier over one processing round.
///
/// Borrows the host's type system and a diagnostic queue for the duration
/// of the batch; nothing is cached across calls.
pub struct Classifier<'a, T: TypeSystem> {
    types: &'a T,
    diagnostics: &'a mut DiagnosticQueue,
}

impl<'a, T: TypeSystem> Classifier<'a, T> {
    /// Create a classifier for one batch.
    pub fn new(types: &'a T, diagnostics: &'a mut DiagnosticQueue) -> Self {
        Classifier { types, diagnostics }
    }

    /// Classify a batch of annotated member declarations.
    ///
    /// Declarations failing the modifier policy are reported and dropped;
    /// the rest always produces a map, possibly empty. Per-member
    /// rejection never fails the batch.
    pub fn classify(&mut self, decls: &[DeclId]) -> ClassMap {
        tracing::debug!(batch = decls.len(), "classifying annotated members");

        let mut attributes = Vec::with_capacity(decls.len());
        for &decl in decls {
            if filter::check(self.types, self.diagnostics, decl) {
                attributes.push(AttributeDescriptor::from_decl(self.types, decl));
            }
        }

        let index = ErasureIndex::build(self.types, &attributes);
        let map = group::group(self.types, &index, attributes);

        tracing::debug!(classes = map.len(), "classification complete");
        map
    }
}

/// One-shot convenience wrapper around [`Classifier`].
pub fn classify<T: TypeSystem>(
    types: &T,
    diagnostics: &mut DiagnosticQueue,
    decls: &[DeclId],
) -> ClassMap {
    Classifier::new(types, diagnostics).classify(decls)
}

#[cfg(test)]
mod tests;
