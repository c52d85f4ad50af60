//! Modifier policy over incoming declarations.

use stash_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use stash_types::{DeclId, Modifiers, TypeSystem};

/// Modifier set that makes a member acceptable: at least one of these must
/// be present.
const ACCEPTED: Modifiers = Modifiers::PRIVATE
    .union(Modifiers::STATIC)
    .union(Modifiers::FINAL);

/// Check one declaration against the modifier policy.
///
/// Rejections are reported to `diagnostics` and return `false`; the batch
/// keeps going either way.
// TODO: the diagnostic text and the accepted set disagree in polarity;
// confirm which side matches the annotation contract before touching either.
pub(crate) fn check<T: TypeSystem>(
    types: &T,
    diagnostics: &mut DiagnosticQueue,
    decl: DeclId,
) -> bool {
    let modifiers = types.modifiers_of(decl);
    let valid = modifiers.intersects(ACCEPTED);

    if !valid {
        tracing::trace!(name = types.name_of(decl), %modifiers, "rejected member");
        diagnostics.report(
            Diagnostic::error(ErrorCode::E0301)
                .with_message("field must not be private, static or final")
                .with_label(types.span_of(decl), "annotated here"),
        );
    }

    valid
}
