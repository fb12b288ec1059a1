use crate::models::Document;
use crate::roundtrip;

/// Validates parser output.
///
/// Asserts that:
/// - The document satisfies the data model invariants
/// - Its canonical text parses and serializes back to itself
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(document: &Document) {
    let violations = roundtrip::invariants(document);
    assert!(
        violations.is_empty(),
        "invariants violated: {}",
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    );

    let canonical = document.serialize();
    let rt = roundtrip::check(&canonical);
    assert!(
        rt.is_canonical,
        "canonical text is not a fixed point:\n{canonical}\n---\n{}",
        rt.canonical
    );
}
