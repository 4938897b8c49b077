// Résumé XML parsing: `roxmltree` builds the element tree, `schema` validates
// it into the document model. Parsing is all-or-nothing; diagnostics for
// unrecognized elements go to a caller-owned list, so the ones raised before
// a fatal error are still there when the parse fails.

pub mod diagnostics;
pub mod schema;
pub mod tags;

use tracing::info;

use crate::errors::{ResumeError, SchemaError};
use crate::models::Resume;

pub use diagnostics::Diagnostic;

/// Validates an already-parsed XML document, appending diagnostics to `diagnostics`.
pub fn parse_document(
    doc: &roxmltree::Document,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Resume, SchemaError> {
    schema::parse_resume(doc.root_element(), diagnostics)
}

/// Parses raw XML text into a validated résumé, appending diagnostics to `diagnostics`.
pub fn parse_str(xml: &str, diagnostics: &mut Vec<Diagnostic>) -> Result<Resume, ResumeError> {
    let doc = roxmltree::Document::parse(xml)?;
    let resume = parse_document(&doc, diagnostics)?;

    info!(
        sections = resume.sections.len(),
        diagnostics = diagnostics.len(),
        "Parsed resume"
    );

    Ok(resume)
}
