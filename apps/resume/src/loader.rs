use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::ResumeError;
use crate::models::Resume;
use crate::parser::{parse_str, Diagnostic};

/// Reads a résumé file fully into memory and validates it.
///
/// Diagnostics land in `diagnostics` even when the parse fails.
pub fn load_resume(path: &Path, diagnostics: &mut Vec<Diagnostic>) -> Result<Resume, ResumeError> {
    debug!("Reading {}", path.display());

    let xml = fs::read_to_string(path).map_err(|source| ResumeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(&xml, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"<resume><name>A. Smith</name><section title="Skills"><list><item>Go</item></list></section></resume>"#
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        let resume = load_resume(file.path(), &mut diagnostics).unwrap();
        assert_eq!(resume.name.as_deref(), Some("A. Smith"));
        assert_eq!(resume.sections.len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.xml");

        let err = load_resume(&path, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ResumeError::Io { .. }));
        assert!(err.to_string().contains("resume.xml"));
    }

    #[test]
    fn test_schema_error_propagates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<resume>\n<section>\n</section>\n</resume>").unwrap();

        let err = load_resume(file.path(), &mut Vec::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "XML error at line 2: section element must have a title attribute"
        );
    }

    #[test]
    fn test_warnings_before_fatal_error_reach_caller() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<resume>\n<foo/>\n<section>\n</section>\n</resume>").unwrap();

        let mut diagnostics = Vec::new();
        let err = load_resume(file.path(), &mut diagnostics).unwrap_err();

        assert!(matches!(err, ResumeError::Schema(_)));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "XML error at line 2: Unrecognized element <foo>"
        );
    }
}
