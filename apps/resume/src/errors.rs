use std::path::PathBuf;

use thiserror::Error;

/// Fatal violation of the résumé document shape.
///
/// `line` is the 1-based source line of the offending element. It is `None`
/// only for document-level failures such as a wrong root element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{message}", line_prefix(.line))]
pub struct SchemaError {
    pub line: Option<u32>,
    pub message: String,
}

impl SchemaError {
    pub fn at(line: u32, message: impl Into<String>) -> Self {
        SchemaError {
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn document(message: impl Into<String>) -> Self {
        SchemaError {
            line: None,
            message: message.into(),
        }
    }
}

fn line_prefix(line: &Option<u32>) -> String {
    match line {
        Some(line) => format!("XML error at line {line}: "),
        None => String::new(),
    }
}

/// Application-level error type covering everything between the input file
/// and the rendered output.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_with_line() {
        let err = SchemaError::at(7, "section element must have a title attribute");
        assert_eq!(
            err.to_string(),
            "XML error at line 7: section element must have a title attribute"
        );
    }

    #[test]
    fn test_schema_error_without_line() {
        let err = SchemaError::document("root element must be of type resume");
        assert_eq!(err.line, None);
        assert_eq!(err.to_string(), "root element must be of type resume");
    }

    #[test]
    fn test_schema_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SchemaError::at(2, "bad"));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "XML error at line 2: bad");
    }

    #[test]
    fn test_resume_error_schema_is_transparent() {
        let err: ResumeError = SchemaError::at(3, "boom").into();
        assert_eq!(err.to_string(), "XML error at line 3: boom");
    }

    #[test]
    fn test_unknown_format_message() {
        let err = ResumeError::UnknownFormat("pdf".to_string());
        assert!(err.to_string().contains("'pdf'"));
    }
}
