use crate::errors::ResumeError;
use crate::models::Resume;
use crate::render::Renderer;

/// Pretty-printed JSON of the document model. Absent fields are omitted,
/// section bodies are keyed `list` or `entries`.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, resume: &Resume) -> Result<String, ResumeError> {
        let mut out = serde_json::to_string_pretty(resume)?;
        out.push('\n');
        Ok(out)
    }
}
