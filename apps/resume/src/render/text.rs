//! Plain-text renderer.
//!
//! Section titles are underlined with `=`, entry titles with `-`, one
//! character per character of the title. List items are `  * ` bullets.

use crate::errors::ResumeError;
use crate::models::{Entry, Resume, Section};
use crate::render::walk::{walk, ResumeVisitor};
use crate::render::Renderer;

const SECTION_RULE: char = '=';
const ENTRY_RULE: char = '-';
const BULLET: &str = "  * ";

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, resume: &Resume) -> Result<String, ResumeError> {
        Ok(render_text(resume))
    }
}

/// Renders the résumé as newline-terminated plain-text lines.
pub fn render_text(resume: &Resume) -> String {
    let mut lines = LineSink::default();
    walk(resume, &mut lines);
    lines.finish()
}

fn underline(title: &str, rule: char) -> String {
    std::iter::repeat(rule).take(title.chars().count()).collect()
}

#[derive(Default)]
struct LineSink {
    out: String,
}

impl LineSink {
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

impl ResumeVisitor for LineSink {
    fn identity(&mut self, _field: &'static str, value: &str) {
        self.line(value);
    }

    fn enter_section(&mut self, section: &Section) {
        self.line("");
        self.line(&section.title);
        self.line(&underline(&section.title, SECTION_RULE));
    }

    fn enter_entry(&mut self, entry: &Entry) {
        self.line("");
        self.line(&entry.title);
        self.line(&underline(&entry.title, ENTRY_RULE));

        if let Some(organization) = &entry.organization {
            self.line(organization);
        }
        if let Some(location) = &entry.location {
            self.line(location);
        }
        if let Some(dates) = entry.date_range() {
            self.line(&dates);
        }
    }

    fn item(&mut self, text: &str) {
        self.line(&format!("{BULLET}{text}"));
    }
}
