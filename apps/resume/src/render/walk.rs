//! Generic document walk shared by renderers.
//!
//! `walk` fixes the traversal order (identity fields, then sections in
//! document order, entries in order, items in order) and skips absent
//! identity fields. Renderers only decide what each visit emits.

use crate::models::{Entry, Resume, Section, SectionBody};

pub trait ResumeVisitor {
    /// A present identity field (`name`, `address`, `email`, `phone`).
    fn identity(&mut self, _field: &'static str, _value: &str) {}

    fn enter_section(&mut self, _section: &Section) {}

    fn leave_section(&mut self, _section: &Section) {}

    fn enter_entry(&mut self, _entry: &Entry) {}

    fn leave_entry(&mut self, _entry: &Entry) {}

    /// A list item, either directly under a section or under an entry.
    fn item(&mut self, _text: &str) {}
}

pub fn walk<V: ResumeVisitor + ?Sized>(resume: &Resume, visitor: &mut V) {
    for (field, value) in resume.identity() {
        if let Some(value) = value {
            visitor.identity(field, value);
        }
    }

    for section in &resume.sections {
        visitor.enter_section(section);
        match &section.body {
            SectionBody::List(list) => {
                for item in list.iter() {
                    visitor.item(item);
                }
            }
            SectionBody::Entries(entries) => {
                for entry in entries {
                    visitor.enter_entry(entry);
                    for item in entry.list.iter().flat_map(|l| l.iter()) {
                        visitor.item(item);
                    }
                    visitor.leave_entry(entry);
                }
            }
        }
        visitor.leave_section(section);
    }
}
