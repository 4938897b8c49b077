//! Schema validator — maps the `roxmltree` element tree onto the résumé model.
//!
//! Each sub-parser owns one nesting level. It stages fields in a local builder
//! while iterating the element's children in document order, and freezes the
//! builder into the model type on return. The first constraint violation
//! aborts the parse; unrecognized elements only produce a `Diagnostic`.

use roxmltree::Node;
use tracing::debug;

use crate::errors::SchemaError;
use crate::models::{Entry, ItemList, Resume, Section, SectionBody};
use crate::parser::diagnostics::Diagnostic;
use crate::parser::tags::{EntryTag, ListTag, RootTag, SectionTag};

pub const ROOT_TAG: &str = "resume";

pub const MSG_ROOT_NOT_RESUME: &str = "root element must be of type resume";
pub const MSG_MISSING_TITLE: &str = "section element must have a title attribute";
pub const MSG_SECTION_LIST_NOT_ALONE: &str =
    "section cannot contain a list element and other elements";
pub const MSG_ENTRY_SECOND_LIST: &str = "entry element can contain no more than 1 list element";
pub const MSG_LIST_NON_ITEM: &str = "list elements can only contain elements of type item";
pub const MSG_ITEM_HAS_CHILDREN: &str = "item elements cannot contain other elements";

// ────────────────────────────────────────────────────────────────────────────
// Node helpers
// ────────────────────────────────────────────────────────────────────────────

/// 1-based source line of the element's start tag.
pub fn line_of(node: Node) -> u32 {
    node.document().text_pos_at(node.range().start).row
}

fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

fn text_of(node: Node) -> Option<String> {
    node.text().map(str::to_string)
}

fn require_title(node: Node) -> Result<String, SchemaError> {
    node.attribute("title")
        .map(str::to_string)
        .ok_or_else(|| SchemaError::at(line_of(node), MSG_MISSING_TITLE))
}

fn unrecognized(node: Node, diagnostics: &mut Vec<Diagnostic>) {
    let diagnostic = Diagnostic::unrecognized(line_of(node), node.tag_name().name());
    debug!("{diagnostic}");
    diagnostics.push(diagnostic);
}

// ────────────────────────────────────────────────────────────────────────────
// Root
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ResumeBuilder {
    name: Option<String>,
    address: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    sections: Vec<Section>,
}

impl ResumeBuilder {
    fn build(self) -> Resume {
        Resume {
            name: self.name,
            address: self.address,
            email: self.email,
            phone: self.phone,
            sections: self.sections,
        }
    }
}

/// Validates a `<resume>` root element and everything below it.
pub fn parse_resume(root: Node, diagnostics: &mut Vec<Diagnostic>) -> Result<Resume, SchemaError> {
    if root.tag_name().name() != ROOT_TAG {
        return Err(SchemaError::document(MSG_ROOT_NOT_RESUME));
    }

    let mut builder = ResumeBuilder::default();

    for child in element_children(root) {
        // Repeated identity tags: the last one wins.
        match RootTag::from_name(child.tag_name().name()) {
            RootTag::Name => builder.name = text_of(child),
            RootTag::Address => builder.address = text_of(child),
            RootTag::Email => builder.email = text_of(child),
            RootTag::Phone => builder.phone = text_of(child),
            RootTag::Section => builder.sections.push(parse_section(child, diagnostics)?),
            RootTag::Unrecognized => unrecognized(child, diagnostics),
        }
    }

    Ok(builder.build())
}

// ────────────────────────────────────────────────────────────────────────────
// Section
// ────────────────────────────────────────────────────────────────────────────

struct SectionBuilder {
    title: String,
    list: Option<ItemList>,
    entries: Vec<Entry>,
}

impl SectionBuilder {
    fn build(self) -> Section {
        let body = match self.list {
            Some(list) => SectionBody::List(list),
            None => SectionBody::Entries(self.entries),
        };
        Section {
            title: self.title,
            body,
        }
    }
}

pub fn parse_section(node: Node, diagnostics: &mut Vec<Diagnostic>) -> Result<Section, SchemaError> {
    let mut builder = SectionBuilder {
        title: require_title(node)?,
        list: None,
        entries: Vec::new(),
    };

    let child_count = element_children(node).count();

    for child in element_children(node) {
        match SectionTag::from_name(child.tag_name().name()) {
            SectionTag::List => {
                if child_count != 1 {
                    return Err(SchemaError::at(line_of(child), MSG_SECTION_LIST_NOT_ALONE));
                }
                builder.list = Some(parse_list(child)?);
            }
            SectionTag::Entry => builder.entries.push(parse_entry(child, diagnostics)?),
            SectionTag::Unrecognized => unrecognized(child, diagnostics),
        }
    }

    debug!(
        title = %builder.title,
        entries = builder.entries.len(),
        has_list = builder.list.is_some(),
        "section parsed"
    );
    Ok(builder.build())
}

// ────────────────────────────────────────────────────────────────────────────
// Entry
// ────────────────────────────────────────────────────────────────────────────

struct EntryBuilder {
    title: String,
    organization: Option<String>,
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    list: Option<ItemList>,
}

impl EntryBuilder {
    fn new(title: String) -> Self {
        EntryBuilder {
            title,
            organization: None,
            location: None,
            start_date: None,
            end_date: None,
            list: None,
        }
    }

    fn build(self) -> Entry {
        Entry {
            title: self.title,
            organization: self.organization,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            list: self.list,
        }
    }
}

pub fn parse_entry(node: Node, diagnostics: &mut Vec<Diagnostic>) -> Result<Entry, SchemaError> {
    let mut builder = EntryBuilder::new(require_title(node)?);

    for child in element_children(node) {
        match EntryTag::from_name(child.tag_name().name()) {
            EntryTag::Organization => builder.organization = text_of(child),
            EntryTag::Location => builder.location = text_of(child),
            EntryTag::StartDate => builder.start_date = text_of(child),
            EntryTag::EndDate => builder.end_date = text_of(child),
            EntryTag::List => {
                if builder.list.is_some() {
                    return Err(SchemaError::at(line_of(child), MSG_ENTRY_SECOND_LIST));
                }
                builder.list = Some(parse_list(child)?);
            }
            EntryTag::Unrecognized => unrecognized(child, diagnostics),
        }
    }

    Ok(builder.build())
}

// ────────────────────────────────────────────────────────────────────────────
// List
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_list(node: Node) -> Result<ItemList, SchemaError> {
    let mut items = Vec::new();

    for child in element_children(node) {
        if ListTag::from_name(child.tag_name().name()) != ListTag::Item {
            return Err(SchemaError::at(line_of(child), MSG_LIST_NON_ITEM));
        }
        if element_children(child).next().is_some() {
            return Err(SchemaError::at(line_of(child), MSG_ITEM_HAS_CHILDREN));
        }
        items.push(child.text().unwrap_or_default().to_string());
    }

    Ok(ItemList { items })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_root<T>(xml: &str, f: impl FnOnce(Node) -> T) -> T {
        let doc = roxmltree::Document::parse(xml).unwrap();
        f(doc.root_element())
    }

    #[test]
    fn test_line_of_counts_from_one() {
        with_root("<resume>\n\n  <name>x</name>\n</resume>", |root| {
            assert_eq!(line_of(root), 1);
            let name = element_children(root).next().unwrap();
            assert_eq!(line_of(name), 3);
        });
    }

    #[test]
    fn test_wrong_root() {
        let err = with_root("<cv><name>x</name></cv>", |root| {
            parse_resume(root, &mut Vec::new()).unwrap_err()
        });
        assert_eq!(err.line, None);
        assert_eq!(err.message, MSG_ROOT_NOT_RESUME);
    }

    #[test]
    fn test_list_items_in_order() {
        let list = with_root("<list><item>a</item><item>b</item><item/></list>", |root| {
            parse_list(root).unwrap()
        });
        assert_eq!(list.items, vec!["a", "b", ""]);
    }

    #[test]
    fn test_list_ignores_comments_and_whitespace() {
        let list = with_root(
            "<list>\n  <!-- top skills -->\n  <item>Rust</item>\n</list>",
            |root| parse_list(root).unwrap(),
        );
        assert_eq!(list.items, vec!["Rust"]);
    }

    #[test]
    fn test_list_rejects_non_item() {
        let err = with_root("<list>\n<item>a</item>\n<entry/>\n</list>", |root| {
            parse_list(root).unwrap_err()
        });
        assert_eq!(err.line, Some(3));
        assert_eq!(err.message, MSG_LIST_NON_ITEM);
    }

    #[test]
    fn test_item_rejects_children() {
        let err = with_root("<list>\n<item><b>bold</b></item>\n</list>", |root| {
            parse_list(root).unwrap_err()
        });
        assert_eq!(err.line, Some(2));
        assert_eq!(err.message, MSG_ITEM_HAS_CHILDREN);
    }

    #[test]
    fn test_entry_date_alias_and_last_write() {
        let xml = r#"<entry title="Talk">
            <organization>First</organization>
            <organization>Second</organization>
            <date>2019</date>
        </entry>"#;
        let entry = with_root(xml, |root| parse_entry(root, &mut Vec::new()).unwrap());
        assert_eq!(entry.organization.as_deref(), Some("Second"));
        assert_eq!(entry.start_date.as_deref(), Some("2019"));
        assert_eq!(entry.end_date, None);
    }

    #[test]
    fn test_entry_missing_title() {
        let err = with_root("<entry><location>x</location></entry>", |root| {
            parse_entry(root, &mut Vec::new()).unwrap_err()
        });
        assert_eq!(err.line, Some(1));
        assert_eq!(err.message, MSG_MISSING_TITLE);
    }

    #[test]
    fn test_section_empty_is_entries() {
        let section = with_root(r#"<section title="Awards"/>"#, |root| {
            parse_section(root, &mut Vec::new()).unwrap()
        });
        assert_eq!(section.title, "Awards");
        assert_eq!(section.body, SectionBody::Entries(vec![]));
    }

    #[test]
    fn test_section_two_lists_rejected() {
        let xml = "<section title=\"S\">\n<list/>\n<list/>\n</section>";
        let err = with_root(xml, |root| {
            parse_section(root, &mut Vec::new()).unwrap_err()
        });
        assert_eq!(err.line, Some(2));
        assert_eq!(err.message, MSG_SECTION_LIST_NOT_ALONE);
    }
}
