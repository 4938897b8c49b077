//! Closed tag sets for each nesting level of the résumé schema.
//!
//! Every context gets its own enum with an explicit `Unrecognized` arm, so a
//! new element kind has to be added here before any sub-parser can match it.

/// Children of `<resume>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootTag {
    Name,
    Address,
    Email,
    Phone,
    Section,
    Unrecognized,
}

impl RootTag {
    pub fn from_name(tag: &str) -> Self {
        match tag {
            "name" => RootTag::Name,
            "address" => RootTag::Address,
            "email" => RootTag::Email,
            "phone" => RootTag::Phone,
            "section" => RootTag::Section,
            _ => RootTag::Unrecognized,
        }
    }
}

/// Children of `<section>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTag {
    List,
    Entry,
    Unrecognized,
}

impl SectionTag {
    pub fn from_name(tag: &str) -> Self {
        match tag {
            "list" => SectionTag::List,
            "entry" => SectionTag::Entry,
            _ => SectionTag::Unrecognized,
        }
    }
}

/// Children of `<entry>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTag {
    Organization,
    Location,
    /// `<start_date>` or the single-date form `<date>`.
    StartDate,
    EndDate,
    List,
    Unrecognized,
}

impl EntryTag {
    pub fn from_name(tag: &str) -> Self {
        match tag {
            "organization" => EntryTag::Organization,
            "location" => EntryTag::Location,
            "start_date" | "date" => EntryTag::StartDate,
            "end_date" => EntryTag::EndDate,
            "list" => EntryTag::List,
            _ => EntryTag::Unrecognized,
        }
    }
}

/// Children of `<list>`. Anything but `<item>` is fatal there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    Item,
    Other,
}

impl ListTag {
    pub fn from_name(tag: &str) -> Self {
        match tag {
            "item" => ListTag::Item,
            _ => ListTag::Other,
        }
    }
}
