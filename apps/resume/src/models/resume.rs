use serde::Serialize;

/// The validated résumé document. Built once by the parser, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub sections: Vec<Section>,
}

impl Resume {
    /// Identity fields in their fixed output order, paired with their tag name.
    pub fn identity(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("name", self.name.as_deref()),
            ("address", self.address.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct Section {
    pub title: String,
    #[serde(flatten)]
    pub body: SectionBody,
}

/// A section holds either one bullet list or a run of entries, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    List(ItemList),
    Entries(Vec<Entry>),
}

impl Default for SectionBody {
    fn default() -> Self {
        SectionBody::Entries(Vec::new())
    }
}

/// A dated item within a section: a job, a degree, a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct Entry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ItemList>,
}

impl Entry {
    /// The date line as rendered: `start -- end`, `start`, or nothing.
    ///
    /// An end date without a start date keeps the range shape with an empty start.
    pub fn date_range(&self) -> Option<String> {
        match (&self.start_date, &self.end_date) {
            (start, Some(end)) => Some(format!(
                "{} -- {}",
                start.as_deref().unwrap_or_default(),
                end
            )),
            (Some(start), None) => Some(start.clone()),
            (None, None) => None,
        }
    }
}

/// Flat bullet list. Items are leaf text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[serde(transparent)]
pub struct ItemList {
    pub items: Vec<String>,
}

impl ItemList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
