//! Link records and ordered link groups

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where a tile points. The caller picks the variant; it is never guessed
/// from the string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Bare domain, served over `https://`
    Domain(String),
    /// Fully qualified URL, used verbatim
    Url(String),
}

impl LinkTarget {
    /// The target text as written
    pub fn as_str(&self) -> &str {
        match self {
            LinkTarget::Domain(d) => d.as_str(),
            LinkTarget::Url(u) => u.as_str(),
        }
    }

    /// Anchor destination
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Domain(d) => format!("https://{}", d),
            LinkTarget::Url(u) => u.clone(),
        }
    }
}

/// Tile label: the target text itself, or an explicit override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    #[default]
    Target,
    Override(String),
}

/// Everything needed to render one tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    target: LinkTarget,
    #[serde(default)]
    label: Label,
    icon_class: String,
}

impl LinkRecord {
    pub fn new(target: LinkTarget, label: Label, icon_class: impl Into<String>) -> Self {
        Self {
            target,
            label,
            icon_class: icon_class.into(),
        }
    }

    /// Bare-domain record labelled with the domain
    pub fn domain(domain: impl Into<String>, icon_class: impl Into<String>) -> Self {
        Self::new(LinkTarget::Domain(domain.into()), Label::Target, icon_class)
    }

    /// Fully qualified URL record labelled with the URL
    pub fn url(url: impl Into<String>, icon_class: impl Into<String>) -> Self {
        Self::new(LinkTarget::Url(url.into()), Label::Target, icon_class)
    }

    /// Same record with its label overridden
    pub fn labelled(self, label: impl Into<String>) -> Self {
        Self {
            label: Label::Override(label.into()),
            ..self
        }
    }

    pub fn target(&self) -> &LinkTarget {
        &self.target
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn icon_class(&self) -> &str {
        &self.icon_class
    }

    pub fn href(&self) -> String {
        self.target.href()
    }

    /// Text shown under the icon
    pub fn display_label(&self) -> &str {
        match &self.label {
            Label::Target => self.target.as_str(),
            Label::Override(text) => text.as_str(),
        }
    }

    /// Check the record's invariants.
    ///
    /// Targets and icon classes must be non-empty. A domain must not carry a
    /// scheme (it would be prefixed twice) and a URL must parse as an
    /// absolute URL.
    pub fn validate(&self) -> Result<()> {
        let target = self.target.as_str();
        if target.trim().is_empty() {
            return Err(Error::InvalidRecord("empty link target".into()));
        }
        if self.icon_class.trim().is_empty() {
            return Err(Error::InvalidRecord(format!("empty icon class for {}", target)));
        }
        match &self.target {
            LinkTarget::Domain(d) if d.contains("://") => Err(Error::InvalidRecord(format!(
                "domain target {} carries a scheme; use a url target",
                d
            ))),
            LinkTarget::Url(u) => url::Url::parse(u)
                .map(|_| ())
                .map_err(|e| Error::InvalidRecord(format!("url target {}: {}", u, e))),
            LinkTarget::Domain(_) => Ok(()),
        }
    }
}

/// A named, ordered run of link records rendered as one section.
///
/// Tiles are rendered in exactly the order records were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGroup {
    name: String,
    #[serde(default)]
    records: Vec<LinkRecord>,
}

impl LinkGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn from_records(name: impl Into<String>, records: Vec<LinkRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Group of bare-domain records, in the order given
    pub fn domains(name: impl Into<String>, entries: &[(&str, &str)]) -> Self {
        let records = entries
            .iter()
            .map(|(domain, icon)| LinkRecord::domain(*domain, *icon))
            .collect();
        Self::from_records(name, records)
    }

    /// Append a record after the existing ones
    pub fn with(mut self, record: LinkRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        for record in &self.records {
            record.validate().map_err(|e| match e {
                Error::InvalidRecord(msg) => {
                    Error::InvalidRecord(format!("group {}: {}", self.name, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LinkGroup {
    type Item = &'a LinkRecord;
    type IntoIter = std::slice::Iter<'a, LinkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
