//! Page configuration: the content of the page as plain immutable data
//!
//! Two built-in variants reproduce the published page shapes. Any other
//! page can be described in JSON and loaded with [`PageConfig::from_path`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::link::{LinkGroup, LinkRecord};
use crate::page::PageContent;
use crate::{Error, Result};

pub const DEFAULT_TITLE: &str = "jbird.dev";
pub const DEFAULT_TAGLINE: &str = "Stuff and things... Sometimes useful stuff and things";
pub const DEFAULT_FAVICON: &str = "favicon.png";
pub const DEFAULT_ROOT_ID: &str = "main";

/// Everything needed to build one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub tagline: String,
    pub secondary_tagline: Option<String>,
    pub content_links: LinkGroup,
    pub demo_links: LinkGroup,
    /// Value assigned to the favicon link's `href`
    pub favicon: String,
    /// Id of the element the page is appended to
    pub root_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::classic()
    }
}

fn content_links() -> LinkGroup {
    LinkGroup::domains(
        "content",
        &[
            ("asciirange.com", "fas fa-bullseye"),
            ("cert.ist", "fas fa-user-lock"),
            ("tilltrump.com", "far fa-calendar-check"),
            ("urip.io", "fas fa-code"),
        ],
    )
}

impl PageConfig {
    /// Content domains followed directly by the demo domain
    pub fn classic() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            secondary_tagline: None,
            content_links: content_links(),
            demo_links: LinkGroup::domains(
                "demos",
                &[("wasm.go.demos.jbird.dev", "fas fa-user-secret")],
            ),
            favicon: DEFAULT_FAVICON.to_string(),
            root_id: DEFAULT_ROOT_ID.to_string(),
        }
    }

    /// Content domains, then a second tagline introducing a labelled link to
    /// the site's own source
    pub fn with_demo_tagline() -> Self {
        Self {
            secondary_tagline: Some("Demos and experiments".to_string()),
            demo_links: LinkGroup::new("demos").with(
                LinkRecord::url("https://github.com/jbirddog/jbird.dev", "fas fa-user-secret")
                    .labelled("This site"),
            ),
            ..Self::classic()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&data)?;
        log::debug!("loaded page config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every link record and the root id
    pub fn validate(&self) -> Result<()> {
        if self.root_id.trim().is_empty() {
            return Err(Error::ConfigError("root_id must not be empty".into()));
        }
        self.content_links.validate()?;
        self.demo_links.validate()?;
        Ok(())
    }

    /// Borrowed view handed to the page composer
    pub fn content(&self) -> PageContent<'_> {
        PageContent {
            title: &self.title,
            tagline: &self.tagline,
            content_links: &self.content_links,
            secondary_tagline: self.secondary_tagline.as_deref(),
            demo_links: &self.demo_links,
        }
    }
}
