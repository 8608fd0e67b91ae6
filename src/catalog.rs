//! Site content: services and their order forms, streaming shortcuts,
//! headline figures and FAQ entries. Embedded at build time.

use serde::Deserialize;

use crate::forms::Visibility;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Catalog {
    pub brand: String,
    pub tagline: String,
    pub services: Vec<Service>,
    #[serde(default)]
    pub streaming_platforms: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Service {
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub summary: String,
    pub fields: Vec<FieldSpec>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    Select,
    Checkbox,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub visible_when: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    /// Raw `data-count` text, parsed when the counter starts.
    pub count: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl Catalog {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::parse(CATALOG_JSON)
    }

    #[cfg(test)]
    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

impl Service {
    /// Ids of the fields other fields depend on.
    pub fn controllers(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter_map(|f| f.visible_when.as_ref())
            .map(|v| v.controller.as_str())
    }
}
