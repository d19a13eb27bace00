use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::foundation::error::{FolioError, FolioResult};

/// A skill is just its display name; icon lookup happens at render time.
pub type SkillName = String;

/// Everything the page renders, loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentBundle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<SkillName>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certificates: Vec<Certificate>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_page: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl ContentBundle {
    pub fn from_reader<R: Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::load(format!("parse content JSON: {e}")))
    }

    pub fn from_slice(bytes: &[u8]) -> FolioResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| FolioError::load(format!("parse content JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        Self::from_slice(s.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.certificates.is_empty()
    }
}

/// Empty strings count as missing, the same as an absent key.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
