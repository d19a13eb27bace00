use std::{fmt, path::PathBuf};

use crate::{
    content::model::ContentBundle,
    foundation::error::{FolioError, FolioResult},
};

/// Where the content document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    Url(url::Url),
}

impl ContentSource {
    /// `http://` and `https://` locations are fetched over the network, anything else is a
    /// path on disk.
    pub fn parse(location: &str) -> Self {
        match url::Url::parse(location) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => Self::Url(u),
            _ => Self::File(PathBuf::from(location)),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => write!(f, "{u}"),
        }
    }
}

/// Fetches and parses the content document. Fire-once: there is no retry.
#[derive(Clone, Debug, Default)]
pub struct ContentLoader {
    client: reqwest::Client,
}

impl ContentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self), fields(source = %source))]
    pub async fn load(&self, source: &ContentSource) -> FolioResult<ContentBundle> {
        let bytes = match source {
            ContentSource::File(path) => tokio::fs::read(path).await.map_err(|e| {
                FolioError::load(format!("read content '{}': {e}", path.display()))
            })?,
            ContentSource::Url(url) => self.fetch(url).await?,
        };

        let bundle = ContentBundle::from_slice(&bytes)?;
        tracing::info!(
            projects = bundle.projects.len(),
            skills = bundle.skills.len(),
            experience = bundle.experience.len(),
            certificates = bundle.certificates.len(),
            "content loaded"
        );
        Ok(bundle)
    }

    async fn fetch(&self, url: &url::Url) -> FolioResult<Vec<u8>> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FolioError::load(format!("fetch '{url}': {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FolioError::load(format!("fetch '{url}': HTTP {status}")));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FolioError::load(format!("read body of '{url}': {e}")))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/loader.rs"]
mod tests;
