//! Resolution of document locations passed to `load`

use crate::error::{Result, TransportError};
use std::path::PathBuf;
use url::Url;

/// Where a document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Location {
    /// `http` or `https` URL
    Remote(Url),
    /// Local file, from a `file:` URL or a plain path
    Local(PathBuf),
}

impl Location {
    pub(crate) fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TransportError::InvalidUrl {
                url: raw.to_string(),
                reason: "no url given to load".to_string(),
            });
        }

        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::Local)
                    .map_err(|()| TransportError::InvalidUrl {
                        url: raw.to_string(),
                        reason: "not a local file path".to_string(),
                    }),
                // Windows drive letters parse as a one-letter scheme
                _ => Ok(Self::Local(expand_home(trimmed))),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self::Local(expand_home(trimmed))),
            Err(e) => Err(TransportError::InvalidUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(path)
}
