//! Video URL classification for video blocks.

use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").expect("valid regex")
});

static VIMEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(vimeo\.com/)((channels/[A-Za-z]+/)|(groups/[A-Za-z]+/videos/))?([0-9]+)")
        .expect("valid regex")
});

/// Length of a YouTube video id.
const YOUTUBE_ID_LEN: usize = 11;

/// Where a video block's URL points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    YouTube(String),
    Vimeo(String),
    /// A directly playable file URL.
    Direct(String),
}

impl VideoSource {
    /// Classify a video URL. Anything not recognised as YouTube or Vimeo is
    /// treated as a direct file link.
    pub fn parse(url: &str) -> Self {
        if url.contains("youtube") || url.contains("youtu.be") {
            if let Some(id) = YOUTUBE_RE
                .captures(url)
                .and_then(|c| c.get(2))
                .map(|m| m.as_str())
                .filter(|id| id.len() == YOUTUBE_ID_LEN)
            {
                return Self::YouTube(id.to_string());
            }
        } else if url.contains("vimeo") {
            if let Some(id) = VIMEO_RE.captures(url).and_then(|c| c.get(5)) {
                return Self::Vimeo(id.as_str().to_string());
            }
        }
        Self::Direct(url.to_string())
    }

    /// Whether the source should be shown in an embedded player iframe.
    pub fn is_embedded(&self) -> bool {
        !matches!(self, Self::Direct(_))
    }

    /// URL to put in the player element.
    pub fn embed_url(&self) -> String {
        match self {
            Self::YouTube(id) => format!("https://www.youtube.com/embed/{id}"),
            Self::Vimeo(id) => format!("https://player.vimeo.com/video/{id}"),
            Self::Direct(url) => url.clone(),
        }
    }
}
