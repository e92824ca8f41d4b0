//! Block-based work body.
//!
//! A work's body is an ordered list of [`ContentBlock`]s. Order is rendering
//! order. The whole list is persisted as a JSON array inside the work's single
//! `content` column; see [`ContentBlocks::serialize`] and
//! [`ContentBlocks::deserialize`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::layout::{self, MediaKind};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Content of a freshly inserted text block.
pub const EMPTY_PARAGRAPH: &str = "<p></p>";

/// Separator between media URLs inside an image block's `content`.
pub const MEDIA_SEPARATOR: char = ',';

/// Warning returned when removing the last block would discard text.
pub const LAST_BLOCK_WARNING: &str =
    "You must keep at least one block, or clear existing content before removing the last block.";

static EMPTY_PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>\s*</p>").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Discriminant of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Video,
}

impl From<MediaKind> for BlockKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => Self::Image,
            MediaKind::Video => Self::Video,
        }
    }
}

/// One entry of a work body.
///
/// For text blocks `content` is an HTML fragment. For image blocks it is a
/// comma-joined list of URLs, one per layout slot. For video blocks it is a
/// single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl ContentBlock {
    /// Media URLs of an image/video block, in slot order.
    pub fn media_sources(&self) -> Vec<&str> {
        if self.content.is_empty() {
            Vec::new()
        } else {
            self.content.split(MEDIA_SEPARATOR).collect()
        }
    }
}

/// What kind of block to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InsertKind {
    Text,
    /// An image or video block; the media kind comes from the layout.
    Media { layout: String },
}

/// Direction for [`ContentBlocks::move_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Ordered sequence of content blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentBlocks(Vec<ContentBlock>);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Normalize text-block HTML for emptiness checks: drop empty paragraphs,
/// collapse whitespace runs, trim.
pub fn clean_html(html: &str) -> String {
    let stripped = EMPTY_PARAGRAPH_RE.replace_all(html, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

fn block_not_found(id: &str) -> CoreError {
    CoreError::not_found("ContentBlock", id)
}

// ---------------------------------------------------------------------------
// ContentBlocks
// ---------------------------------------------------------------------------

impl ContentBlocks {
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self(blocks)
    }

    /// The body of a newly created work: one empty text block.
    pub fn single_empty_text() -> Self {
        Self(vec![ContentBlock {
            id: "1".to_string(),
            kind: BlockKind::Text,
            content: EMPTY_PARAGRAPH.to_string(),
            layout: None,
        }])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ContentBlock] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentBlock> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ContentBlock> {
        self.0.iter().find(|b| b.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|b| b.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ContentBlock, CoreError> {
        self.0
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| block_not_found(id))
    }

    /// Generate a timestamp-derived id that is unique within this sequence.
    fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        loop {
            let id = candidate.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }

    /// Insert a new block after `after` (or at the end) and return its id.
    pub fn insert(&mut self, after: Option<&str>, kind: InsertKind) -> Result<String, CoreError> {
        self.insert_at_time(after, kind, chrono::Utc::now().timestamp_millis())
    }

    /// [`insert`](Self::insert) with an explicit clock reading for the new id.
    pub fn insert_at_time(
        &mut self,
        after: Option<&str>,
        kind: InsertKind,
        now_millis: i64,
    ) -> Result<String, CoreError> {
        let index = match after {
            Some(after_id) => self.position(after_id).ok_or_else(|| block_not_found(after_id))? + 1,
            None => self.0.len(),
        };

        let id = self.next_id(now_millis);
        let block = match kind {
            InsertKind::Text => ContentBlock {
                id: id.clone(),
                kind: BlockKind::Text,
                content: EMPTY_PARAGRAPH.to_string(),
                layout: None,
            },
            InsertKind::Media { layout: layout_id } => {
                let descriptor = layout::find(&layout_id).ok_or_else(|| {
                    CoreError::Validation(format!("Unknown layout '{layout_id}'"))
                })?;
                ContentBlock {
                    id: id.clone(),
                    kind: descriptor.media_kind.into(),
                    content: String::new(),
                    layout: Some(layout_id),
                }
            }
        };

        self.0.insert(index, block);
        Ok(id)
    }

    /// Replace a text block's HTML. The HTML is stored as given.
    pub fn update_text(&mut self, id: &str, html: &str) -> Result<(), CoreError> {
        let block = self.get_mut(id)?;
        if block.kind != BlockKind::Text {
            return Err(CoreError::Validation(format!(
                "Block '{id}' is not a text block"
            )));
        }
        block.content = html.to_string();
        Ok(())
    }

    /// Put `url` into a media block.
    ///
    /// Image blocks overwrite `slot` when it is within the current URL list and
    /// append otherwise. Video blocks hold a single URL which is replaced.
    pub fn set_media_slot(
        &mut self,
        id: &str,
        slot: Option<usize>,
        url: &str,
    ) -> Result<(), CoreError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CoreError::Validation("Media URL must not be empty".into()));
        }

        let block = self.get_mut(id)?;
        match block.kind {
            BlockKind::Text => Err(CoreError::Validation(format!(
                "Block '{id}' is not a media block"
            ))),
            BlockKind::Video => {
                block.content = url.to_string();
                Ok(())
            }
            BlockKind::Image => {
                if url.contains(MEDIA_SEPARATOR) {
                    return Err(CoreError::Validation(
                        "Image URL must not contain ','".into(),
                    ));
                }
                let mut urls = block.media_sources();
                match slot {
                    Some(i) if i < urls.len() => urls[i] = url,
                    _ => urls.push(url),
                }
                block.content = urls.join(",");
                Ok(())
            }
        }
    }

    /// Switch a media block to another layout.
    ///
    /// The block kind follows the new layout's media kind. Existing URLs are
    /// kept as they are, even when the new layout has fewer slots.
    pub fn change_layout(&mut self, id: &str, layout_id: &str) -> Result<(), CoreError> {
        let descriptor = layout::find(layout_id)
            .ok_or_else(|| CoreError::Validation(format!("Unknown layout '{layout_id}'")))?;
        let block = self.get_mut(id)?;
        if block.kind == BlockKind::Text {
            return Err(CoreError::Validation(format!(
                "Block '{id}' is not a media block"
            )));
        }
        block.layout = Some(layout_id.to_string());
        block.kind = descriptor.media_kind.into();
        Ok(())
    }

    /// Swap a block with its neighbour. Returns `false` at a boundary.
    pub fn move_block(&mut self, id: &str, direction: Direction) -> Result<bool, CoreError> {
        let index = self.position(id).ok_or_else(|| block_not_found(id))?;
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.0.len() => index + 1,
            _ => return Ok(false),
        };
        self.0.swap(index, target);
        Ok(true)
    }

    /// Remove a block.
    ///
    /// Refused with [`CoreError::Conflict`] when the sequence would become
    /// empty while a text block still holds content.
    pub fn remove(&mut self, id: &str) -> Result<ContentBlock, CoreError> {
        let index = self.position(id).ok_or_else(|| block_not_found(id))?;

        let would_empty = self.0.len() <= 1;
        let holds_text = self
            .0
            .iter()
            .any(|b| b.kind == BlockKind::Text && !clean_html(&b.content).is_empty());
        if would_empty && holds_text {
            return Err(CoreError::Conflict(LAST_BLOCK_WARNING.to_string()));
        }

        Ok(self.0.remove(index))
    }

    /// Encode the sequence for the work's `content` column.
    pub fn serialize(&self) -> String {
        // A Vec of plain string/enum fields cannot fail to serialize.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Decode a work's `content` column.
    ///
    /// Records written before the block model stored plain HTML; anything that
    /// is not a JSON block array becomes a single text block holding the raw
    /// string.
    pub fn deserialize(raw: &str) -> Self {
        match serde_json::from_str::<Vec<ContentBlock>>(raw) {
            Ok(blocks) => Self(blocks),
            Err(_) => Self(vec![ContentBlock {
                id: "1".to_string(),
                kind: BlockKind::Text,
                content: if raw.is_empty() {
                    EMPTY_PARAGRAPH.to_string()
                } else {
                    raw.to_string()
                },
                layout: None,
            }]),
        }
    }
}

impl From<Vec<ContentBlock>> for ContentBlocks {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        Self(blocks)
    }
}

impl<'a> IntoIterator for &'a ContentBlocks {
    type Item = &'a ContentBlock;
    type IntoIter = std::slice::Iter<'a, ContentBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
