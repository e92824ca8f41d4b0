//! Admin work editor session.
//!
//! Holds the working copy of the selected work and applies editing commands
//! to it through a single reducer, [`EditorSession::apply`]. Nothing here
//! touches persistence: the caller saves [`EditorSession::save_payload`] and
//! reports success with [`EditorSession::mark_saved`].

use serde::{Deserialize, Serialize};

use crate::blocks::{BlockKind, Direction, InsertKind};
use crate::error::CoreError;
use crate::types::DbId;
use crate::work::{WorkDraft, WorkFields, WorkFieldsPatch};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Editor tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorTab {
    /// "Project Details" form.
    #[default]
    Details,
    /// "Content Layout" block editor.
    Content,
}

/// One user action against the open draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorCommand {
    Insert {
        #[serde(default)]
        after: Option<String>,
        block: InsertKind,
    },
    UpdateText {
        block_id: String,
        html: String,
    },
    SetMediaSlot {
        block_id: String,
        #[serde(default)]
        slot: Option<usize>,
        url: String,
    },
    ChangeLayout {
        block_id: String,
        layout: String,
    },
    Move {
        block_id: String,
        direction: Direction,
    },
    Remove {
        block_id: String,
    },
    UpdateFields {
        fields: WorkFieldsPatch,
    },
    SelectTab {
        tab: EditorTab,
    },
    Focus {
        block_id: String,
    },
}

/// Outcome of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    Inserted { block_id: String },
    Updated { block_id: String },
    Moved { block_id: String, moved: bool },
    Removed { block_id: String },
    FieldsUpdated,
    TabSelected { tab: EditorTab },
    Focused { block_id: String },
}

/// What to write back on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePayload {
    pub id: DbId,
    pub fields: WorkFields,
    /// Serialized block list for the `content` column.
    pub content: String,
}

/// Per-admin editing state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorSession {
    draft: Option<WorkDraft>,
    dirty: bool,
    tab: EditorTab,
    active_block: Option<String>,
}

fn no_draft() -> CoreError {
    CoreError::Validation("No work is open in the editor".into())
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> Option<&WorkDraft> {
        self.draft.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    pub fn active_block(&self) -> Option<&str> {
        self.active_block.as_deref()
    }

    /// Whether the session currently edits work `id`.
    pub fn holds(&self, id: DbId) -> bool {
        self.draft.as_ref().is_some_and(|d| d.id == id)
    }

    /// Load a work into the editor, replacing any previous draft.
    ///
    /// A freshly created work is opened `dirty` so the first save is not
    /// skipped by the UI.
    pub fn open(&mut self, draft: WorkDraft, dirty: bool) {
        self.draft = Some(draft);
        self.dirty = dirty;
        self.tab = EditorTab::Details;
        self.active_block = None;
    }

    /// Drop the draft (after delete or explicit deselect).
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Apply one command. Every successful edit marks the session dirty;
    /// tab and focus changes do not.
    pub fn apply(&mut self, command: EditorCommand) -> Result<EditorEvent, CoreError> {
        let draft = self.draft.as_mut().ok_or_else(no_draft)?;

        let event = match command {
            EditorCommand::Insert { after, block } => {
                let is_text = matches!(block, InsertKind::Text);
                let block_id = draft.blocks.insert(after.as_deref(), block)?;
                if is_text {
                    self.active_block = Some(block_id.clone());
                }
                EditorEvent::Inserted { block_id }
            }
            EditorCommand::UpdateText { block_id, html } => {
                draft.blocks.update_text(&block_id, &html)?;
                self.active_block = Some(block_id.clone());
                EditorEvent::Updated { block_id }
            }
            EditorCommand::SetMediaSlot { block_id, slot, url } => {
                draft.blocks.set_media_slot(&block_id, slot, &url)?;
                EditorEvent::Updated { block_id }
            }
            EditorCommand::ChangeLayout { block_id, layout } => {
                draft.blocks.change_layout(&block_id, &layout)?;
                EditorEvent::Updated { block_id }
            }
            EditorCommand::Move { block_id, direction } => {
                let moved = draft.blocks.move_block(&block_id, direction)?;
                if !moved {
                    // Boundary move is a no-op.
                    return Ok(EditorEvent::Moved { block_id, moved });
                }
                EditorEvent::Moved { block_id, moved }
            }
            EditorCommand::Remove { block_id } => {
                draft.blocks.remove(&block_id)?;
                if self.active_block.as_deref() == Some(block_id.as_str()) {
                    self.active_block = draft.blocks.iter().next().map(|b| b.id.clone());
                }
                EditorEvent::Removed { block_id }
            }
            EditorCommand::UpdateFields { fields } => {
                fields.apply_to(&mut draft.fields);
                EditorEvent::FieldsUpdated
            }
            EditorCommand::SelectTab { tab } => {
                self.tab = tab;
                return Ok(EditorEvent::TabSelected { tab });
            }
            EditorCommand::Focus { block_id } => {
                let block = draft
                    .blocks
                    .get(&block_id)
                    .ok_or_else(|| CoreError::not_found("ContentBlock", &block_id))?;
                if block.kind != BlockKind::Text {
                    return Err(CoreError::Validation(format!(
                        "Block '{block_id}' is not a text block"
                    )));
                }
                self.active_block = Some(block_id.clone());
                return Ok(EditorEvent::Focused { block_id });
            }
        };

        self.dirty = true;
        Ok(event)
    }

    /// Build the full-record write for the open draft.
    pub fn save_payload(&self) -> Result<SavePayload, CoreError> {
        let draft = self.draft.as_ref().ok_or_else(no_draft)?;
        draft.fields.validate()?;
        Ok(SavePayload {
            id: draft.id,
            fields: draft.fields.clone(),
            content: draft.blocks.serialize(),
        })
    }

    /// Record a successful save. The stored record replaces the draft and the
    /// dirty flag is cleared. Ignored if another work was opened meanwhile.
    pub fn mark_saved(&mut self, saved: WorkDraft) {
        if self.holds(saved.id) {
            self.draft = Some(saved);
            self.dirty = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::blocks::ContentBlocks;

    fn new_draft() -> WorkDraft {
        WorkDraft {
            id: 7,
            fields: WorkFields::new_project(2024),
            blocks: ContentBlocks::single_empty_text(),
        }
    }

    fn opened() -> EditorSession {
        let mut session = EditorSession::new();
        session.open(new_draft(), false);
        session
    }

    #[test]
    fn commands_without_draft_fail() {
        let mut session = EditorSession::new();
        let result = session.apply(EditorCommand::Remove { block_id: "1".into() });
        assert_matches!(result, Err(CoreError::Validation(_)));
        assert!(session.save_payload().is_err());
    }

    #[test]
    fn edits_mark_dirty_but_tab_changes_do_not() {
        let mut session = opened();
        session
            .apply(EditorCommand::SelectTab { tab: EditorTab::Content })
            .unwrap();
        assert!(!session.is_dirty());
        assert_eq!(session.tab(), EditorTab::Content);

        session
            .apply(EditorCommand::UpdateText {
                block_id: "1".into(),
                html: "<p>Hello</p>".into(),
            })
            .unwrap();
        assert!(session.is_dirty());
        assert_eq!(session.active_block(), Some("1"));
    }

    #[test]
    fn failed_command_leaves_state_untouched() {
        let mut session = opened();
        session
            .apply(EditorCommand::UpdateText {
                block_id: "1".into(),
                html: "<p>Body</p>".into(),
            })
            .unwrap();
        session.mark_saved(session.draft().unwrap().clone());
        assert!(!session.is_dirty());

        let result = session.apply(EditorCommand::Remove { block_id: "1".into() });
        assert_matches!(result, Err(CoreError::Conflict(_)));
        assert!(!session.is_dirty());
        assert_eq!(session.draft().unwrap().blocks.len(), 1);
    }

    #[test]
    fn insert_image_then_fill_slot_then_save() {
        let mut session = opened();
        let event = session
            .apply(EditorCommand::Insert {
                after: Some("1".into()),
                block: InsertKind::Media { layout: "layout1".into() },
            })
            .unwrap();
        let EditorEvent::Inserted { block_id } = event else {
            panic!("expected Inserted, got {event:?}");
        };

        session
            .apply(EditorCommand::SetMediaSlot {
                block_id: block_id.clone(),
                slot: Some(0),
                url: "https://x/img.jpg".into(),
            })
            .unwrap();

        let blocks = &session.draft().unwrap().blocks;
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks.as_slice()[1].kind, BlockKind::Image);
        assert_eq!(blocks.as_slice()[1].content, "https://x/img.jpg");

        let payload = session.save_payload().unwrap();
        assert_eq!(payload.id, 7);
        assert_eq!(payload.content, blocks.serialize());
    }

    #[test]
    fn removing_active_block_moves_focus_to_first() {
        let mut session = opened();
        let EditorEvent::Inserted { block_id } = session
            .apply(EditorCommand::Insert { after: None, block: InsertKind::Text })
            .unwrap()
        else {
            panic!("expected Inserted");
        };
        assert_eq!(session.active_block(), Some(block_id.as_str()));

        session
            .apply(EditorCommand::Remove { block_id: block_id.clone() })
            .unwrap();
        assert_eq!(session.active_block(), Some("1"));
    }

    #[test]
    fn focus_on_media_block_is_rejected() {
        let mut session = opened();
        let EditorEvent::Inserted { block_id } = session
            .apply(EditorCommand::Insert {
                after: None,
                block: InsertKind::Media { layout: "layout6".into() },
            })
            .unwrap()
        else {
            panic!("expected Inserted");
        };
        assert_matches!(
            session.apply(EditorCommand::Focus { block_id }),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn boundary_move_does_not_mark_dirty() {
        let mut session = opened();
        let event = session
            .apply(EditorCommand::Move {
                block_id: "1".into(),
                direction: Direction::Up,
            })
            .unwrap();
        assert_eq!(
            event,
            EditorEvent::Moved { block_id: "1".into(), moved: false }
        );
        assert!(!session.is_dirty());
    }

    #[test]
    fn save_rejects_blank_name() {
        let mut session = opened();
        session
            .apply(EditorCommand::UpdateFields {
                fields: WorkFieldsPatch {
                    name: Some(" ".into()),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_matches!(session.save_payload(), Err(CoreError::Validation(_)));
        assert!(session.is_dirty());
    }

    #[test]
    fn mark_saved_for_other_work_is_ignored() {
        let mut session = opened();
        session.apply(EditorCommand::UpdateFields { fields: Default::default() }).unwrap();
        let mut other = new_draft();
        other.id = 99;
        session.mark_saved(other);
        assert!(session.is_dirty());
        assert_eq!(session.draft().unwrap().id, 7);
    }

    #[test]
    fn commands_deserialize_from_json() {
        let cmd: EditorCommand = serde_json::from_str(
            r#"{"op":"insert","after":"1","block":{"kind":"media","layout":"layout3"}}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            EditorCommand::Insert {
                after: Some("1".into()),
                block: InsertKind::Media { layout: "layout3".into() },
            }
        );
    }
}
