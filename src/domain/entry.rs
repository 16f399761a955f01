//! Journal entry domain model and operations.
//!
//! This module defines the core [`JournalEntry`] type together with
//! [`EntryDraft`], the partial record the editor assembles on save. Entries are
//! owned exclusively by the application shell's in-memory list; the editor and
//! timeline only read entries or propose drafts, they never mutate the list
//! directly.
//!
//! # Invariants
//!
//! - `content` is never empty after trimming at save time
//! - `id` is assigned once at creation and never changes
//! - `tags` contains no duplicate entries
//! - `updated_at >= created_at`

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::{DaybookError, Result};

/// The fixed mood vocabulary offered by the editor.
pub const MOODS: [&str; 8] = [
    "happy",
    "grateful",
    "excited",
    "calm",
    "thoughtful",
    "motivated",
    "nostalgic",
    "peaceful",
];

/// The fixed weather vocabulary offered by the editor.
pub const WEATHER_OPTIONS: [&str; 7] = [
    "sunny", "cloudy", "rainy", "snowy", "stormy", "foggy", "windy",
];

/// One journal record.
///
/// Timestamps use UTC and serialize in RFC 3339 form. The `photos` and voice
/// fields are carried for count/presence display only; no media pipeline
/// exists in this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Opaque identifier, assigned once at creation.
    pub id: String,
    /// Owner back-reference. Informational only; entries are not shared.
    pub user_id: String,
    /// Optional headline shown on the timeline card.
    pub title: Option<String>,
    /// Entry body. Non-empty after trimming (enforced at draft build time
    /// and again by [`JournalEntry::create`]).
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set-like tag list: no duplicates, insertion order preserved.
    pub tags: Vec<String>,
    /// Opaque photo URLs. Only the count is displayed.
    pub photos: Vec<String>,
    /// Only the presence of a recording is displayed.
    pub voice_recording_url: Option<String>,
    pub voice_transcription: Option<String>,
    pub is_favorite: bool,
    pub mood: Option<String>,
    pub weather: Option<String>,
    pub location: Option<String>,
}

/// The partial record produced by the entry editor on save.
///
/// `id` and `updated_at` are attached only when an existing entry is being
/// edited; every other field reflects the current form state. `photos` and the
/// voice fields are carried over from the original entry unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Present only when editing an existing entry.
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub mood: Option<String>,
    pub weather: Option<String>,
    pub location: Option<String>,
    pub is_favorite: bool,
    pub photos: Vec<String>,
    pub voice_recording_url: Option<String>,
    pub voice_transcription: Option<String>,
    /// Present only when editing an existing entry.
    pub updated_at: Option<DateTime<Utc>>,
}

impl JournalEntry {
    /// Constructs a new entry from a draft.
    ///
    /// Assigns a freshly generated UUID, sets both timestamps to the current
    /// time, and takes the owner from `user_id`. Omitted optional fields keep
    /// their draft defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DaybookError::Entry`] if the draft content is empty after
    /// trimming. The editor refuses to build such drafts, so this guards the
    /// model invariant rather than a reachable UI path.
    pub fn create(draft: EntryDraft, user_id: &str) -> Result<Self> {
        if draft.content.trim().is_empty() {
            return Err(DaybookError::Entry("entry content is empty".to_string()));
        }

        let now = Utc::now();
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
            tags: draft.tags,
            photos: draft.photos,
            voice_recording_url: draft.voice_recording_url,
            voice_transcription: draft.voice_transcription,
            is_favorite: draft.is_favorite,
            mood: draft.mood,
            weather: draft.weather,
            location: draft.location,
        })
    }

    /// Merges a draft into this entry.
    ///
    /// Shallow overwrite of the editor-controlled fields; `id`, `user_id` and
    /// `created_at` are untouched and `updated_at` is stamped with the current
    /// time (never moving backwards).
    pub fn apply(&mut self, draft: EntryDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.tags = draft.tags;
        self.mood = draft.mood;
        self.weather = draft.weather;
        self.location = draft.location;
        self.is_favorite = draft.is_favorite;
        self.photos = draft.photos;
        self.voice_recording_url = draft.voice_recording_url;
        self.voice_transcription = draft.voice_transcription;
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Character count of the body, as shown on cards and in the editor.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// The two fixed sample entries shown when the timeline has nothing to display.
///
/// Ids `"1"` and `"2"` are stable so selecting a sample card behaves
/// deterministically. This is demonstration data, not product content; the
/// timeline substitutes it for an empty list instead of showing an empty
/// state.
#[must_use]
pub fn sample_entries() -> Vec<JournalEntry> {
    let now = Utc::now();
    let yesterday = now - Duration::days(1);

    vec![
        JournalEntry {
            id: "1".to_string(),
            user_id: "user1".to_string(),
            title: Some("A Beautiful Morning".to_string()),
            content: "Woke up to the most amazing sunrise today. The sky was painted in \
                      shades of orange and pink, and I couldn't help but feel grateful for \
                      this moment of peace. Sometimes it's the simple things that bring the \
                      most joy."
                .to_string(),
            created_at: now,
            updated_at: now,
            tags: vec![
                "gratitude".to_string(),
                "morning".to_string(),
                "nature".to_string(),
            ],
            photos: vec![],
            voice_recording_url: None,
            voice_transcription: None,
            is_favorite: true,
            mood: Some("happy".to_string()),
            weather: Some("sunny".to_string()),
            location: Some("Home".to_string()),
        },
        JournalEntry {
            id: "2".to_string(),
            user_id: "user1".to_string(),
            title: Some("Team Meeting Insights".to_string()),
            content: "Had a productive team meeting today. We discussed the new project \
                      roadmap and I'm excited about the challenges ahead. The collaboration \
                      with my colleagues has been inspiring."
                .to_string(),
            created_at: yesterday,
            updated_at: yesterday,
            tags: vec![
                "work".to_string(),
                "team".to_string(),
                "productivity".to_string(),
            ],
            photos: vec![],
            voice_recording_url: None,
            voice_transcription: None,
            is_favorite: false,
            mood: Some("motivated".to_string()),
            weather: Some("cloudy".to_string()),
            location: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_id_and_equal_timestamps() {
        let draft = EntryDraft {
            content: "first entry".to_string(),
            ..EntryDraft::default()
        };
        let entry = JournalEntry::create(draft, "user-a").unwrap();

        assert!(!entry.id.is_empty());
        assert_eq!(entry.user_id, "user-a");
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn create_rejects_blank_content() {
        let draft = EntryDraft {
            content: "   \n ".to_string(),
            ..EntryDraft::default()
        };
        assert!(JournalEntry::create(draft, "user-a").is_err());
    }

    #[test]
    fn apply_never_moves_updated_at_backwards() {
        let mut entry = sample_entries().remove(0);
        let before = entry.updated_at;

        entry.apply(EntryDraft {
            content: "rewritten".to_string(),
            ..EntryDraft::default()
        });

        assert!(entry.updated_at >= before);
        assert_eq!(entry.content, "rewritten");
        assert_eq!(entry.id, "1");
    }

    #[test]
    fn sample_entries_have_stable_ids() {
        let samples = sample_entries();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].id, "1");
        assert_eq!(samples[1].id, "2");
        assert!(samples[0].tags.contains(&"gratitude".to_string()));
    }
}
