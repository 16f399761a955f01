//! Entry editor form state.
//!
//! [`EditorState`] is the controlled form behind the edit screen: seeded from
//! an existing entry (edit mode) or blank (create mode), mutated field by
//! field through the event handler, and turned into an [`EntryDraft`] on save
//! via [`build_draft`](EditorState::build_draft). The editor never touches the
//! shell's entry list; it only proposes drafts.

use crate::domain::{EntryDraft, JournalEntry, MOODS, WEATHER_OPTIONS};

/// Form field currently holding keyboard focus.
///
/// Order matches the visual layout; Tab/Shift-Tab cycle through in this
/// order, wrapping at the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Title,
    Content,
    Tags,
    Mood,
    Weather,
    Location,
}

impl EditorFocus {
    const ORDER: [Self; 6] = [
        Self::Title,
        Self::Content,
        Self::Tags,
        Self::Mood,
        Self::Weather,
        Self::Location,
    ];

    /// Next field in layout order, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// Previous field in layout order, wrapping to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Controlled form state for the entry editor.
///
/// All fields are plain strings bound to the form; empty means "absent" for
/// the optional ones. `original` is the editing target (None in create mode)
/// and is the only source for the carried-over photo/voice fields.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The entry being edited, or `None` when composing a new one.
    pub original: Option<JournalEntry>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// In-progress text in the tag input box.
    pub tag_input: String,
    /// Selected mood, empty when none.
    pub mood: String,
    /// Selected weather, empty when none.
    pub weather: String,
    pub location: String,
    pub is_favorite: bool,
    /// Voice-recording toggle. UI-only; no recording is produced.
    pub is_recording: bool,
    /// Guards against overlapping save submissions.
    pub is_saving: bool,
    pub focus: EditorFocus,
}

impl EditorState {
    /// Creates a form seeded from `entry`, or a blank create-mode form.
    #[must_use]
    pub fn new(entry: Option<JournalEntry>) -> Self {
        let (title, content, tags, mood, weather, location, is_favorite) = match &entry {
            Some(e) => (
                e.title.clone().unwrap_or_default(),
                e.content.clone(),
                e.tags.clone(),
                e.mood.clone().unwrap_or_default(),
                e.weather.clone().unwrap_or_default(),
                e.location.clone().unwrap_or_default(),
                e.is_favorite,
            ),
            None => Default::default(),
        };

        Self {
            original: entry,
            title,
            content,
            tags,
            tag_input: String::new(),
            mood,
            weather,
            location,
            is_favorite,
            is_recording: false,
            is_saving: false,
            focus: EditorFocus::Content,
        }
    }

    /// Whether the form is editing an existing entry.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    /// Whether a save would currently be accepted.
    ///
    /// Mirrors the disabled state of the save control: content must be
    /// non-blank and no save may be in flight.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.content.trim().is_empty() && !self.is_saving
    }

    /// Commits the tag input box as a new tag.
    ///
    /// Trims whitespace; empty and duplicate tags are rejected (the input box
    /// is left untouched for duplicates so the user sees what collided).
    /// Returns `true` if a tag was added.
    pub fn add_tag(&mut self) -> bool {
        let tag = self.tag_input.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        self.tag_input.clear();
        true
    }

    /// Removes an existing tag by exact match.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Appends a character to the focused text field.
    ///
    /// Mood and weather are selection fields and ignore character input.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            EditorFocus::Title => self.title.push(c),
            EditorFocus::Content => self.content.push(c),
            EditorFocus::Tags => self.tag_input.push(c),
            EditorFocus::Location => self.location.push(c),
            EditorFocus::Mood | EditorFocus::Weather => {}
        }
    }

    /// Handles backspace in the focused field.
    ///
    /// In the tag field, backspace on an empty input removes the most
    /// recently added tag instead.
    pub fn backspace(&mut self) {
        match self.focus {
            EditorFocus::Title => {
                self.title.pop();
            }
            EditorFocus::Content => {
                self.content.pop();
            }
            EditorFocus::Location => {
                self.location.pop();
            }
            EditorFocus::Tags => {
                if self.tag_input.pop().is_none() {
                    self.tags.pop();
                }
            }
            EditorFocus::Mood | EditorFocus::Weather => {}
        }
    }

    /// Steps the mood selection forward or backward through none + the fixed
    /// vocabulary.
    pub fn cycle_mood(&mut self, forward: bool) {
        self.mood = cycle_option(&self.mood, &MOODS, forward);
    }

    /// Steps the weather selection forward or backward through none + the
    /// fixed vocabulary.
    pub fn cycle_weather(&mut self, forward: bool) {
        self.weather = cycle_option(&self.weather, &WEATHER_OPTIONS, forward);
    }

    /// Flips the favorite flag.
    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    /// Flips the recording indicator.
    ///
    /// Voice capture is an external collaborator that is out of scope; the
    /// control exists but only toggles this UI flag.
    pub fn toggle_recording(&mut self) {
        self.is_recording = !self.is_recording;
        tracing::info!(
            recording = self.is_recording,
            "voice recording toggled (capture not implemented)"
        );
    }

    /// Photo attach control. Media storage is out of scope, so this only
    /// logs the request.
    pub fn attach_photo(&self) {
        tracing::info!("photo attach requested (media upload not implemented)");
    }

    /// Assembles the partial record for saving.
    ///
    /// Returns `None` when content is blank after trimming or a save is
    /// already in flight, making save a silent no-op in those cases. Trimmed
    /// optional fields collapse to absent; photos and voice fields are
    /// carried over from the original entry when editing; `id` and a fresh
    /// `updated_at` are attached only in edit mode.
    #[must_use]
    pub fn build_draft(&self) -> Option<EntryDraft> {
        if !self.can_save() {
            return None;
        }

        let trimmed = |s: &str| {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        };

        Some(EntryDraft {
            id: self.original.as_ref().map(|e| e.id.clone()),
            title: trimmed(&self.title),
            content: self.content.trim().to_string(),
            tags: self.tags.clone(),
            mood: trimmed(&self.mood),
            weather: trimmed(&self.weather),
            location: trimmed(&self.location),
            is_favorite: self.is_favorite,
            photos: self
                .original
                .as_ref()
                .map(|e| e.photos.clone())
                .unwrap_or_default(),
            voice_recording_url: self
                .original
                .as_ref()
                .and_then(|e| e.voice_recording_url.clone()),
            voice_transcription: self
                .original
                .as_ref()
                .and_then(|e| e.voice_transcription.clone()),
            updated_at: self.original.as_ref().map(|_| chrono::Utc::now()),
        })
    }
}

/// Steps `current` through `["", options...]`, wrapping in both directions.
fn cycle_option(current: &str, options: &[&str], forward: bool) -> String {
    let states = std::iter::once("").chain(options.iter().copied());
    let all: Vec<&str> = states.collect();
    let idx = all.iter().position(|s| *s == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else {
        (idx + all.len() - 1) % all.len()
    };
    all[next].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_entries;

    #[test]
    fn add_tag_trims_and_rejects_duplicates() {
        let mut editor = EditorState::new(None);
        editor.tag_input = "  work ".to_string();
        assert!(editor.add_tag());
        assert_eq!(editor.tags, vec!["work".to_string()]);

        editor.tag_input = "work".to_string();
        assert!(!editor.add_tag());
        assert_eq!(editor.tags, vec!["work".to_string()]);

        editor.tag_input = "   ".to_string();
        assert!(!editor.add_tag());
        assert_eq!(editor.tags.len(), 1);
    }

    #[test]
    fn build_draft_rejects_blank_content_and_inflight_save() {
        let mut editor = EditorState::new(None);
        editor.content = "  \n".to_string();
        assert!(editor.build_draft().is_none());

        editor.content = "something".to_string();
        editor.is_saving = true;
        assert!(editor.build_draft().is_none());

        editor.is_saving = false;
        assert!(editor.build_draft().is_some());
    }

    #[test]
    fn draft_attaches_id_and_updated_at_only_when_editing() {
        let mut blank = EditorState::new(None);
        blank.content = "new entry".to_string();
        let draft = blank.build_draft().unwrap();
        assert!(draft.id.is_none());
        assert!(draft.updated_at.is_none());

        let mut seeded = EditorState::new(Some(sample_entries().remove(0)));
        seeded.content = "edited".to_string();
        let draft = seeded.build_draft().unwrap();
        assert_eq!(draft.id.as_deref(), Some("1"));
        assert!(draft.updated_at.is_some());
    }

    #[test]
    fn draft_collapses_blank_optionals() {
        let mut editor = EditorState::new(None);
        editor.content = "body".to_string();
        editor.title = "   ".to_string();
        editor.location = " Home ".to_string();
        let draft = editor.build_draft().unwrap();
        assert!(draft.title.is_none());
        assert_eq!(draft.location.as_deref(), Some("Home"));
    }

    #[test]
    fn mood_cycles_through_none_and_vocabulary() {
        let mut editor = EditorState::new(None);
        assert_eq!(editor.mood, "");
        editor.cycle_mood(true);
        assert_eq!(editor.mood, "happy");
        editor.cycle_mood(false);
        editor.cycle_mood(false);
        assert_eq!(editor.mood, "peaceful");
    }

    #[test]
    fn backspace_on_empty_tag_input_removes_last_tag() {
        let mut editor = EditorState::new(None);
        editor.focus = EditorFocus::Tags;
        editor.tags = vec!["a".to_string(), "b".to_string()];
        editor.backspace();
        assert_eq!(editor.tags, vec!["a".to_string()]);
    }
}
