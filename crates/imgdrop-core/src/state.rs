//! Upload widget state.
//!
//! ```text
//! Idle ──drag_over──▶ Dragging ──drop_received──▶ Idle
//!   │                    │
//!   │                drag_leave
//!   ▼                    ▼
//! begin_upload ──▶ Uploading ──complete──▶ Uploaded
//!                      │
//!                     fail ──▶ Idle
//! ```

/// Coarse view of [`UploadState`] for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Uploading,
    Uploaded,
}

/// Everything the widget remembers. Lives as long as the widget does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    /// A file is hovering over the drop zone
    pub is_dragging: bool,
    /// A request is in flight
    pub is_uploading: bool,
    /// Result of the last successful upload
    pub image_url: Option<String>,
    /// The copy button was pressed recently
    pub copied: bool,
    /// Bumped on every successful copy
    pub copy_generation: u64,
}

impl UploadState {
    pub fn phase(&self) -> Phase {
        if self.is_uploading {
            Phase::Uploading
        } else if self.is_dragging {
            Phase::Dragging
        } else if self.image_url.is_some() {
            Phase::Uploaded
        } else {
            Phase::Idle
        }
    }

    /// Whether the drop zone takes new files.
    pub fn accepts_input(&self) -> bool {
        !self.is_uploading
    }

    /// Highlight the drop zone. Ignored while uploading.
    pub fn drag_over(&mut self) {
        if self.accepts_input() {
            self.is_dragging = true;
        }
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// A drop always clears the highlight, whatever happens to the file.
    pub fn drop_received(&mut self) {
        self.is_dragging = false;
    }

    pub fn begin_upload(&mut self) {
        self.is_uploading = true;
        self.image_url = None;
        self.copied = false;
    }

    pub fn complete(&mut self, url: impl Into<String>) {
        self.is_uploading = false;
        self.image_url = Some(url.into());
    }

    pub fn fail(&mut self) {
        self.is_uploading = false;
        self.image_url = None;
        self.copied = false;
    }

    /// Flag the URL as copied and hand it back, if there is one.
    pub fn mark_copied(&mut self) -> Option<String> {
        let url = self.image_url.clone()?;
        self.copied = true;
        self.copy_generation += 1;
        Some(url)
    }

    pub fn clear_copied(&mut self) {
        self.copied = false;
    }

    /// Clear `copied` only if no copy happened since `generation`.
    ///
    /// Returns false for a stale timer, which leaves the flag alone.
    pub fn clear_copied_if(&mut self, generation: u64) -> bool {
        if self.copy_generation != generation {
            return false;
        }
        self.copied = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = UploadState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.accepts_input());
        assert!(state.image_url.is_none());
        assert!(!state.copied);
    }

    #[test]
    fn test_drag_cycle() {
        let mut state = UploadState::default();
        state.drag_over();
        assert_eq!(state.phase(), Phase::Dragging);
        state.drag_leave();
        assert_eq!(state.phase(), Phase::Idle);

        state.drag_over();
        state.drop_received();
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_drag_ignored_while_uploading() {
        let mut state = UploadState::default();
        state.begin_upload();
        state.drag_over();
        assert!(!state.is_dragging);
        assert_eq!(state.phase(), Phase::Uploading);
        assert!(!state.accepts_input());
    }

    #[test]
    fn test_begin_upload_clears_previous_result() {
        let mut state = UploadState::default();
        state.begin_upload();
        state.complete("https://res.cloudinary.com/x/image/upload/a.png");
        state.mark_copied();

        state.begin_upload();
        assert!(state.image_url.is_none());
        assert!(!state.copied);
        assert!(state.is_uploading);
    }

    #[test]
    fn test_complete_and_fail() {
        let mut state = UploadState::default();
        state.begin_upload();
        state.complete("https://res.cloudinary.com/x/image/upload/abc.png");
        assert_eq!(state.phase(), Phase::Uploaded);
        assert_eq!(
            state.image_url.as_deref(),
            Some("https://res.cloudinary.com/x/image/upload/abc.png")
        );

        state.begin_upload();
        state.fail();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.accepts_input());
    }

    #[test]
    fn test_mark_copied_requires_url() {
        let mut state = UploadState::default();
        assert_eq!(state.mark_copied(), None);
        assert!(!state.copied);

        state.complete("https://x/y.png");
        assert_eq!(state.mark_copied().as_deref(), Some("https://x/y.png"));
        assert!(state.copied);
        state.clear_copied();
        assert!(!state.copied);
    }

    #[test]
    fn test_stale_clear_keeps_newer_copy() {
        let mut state = UploadState::default();
        state.complete("https://x/y.png");

        state.mark_copied();
        let first = state.copy_generation;
        state.mark_copied();
        let second = state.copy_generation;
        assert!(second > first);

        assert!(!state.clear_copied_if(first));
        assert!(state.copied);
        assert!(state.clear_copied_if(second));
        assert!(!state.copied);
    }
}
