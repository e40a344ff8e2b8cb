//! Share Links
//!
//! Client-side "copy share link" for a branch: build the URL, hand it to the
//! clipboard, and show a confirmation for a fixed period.

use std::time::Duration;

use crate::models::BranchId;
use crate::routes::AppRoute;

/// How long the "Copied!" confirmation stays visible
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Absolute link to a branch detail page
pub fn share_link(origin: &str, id: &BranchId) -> String {
    format!(
        "{}{}",
        origin.trim_end_matches('/'),
        AppRoute::BranchDetail(id.clone()).path()
    )
}

/// Destination for copied text
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Confirmation flag for the copy button
///
/// Each copy bumps a generation so that an older reset timer cannot hide the
/// confirmation of a newer copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Show the confirmation and return the generation to expire later
    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// Hide the confirmation if no newer copy happened since `generation`
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.copied = false;
        }
    }

    pub fn label(&self) -> &'static str {
        if self.copied {
            "✓ Copied!"
        } else {
            "Copy Link"
        }
    }
}

/// Copy the branch link and update the feedback state
///
/// Returns the generation to pass to [`CopyFeedback::expire`] once
/// [`COPY_FEEDBACK`] has elapsed, or the clipboard error.
pub fn copy_share_link(
    clipboard: &impl Clipboard,
    feedback: &mut CopyFeedback,
    origin: &str,
    id: &BranchId,
) -> Result<u64, String> {
    let link = share_link(origin, id);
    clipboard.write_text(&link)?;
    tracing::debug!(%link, "share link copied");
    Ok(feedback.mark_copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClipboard {
        written: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<(), String> {
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&self, _text: &str) -> Result<(), String> {
            Err("Clipboard access denied".to_string())
        }
    }

    #[test]
    fn test_share_link_exact() {
        let id = BranchId::new("42");
        assert_eq!(share_link("https://x.test", &id), "https://x.test/branches/42");
        assert_eq!(share_link("https://x.test/", &id), "https://x.test/branches/42");
    }

    #[test]
    fn test_copy_writes_link_and_resets() {
        let clipboard = RecordingClipboard::default();
        let mut feedback = CopyFeedback::default();

        let generation =
            copy_share_link(&clipboard, &mut feedback, "https://x.test", &BranchId::new("42")).unwrap();

        assert_eq!(*clipboard.written.borrow(), vec!["https://x.test/branches/42"]);
        assert!(feedback.copied());
        assert_eq!(feedback.label(), "✓ Copied!");
        assert_eq!(COPY_FEEDBACK.as_millis(), 2000);

        feedback.expire(generation);
        assert!(!feedback.copied());
        assert_eq!(feedback.label(), "Copy Link");
    }

    #[test]
    fn test_stale_expiry_keeps_newer_confirmation() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.mark_copied();
        let second = feedback.mark_copied();

        feedback.expire(first);
        assert!(feedback.copied());
        feedback.expire(second);
        assert!(!feedback.copied());
    }

    #[test]
    fn test_clipboard_failure_leaves_feedback_hidden() {
        let mut feedback = CopyFeedback::default();
        let err = copy_share_link(&DeniedClipboard, &mut feedback, "https://x.test", &BranchId::new("1"))
            .unwrap_err();
        assert_eq!(err, "Clipboard access denied");
        assert!(!feedback.copied());
    }
}
