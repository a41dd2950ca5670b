//! Property-based tests for validation and widget state
//!
//! Uses proptest to check that non-images never reach the network and that
//! UploadState keeps its invariants under arbitrary event sequences.

use std::cell::Cell;

use proptest::prelude::*;

use imgdrop_core::flow::{self, SubmitOutcome};
use imgdrop_core::{
    MemoryStore, Notice, SelectedFile, UploadResult, UploadState, UploadedImage, Uploader,
};

/// Uploader that only counts how often it was asked.
#[derive(Default)]
struct CountingUploader {
    calls: Cell<usize>,
}

impl Uploader for CountingUploader {
    async fn upload(&self, _file: &SelectedFile) -> UploadResult<UploadedImage> {
        self.calls.set(self.calls.get() + 1);
        UploadedImage::from_json(br#"{"secure_url":"https://res.cloudinary.com/x/a.png"}"#)
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
        .block_on(future)
}

// ============================================================================
// Strategy Generators
// ============================================================================

/// MIME-looking strings that are not images
fn non_image_content_type() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}/[a-z0-9.+-]{1,20}")
        .expect("valid regex")
        .prop_filter("not an image", |s| !s.starts_with("image/"))
}

/// File names whose extension is not an image format
fn non_image_file_name() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z0-9_-]{1,20}",
        prop::sample::select(vec!["txt", "pdf", "zip", "mp4", "mp3", "json", "html", "exe", "doc"]),
    )
        .prop_map(|(stem, ext)| format!("{}.{}", stem, ext))
}

/// Events the widget can see
#[derive(Debug, Clone)]
enum StateOp {
    DragOver,
    DragLeave,
    Drop,
    Begin,
    Complete,
    Fail,
    Copy,
    ClearCopied,
}

fn state_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<StateOp>> {
    prop::collection::vec(
        prop_oneof![
            Just(StateOp::DragOver),
            Just(StateOp::DragLeave),
            Just(StateOp::Drop),
            Just(StateOp::Begin),
            Just(StateOp::Complete),
            Just(StateOp::Fail),
            Just(StateOp::Copy),
            Just(StateOp::ClearCopied),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any declared non-image content type is rejected before dispatch
    #[test]
    fn non_image_content_type_never_dispatches(content_type in non_image_content_type()) {
        let uploader = CountingUploader::default();
        let mut store = MemoryStore::default();
        let file = SelectedFile::with_content_type("upload", content_type, vec![0u8; 4]);

        let outcome = block_on(flow::submit_file(&uploader, &mut store, file));

        prop_assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        prop_assert_eq!(uploader.calls.get(), 0);
        prop_assert_eq!(store.notices, vec![Notice::invalid_file()]);
        prop_assert_eq!(store.state, UploadState::default());
    }

    /// Non-image extensions are declared as non-images and rejected
    #[test]
    fn non_image_extension_never_dispatches(name in non_image_file_name()) {
        let uploader = CountingUploader::default();
        let mut store = MemoryStore::default();
        let file = SelectedFile::new(name, b"\x89PNG\r\n\x1a\n".to_vec());

        let outcome = block_on(flow::submit_file(&uploader, &mut store, file));

        prop_assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        prop_assert_eq!(uploader.calls.get(), 0);
    }

    /// UploadState matches a simple model under any event sequence
    #[test]
    fn state_follows_model(ops in state_ops_strategy(60)) {
        let mut state = UploadState::default();
        let mut uploading = false;
        let mut url: Option<String> = None;

        for (i, op) in ops.iter().enumerate() {
            match op {
                StateOp::DragOver => state.drag_over(),
                StateOp::DragLeave => {
                    state.drag_leave();
                    prop_assert!(!state.is_dragging);
                }
                StateOp::Drop => {
                    state.drop_received();
                    prop_assert!(!state.is_dragging);
                }
                StateOp::Begin => {
                    state.begin_upload();
                    uploading = true;
                    url = None;
                    prop_assert!(!state.copied);
                }
                StateOp::Complete => {
                    let next = format!("https://res.cloudinary.com/x/{}.png", i);
                    state.complete(next.clone());
                    uploading = false;
                    url = Some(next);
                }
                StateOp::Fail => {
                    state.fail();
                    uploading = false;
                    url = None;
                }
                StateOp::Copy => {
                    let copied = state.mark_copied();
                    prop_assert_eq!(copied.is_some(), url.is_some());
                }
                StateOp::ClearCopied => state.clear_copied(),
            }

            prop_assert_eq!(state.is_uploading, uploading);
            prop_assert_eq!(state.accepts_input(), !uploading);
            prop_assert_eq!(&state.image_url, &url);
            if state.copied {
                prop_assert!(state.image_url.is_some());
            }
        }
    }
}
