//! Phase Badge Component
//!
//! Small status line under the drop zone:
//! - "ready" - waiting for a file
//! - "release to upload" - a file is hovering
//! - "uploading" - request in flight
//! - "link ready" - a URL is available

use dioxus::prelude::*;
use imgdrop_core::Phase;

/// Returns the display label for a phase
pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "ready",
        Phase::Dragging => "release to upload",
        Phase::Uploading => "uploading",
        Phase::Uploaded => "link ready",
    }
}

/// Returns whether the indicator should pulse
pub fn phase_is_active(phase: Phase) -> bool {
    matches!(phase, Phase::Dragging | Phase::Uploading)
}

/// Displays the widget phase with a status dot
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PhaseBadge { phase: state.read().phase() }
/// }
/// ```
#[component]
pub fn PhaseBadge(phase: Phase) -> Element {
    let label = phase_label(phase);
    let dot_class = if phase_is_active(phase) {
        "phase-badge__dot phase-badge__dot--active"
    } else {
        "phase-badge__dot"
    };

    rsx! {
        div { class: "phase-badge",
            span { class: "{dot_class}" }
            span { class: "phase-badge__label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_labels() {
        assert_eq!(phase_label(Phase::Idle), "ready");
        assert_eq!(phase_label(Phase::Dragging), "release to upload");
        assert_eq!(phase_label(Phase::Uploading), "uploading");
        assert_eq!(phase_label(Phase::Uploaded), "link ready");
    }

    #[test]
    fn only_transient_phases_pulse() {
        assert!(phase_is_active(Phase::Dragging));
        assert!(phase_is_active(Phase::Uploading));
        assert!(!phase_is_active(Phase::Idle));
        assert!(!phase_is_active(Phase::Uploaded));
    }
}
