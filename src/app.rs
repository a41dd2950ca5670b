use dioxus::prelude::*;
use imgdrop_ui::{ToastQueue, Toaster};

use crate::pages::UploadPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the toast queue, and the single upload page.
#[component]
pub fn App() -> Element {
    let toasts: Signal<ToastQueue> = use_signal(ToastQueue::default);
    use_context_provider(|| toasts);

    rsx! {
        style { {GLOBAL_STYLES} }
        UploadPage {}
        Toaster { queue: toasts }
    }
}
