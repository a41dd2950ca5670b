//! Toast notifications
//!
//! Notices from the upload flow land in a [`ToastQueue`] held in a signal;
//! [`Toaster`] renders it. Each toast removes itself after
//! [`TOAST_DURATION`] using a task owned by its own component, so an
//! unmounted toast never fires a stale dismissal.

use std::time::Duration;

use dioxus::prelude::*;
use imgdrop_core::Notice;

use super::CloseButton;

/// Most toasts visible at once; older ones are evicted first.
pub const TOAST_LIMIT: usize = 3;

/// How long a toast stays up without interaction.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Queue a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!("Toast {}: {}", id, notice.title);

        self.toasts.push(Toast { id, notice });
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Wait `delay`, then dismiss toast `id`.
///
/// Dismissing an id that is already gone is a no-op on [`ToastQueue`], so a
/// toast closed by hand needs no cleanup here.
pub async fn dismiss_after<F: FnOnce(u64)>(id: u64, delay: Duration, dismiss: F) {
    tokio::time::sleep(delay).await;
    dismiss(id);
}

/// Renders the queued toasts in a fixed corner stack.
#[component]
pub fn Toaster(queue: Signal<ToastQueue>) -> Element {
    let mut queue = queue;
    let toasts = queue.read().toasts().to_vec();

    rsx! {
        div { class: "toaster", role: "status", "aria-live": "polite",
            for toast in toasts {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id| {
                        queue.write().dismiss(id);
                    },
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;

    // Auto-dismiss; the task dies with this component
    use_effect(move || {
        spawn(dismiss_after(id, TOAST_DURATION, move |id| on_dismiss.call(id)));
    });

    let class = format!("toast {}", toast.notice.tone.class());

    rsx! {
        div { class: "{class}",
            div { class: "toast__body",
                div { class: "toast__title", "{toast.notice.title}" }
                div { class: "toast__description", "{toast.notice.description}" }
            }
            CloseButton { onclick: move |_| on_dismiss.call(id) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::time::sleep;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Notice::upload_succeeded());
        let b = queue.push(Notice::copied());
        assert!(b > a);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.toasts()[0].notice, Notice::upload_succeeded());
    }

    #[test]
    fn push_evicts_oldest_past_limit() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::invalid_file());
        for _ in 0..TOAST_LIMIT {
            queue.push(Notice::upload_failed());
        }
        assert_eq!(queue.len(), TOAST_LIMIT);
        assert!(queue.toasts().iter().all(|toast| toast.id != first));
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Notice::copied());
        let b = queue.push(Notice::copy_failed());

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].id, b);

        assert!(queue.dismiss(b));
        assert!(queue.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn toast_expires_after_duration() {
        let queue = RefCell::new(ToastQueue::default());
        let first = queue.borrow_mut().push(Notice::upload_succeeded());
        let second = queue.borrow_mut().push(Notice::copied());

        tokio::join!(
            dismiss_after(first, TOAST_DURATION, |id| {
                queue.borrow_mut().dismiss(id);
            }),
            async {
                sleep(Duration::from_millis(3900)).await;
                assert_eq!(queue.borrow().len(), 2);
                sleep(Duration::from_millis(200)).await;
                let queue = queue.borrow();
                assert_eq!(queue.len(), 1);
                assert_eq!(queue.toasts()[0].id, second);
            },
        );
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_after_manual_close_touches_nothing_else() {
        let queue = RefCell::new(ToastQueue::default());
        let first = queue.borrow_mut().push(Notice::copied());
        assert!(queue.borrow_mut().dismiss(first));
        let later = queue.borrow_mut().push(Notice::upload_failed());

        let mut removed = None;
        dismiss_after(first, TOAST_DURATION, |id| {
            removed = Some(queue.borrow_mut().dismiss(id));
        })
        .await;

        assert_eq!(removed, Some(false));
        assert_eq!(queue.borrow().toasts()[0].id, later);
    }
}
