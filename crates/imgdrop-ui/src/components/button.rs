//! Button Components
//!
//! Compact icon buttons used for the copy action and toast dismissal.

use dioxus::prelude::*;

/// Icon button visual variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IconButtonVariant {
    /// Filled accent button for the primary action next to an input
    #[default]
    Solid,
    /// Borderless button for secondary actions
    Ghost,
}

impl IconButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            IconButtonVariant::Solid => "icon-btn icon-btn--solid",
            IconButtonVariant::Ghost => "icon-btn icon-btn--ghost",
        }
    }
}

/// Properties for the IconButton component
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers, also used as tooltip
    pub aria_label: String,
    #[props(default)]
    pub variant: IconButtonVariant,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Icon-only button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconButton {
///         onclick: move |_| copy_link(),
///         aria_label: "Copy link".to_string(),
///         "⧉"
///     }
/// }
/// ```
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let base_class = props.variant.class();
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", base_class, extra),
        _ => base_class.to_string(),
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{props.aria_label}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            variant: IconButtonVariant::Ghost,
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
