//! Built-in icon set
//!
//! Registered under their export names at bootstrap, the way the UI library
//! expects to look them up.

use crate::app::component::Component;

macro_rules! icon {
    ($paths:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1024 1024">"#,
            $paths,
            "</svg>"
        )
    };
}

const ICONS: &[(&str, &str)] = &[
    (
        "ChatDotRound",
        icon!(r#"<circle cx="512" cy="480" r="384" fill="none" stroke="currentColor" stroke-width="64"/><circle cx="352" cy="480" r="48" fill="currentColor"/><circle cx="512" cy="480" r="48" fill="currentColor"/><circle cx="672" cy="480" r="48" fill="currentColor"/>"#),
    ),
    (
        "ChatLineRound",
        icon!(r#"<circle cx="512" cy="480" r="384" fill="none" stroke="currentColor" stroke-width="64"/><path d="M352 416h320M352 544h192" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Promotion",
        icon!(r#"<path d="M96 480 928 96 736 928 512 608z" fill="none" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Delete",
        icon!(r#"<path d="M192 256h640M384 256V160h256v96M256 256l48 640h416l48-640" fill="none" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Setting",
        icon!(r#"<circle cx="512" cy="512" r="128" fill="none" stroke="currentColor" stroke-width="64"/><circle cx="512" cy="512" r="352" fill="none" stroke="currentColor" stroke-width="64" stroke-dasharray="96 64"/>"#),
    ),
    (
        "User",
        icon!(r#"<circle cx="512" cy="320" r="192" fill="none" stroke="currentColor" stroke-width="64"/><path d="M160 928c0-192 160-320 352-320s352 128 352 320" fill="none" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Loading",
        icon!(r#"<path d="M512 96a416 416 0 1 1-416 416" fill="none" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Plus",
        icon!(r#"<path d="M512 160v704M160 512h704" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Refresh",
        icon!(r#"<path d="M832 512a320 320 0 1 1-96-228M768 128v160H608" fill="none" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Close",
        icon!(r#"<path d="M224 224l576 576M800 224 224 800" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "CopyDocument",
        icon!(r#"<rect x="320" y="320" width="512" height="576" fill="none" stroke="currentColor" stroke-width="64"/><path d="M192 704V128h512" fill="none" stroke="currentColor" stroke-width="64"/>"#),
    ),
    (
        "Search",
        icon!(r#"<circle cx="448" cy="448" r="288" fill="none" stroke="currentColor" stroke-width="64"/><path d="M672 672l224 224" stroke="currentColor" stroke-width="64"/>"#),
    ),
];

/// Every built-in icon with its export name
pub fn builtin() -> impl Iterator<Item = (&'static str, Component)> {
    ICONS
        .iter()
        .map(|(name, markup)| (*name, Component::svg(*markup)))
}
