//! Fixed utility class strings for the theming primitives.
//!
//! Colors such as `bg-background` resolve through the CSS custom properties published by
//! [`crate::theme::inline_style`].

/// Regular body text.
pub const TEXT: &str = "text-white text-base font-mono";
/// Headline text.
pub const BIG_TEXT: &str = "text-white text-lg font-mono";
/// Action button.
pub const BUTTON: &str =
    "px-4 py-2 rounded bg-background text-white hover:bg-primary/80 transition duration-200";
/// Text and password inputs.
pub const INPUT: &str = "font-mono px-4 text-white bg-background py-2 border rounded-lg border-secondary focus:outline-none focus:ring-2 focus:ring-primary";
/// Outer box of the centering wrapper; fills its parent.
pub const CENTER_OUTER: &str = "relative h-full bg-inherit";
/// Inner box of the centering wrapper; pinned to the middle of the outer box.
pub const CENTER_INNER: &str =
    "absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2";
/// Full-viewport page shell.
pub const PAGE: &str = "h-screen bg-background";

/// Login card surface.
pub const LOGIN_CARD: &str =
    "flex flex-col space-y-8 items-center bg-foreground p-16 rounded-lg shadow-sm";
/// Login card row holding a single field.
pub const LOGIN_FIELD_ROW: &str = "mx-auto px-4";
/// Login card title row.
pub const LOGIN_TITLE_ROW: &str = "mx-auto";
/// Login card action row.
pub const LOGIN_ACTIONS: &str = "flex flex-row space-x-4";

/// Native control type behind an input primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text; the value is shown as typed.
    Plain,
    /// Masked entry for secrets.
    Protected,
}

impl InputKind {
    /// Value for the `type` attribute of the rendered `<input>`.
    #[must_use]
    pub const fn html_type(self) -> &'static str {
        match self {
            Self::Plain => "text",
            Self::Protected => "password",
        }
    }
}
