use dioxus::prelude::*;

/// Visual flavor of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
            AlertKind::Info => "alert alert-info",
            AlertKind::Warning => "alert alert-warning",
        }
    }
}

/// Inline message box, used for form errors and confirmations.
#[component]
pub fn Alert(message: String, #[props(default)] kind: AlertKind) -> Element {
    rsx! {
        div {
            class: "{kind.class()}",
            role: "alert",
            "{message}"
        }
    }
}
