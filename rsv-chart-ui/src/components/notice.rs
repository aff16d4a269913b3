//! Status boxes for the chart pane: loading, empty selection and load failure.

use dioxus::prelude::*;

/// What a notice reports. Decides its colours, ARIA role and prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Source table still being parsed
    Loading,
    /// The current selection produced no records
    Empty,
    /// The source table could not be loaded; nothing else is shown
    Failure,
}

impl NoticeKind {
    /// (background, text, border) colours.
    fn palette(self) -> (&'static str, &'static str, &'static str) {
        match self {
            NoticeKind::Loading => ("#F5F5F5", "#616161", "#E0E0E0"),
            NoticeKind::Empty => ("#FFF8E1", "#8D6E00", "#FFE082"),
            NoticeKind::Failure => ("#FFEBEE", "#C62828", "#EF9A9A"),
        }
    }

    fn role(self) -> &'static str {
        match self {
            NoticeKind::Failure => "alert",
            NoticeKind::Loading | NoticeKind::Empty => "status",
        }
    }

    fn prefix(self) -> Option<&'static str> {
        match self {
            NoticeKind::Failure => Some("Error: "),
            NoticeKind::Loading | NoticeKind::Empty => None,
        }
    }

    fn style(self) -> String {
        let (background, color, border) = self.palette();
        format!(
            "padding: 12px 16px; margin: 8px 0; background: {}; color: {}; border-radius: 4px; border: 1px solid {};",
            background, color, border
        )
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: String,
}

#[component]
pub fn Notice(props: NoticeProps) -> Element {
    let style = props.kind.style();
    rsx! {
        div {
            role: props.kind.role(),
            style: "{style}",
            if let Some(prefix) = props.kind.prefix() {
                strong { "{prefix}" }
            }
            "{props.message}"
        }
    }
}
