use maud::{html, Markup};

/// One banner per outcome category, so the user can tell a transport error
/// from an empty alert from "fetched but nothing qualifies".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Success,
    Info,
    Warning,
    Error,
}

impl Flash {
    fn class(self) -> &'static str {
        match self {
            Flash::Success => "flash flash-success",
            Flash::Info => "flash flash-info",
            Flash::Warning => "flash flash-warning",
            Flash::Error => "flash flash-error",
        }
    }
}

pub fn flash(kind: Flash, message: &str) -> Markup {
    html! {
        div class=(kind.class()) { (message) }
    }
}
