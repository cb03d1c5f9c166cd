//! Settings panels of the control UI.

use serde::{Deserialize, Serialize};

/// A collapsible settings panel. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Colors,
    Pattern,
    Head,
    Finish,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Colors, Panel::Pattern, Panel::Head, Panel::Finish];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Colors => "Colors",
            Panel::Pattern => "Pattern",
            Panel::Head => "Head",
            Panel::Finish => "Finish",
        }
    }
}
