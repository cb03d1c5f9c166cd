//! Main IPC message enums for communication between the viewer and UI.

use serde::{Deserialize, Serialize};

use crate::commands::ViewerCommand;
use crate::error::IpcError;
use crate::types::{HeadVariant, Panel, PatternKind, ViewerSnapshot};

/// Messages from the viewer to the control UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewerToUi {
    /// Full state sync, sent on startup and on request
    Initialize(ViewerSnapshot),

    /// The model finished loading with these head variants available
    ModelLoaded { heads: Vec<HeadVariant> },

    /// Active head variant changed
    HeadChanged { head: HeadVariant },

    /// Active pattern changed
    PatternChanged { pattern: PatternKind },

    /// Open panel changed (`None` when all panels are closed)
    PanelChanged { panel: Option<Panel> },

    /// Error notification
    Error { code: String, message: String },
}

/// Messages from the control UI to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToViewer {
    /// UI finished loading and needs a full state sync
    Ready,

    /// A control changed
    Command(ViewerCommand),
}

impl UiToViewer {
    /// Parse a JSON message as sent by the host page
    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ViewerToUi {
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgb, ShadingParam};

    #[test]
    fn test_command_wire_format() {
        let msg = UiToViewer::from_json(
            r##"{"type":"Command","data":{"type":"SetBaseColor","data":"#ff8000"}}"##,
        )
        .unwrap();
        assert_eq!(
            msg,
            UiToViewer::Command(ViewerCommand::SetBaseColor(Rgb::new(0xff, 0x80, 0x00)))
        );

        let msg = UiToViewer::from_json(
            r#"{"type":"Command","data":{"type":"SetShadingParam","data":{"param":"shininess","value":42.0}}}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            UiToViewer::Command(ViewerCommand::SetShadingParam {
                param: ShadingParam::Shininess,
                value: 42.0,
            })
        );
    }

    #[test]
    fn test_unit_variants() {
        assert_eq!(UiToViewer::from_json(r#"{"type":"Ready"}"#).unwrap(), UiToViewer::Ready);
        let msg = UiToViewer::from_json(r#"{"type":"Command","data":{"type":"ClickOutside"}}"#)
            .unwrap();
        assert_eq!(msg, UiToViewer::Command(ViewerCommand::ClickOutside));
    }

    #[test]
    fn test_unknown_head_is_rejected() {
        let result = UiToViewer::from_json(
            r#"{"type":"Command","data":{"type":"SelectHead","data":"Head_Z"}}"#,
        );
        assert!(matches!(result, Err(IpcError::Json(_))));
    }

    #[test]
    fn test_outbound_serialization() {
        let json = ViewerToUi::PanelChanged { panel: None }.to_json().unwrap();
        assert_eq!(json, r#"{"type":"PanelChanged","data":{"panel":null}}"#);
        let json = ViewerToUi::HeadChanged { head: HeadVariant::A }.to_json().unwrap();
        assert_eq!(json, r#"{"type":"HeadChanged","data":{"head":"Head_A"}}"#);
    }
}
