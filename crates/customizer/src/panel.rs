//! Single-select settings panel state
//!
//! Panel state is UI-only: it never feeds into rendering.

use scarab_ipc::Panel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    open: Option<Panel>,
}

impl PanelState {
    pub fn open_panel(&self) -> Option<Panel> {
        self.open
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.open == Some(panel)
    }

    /// Close `panel` if it is the open one, otherwise open it in place of
    /// whatever was open. Returns the new open panel.
    pub fn toggle(&mut self, panel: Panel) -> Option<Panel> {
        self.open = if self.open == Some(panel) { None } else { Some(panel) };
        self.open
    }

    /// Close whichever panel is open. Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut state = PanelState::default();
        assert_eq!(state.toggle(Panel::Colors), Some(Panel::Colors));
        assert!(state.is_open(Panel::Colors));
        assert_eq!(state.toggle(Panel::Colors), None);
        assert_eq!(state.open_panel(), None);
    }

    #[test]
    fn test_selecting_another_panel_swaps() {
        let mut state = PanelState::default();
        state.toggle(Panel::Pattern);
        assert_eq!(state.toggle(Panel::Head), Some(Panel::Head));
        assert!(!state.is_open(Panel::Pattern));
    }

    #[test]
    fn test_close_outside() {
        let mut state = PanelState::default();
        assert!(!state.close());
        state.toggle(Panel::Finish);
        assert!(state.close());
        assert_eq!(state.open_panel(), None);
    }
}
