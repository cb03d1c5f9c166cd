//! Queues between the viewer and whichever UI drives it

use std::collections::VecDeque;

use bevy::prelude::*;
use scarab_ipc::{UiToViewer, ViewerCommand, ViewerToUi};

/// Messages from the UI waiting to be applied.
/// The UI layer (egui panel or the browser bridge) pushes into this; one
/// system drains it each frame before materials are synced.
#[derive(Resource, Default)]
pub struct CommandInbox {
    pending: VecDeque<UiToViewer>,
}

impl CommandInbox {
    pub fn push(&mut self, msg: UiToViewer) {
        self.pending.push_back(msg);
    }

    /// Queue a single control change
    pub fn push_command(&mut self, command: ViewerCommand) {
        self.push(UiToViewer::Command(command));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all queued messages in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = UiToViewer> + '_ {
        self.pending.drain(..)
    }
}

/// Resource for queuing messages to send to the UI
/// The app layer should drain this and deliver it (or drop it)
#[derive(Resource, Default)]
pub struct OutboundUiMessages {
    pub messages: Vec<ViewerToUi>,
}

impl OutboundUiMessages {
    /// Queue a message to be sent to the UI
    pub fn send(&mut self, msg: ViewerToUi) {
        self.messages.push(msg);
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<ViewerToUi> {
        std::mem::take(&mut self.messages)
    }
}
