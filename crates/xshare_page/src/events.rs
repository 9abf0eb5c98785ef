use crate::dom::NodeId;

/// Input the host page forwards to the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    DomContentLoaded,
    Click {
        target: NodeId,
        client_x: f64,
        client_y: f64,
    },
    /// Text typed into an input or textarea.
    Input { target: NodeId, value: String },
    /// Committed value of a select (or any control firing `change`).
    Change { target: NodeId, value: String },
    KeyDown {
        target: NodeId,
        key: String,
        shift: bool,
    },
    MouseEnter { target: NodeId },
    MouseLeave { target: NodeId },
    /// An observed element scrolled into the viewport.
    Intersecting { target: NodeId },
    Online,
    Offline,
}

impl PageEvent {
    pub fn click(target: NodeId) -> Self {
        PageEvent::Click {
            target,
            client_x: 0.0,
            client_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

impl EventOutcome {
    pub(crate) fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
