//! Visibility gating for per-frame loops.
//!
//! A loop checks [`FrameGate::should_continue`] at the top of every frame and
//! stops requesting frames once it returns `false`. Re-entering the viewport
//! reports [`GateAction::Start`] so the owner can schedule a fresh frame.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    Start,
    Stop,
    Nothing,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    visible: bool,
    running: bool,
    shut_down: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_visible(&mut self, visible: bool) -> GateAction {
        if self.shut_down {
            return GateAction::Nothing;
        }
        self.visible = visible;
        match (visible, self.running) {
            (true, false) => {
                self.running = true;
                GateAction::Start
            }
            (false, true) => GateAction::Stop,
            _ => GateAction::Nothing,
        }
    }

    /// Called at the start of each frame. Returns `false` exactly once per
    /// hide, after which the loop must not reschedule itself.
    pub fn should_continue(&mut self) -> bool {
        if self.visible && !self.shut_down {
            return true;
        }
        self.running = false;
        false
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.visible = false;
    }
}
