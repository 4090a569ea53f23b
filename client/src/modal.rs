use std::time::Duration;

use tier::{Tier, TierStyle};

/// Length of the exit transition. The close callback fires after it.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Mounted but not yet visible, so the enter transition can run.
    Entering,
    Open,
    /// Exit transition running; waiting for the close timer.
    Closing,
    Closed,
}

/// A timer the shell must start. Only the most recent ticket counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTimer {
    pub ticket: u32,
    pub delay: Duration,
}

#[derive(Debug)]
pub struct ResultModal {
    tier: Tier,
    email: String,
    phase: ModalPhase,
    ticket: u32,
}

impl ResultModal {
    pub fn new(tier: Tier, email: impl Into<String>) -> Self {
        Self {
            tier,
            email: email.into(),
            phase: ModalPhase::Entering,
            ticket: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// First frame has rendered; start the enter transition.
    pub fn opened(&mut self) {
        if self.phase == ModalPhase::Entering {
            self.phase = ModalPhase::Open;
        }
    }

    /// Backdrop click or "Done". Hides the modal and asks for a timer; a
    /// second close while one is pending asks for nothing.
    pub fn close(&mut self) -> Option<CloseTimer> {
        match self.phase {
            ModalPhase::Entering | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                self.ticket = self.ticket.wrapping_add(1);
                Some(CloseTimer {
                    ticket: self.ticket,
                    delay: CLOSE_DELAY,
                })
            }
            ModalPhase::Closing | ModalPhase::Closed => None,
        }
    }

    /// Returns `true` when the close callback should run now.
    pub fn timer_elapsed(&mut self, ticket: u32) -> bool {
        if self.phase != ModalPhase::Closing || ticket != self.ticket {
            return false;
        }

        self.phase = ModalPhase::Closed;
        true
    }

    /// The modal is being removed by its owner. A pending close timer
    /// becomes stale and the close callback will not run.
    pub fn unmount(&mut self) {
        self.phase = ModalPhase::Closed;
        self.ticket = self.ticket.wrapping_add(1);
    }

    pub fn tier(&self) -> &Tier {
        &self.tier
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn style(&self) -> &'static TierStyle {
        self.tier.style()
    }

    pub fn label(&self) -> String {
        self.tier.label()
    }
}
