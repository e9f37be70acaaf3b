use crate::action::{BoardAction, ClickTarget, StatusUpdate};
use crate::error::BoardError;
use crate::menu::MenuState;
use crate::slot::Snapshot;

/// Sequence number handed out when a snapshot fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Result of feeding a fetched snapshot into [`BoardSync::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The cache was replaced; grid, stats and picker must be regenerated.
    Rendered,
    /// Structurally equal to what is on screen.
    Unchanged,
    /// A menu is open; the snapshot was discarded.
    MenuOpen,
    /// A newer fetch was already applied.
    Stale,
}

impl SyncOutcome {
    pub fn needs_render(self) -> bool {
        matches!(self, SyncOutcome::Rendered)
    }
}

/// Coordinator owning the client cache and the menu state.
///
/// Both clients keep exactly one of these; every render decision goes
/// through [`BoardSync::apply`].
#[derive(Debug, Clone, Default)]
pub struct BoardSync {
    cache: Snapshot,
    menu: MenuState,
    issued: u64,
    last_applied: u64,
    renders: u64,
}

impl BoardSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued = self.issued.saturating_add(1);
        FetchTicket(self.issued)
    }

    pub fn apply(&mut self, ticket: FetchTicket, snapshot: Snapshot) -> SyncOutcome {
        if ticket.0 <= self.last_applied {
            log::debug!(
                "dropping stale snapshot #{} (last applied #{})",
                ticket.0,
                self.last_applied
            );
            return SyncOutcome::Stale;
        }

        if let Some(open) = self.menu.open_id() {
            log::debug!("menu for {open} is open; holding snapshot #{}", ticket.0);
            return SyncOutcome::MenuOpen;
        }

        self.last_applied = ticket.0;
        if snapshot == self.cache {
            return SyncOutcome::Unchanged;
        }

        log::debug!(
            "snapshot #{} changed; rendering {} slots",
            ticket.0,
            snapshot.len()
        );
        self.cache = snapshot;
        self.renders = self.renders.saturating_add(1);
        SyncOutcome::Rendered
    }

    /// Log a failed fetch. The cache is left untouched.
    pub fn record_failure(&self, ticket: FetchTicket, err: &BoardError) {
        log::warn!("snapshot fetch #{} failed: {err}", ticket.0);
    }

    /// Apply a grid interaction. Returns the status update to send, if any.
    pub fn dispatch(&mut self, action: &BoardAction) -> Option<StatusUpdate> {
        match action {
            BoardAction::ToggleMenu { slot_id } => {
                self.menu.open(slot_id);
                None
            }
            BoardAction::SetStatus { slot_id, status } => {
                self.menu.close_all();
                Some(StatusUpdate::new(slot_id.clone(), *status))
            }
        }
    }

    /// Handle a click that reached the window. Trigger clicks are left to
    /// their own toggle; anything else closes every menu. Returns whether a
    /// menu was closed.
    pub fn window_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::MenuTrigger => false,
            ClickTarget::Elsewhere => self.menu.close_all(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.cache
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Number of accepted updates so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }
}
