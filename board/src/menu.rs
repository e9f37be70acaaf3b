/// Tracks the single contextual menu that may be open on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<String>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the menu of `id`, closing whichever other menu was open.
    /// Returns whether `id` is open afterwards.
    pub fn open(&mut self, id: &str) -> bool {
        let was_open = self.is_open_for(id);
        self.close_all();
        if !was_open {
            self.open = Some(id.to_string());
        }
        !was_open
    }

    /// Returns whether a menu was actually closed.
    pub fn close_all(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn is_open_for(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}
