#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "success-msg",
            BannerKind::Error => "error-msg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerMessage {
    pub text: String,
    pub kind: BannerKind,
}

impl BannerMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Error,
        }
    }
}

/// Handle returned by [`Banner::show`]; only the newest token may clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerToken(u64);

/// Transient feedback line shown after user actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    current: Option<BannerMessage>,
    generation: u64,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible message. The caller schedules [`Banner::expire`]
    /// with the returned token once the display timeout elapses.
    pub fn show(&mut self, message: BannerMessage) -> BannerToken {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(message);
        BannerToken(self.generation)
    }

    /// Clear the message if `token` still belongs to it. Returns whether
    /// anything was cleared.
    pub fn expire(&mut self, token: BannerToken) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&BannerMessage> {
        self.current.as_ref()
    }

    pub fn text(&self) -> &str {
        self.current
            .as_ref()
            .map(|message| message.text.as_str())
            .unwrap_or_default()
    }

    pub fn css_class(&self) -> &'static str {
        self.current
            .as_ref()
            .map(|message| message.kind.css_class())
            .unwrap_or_default()
    }
}
