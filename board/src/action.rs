use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::banner::BannerMessage;
use crate::error::BoardError;
use crate::slot::SlotStatus;

pub const ACTION_TOGGLE_MENU: &str = "toggle-menu";
pub const ACTION_SET_STATUS: &str = "set-status";

/// Statuses an operator can assign from a slot's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetStatus {
    Available,
    Reserved,
    Unavailable,
}

impl TargetStatus {
    pub const ALL: [TargetStatus; 3] = [
        TargetStatus::Available,
        TargetStatus::Reserved,
        TargetStatus::Unavailable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetStatus::Available => "AVAILABLE",
            TargetStatus::Reserved => "RESERVED",
            TargetStatus::Unavailable => "UNAVAILABLE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TargetStatus::Available => "Available",
            TargetStatus::Reserved => "Reserve",
            TargetStatus::Unavailable => "Unavailable",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TargetStatus::Available => "fa-solid fa-check",
            TargetStatus::Reserved => "fa-solid fa-bookmark",
            TargetStatus::Unavailable => "fa-solid fa-ban",
        }
    }
}

impl From<TargetStatus> for SlotStatus {
    fn from(target: TargetStatus) -> Self {
        match target {
            TargetStatus::Available => SlotStatus::Available,
            TargetStatus::Reserved => SlotStatus::Reserved,
            TargetStatus::Unavailable => SlotStatus::Unavailable,
        }
    }
}

impl FromStr for TargetStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(TargetStatus::Available),
            "RESERVED" => Ok(TargetStatus::Reserved),
            "UNAVAILABLE" => Ok(TargetStatus::Unavailable),
            _ => Err(BoardError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interactions raised from the grid, resolved through one delegated handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    ToggleMenu { slot_id: String },
    SetStatus { slot_id: String, status: TargetStatus },
}

impl BoardAction {
    /// Parse the `data-action`, `data-slot` and `data-status` attributes of
    /// the element that received a click.
    pub fn from_dataset(
        action: &str,
        slot: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, BoardError> {
        let slot_id = slot
            .filter(|slot| !slot.is_empty())
            .ok_or_else(|| BoardError::UnknownAction(format!("{action} without slot")))?
            .to_string();

        match action {
            ACTION_TOGGLE_MENU => Ok(BoardAction::ToggleMenu { slot_id }),
            ACTION_SET_STATUS => {
                let status = status
                    .ok_or_else(|| BoardError::UnknownAction(format!("{action} without status")))?
                    .parse()?;
                Ok(BoardAction::SetStatus { slot_id, status })
            }
            other => Err(BoardError::UnknownAction(other.to_string())),
        }
    }

}

/// Where a click that reached the window landed, as far as menus care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A slot's menu trigger; its own toggle handles the menu.
    MenuTrigger,
    Elsewhere,
}

impl ClickTarget {
    /// Classify a click from the `data-action` of the nearest actionable
    /// element, if there is one.
    pub fn from_action_kind(kind: Option<&str>) -> Self {
        match kind {
            Some(ACTION_TOGGLE_MENU) => ClickTarget::MenuTrigger,
            _ => ClickTarget::Elsewhere,
        }
    }
}

/// Body of `POST /update_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub slot_id: String,
    pub status: TargetStatus,
}

impl StatusUpdate {
    pub fn new(slot_id: impl Into<String>, status: TargetStatus) -> Self {
        Self {
            slot_id: slot_id.into(),
            status,
        }
    }
}

/// Body of `POST /park`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkRequest {
    pub plate: String,
    pub model: String,
    pub slot: String,
}

impl ParkRequest {
    /// Validate the park form before anything is sent.
    pub fn from_form(plate: &str, model: &str, slot: Option<&str>) -> Result<Self, BoardError> {
        let slot = slot
            .filter(|slot| !slot.is_empty())
            .ok_or(BoardError::NoSlotSelected)?;

        Ok(Self {
            plate: plate.to_string(),
            model: model.to_string(),
            slot: slot.to_string(),
        })
    }

    /// Banner feedback for the outcome of this request.
    pub fn feedback(&self, outcome: &Result<(), BoardError>) -> BannerMessage {
        match outcome {
            Ok(()) => BannerMessage::success(format!(
                "Vehicle {} parked successfully!",
                self.plate
            )),
            Err(BoardError::Transport(_)) => BannerMessage::error("Network error"),
            Err(_) => BannerMessage::error("Error parking vehicle"),
        }
    }
}

/// Banner feedback for a park form that failed validation.
pub fn validation_feedback(err: &BoardError) -> BannerMessage {
    match err {
        BoardError::NoSlotSelected => BannerMessage::error("Please select a slot!"),
        other => BannerMessage::error(other.to_string()),
    }
}
