use std::time::Duration;

use crate::action::TargetStatus;
use crate::constants::{ENTRANCE_STAGGER_MS, UNKNOWN_PLATE};
use crate::slot::{SlotStatus, Snapshot};

/// Visual class applied to a slot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Available,
    Occupied,
    Reserved,
    Unavailable,
}

impl StatusClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Available => "available",
            StatusClass::Occupied => "occupied",
            StatusClass::Reserved => "reserved",
            StatusClass::Unavailable => "unavailable",
        }
    }
}

impl From<&SlotStatus> for StatusClass {
    fn from(status: &SlotStatus) -> Self {
        match status {
            SlotStatus::Occupied => StatusClass::Occupied,
            SlotStatus::Reserved => StatusClass::Reserved,
            SlotStatus::Unavailable => StatusClass::Unavailable,
            // Unrecognized statuses render as available rather than failing.
            SlotStatus::Available | SlotStatus::Other(_) => StatusClass::Available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleBlock {
    pub plate: String,
    pub model: String,
}

/// Everything needed to draw one card of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCard {
    pub id: String,
    pub index: usize,
    pub class: StatusClass,
    pub badge: String,
    pub entrance_delay: Duration,
    pub vehicle: Option<VehicleBlock>,
    pub actions: [TargetStatus; 3],
}

impl SlotCard {
    pub fn css_class(&self) -> String {
        format!("slot-card {}", self.class.as_str())
    }

    /// Inline `animation-delay` value, e.g. `0.15s`.
    pub fn animation_delay(&self) -> String {
        format!("{}s", self.entrance_delay.as_secs_f64())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub available: usize,
    pub occupied: usize,
}

/// Build one card per slot, in snapshot order.
pub fn grid(snapshot: &Snapshot) -> Vec<SlotCard> {
    grid_with_stagger(snapshot, Duration::from_millis(ENTRANCE_STAGGER_MS))
}

pub fn grid_with_stagger(snapshot: &Snapshot, stagger: Duration) -> Vec<SlotCard> {
    snapshot
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let vehicle = slot.status.is_occupied().then(|| VehicleBlock {
                plate: slot
                    .plate
                    .clone()
                    .filter(|plate| !plate.is_empty())
                    .unwrap_or_else(|| UNKNOWN_PLATE.to_string()),
                model: slot.model.clone().unwrap_or_default(),
            });

            SlotCard {
                id: slot.id.clone(),
                index,
                class: StatusClass::from(&slot.status),
                badge: slot.status.to_string(),
                entrance_delay: stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
                vehicle,
                actions: TargetStatus::ALL,
            }
        })
        .collect()
}

pub fn stats(snapshot: &Snapshot) -> BoardStats {
    snapshot
        .iter()
        .fold(BoardStats::default(), |mut acc, slot| {
            if slot.status.is_available() {
                acc.available += 1;
            } else if slot.status.is_occupied() {
                acc.occupied += 1;
            }
            acc
        })
}

/// Selectable picker entries: ids of available slots in snapshot order.
/// The placeholder is not part of this list.
pub fn picker_options(snapshot: &Snapshot) -> Vec<String> {
    snapshot.available_ids().map(str::to_string).collect()
}

/// Keep `current` if it is still offered, otherwise fall back to the placeholder.
pub fn retain_selection(options: &[String], current: Option<String>) -> Option<String> {
    current.filter(|selected| options.iter().any(|option| option == selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::SlotRecord;

    fn sample() -> Snapshot {
        Snapshot::decode(
            br#"[["A1","AVAILABLE",null,null],["A2","OCCUPIED","XYZ-123","Sedan"]]"#,
        )
        .expect("sample snapshot")
    }

    #[test]
    fn grid_maps_sample_snapshot() {
        let cards = grid(&sample());
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].id, "A1");
        assert_eq!(cards[0].class, StatusClass::Available);
        assert!(cards[0].vehicle.is_none());

        assert_eq!(cards[1].class, StatusClass::Occupied);
        assert_eq!(cards[1].css_class(), "slot-card occupied");
        assert_eq!(
            cards[1].vehicle,
            Some(VehicleBlock {
                plate: "XYZ-123".into(),
                model: "Sedan".into()
            })
        );
    }

    #[test]
    fn entrance_delay_staggers_by_index() {
        let cards = grid(&sample());
        assert_eq!(cards[0].entrance_delay, Duration::ZERO);
        assert_eq!(cards[1].entrance_delay, Duration::from_millis(50));
        assert_eq!(cards[1].animation_delay(), "0.05s");
    }

    #[test]
    fn stale_vehicle_data_is_hidden_unless_occupied() {
        let snapshot = Snapshot::new(vec![SlotRecord {
            id: "R1".into(),
            status: SlotStatus::Reserved,
            plate: Some("OLD-001".into()),
            model: Some("Hatchback".into()),
        }]);
        let cards = grid(&snapshot);
        assert_eq!(cards[0].class, StatusClass::Reserved);
        assert!(cards[0].vehicle.is_none());
    }

    #[test]
    fn occupied_without_vehicle_uses_fallbacks() {
        let snapshot = Snapshot::new(vec![SlotRecord::new("O1", SlotStatus::Occupied)]);
        let vehicle = grid(&snapshot)[0].vehicle.clone().expect("vehicle block");
        assert_eq!(vehicle.plate, "Unknown");
        assert_eq!(vehicle.model, "");
    }

    #[test]
    fn unrecognized_status_renders_available() {
        let snapshot = Snapshot::new(vec![SlotRecord::new("X1", SlotStatus::from("CLOSED"))]);
        let card = &grid(&snapshot)[0];
        assert_eq!(card.class, StatusClass::Available);
        assert_eq!(card.badge, "CLOSED");
    }

    #[test]
    fn every_card_offers_all_three_actions() {
        let snapshot = Snapshot::new(vec![
            SlotRecord::new("A1", SlotStatus::Available),
            SlotRecord::new("U1", SlotStatus::Unavailable),
        ]);
        for card in grid(&snapshot) {
            assert_eq!(card.actions, TargetStatus::ALL);
        }
    }

    #[test]
    fn stats_count_available_and_occupied_only() {
        let snapshot = Snapshot::new(vec![
            SlotRecord::new("A1", SlotStatus::Available),
            SlotRecord::new("A2", SlotStatus::Available),
            SlotRecord::occupied("B1", "P-1", "Van"),
            SlotRecord::new("C1", SlotStatus::Reserved),
            SlotRecord::new("D1", SlotStatus::from("MAINTENANCE")),
        ]);
        assert_eq!(
            stats(&snapshot),
            BoardStats {
                available: 2,
                occupied: 1
            }
        );
    }

    #[test]
    fn picker_offers_only_available_slots() {
        assert_eq!(picker_options(&sample()), vec!["A1".to_string()]);
    }

    #[test]
    fn selection_survives_when_still_available() {
        let options = vec!["A1".to_string(), "B3".to_string()];
        assert_eq!(
            retain_selection(&options, Some("B3".into())),
            Some("B3".into())
        );
    }

    #[test]
    fn selection_resets_when_slot_leaves_available_set() {
        let options = vec!["A1".to_string()];
        assert_eq!(retain_selection(&options, Some("B3".into())), None);
        assert_eq!(retain_selection(&options, None), None);
    }
}
