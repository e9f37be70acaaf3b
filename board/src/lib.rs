//! Target-independent engine behind the parking board clients.
//!
//! Nothing in here performs I/O: the browser and terminal clients fetch
//! snapshots and post mutations themselves, then feed the results through
//! [`BoardSync`] and the pure view functions.

pub mod action;
pub mod banner;
pub mod config;
pub mod constants;
pub mod error;
pub mod menu;
pub mod slot;
pub mod sync;
pub mod view;

pub use action::{BoardAction, ClickTarget, ParkRequest, StatusUpdate, TargetStatus};
pub use banner::{Banner, BannerKind, BannerMessage, BannerToken};
pub use config::BoardConfig;
pub use error::BoardError;
pub use menu::MenuState;
pub use slot::{SlotRecord, SlotStatus, Snapshot};
pub use sync::{BoardSync, FetchTicket, SyncOutcome};
pub use view::{BoardStats, SlotCard, StatusClass, VehicleBlock};
