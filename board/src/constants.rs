pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const FULL_STATUS_PATH: &str = "/full_status";
pub const UPDATE_STATUS_PATH: &str = "/update_status";
pub const PARK_PATH: &str = "/park";

pub const POLL_INTERVAL_MS: u64 = 2_000;
pub const BANNER_TIMEOUT_MS: u64 = 3_000;
pub const ENTRANCE_STAGGER_MS: u64 = 50;

pub const PICKER_PLACEHOLDER: &str = "Select Slot";
pub const UNKNOWN_PLATE: &str = "Unknown";
