use std::time::Duration;

pub const PROGRESS_HEARTBEAT_SECS: u64 = 5;
pub const NO_INPUT_MESSAGE: &str = "No input received";

pub fn progress_heartbeat() -> Duration {
    Duration::from_secs(PROGRESS_HEARTBEAT_SECS)
}

pub fn monitor_timeout(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
