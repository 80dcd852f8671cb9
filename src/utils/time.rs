use std::time::{Duration, SystemTime};

use ethers::types::U256;

pub const DEFAULT_DEADLINE_WINDOW: Duration = Duration::from_secs(20 * 60);

pub fn get_swap_deadline_from_now(window: Duration) -> U256 {
    swap_deadline_at(SystemTime::now(), window)
}

pub fn swap_deadline_at(now: SystemTime, window: Duration) -> U256 {
    let future_timestamp = (now + window)
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    U256::from(future_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_window_past_now() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(
            swap_deadline_at(now, DEFAULT_DEADLINE_WINDOW),
            U256::from(1_700_001_200u64)
        );
    }

    #[test]
    fn deadline_from_now_tracks_wall_clock() {
        let before = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let deadline = get_swap_deadline_from_now(DEFAULT_DEADLINE_WINDOW).as_u64();
        let after = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert!(deadline >= before + 1200 && deadline <= after + 1200);
    }
}
