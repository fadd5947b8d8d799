//! Time utilities

use chrono::{DateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Check if a datetime is in the past
pub fn is_past(dt: DateTime<Utc>) -> bool {
    dt < now_utc()
}

/// Check if a datetime is in the future
pub fn is_future(dt: DateTime<Utc>) -> bool {
    dt > now_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_past_future() {
        let earlier = now_utc() - Duration::hours(1);
        let later = now_utc() + Duration::hours(1);

        assert!(is_past(earlier));
        assert!(!is_past(later));
        assert!(is_future(later));
        assert!(!is_future(earlier));
    }
}
