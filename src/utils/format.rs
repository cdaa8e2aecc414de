// src/utils/format.rs
use chrono::{DateTime, TimeZone, Utc};

// Format a history timestamp (ms since epoch) relative to `now`
pub fn format_time_ago(timestamp_ms: i64, now: DateTime<Utc>) -> String {
    let time = match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time,
        None => return "unknown".to_string(),
    };
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds().max(0);

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else if seconds < 2592000 {
        format!("{} days ago", duration.num_days())
    } else if seconds < 31536000 {
        format!("{} months ago", duration.num_days() / 30)
    } else {
        format!("{} years ago", duration.num_days() / 365)
    }
}

// Hide all but the first and last characters
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() <= 2 {
        return "*".repeat(chars.len());
    }
    let mut masked = String::with_capacity(chars.len());
    masked.push(chars[0]);
    masked.push_str(&"*".repeat(chars.len() - 2));
    masked.push(chars[chars.len() - 1]);
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_time_ago() {
        let now = Utc::now();
        let ms = |d: Duration| (now - d).timestamp_millis();

        assert_eq!(format_time_ago(ms(Duration::seconds(5)), now), "5 seconds ago");
        assert_eq!(format_time_ago(ms(Duration::minutes(7)), now), "7 minutes ago");
        assert_eq!(format_time_ago(ms(Duration::hours(3)), now), "3 hours ago");
        assert_eq!(format_time_ago(ms(Duration::days(2)), now), "2 days ago");
        assert_eq!(format_time_ago(ms(Duration::days(400)), now), "1 years ago");
    }

    #[test]
    fn test_mask_password() {
        assert_eq!(mask_password("secret"), "s****t");
        assert_eq!(mask_password("ab"), "**");
        assert_eq!(mask_password(""), "");
    }
}
