// Time-related helpers.
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

// Logs and requests show the wall clock only, e.g. "14:05".
static CLOCK_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

pub fn clock_string(at: OffsetDateTime) -> String {
    // The format only has hour and minute components, which every OffsetDateTime has.
    at.format(CLOCK_FORMAT).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(clock_string(datetime!(2025-12-26 09:05 UTC)), "09:05");
        assert_eq!(clock_string(datetime!(2025-12-31 18:30 UTC)), "18:30");
    }
}
