//! Scratch file names.
//!
//! A name is the date as `YYYYMMDD` followed by [`SUFFIX`]. The date part is
//! fixed-width and zero-padded, so sorting names sorts days.

use chrono::NaiveDate;

/// Suffix shared by every scratch file.
pub const SUFFIX: &str = "-scratch.md";

/// File name for the given day.
pub fn file_name(date: NaiveDate) -> String {
    format!("{}{}", date.format("%Y%m%d"), SUFFIX)
}

/// Whether a directory entry name looks like a scratch file.
pub fn is_scratch_name(name: &str) -> bool {
    name.ends_with(SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_file_name_is_zero_padded() {
        assert_eq!(file_name(day(2024, 3, 7)), "20240307-scratch.md");
        assert_eq!(file_name(day(987, 1, 1)), "09870101-scratch.md");
    }

    #[test]
    fn test_names_sort_like_dates() {
        let days = [
            day(999, 12, 31),
            day(2023, 12, 31),
            day(2024, 1, 1),
            day(2024, 1, 9),
            day(2024, 1, 10),
            day(2024, 9, 30),
            day(2024, 10, 1),
            day(9999, 12, 31),
        ];
        for pair in days.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(
                file_name(pair[0]) < file_name(pair[1]),
                "{} should sort before {}",
                file_name(pair[0]),
                file_name(pair[1])
            );
        }
    }

    #[test]
    fn test_every_day_of_a_year_sorts() {
        let mut date = day(2024, 1, 1);
        let mut prev = file_name(date);
        while let Some(next) = date.succ_opt().filter(|d| *d <= day(2025, 1, 1)) {
            let name = file_name(next);
            assert!(prev < name);
            prev = name;
            date = next;
        }
    }

    #[test]
    fn test_is_scratch_name() {
        assert!(is_scratch_name("20240101-scratch.md"));
        assert!(!is_scratch_name("20240101-scratch.md.swp"));
        assert!(!is_scratch_name("notes.md"));
    }
}
