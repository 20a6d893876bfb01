//! Golden-value tests for the muhurta finder, traced by hand through
//! the daylight division and the weekday kalam tables.

use jyotish_base::{JyotishError, LocalDate, MuhurtaActivity};
use jyotish_engine::{MuhurtaData, MuhurtaQuality, find_muhurta};

fn find(activity: &str, year: i32, month: u32, day: u32) -> MuhurtaData {
    let date = LocalDate::new(year, month, day).unwrap();
    find_muhurta(activity, date, 12.97, 77.59, "Asia/Kolkata").unwrap()
}

#[test]
fn activity_and_location_are_echoed_back() {
    let data = find("travel", 2024, 1, 1);
    assert_eq!(data.activity, MuhurtaActivity::Travel);
    assert_eq!(data.location.latitude, 12.97);
    assert_eq!(data.location.timezone, "Asia/Kolkata");
}

#[test]
fn unknown_activity_reports_its_id() {
    let date = LocalDate::new(2024, 1, 1).unwrap();
    let err = find_muhurta("surgery", date, 0.0, 0.0, "UTC").unwrap_err();
    assert_eq!(err.to_string(), "unknown activity: surgery");
    assert!(matches!(err, JyotishError::UnknownActivity(_)));
}

#[test]
fn new_year_monday_window_layout() {
    // Sunrise 05:16, fifteen 48-minute windows; Rahu Kalam takes the
    // hour-8 window and Yamaganda the hour-11 window.
    let data = find("business", 2024, 1, 1);
    assert_eq!(data.windows.len(), 13);
    assert_eq!(data.windows[0].start_time, "05:16");
    assert_eq!(data.windows[0].end_time, "06:04");
    let last = data.windows.last().unwrap();
    assert_eq!(last.start_time, "16:28");
    assert_eq!(last.end_time, "17:16");
}

#[test]
fn wrapped_sunday_yamaganda_blocks_the_afternoon() {
    // Sunday's Yamaganda is "12 to 1.5", read as wrapping past
    // midnight, so every window from noon onward is dropped. Rahu
    // Kalam "4.5 to 6" also takes the first window.
    let data = find("business", 2024, 1, 7);
    assert_eq!(data.windows.len(), 8);
    assert_eq!(data.windows[0].start_time, "06:10");
    assert!(data.windows.iter().all(|w| {
        let hour: u32 = w.start_time[..2].parse().unwrap();
        hour < 12
    }));

    let good: Vec<_> = data
        .windows
        .iter()
        .filter(|w| w.quality == MuhurtaQuality::Good)
        .collect();
    assert_eq!(good.len(), 1);
    assert_eq!(good[0].start_time, "09:22");
}

#[test]
fn education_on_dhanishta_day_is_all_excellent() {
    // 2024-02-19 is a Dhanishta Monday; Rahu Kalam and Yamaganda drop
    // three windows and the twelve survivors all grade excellent.
    let data = find("education", 2024, 2, 19);
    assert_eq!(data.windows.len(), 12);
    assert_eq!(data.windows[0].start_time, "06:35");
    assert_eq!(data.windows[0].end_time, "07:23");
    assert!(
        data.windows
            .iter()
            .all(|w| w.quality == MuhurtaQuality::Excellent)
    );
    assert!(
        data.windows
            .iter()
            .all(|w| w.note == Some("Excellent nakshatra for beginning education"))
    );
}

#[test]
fn excellent_grade_depends_on_the_activity() {
    // Dhanishta is excellent for education but ordinary for marriage.
    let marriage = find("marriage", 2024, 2, 19);
    assert!(
        marriage
            .windows
            .iter()
            .all(|w| w.quality != MuhurtaQuality::Excellent)
    );
    assert!(
        marriage
            .windows
            .iter()
            .any(|w| w.quality == MuhurtaQuality::Good)
    );
}

#[test]
fn inauspicious_tithi_rules_out_the_whole_day() {
    // 2024-02-18 falls on Chaturthi, one of the barred tithis, even
    // though its Shravana nakshatra is excellent for travel.
    let data = find("travel", 2024, 2, 18);
    assert!(data.windows.is_empty());
}
