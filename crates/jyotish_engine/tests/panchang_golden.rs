//! Golden-value tests for the daily panchang, traced by hand through
//! the day-of-year model.

use jyotish_base::{KaranaNature, LocalDate, Nakshatra, Paksha, Vaar};
use jyotish_engine::{calculate_panchang, get_daily_recommendations};

fn date(year: i32, month: u32, day: u32) -> LocalDate {
    LocalDate::new(year, month, day).unwrap()
}

#[test]
fn christmas_2024_in_full() {
    // Day of year 360, so the drift base is zero and every derived
    // time sits at the bottom of its band.
    let p = calculate_panchang(date(2024, 12, 25), 19.07, 72.87, "Asia/Kolkata");

    assert_eq!(p.sunrise, "05:15");
    assert_eq!(p.sunset, "17:15");
    assert_eq!(p.moonrise, "05:45");
    assert_eq!(p.moonset, "17:45");

    assert_eq!(p.tithi.id, 15);
    assert_eq!(p.tithi.name, "Purnima");
    assert_eq!(p.tithi.paksha, Paksha::Shukla);
    assert_eq!(p.tithi.deity, "Soma");
    assert_eq!(p.tithi.end_time, "20:00");

    assert_eq!(p.nakshatra.nakshatra, Nakshatra::Ashlesha);
    assert_eq!(p.nakshatra.end_time, "19:45");

    assert_eq!(p.yoga.id, 9);
    assert_eq!(p.yoga.name, "Shula");
    assert_eq!(p.yoga.end_time, "20:30");

    assert_eq!(p.karana.id, 9);
    assert_eq!(p.karana.name, "Chatushpada");
    assert_eq!(p.karana.nature, KaranaNature::Fixed);
    assert_eq!(p.karana.end_time, "21:35");

    assert_eq!(p.vaar, Vaar::Wednesday);
    assert_eq!(p.special_observance, Some("Purnima (full moon)"));
}

#[test]
fn wednesday_windows_come_from_the_weekday_tables() {
    let p = calculate_panchang(date(2024, 12, 25), 0.0, 0.0, "UTC");
    assert_eq!(p.inauspicious.rahu_kalam.to_string(), "12 to 1.5");
    assert_eq!(p.inauspicious.yamaganda.to_string(), "7.5 to 9");
    assert_eq!(p.inauspicious.gulika.to_string(), "10.5 to 12");
    assert_eq!(
        p.auspicious_periods,
        vec!["06:00 - 08:00", "12:00 - 14:00", "16:00 - 17:00"]
    );
}

#[test]
fn christmas_recommendations_stack_all_three_sources() {
    let p = calculate_panchang(date(2024, 12, 25), 0.0, 0.0, "UTC");
    let recs = get_daily_recommendations(&p);

    // Purnima tithi, Ashlesha nakshatra, Wednesday vaar.
    assert!(recs.contains(&"Perform charitable acts".to_string()));
    assert!(recs.contains(&"Avoid major decisions today".to_string()));
    assert!(recs.contains(&"Worship Lord Ganesha".to_string()));
    assert!(
        recs.contains(
            &"Avoid starting important work during Rahu Kalam (12 to 1.5)".to_string()
        )
    );
    assert!(
        recs.last()
            .is_some_and(|r| r.starts_with("Best times for important activities:"))
    );
}

#[test]
fn panchang_is_deterministic() {
    let d = date(2024, 12, 25);
    assert_eq!(
        calculate_panchang(d, 19.07, 72.87, "Asia/Kolkata"),
        calculate_panchang(d, 19.07, 72.87, "Asia/Kolkata")
    );
}

#[test]
fn leap_day_shifts_the_solar_band() {
    // March 1 is day 61 in a leap year and day 60 otherwise.
    let leap = calculate_panchang(date(2024, 3, 1), 0.0, 0.0, "UTC");
    let common = calculate_panchang(date(2023, 3, 1), 0.0, 0.0, "UTC");
    assert_eq!(leap.sunrise, "05:16");
    assert_eq!(common.sunrise, "05:15");
}

#[test]
fn limb_ids_stay_in_table_range_across_a_year() {
    let mut d = date(2024, 1, 1);
    for day in 1..=366 {
        let p = calculate_panchang(d, 0.0, 0.0, "UTC");
        assert!((1..=30).contains(&p.tithi.id), "day {day}");
        assert!((1..=27).contains(&p.yoga.id), "day {day}");
        assert!((1..=11).contains(&p.karana.id), "day {day}");
        if day < 366 {
            d = next_day(d);
        }
    }
}

#[test]
fn observances_only_on_their_tithis() {
    let mut d = date(2024, 1, 1);
    for _ in 0..366 {
        let p = calculate_panchang(d, 0.0, 0.0, "UTC");
        match p.tithi.id {
            11 | 15 | 30 => assert!(p.special_observance.is_some()),
            _ => assert_eq!(p.special_observance, None),
        }
        d = next_day(d);
    }
}

fn next_day(d: LocalDate) -> LocalDate {
    let (y, m, day) = (d.year(), d.month(), d.day());
    LocalDate::new(y, m, day + 1)
        .or_else(|_| LocalDate::new(y, m + 1, 1))
        .or_else(|_| LocalDate::new(y + 1, 1, 1))
        .unwrap()
}
