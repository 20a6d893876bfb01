//! Golden-value tests for birth chart calculation, traced by hand
//! through the simplified positional model.

use jyotish_base::{ClockTime, Graha, LocalDate, Nakshatra, Rashi};
use jyotish_engine::{BirthData, calculate_birth_chart};

fn birth(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    longitude: f64,
) -> BirthData {
    BirthData {
        date: LocalDate::new(year, month, day).unwrap(),
        time: ClockTime::new(hour, minute).unwrap(),
        latitude: 28.61,
        longitude,
        timezone: "Asia/Kolkata".to_string(),
    }
}

#[test]
fn morning_birth_chart_in_full() {
    // 1985-03-15 06:30 at longitude 75E:
    // ascendant = 390/4 + 75/15 = 102.5, in Karka.
    let chart = calculate_birth_chart(&birth(1985, 3, 15, 6, 30, 75.0), 2024);
    assert_eq!(chart.ascendant, 102.5);

    // House cusps step 30 degrees from the ascendant.
    assert_eq!(chart.houses[0], 102.5);
    assert_eq!(chart.houses[3], 192.5);
    assert_eq!(chart.houses[9], 12.5);

    let surya = chart.positions[0];
    assert_eq!(surya.graha, Graha::Surya);
    assert_eq!(surya.longitude, 117.5);
    assert_eq!(surya.rashi, Rashi::Karka);
    assert_eq!(surya.house, 1);
    assert!(!surya.retrograde);

    let chandra = chart.positions[1];
    assert_eq!(chandra.longitude, 147.5);
    assert_eq!(chandra.rashi, Rashi::Simha);
    assert_eq!(chandra.house, 2);
    assert_eq!(chandra.nakshatra, Nakshatra::UttaraPhalguni);

    // March: index + 2 divisible by 5 for Budha and Ketu.
    let retro: Vec<Graha> = chart
        .positions
        .iter()
        .filter(|p| p.retrograde)
        .map(|p| p.graha)
        .collect();
    assert_eq!(retro, vec![Graha::Budha, Graha::Ketu]);
}

#[test]
fn morning_birth_dasha_balance() {
    // Moon in Uttara Phalguni, ruled by Surya; age 39 in 2024 lands
    // 16 years into the Rahu mahadasha, in the Chandra bhukti.
    let chart = calculate_birth_chart(&birth(1985, 3, 15, 6, 30, 75.0), 2024);
    let balance = chart.dasha_balance;
    assert_eq!(balance.major_lord, Graha::Rahu);
    assert_eq!(balance.major_end, LocalDate::first_of_year(2026));
    assert_eq!(balance.sub_lord, Graha::Chandra);
    assert_eq!(balance.sub_end, LocalDate::first_of_year(2024));
}

#[test]
fn mars_outside_flagged_houses_gives_clean_chart() {
    // Mars at 177.5 sits in house 3, which carries no Mangal Dosha.
    let chart = calculate_birth_chart(&birth(1985, 3, 15, 6, 30, 75.0), 2024);
    assert_eq!(chart.positions[2].house, 3);
    assert!(chart.doshas.is_empty());
}

#[test]
fn february_birth_has_single_retrograde() {
    // Only index 4 satisfies the parity rule in February.
    let chart = calculate_birth_chart(&birth(2000, 2, 10, 12, 0, 0.0), 2024);
    let retro: Vec<Graha> = chart
        .positions
        .iter()
        .filter(|p| p.retrograde)
        .map(|p| p.graha)
        .collect();
    assert_eq!(retro, vec![Graha::Guru]);
}

#[test]
fn houses_always_count_from_ascendant() {
    let chart = calculate_birth_chart(&birth(1977, 11, 8, 23, 45, 139.69), 2024);
    let asc_rashi = i32::from(jyotish_base::rashi_from_degree(chart.ascendant).id());
    for pos in &chart.positions {
        let expected = ((i32::from(pos.rashi.id()) - asc_rashi + 12) % 12 + 1) as u8;
        assert_eq!(pos.house, expected, "graha {}", pos.graha.name());
    }
}

#[test]
fn chart_is_deterministic() {
    let data = birth(1990, 6, 30, 0, 0, 0.0);
    assert_eq!(
        calculate_birth_chart(&data, 2024),
        calculate_birth_chart(&data, 2024)
    );
}
