//! Daily panchang calculation.
//!
//! Sun and moon times and the five limbs (tithi, nakshatra, yoga,
//! karana, vaar) are derived from the day of year and calendar year
//! with a simplified model rather than astronomical integration. The
//! table lookups, inauspicious windows and observance rules layered on
//! top follow the classical scheme.

use jyotish_base::{
    format_hm, gulika, rahu_kalam, yamaganda, KARANA_TABLE, LocalDate, Paksha, TITHI_TABLE, Vaar,
    YOGA_TABLE, ALL_NAKSHATRAS,
};

use crate::panchang_types::{
    GeoLocation, InauspiciousPeriods, KaranaDetail, NakshatraDetail, PanchangData, TithiDetail,
    YogaDetail,
};

/// Sunrise and sunset as minutes since midnight.
///
/// Both drift together through a 60-minute band over the year, so the
/// day length is constant. Shared with the muhurta division.
pub(crate) fn sunrise_sunset_minutes(date: LocalDate) -> (u32, u32) {
    let base = (date.day_of_year() % 365) % 60;
    let sunrise = (5 + base / 30) * 60 + (base % 30) + 15;
    let sunset = (17 + base / 30) * 60 + (base % 30) + 15;
    (sunrise, sunset)
}

/// Computes the full panchang for one date and location.
///
/// Latitude, longitude and timezone are carried through to the result
/// unchanged; the simplified model does not vary with them.
pub fn calculate_panchang(
    date: LocalDate,
    latitude: f64,
    longitude: f64,
    timezone: &str,
) -> PanchangData {
    let doy = date.day_of_year();
    let (sunrise_min, sunset_min) = sunrise_sunset_minutes(date);
    let (sunrise_hour, sunrise_minute) = (sunrise_min / 60, sunrise_min % 60);
    let (sunset_hour, sunset_minute) = (sunset_min / 60, sunset_min % 60);

    // The moon lags the sun by a share of the synodic month, plus a
    // fixed half hour.
    let moon_offset = (doy % 30) * 24 / 30;
    let moonrise_hour = (sunrise_hour + moon_offset) % 24;
    let moonrise_minute = (sunrise_minute + 30) % 60;
    let moonset_hour = (sunset_hour + moon_offset) % 24;
    let moonset_minute = (sunset_minute + 30) % 60;

    // All four limbs cycle on day-of-year plus calendar year.
    let key = doy as i64 + date.year() as i64;
    let tithi_index = key.rem_euclid(30) as usize;
    let nakshatra_index = key.rem_euclid(27) as usize;
    let yoga_index = key.rem_euclid(27) as usize;
    let karana_index = key.rem_euclid(11) as usize;

    let tithi_entry = TITHI_TABLE[tithi_index];
    let nakshatra = ALL_NAKSHATRAS[nakshatra_index];
    let yoga_entry = YOGA_TABLE[yoga_index];
    let karana_entry = KARANA_TABLE[karana_index];

    // End times fan out from sunset. Minutes deliberately do not carry
    // into the hour.
    let tithi_end = format_hm(
        (sunset_hour + 1 + tithi_index as u32 % 4) % 24,
        (sunset_minute + 45) % 60,
    );
    let nakshatra_end = format_hm(
        (sunset_hour + 2 + nakshatra_index as u32 % 4) % 24,
        (sunset_minute + 30) % 60,
    );
    let yoga_end = format_hm(
        (sunset_hour + 3 + yoga_index as u32 % 4) % 24,
        (sunset_minute + 15) % 60,
    );
    let karana_end = format_hm(
        (sunset_hour + 4 + karana_index as u32 % 4) % 24,
        (sunset_minute + 20) % 60,
    );

    let vaar = date.vaar();
    let inauspicious = InauspiciousPeriods {
        rahu_kalam: rahu_kalam(vaar),
        yamaganda: yamaganda(vaar),
        gulika: gulika(vaar),
    };

    let mut auspicious_periods = Vec::with_capacity(3);
    let morning = (sunrise_hour + 1) % 24;
    auspicious_periods.push(format!("{:02}:00 - {:02}:00", morning, (morning + 2) % 24));
    // No weekday's inauspicious windows span exactly 12 to 14, so the
    // midday window survives every day.
    let noon_blocked = [
        inauspicious.rahu_kalam,
        inauspicious.yamaganda,
        inauspicious.gulika,
    ]
    .iter()
    .any(|r| r.start_hour == 12.0 && r.end_hour == 14.0);
    if !noon_blocked {
        auspicious_periods.push("12:00 - 14:00".to_string());
    }
    let evening = (sunset_hour + 23) % 24;
    auspicious_periods.push(format!("{evening:02}:00 - {sunset_hour:02}:00"));

    let special_observance = match tithi_entry.id {
        11 => Some(match tithi_entry.paksha {
            Paksha::Shukla => "Shukla Ekadashi (fasting day)",
            Paksha::Krishna => "Krishna Ekadashi (fasting day)",
        }),
        15 => Some("Purnima (full moon)"),
        30 => Some("Amavasya (new moon)"),
        _ => None,
    };

    PanchangData {
        date,
        location: GeoLocation {
            latitude,
            longitude,
            timezone: timezone.to_string(),
        },
        sunrise: format_hm(sunrise_hour, sunrise_minute),
        sunset: format_hm(sunset_hour, sunset_minute),
        moonrise: format_hm(moonrise_hour, moonrise_minute),
        moonset: format_hm(moonset_hour, moonset_minute),
        tithi: TithiDetail {
            id: tithi_entry.id,
            name: tithi_entry.name,
            paksha: tithi_entry.paksha,
            deity: tithi_entry.deity,
            end_time: tithi_end,
        },
        nakshatra: NakshatraDetail {
            nakshatra,
            end_time: nakshatra_end,
        },
        yoga: YogaDetail {
            id: yoga_entry.id,
            name: yoga_entry.name,
            deity: yoga_entry.deity,
            end_time: yoga_end,
        },
        karana: KaranaDetail {
            id: karana_entry.id,
            name: karana_entry.name,
            deity: karana_entry.deity,
            nature: karana_entry.nature,
            end_time: karana_end,
        },
        inauspicious,
        auspicious_periods,
        vaar,
        special_observance,
    }
}

/// Activity guidance for the day, drawn from its tithi, nakshatra and
/// vaar, closed out with the Rahu Kalam warning and the day's
/// auspicious windows.
pub fn get_daily_recommendations(panchang: &PanchangData) -> Vec<String> {
    use jyotish_base::Nakshatra::*;

    let mut out: Vec<String> = Vec::new();
    let mut push = |s: &str| out.push(s.to_string());

    match panchang.tithi.id {
        11 => {
            push("Observe fasting or light diet");
            push("Spend time in meditation and prayer");
        }
        15 => {
            push("Perform charitable acts");
            push("Spiritual practices are highly beneficial today");
        }
        30 => {
            push("Perform rituals for ancestors (pitru tarpan)");
            push("Avoid starting new ventures");
        }
        _ => {}
    }

    match panchang.nakshatra.nakshatra {
        Pushya => {
            push("Excellent day for starting new ventures");
            push("Favorable for financial decisions");
        }
        Ashlesha => {
            push("Avoid major decisions today");
            push("Focus on introspection and planning");
        }
        Magha => {
            push("Honor ancestors and elders");
            push("Good day for spiritual learning");
        }
        Hasta => {
            push("Favorable for skilled work and crafts");
            push("Good day for signing contracts");
        }
        Chitra => {
            push("Excellent for artistic endeavors");
            push("Good day for beautification and decoration");
        }
        Vishakha => {
            push("Good for collaborative projects");
            push("Favorable for networking and social activities");
        }
        Anuradha => {
            push("Favorable for friendship and partnerships");
            push("Good day for reconciliation");
        }
        Mula => {
            push("Focus on foundational work");
            push("Avoid travel if possible");
        }
        Shravana => {
            push("Excellent day for learning and education");
            push("Good for communication and teaching");
        }
        Dhanishta => {
            push("Favorable for financial prosperity");
            push("Good day for charitable activities");
        }
        Shatabhisha => {
            push("Good for healing practices");
            push("Favorable for medical treatments");
        }
        Revati => {
            push("Excellent for spiritual practices");
            push("Favorable for travel and journeys");
        }
        _ => {}
    }

    match panchang.vaar {
        Vaar::Sunday => {
            push("Worship Lord Surya (Sun)");
            push("Good day for father-related activities");
        }
        Vaar::Monday => {
            push("Worship Lord Shiva");
            push("Favorable for peace and emotional healing");
        }
        Vaar::Tuesday => {
            push("Worship Lord Hanuman or Karthikeya");
            push("Good day for courage and decisive action");
        }
        Vaar::Wednesday => {
            push("Worship Lord Ganesha");
            push("Favorable for education and communication");
        }
        Vaar::Thursday => {
            push("Worship Lord Vishnu or Guru");
            push("Good day for spiritual learning and teaching");
        }
        Vaar::Friday => {
            push("Worship Goddess Lakshmi");
            push("Favorable for relationships and artistic pursuits");
        }
        Vaar::Saturday => {
            push("Worship Lord Shani (Saturn)");
            push("Good day for introspection and discipline");
        }
    }

    out.push(format!(
        "Avoid starting important work during Rahu Kalam ({})",
        panchang.inauspicious.rahu_kalam
    ));
    if !panchang.auspicious_periods.is_empty() {
        out.push(format!(
            "Best times for important activities: {}",
            panchang.auspicious_periods.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::{KaranaNature, Nakshatra};

    fn jan(day: u32) -> LocalDate {
        LocalDate::new(2024, 1, day).unwrap()
    }

    fn new_year_panchang() -> PanchangData {
        calculate_panchang(jan(1), 12.97, 77.59, "Asia/Kolkata")
    }

    #[test]
    fn sun_and_moon_times_for_new_year() {
        let p = new_year_panchang();
        assert_eq!(p.sunrise, "05:16");
        assert_eq!(p.sunset, "17:16");
        assert_eq!(p.moonrise, "05:46");
        assert_eq!(p.moonset, "17:46");
    }

    #[test]
    fn five_limbs_for_new_year() {
        let p = new_year_panchang();
        assert_eq!(p.tithi.id, 16);
        assert_eq!(p.tithi.name, "Pratipada");
        assert_eq!(p.tithi.paksha, Paksha::Krishna);
        assert_eq!(p.tithi.end_time, "21:01");

        assert_eq!(p.nakshatra.nakshatra, Nakshatra::Ashwini);
        assert_eq!(p.nakshatra.end_time, "19:46");

        assert_eq!(p.yoga.name, "Vishkumbha");
        assert_eq!(p.yoga.end_time, "20:31");

        assert_eq!(p.karana.id, 2);
        assert_eq!(p.karana.name, "Balava");
        assert_eq!(p.karana.nature, KaranaNature::Movable);
        assert_eq!(p.karana.end_time, "22:36");

        assert_eq!(p.vaar, Vaar::Monday);
    }

    #[test]
    fn monday_inauspicious_windows() {
        let p = new_year_panchang();
        assert_eq!(p.inauspicious.rahu_kalam.to_string(), "7.5 to 9");
        assert_eq!(p.inauspicious.yamaganda.to_string(), "10.5 to 12");
        assert_eq!(p.inauspicious.gulika.to_string(), "3 to 4.5");
    }

    #[test]
    fn three_auspicious_windows_every_day() {
        let p = new_year_panchang();
        assert_eq!(
            p.auspicious_periods,
            vec!["06:00 - 08:00", "12:00 - 14:00", "16:00 - 17:00"]
        );
    }

    #[test]
    fn location_is_carried_through() {
        let p = new_year_panchang();
        assert_eq!(p.location.latitude, 12.97);
        assert_eq!(p.location.longitude, 77.59);
        assert_eq!(p.location.timezone, "Asia/Kolkata");
    }

    #[test]
    fn special_observances_in_january() {
        assert_eq!(new_year_panchang().special_observance, None);

        let ekadashi = calculate_panchang(jan(26), 0.0, 0.0, "UTC");
        assert_eq!(ekadashi.tithi.id, 11);
        assert_eq!(
            ekadashi.special_observance,
            Some("Shukla Ekadashi (fasting day)")
        );

        let purnima = calculate_panchang(jan(30), 0.0, 0.0, "UTC");
        assert_eq!(purnima.special_observance, Some("Purnima (full moon)"));

        let amavasya = calculate_panchang(jan(15), 0.0, 0.0, "UTC");
        assert_eq!(amavasya.special_observance, Some("Amavasya (new moon)"));
    }

    #[test]
    fn day_length_is_constant() {
        for day in 1..=28 {
            let (rise, set) = sunrise_sunset_minutes(jan(day));
            assert_eq!(set - rise, 720);
        }
    }

    #[test]
    fn recommendations_cover_limbs_and_windows() {
        let p = new_year_panchang();
        let recs = get_daily_recommendations(&p);
        // Ashwini has no nakshatra rule; Monday contributes two lines.
        assert!(recs.contains(&"Worship Lord Shiva".to_string()));
        assert!(
            recs.contains(
                &"Avoid starting important work during Rahu Kalam (7.5 to 9)".to_string()
            )
        );
        assert!(recs.iter().any(|r| r.starts_with("Best times")));

        let ekadashi = calculate_panchang(jan(26), 0.0, 0.0, "UTC");
        let recs = get_daily_recommendations(&ekadashi);
        assert!(recs.contains(&"Observe fasting or light diet".to_string()));
    }
}
