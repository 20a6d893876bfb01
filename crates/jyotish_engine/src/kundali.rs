//! Birth chart (kundali) calculation.
//!
//! The planetary arithmetic here is a deliberately simplified model
//! derived from the birth date and time, not an ephemeris integration.
//! Rashi, nakshatra, house and dasha bookkeeping on top of it follow
//! the classical rules exactly, so the downstream lookups behave the
//! same way they would over real longitudes.

use jyotish_base::{
    dasha_sequence_index, dasha_years, nakshatra_from_degree, rashi_from_degree, Graha, LocalDate,
    ALL_GRAHAS, DASHA_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS,
};

use crate::kundali_types::{BirthChart, BirthData, DashaBalance, PlanetPosition};

/// Houses whose Mars occupancy marks Mangal Dosha.
const MANGAL_HOUSES: [u8; 5] = [1, 4, 7, 8, 12];

/// Computes the full birth chart for the given birth particulars.
///
/// `query_year` anchors the Vimshottari dasha balance: the running
/// major and sub periods are the ones active in that calendar year.
pub fn calculate_birth_chart(birth: &BirthData, query_year: i32) -> BirthChart {
    let minutes = birth.time.minutes_since_midnight() as f64;
    let ascendant = (minutes / 4.0 + birth.longitude / 15.0).rem_euclid(360.0);
    let ascendant_rashi = rashi_from_degree(ascendant).id();

    let day = birth.date.day() as f64;
    let month0 = birth.date.month() as usize - 1;

    let positions: [PlanetPosition; 9] = std::array::from_fn(|i| {
        let offset = (day + i as f64 * 30.0).rem_euclid(360.0);
        let longitude = (ascendant + offset).rem_euclid(360.0);
        let rashi = rashi_from_degree(longitude);
        let nakshatra = nakshatra_from_degree(longitude).nakshatra;
        let house = ((rashi.id() as i32 - ascendant_rashi as i32 + 12) % 12) as u8 + 1;
        let retrograde = (i + month0) % 5 == 0;
        PlanetPosition {
            graha: ALL_GRAHAS[i],
            longitude,
            rashi,
            nakshatra,
            house,
            retrograde,
        }
    });

    let houses: [f64; 12] = std::array::from_fn(|i| (ascendant + i as f64 * 30.0).rem_euclid(360.0));

    let birth_year = birth.date.year();
    // Lords repeat on a 120-year cycle, so reduce the age into one cycle.
    let age = (query_year - birth_year).rem_euclid(VIMSHOTTARI_TOTAL_YEARS as i32);

    let moon_nakshatra = positions[1].nakshatra;
    let start_index = dasha_sequence_index(moon_nakshatra.ruler());
    let dasha_balance = vimshottari_balance(birth_year, age, start_index);

    let mut doshas = Vec::new();
    if MANGAL_HOUSES.contains(&positions[2].house) {
        doshas.push("mangal");
    }
    if all_hemmed_by_nodes(&positions) {
        doshas.push("kaal_sarpa");
    }

    BirthChart {
        ascendant,
        positions,
        houses,
        dasha_balance,
        doshas,
    }
}

/// Walks the Vimshottari sequence from the birth nakshatra lord to find
/// the major and sub periods running at `age` years after birth.
///
/// End dates are coarse by construction: a period ending partway into a
/// year is recorded as January 1 of that year.
fn vimshottari_balance(birth_year: i32, age: i32, start_index: usize) -> DashaBalance {
    let age = age as f64;
    let mut total_years = 0.0;
    let mut balance = DashaBalance {
        major_lord: DASHA_SEQUENCE[start_index],
        major_end: LocalDate::first_of_year(birth_year),
        sub_lord: DASHA_SEQUENCE[start_index],
        sub_end: LocalDate::first_of_year(birth_year),
    };

    for i in 0..DASHA_SEQUENCE.len() {
        let lord_index = (start_index + i) % DASHA_SEQUENCE.len();
        let lord = DASHA_SEQUENCE[lord_index];
        let years = dasha_years(lord);

        if total_years <= age && age < total_years + years {
            balance.major_lord = lord;
            balance.major_end =
                LocalDate::first_of_year(birth_year + (total_years + years) as i32);

            let elapsed = age - total_years;
            let mut sub_total = 0.0;
            for j in 0..DASHA_SEQUENCE.len() {
                let sub_lord = DASHA_SEQUENCE[(lord_index + j) % DASHA_SEQUENCE.len()];
                let sub_years = dasha_years(sub_lord) * years / VIMSHOTTARI_TOTAL_YEARS;
                if sub_total <= elapsed && elapsed < sub_total + sub_years {
                    balance.sub_lord = sub_lord;
                    balance.sub_end = LocalDate::first_of_year(
                        birth_year + (total_years + sub_total + sub_years) as i32,
                    );
                    break;
                }
                sub_total += sub_years;
            }
            break;
        }
        total_years += years;
    }

    balance
}

/// True when every graha other than the nodes sits in the arc from
/// Rahu forward to Ketu, the hallmark of Kaal Sarpa Dosha.
fn all_hemmed_by_nodes(positions: &[PlanetPosition; 9]) -> bool {
    let rahu = positions[7].longitude;
    let ketu = positions[8].longitude;
    positions
        .iter()
        .filter(|p| !matches!(p.graha, Graha::Rahu | Graha::Ketu))
        .all(|p| degree_between(p.longitude, rahu, ketu))
}

/// Inclusive arc membership test, handling ranges that cross 0/360.
fn degree_between(degree: f64, start: f64, end: f64) -> bool {
    if start <= end {
        degree >= start && degree <= end
    } else {
        degree >= start || degree <= end
    }
}
