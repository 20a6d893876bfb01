//! Muhurta finder: divides daylight into the fifteen traditional
//! windows and grades each against the day's panchang.

use jyotish_base::{
    activity_from_id, format_hm, JyotishError, LocalDate, MuhurtaActivity,
    INAUSPICIOUS_NAKSHATRAS, INAUSPICIOUS_TITHI_IDS,
};

use crate::muhurta_types::{MuhurtaData, MuhurtaQuality, MuhurtaWindow};
use crate::panchang::{calculate_panchang, sunrise_sunset_minutes};
use crate::panchang_types::PanchangData;

/// Number of equal daylight divisions.
const MUHURTAS_PER_DAY: u32 = 15;

/// Finds auspicious windows for an activity on the given date.
///
/// Fails only on an unrecognized activity id. An empty window list is
/// a normal outcome: the whole day can be ruled out by its tithi.
pub fn find_muhurta(
    activity_id: &str,
    date: LocalDate,
    latitude: f64,
    longitude: f64,
    timezone: &str,
) -> Result<MuhurtaData, JyotishError> {
    let activity = activity_from_id(activity_id)
        .ok_or_else(|| JyotishError::UnknownActivity(activity_id.to_string()))?;

    let panchang = calculate_panchang(date, latitude, longitude, timezone);
    let (sunrise_min, sunset_min) = sunrise_sunset_minutes(date);
    let window_len = (sunset_min - sunrise_min) as f64 / MUHURTAS_PER_DAY as f64;

    let mut windows = Vec::new();
    for i in 0..MUHURTAS_PER_DAY {
        let start = sunrise_min as f64 + i as f64 * window_len;
        let end = start + window_len;
        let start_hour = (start / 60.0).floor() as u32;

        // Inauspicious windows are filtered on the starting hour alone.
        let blocked = [
            panchang.inauspicious.rahu_kalam,
            panchang.inauspicious.yamaganda,
            panchang.inauspicious.gulika,
        ]
        .iter()
        .any(|r| r.contains_hour(start_hour as f64));
        if blocked {
            continue;
        }

        let Some((quality, note)) = grade_window(activity, &panchang, i) else {
            continue;
        };

        if INAUSPICIOUS_TITHI_IDS.contains(&panchang.tithi.id) {
            continue;
        }

        windows.push(MuhurtaWindow {
            start_time: format_hm(start_hour, (start % 60.0).floor() as u32),
            end_time: format_hm((end / 60.0).floor() as u32, (end % 60.0).floor() as u32),
            quality,
            note,
        });
    }

    Ok(MuhurtaData {
        activity,
        date,
        location: panchang.location,
        windows,
    })
}

/// Grades the `i`th window of the day. `None` means the day's
/// nakshatra rules the window out entirely.
fn grade_window(
    activity: MuhurtaActivity,
    panchang: &PanchangData,
    i: u32,
) -> Option<(MuhurtaQuality, Option<&'static str>)> {
    let nakshatra = panchang.nakshatra.nakshatra;
    if activity.excellent_nakshatras().contains(&nakshatra) {
        Some((MuhurtaQuality::Excellent, Some(activity.excellent_note())))
    } else if INAUSPICIOUS_NAKSHATRAS.contains(&nakshatra) {
        None
    } else if i == 5 || i == 10 {
        Some((MuhurtaQuality::Good, None))
    } else {
        Some((MuhurtaQuality::Average, None))
    }
}
