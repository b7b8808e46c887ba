//! Bell schedule: which class period is in session at a given time.
//!
//! Mondays run a late-start schedule; Tuesday through Friday share the
//! regular one. The tables live in the config file so other schools' bells
//! don't require a rebuild; the defaults below are the schedule this tool
//! grew up with. The wall-clock lookup itself happens once at shell startup.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One period: label plus its start (inclusive) and end (exclusive) times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodWindow {
    pub label: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BellSchedule {
    /// Monday late-start periods.
    pub monday: Vec<PeriodWindow>,
    /// Tuesday through Friday periods.
    pub weekday: Vec<PeriodWindow>,
}

fn window(label: &str, start: (u32, u32), end: (u32, u32)) -> PeriodWindow {
    PeriodWindow {
        label: label.to_string(),
        start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or(NaiveTime::MIN),
        end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or(NaiveTime::MIN),
    }
}

impl Default for BellSchedule {
    fn default() -> Self {
        Self {
            monday: vec![
                window("1", (9, 20), (10, 10)),
                window("2", (10, 16), (11, 6)),
                window("3", (11, 12), (12, 2)),
                window("4", (12, 8), (12, 58)),
                window("5", (13, 40), (14, 39)),
                window("6", (14, 45), (15, 35)),
            ],
            weekday: vec![
                window("1", (8, 45), (9, 42)),
                window("2", (9, 48), (10, 45)),
                window("3", (10, 51), (11, 48)),
                window("4", (11, 54), (12, 51)),
                window("5", (13, 33), (14, 30)),
                window("6", (14, 36), (15, 33)),
            ],
        }
    }
}

impl BellSchedule {
    /// The period in session at the given weekday and time, if any. Weekends
    /// and the gaps between periods return `None`.
    pub fn period_at(&self, day: Weekday, time: NaiveTime) -> Option<&str> {
        let table = match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => &self.weekday,
            Weekday::Sat | Weekday::Sun => return None,
        };
        table
            .iter()
            .find(|p| p.start <= time && time < p.end)
            .map(|p| p.label.as_str())
    }
}

/// Default seating-chart filename for a period ("P3_seats.csv"), or the
/// untagged "P_seats.csv" when no period is in session.
pub fn chart_file_name(period: Option<&str>) -> String {
    match period {
        Some(p) => format!("P{}_seats.csv", p),
        None => "P_seats.csv".to_string(),
    }
}

/// Default attendance export filename: "Attendance_2026-08-05_P3.txt".
pub fn attendance_file_name(date: NaiveDate, period: Option<&str>) -> String {
    let tag = match period {
        Some(p) => format!("P{}", p),
        None => "P".to_string(),
    };
    format!("Attendance_{}_{}.txt", date, tag)
}
