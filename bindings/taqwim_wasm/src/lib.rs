//! WASM bindings for Taqwim - Hijri calendar engine
//!
//! Exposes the Gregorian <-> Hijri conversion and the major events lookup to
//! the browser client, using the same names the client already calls.

use serde::Serialize;
use taqwim_core::{
    major_events_with, month_days, CalendarConfig, GregorianDate, HijriCalendar, HijriDate,
    MonthDay,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn parse_date(date_str: &str) -> Result<GregorianDate, JsValue> {
    date_str
        .parse::<GregorianDate>()
        .map_err(|e| JsValue::from_str(&format!("Invalid date format: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Converts a local calendar date (`YYYY-MM-DD`) to its Hijri date.
///
/// Pass the local date string, not `Date.toISOString()`, which is UTC and
/// can name the previous or next day.
///
/// # Example (JavaScript)
/// ```js
/// const h = gregorianToHijri("2024-01-01");
/// console.log(h.hDay, h.hMonthName, h.hYear); // 19 "Jumada al-thani" 1445
/// ```
#[wasm_bindgen(js_name = gregorianToHijri)]
pub fn gregorian_to_hijri(date_str: &str) -> Result<JsValue, JsValue> {
    TaqwimCalendar::default().to_hijri(date_str)
}

/// Converts a Hijri date to a Gregorian `YYYY-MM-DD` string. Best effort,
/// inputs are not validated.
#[wasm_bindgen(js_name = hijriToGregorian)]
pub fn hijri_to_gregorian(h_year: i32, h_month: u32, h_day: u32) -> String {
    TaqwimCalendar::default().to_gregorian(h_year, h_month, h_day)
}

/// Returns the labels of the major Islamic events on a date (possibly empty).
#[wasm_bindgen(js_name = getMajorEventsForDate)]
pub fn get_major_events_for_date(date_str: &str) -> Result<JsValue, JsValue> {
    TaqwimCalendar::default().major_events(date_str)
}

/// Class-based API carrying a moon-sighting adjustment.
///
/// # Example (JavaScript)
/// ```js
/// const cal = new TaqwimCalendar(-1);
/// console.log(cal.toHijri("2024-03-11").hMonthName); // "Sha'ban"
/// ```
#[wasm_bindgen]
#[derive(Default)]
pub struct TaqwimCalendar {
    calendar: HijriCalendar,
}

#[wasm_bindgen]
impl TaqwimCalendar {
    /// Creates a calendar with a day offset (positive = Hijri ahead, clamped to [-30, 30]).
    #[wasm_bindgen(constructor)]
    pub fn new(adjustment: i32) -> TaqwimCalendar {
        console_error_panic_hook::set_once();
        let config = CalendarConfig::new().adjustment(i64::from(adjustment));
        TaqwimCalendar { calendar: HijriCalendar::new(config) }
    }

    #[wasm_bindgen(getter)]
    pub fn adjustment(&self) -> i32 {
        // always within [-30, 30]
        self.calendar.config().adjustment as i32
    }

    #[wasm_bindgen(js_name = toHijri)]
    pub fn to_hijri(&self, date_str: &str) -> Result<JsValue, JsValue> {
        let date = parse_date(date_str)?;
        to_js(&WasmHijriDate::from(self.calendar.hijri_of(date)))
    }

    #[wasm_bindgen(js_name = toGregorian)]
    pub fn to_gregorian(&self, h_year: i32, h_month: u32, h_day: u32) -> String {
        self.calendar.to_gregorian(h_year, h_month, h_day).to_string()
    }

    #[wasm_bindgen(js_name = majorEvents)]
    pub fn major_events(&self, date_str: &str) -> Result<JsValue, JsValue> {
        let date = parse_date(date_str)?
            .to_naive_date()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&major_events_with(&self.calendar, date))
    }

    /// Every day of a Hijri month with its Gregorian date.
    #[wasm_bindgen(js_name = monthDays)]
    pub fn month_days(&self, h_year: i32, h_month: u32) -> Result<JsValue, JsValue> {
        let days: Vec<WasmMonthDay> = month_days(&self.calendar, h_year, h_month)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .map(WasmMonthDay::from)
            .collect();
        to_js(&days)
    }
}

/// WASM-friendly Hijri date, in the shape the web client consumes.
#[derive(Debug, Clone, PartialEq, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmHijriDate {
    pub h_day: u32,
    pub h_month: u32,
    pub h_month_name: String,
    pub h_year: i32,
}

impl From<HijriDate> for WasmHijriDate {
    fn from(h: HijriDate) -> Self {
        Self {
            h_day: h.day,
            h_month: h.month,
            h_month_name: h.month_name().to_string(),
            h_year: h.year,
        }
    }
}

/// WASM-friendly month grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmMonthDay {
    pub hijri: WasmHijriDate,
    pub gregorian: String,
    pub weekday: String,
    pub has_event: bool,
}

impl From<MonthDay> for WasmMonthDay {
    fn from(day: MonthDay) -> Self {
        Self {
            hijri: WasmHijriDate::from(day.hijri),
            gregorian: day.gregorian.to_string(),
            weekday: day.weekday.to_string(),
            has_event: day.has_event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hijri_dto_shape() {
        let dto = WasmHijriDate::from(HijriDate::new(1445, 6, 19));
        assert_eq!(dto.h_month_name, "Jumada al-thani");
        assert_eq!((dto.h_day, dto.h_month, dto.h_year), (19, 6, 1445));
    }

    #[test]
    fn test_to_gregorian_string() {
        assert_eq!(hijri_to_gregorian(1445, 9, 1), "2024-03-11");
        assert_eq!(TaqwimCalendar::new(-1).to_gregorian(1445, 9, 1), "2024-03-12");
    }

    #[test]
    fn test_adjustment_is_clamped() {
        assert_eq!(TaqwimCalendar::new(90).adjustment(), 30);
    }

    #[test]
    fn test_month_day_dto() {
        let cal = HijriCalendar::default();
        let first = month_days(&cal, 1445, 9).unwrap().next().unwrap();
        let dto = WasmMonthDay::from(first);
        assert_eq!(dto.gregorian, "2024-03-11");
        assert_eq!(dto.weekday, "Mon");
        assert!(dto.has_event);
    }
}
