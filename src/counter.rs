//! Statistic counters that count up from zero once they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::{Document, Element};

use crate::config;
use crate::dom;
use crate::observer::{ObserverOptions, OneShotObserver};

const COUNTER_SELECTOR: &str = ".stat-value[data-target]";

/// Reads a `data-target` value the way `parseInt(value, 10)` would: optional
/// sign, then leading digits, rest ignored. No digits means no target.
/// Digit runs that do not fit an `i64` are also no target, so the element
/// keeps its text instead of counting.
pub fn parse_target(attr: Option<&str>) -> Option<i64> {
    let trimmed = attr?.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}

/// Text to leave behind when a counter can't animate.
pub fn fallback_text(existing: &str) -> String {
    if existing.is_empty() {
        "0".to_string()
    } else {
        existing.to_string()
    }
}

/// `Number.prototype.toFixed` for non-negative values. Rounds the exact
/// decimal expansion of the double, with halves going up, so `1.15` (stored
/// as 1.149999..) keeps `1.1` while an exact `1.25` becomes `1.3`.
fn to_fixed(value: f64, digits: usize) -> String {
    // Wide enough to hold the whole expansion of the quotients formatted here.
    let exact = format!("{:.60}", value);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    if fraction.as_bytes().get(digits).map_or(false, |&b| b >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let text: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    if digits == 0 {
        text
    } else {
        let split = text.len() - digits;
        format!("{}.{}", &text[..split], &text[split..])
    }
}

/// `2.5M`, `12K`, or the plain number below a thousand.
pub fn format_number(value: i64) -> String {
    if value >= 1_000_000 {
        format!("{}M", to_fixed(value as f64 / 1_000_000.0, 1))
    } else if value >= 1_000 {
        format!("{}K", to_fixed(value as f64 / 1_000.0, 0))
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = duration_ms as f64 / tick_ms.max(1) as f64;
        Self {
            target,
            current: 0.0,
            increment: target as f64 / steps,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn value(&self) -> i64 {
        self.current.floor() as i64
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one tick and returns the text to show, or `None` once the
    /// target has been reached.
    pub fn tick(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.finished = true;
        }
        Some(self.display())
    }

    pub fn display(&self) -> String {
        if self.target >= 1_000 {
            format_number(self.value())
        } else {
            self.value().to_string()
        }
    }
}

fn animate(element: Element, target: i64) {
    let mut animation =
        CounterAnimation::new(target, config::COUNTER_DURATION_MS, config::COUNTER_TICK_MS);
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();

    let interval = Interval::new(config::COUNTER_TICK_MS, move || {
        if let Some(text) = animation.tick() {
            element.set_text_content(Some(&text));
        }
        if animation.is_finished() {
            if let Some(interval) = handle_clone.borrow_mut().take() {
                // Dropped outside its own callback.
                Timeout::new(0, move || drop(interval)).forget();
            }
        }
    });

    *handle.borrow_mut() = Some(interval);
}

/// Starts one counter: animates towards a numeric `data-target`, or leaves
/// the element's text (or `0` when empty) in place.
pub fn start(element: Element) {
    let target = parse_target(element.get_attribute("data-target").as_deref());
    match target {
        Some(target) => {
            debug!("Counting up to {}", target);
            animate(element, target);
        }
        None => {
            let existing = element.text_content().unwrap_or_default();
            element.set_text_content(Some(&fallback_text(&existing)));
        }
    }
}

pub fn install_counters(document: &Document) -> Option<OneShotObserver> {
    let stats = dom::query_all(document, COUNTER_SELECTOR);
    if stats.is_empty() {
        return None;
    }

    let options = ObserverOptions {
        threshold: config::COUNTER_VISIBLE_THRESHOLD,
        ..ObserverOptions::default()
    };
    let observer = OneShotObserver::new(options, |stat, _| start(stat))?;
    for stat in &stats {
        observer.observe(stat);
    }
    Some(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: i64) -> (Vec<i64>, String) {
        let mut animation = CounterAnimation::new(target, 2000, 16);
        let mut values = Vec::new();
        let mut last = String::new();
        while let Some(text) = animation.tick() {
            values.push(animation.value());
            last = text;
        }
        (values, last)
    }

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse_target(Some("1500")), Some(1500));
        assert_eq!(parse_target(Some("  42 ")), Some(42));
        assert_eq!(parse_target(Some("250k")), Some(250));
        assert_eq!(parse_target(Some("-7")), Some(-7));
    }

    #[test]
    fn rejects_non_numeric_targets() {
        assert_eq!(parse_target(None), None);
        assert_eq!(parse_target(Some("")), None);
        assert_eq!(parse_target(Some("abc")), None);
        assert_eq!(parse_target(Some("NaN")), None);
        assert_eq!(parse_target(Some("-")), None);
    }

    #[test]
    fn digit_runs_past_i64_are_not_targets() {
        assert_eq!(parse_target(Some("99999999999999999999")), None);
        assert_eq!(parse_target(Some("9223372036854775807")), Some(i64::MAX));
    }

    #[test]
    fn fallback_keeps_existing_text() {
        assert_eq!(fallback_text("99+"), "99+");
        assert_eq!(fallback_text(""), "0");
    }

    #[test]
    fn formats_thousands_and_millions() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1K");
        assert_eq!(format_number(1_500), "2K");
        assert_eq!(format_number(2_499), "2K");
        assert_eq!(format_number(2_500_000), "2.5M");
        assert_eq!(format_number(1_000_000), "1.0M");
    }

    #[test]
    fn millions_round_like_to_fixed() {
        // 1.15 and 2.45 are not exact doubles; 1.25 is.
        assert_eq!(format_number(1_150_000), "1.1M");
        assert_eq!(format_number(1_250_000), "1.3M");
        assert_eq!(format_number(2_450_000), "2.5M");
        assert_eq!(format_number(9_950_000), "9.9M");
        assert_eq!(format_number(9_960_000), "10.0M");
    }

    #[test]
    fn thousands_halves_round_up() {
        assert_eq!(format_number(2_500), "3K");
        assert_eq!(format_number(999_500), "1000K");
        assert_eq!(format_number(999_499), "999K");
    }

    #[test]
    fn small_target_ends_on_plain_number() {
        let (_, last) = run(42);
        assert_eq!(last, "42");
    }

    #[test]
    fn thousands_target_ends_rounded() {
        let (_, last) = run(1500);
        assert_eq!(last, "2K");
    }

    #[test]
    fn millions_target_ends_with_one_decimal() {
        let (_, last) = run(2_500_000);
        assert_eq!(last, "2.5M");
    }

    #[test]
    fn value_never_decreases_and_stops_at_target() {
        let (values, _) = run(1234);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&1234));
        // 2000ms at a 16ms tick, give or take float drift on the last step.
        assert!((125..=126).contains(&values.len()));
    }

    #[test]
    fn finished_animation_stays_finished() {
        let mut animation = CounterAnimation::new(10, 2000, 16);
        while animation.tick().is_some() {}
        assert!(animation.is_finished());
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.value(), 10);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut animation = CounterAnimation::new(0, 2000, 16);
        assert_eq!(animation.tick(), Some("0".to_string()));
        assert_eq!(animation.tick(), None);
    }
}
