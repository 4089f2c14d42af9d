//! Calendar helpers: range containment, age, next weekday

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Weekday};

/// Inclusive on both ends.
pub fn between<T: PartialOrd>(value: &T, start: &T, end: &T) -> bool {
    value >= start && value <= end
}

/// Completed years between `birth` and `now`.
///
/// A 29 February birthday is reached on 28 February in non-leap years.
/// A `birth` after `now` yields a negative age.
pub fn age_on(birth: NaiveDateTime, now: NaiveDateTime) -> i32 {
    let mut age = now.year() - birth.year();
    if anniversary(birth, age).is_some_and(|day| now < day) {
        age -= 1;
    }
    age
}

fn anniversary(birth: NaiveDateTime, years: i32) -> Option<NaiveDateTime> {
    let months = Months::new(years.unsigned_abs().checked_mul(12)?);
    if years >= 0 {
        birth.checked_add_months(months)
    } else {
        birth.checked_sub_months(months)
    }
}

/// Days from `from` forward to the next `to`, in `1..=7`.
fn days_until(from: Weekday, to: Weekday) -> u64 {
    let offset = i64::from(to.num_days_from_monday()) - i64::from(from.num_days_from_monday());
    if offset <= 0 {
        (offset + 7) as u64
    } else {
        offset as u64
    }
}

/// The next date falling on a given weekday, strictly after `self`.
///
/// `None` if the result is outside the representable calendar.
pub trait NextWeekday: Sized {
    fn next_weekday(&self, weekday: Weekday) -> Option<Self>;
}

impl NextWeekday for NaiveDate {
    fn next_weekday(&self, weekday: Weekday) -> Option<Self> {
        self.checked_add_days(Days::new(days_until(self.weekday(), weekday)))
    }
}

impl NextWeekday for NaiveDateTime {
    fn next_weekday(&self, weekday: Weekday) -> Option<Self> {
        self.checked_add_days(Days::new(days_until(self.weekday(), weekday)))
    }
}

impl<Tz: TimeZone> NextWeekday for DateTime<Tz> {
    fn next_weekday(&self, weekday: Weekday) -> Option<Self> {
        self.clone()
            .checked_add_days(Days::new(days_until(self.weekday(), weekday)))
    }
}

pub trait DateTimeExt {
    fn between(&self, start: &Self, end: &Self) -> bool;

    /// Age in completed years as of the local wall clock.
    fn calculate_age(&self) -> i32;
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz> {
    fn between(&self, start: &Self, end: &Self) -> bool {
        between(self, start, end)
    }

    fn calculate_age(&self) -> i32 {
        let birth = self.with_timezone(&Local).naive_local();
        age_on(birth, Local::now().naive_local())
    }
}
