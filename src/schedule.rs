use crate::{
    error::{ParseError, SearchError},
    field::{Field, FieldKind, FieldValue},
    utils, Result,
};
use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Timelike};
use std::{fmt::Display, str::FromStr};

/// Default search horizon, in years from the reference timestamp.
pub const DEFAULT_HORIZON_YEARS: u16 = 5;

/// Represents a parsed and validated cron schedule with its methods.
///
/// For the schedule format clarification and usage examples, please refer to the
/// [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    second: Field,
    minute: Field,
    hour: Field,
    dom: Field,
    month: Field,
    dow: Field,
    year: Field,
    horizon: u16,
}

impl Schedule {
    /// Parses and validates provided `expression` and constructs [`Schedule`] instance.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`ParseError`] in a case provided expression is unparsable or has format errors.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        let mut elements: Vec<&str> = expression.split_whitespace().collect();

        // Expand well-known aliases.
        if elements.len() == 1 && elements[0].starts_with('@') {
            match elements[0] {
                "@yearly" | "@annually" => elements = vec!["0", "0", "0", "1", "1", "*", "*"],
                "@monthly" => elements = vec!["0", "0", "0", "1", "*", "*", "*"],
                "@weekly" => elements = vec!["0", "0", "0", "*", "*", "0", "*"],
                "@daily" | "@midnight" => elements = vec!["0", "0", "0", "*", "*", "*", "*"],
                "@hourly" => elements = vec!["0", "0", "*", "*", "*", "*", "*"],
                unknown => return Err(ParseError::UnknownAlias(unknown.to_owned())),
            }
        }

        // Check the number of elements in the provided expression and augment it
        // with the defaults: seconds is pinned to `0`, year is unrestricted.
        match elements.len() {
            5 => {
                elements.insert(0, "0");
                elements.push("*");
            }
            6 => elements.push("*"),
            7 => {}
            found => return Err(ParseError::FieldCount(found)),
        }

        Ok(Self {
            second: Field::parse(FieldKind::Seconds, elements[0])?,
            minute: Field::parse(FieldKind::Minutes, elements[1])?,
            hour: Field::parse(FieldKind::Hours, elements[2])?,
            dom: Field::parse(FieldKind::Doms, elements[3])?,
            month: Field::parse(FieldKind::Months, elements[4])?,
            dow: Field::parse(FieldKind::Dows, elements[5])?,
            year: Field::parse(FieldKind::Years, elements[6])?,
            horizon: DEFAULT_HORIZON_YEARS,
        })
    }

    /// Replaces the search horizon: [`next`](Schedule::next) and
    /// [`previous`](Schedule::previous) give up with [`SearchError::NotFound`]
    /// once the scanned year is more than `years` away from the reference.
    ///
    /// The horizon is a search parameter, not a part of the expression, so it
    /// doesn't affect [`Display`] and serialized forms.
    #[must_use]
    pub fn with_horizon(mut self, years: u16) -> Self {
        self.horizon = years;
        self
    }

    /// Returns `true` if the provided timestamp satisfies the schedule.
    ///
    /// Timestamps are compared at whole-second resolution: anything with a
    /// non-zero fractional part never matches.
    pub fn matches<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> bool {
        if timestamp.nanosecond() != 0 {
            return false;
        }

        let year = timestamp.year();
        if year < crate::MIN_YEAR as i32 || year > crate::MAX_YEAR as i32 {
            return false;
        }

        let base_match = self.second.contains(timestamp.second() as FieldValue)
            && self.minute.contains(timestamp.minute() as FieldValue)
            && self.hour.contains(timestamp.hour() as FieldValue)
            && self.month.contains(timestamp.month() as FieldValue)
            && self.year.contains(year as FieldValue);

        base_match
            && self.day_matches(
                year as FieldValue,
                timestamp.month() as FieldValue,
                timestamp.day() as FieldValue,
            )
    }

    /// Returns time of the nearest schedule event at or after the provided
    /// `from` value (inclusively): a reference which already satisfies the
    /// schedule is returned unchanged.
    ///
    /// Returns [`SearchError::NotFound`] if there is no event within the
    /// search horizon.
    #[inline]
    pub fn next<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> std::result::Result<DateTime<Tz>, SearchError> {
        self.find(from, Direction::Forward)
    }

    /// Returns time of the nearest schedule event at or before the provided
    /// `from` value (inclusively).
    ///
    /// Returns [`SearchError::NotFound`] if there is no event within the
    /// search horizon.
    #[inline]
    pub fn previous<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> std::result::Result<DateTime<Tz>, SearchError> {
        self.find(from, Direction::Backward)
    }

    /// Returns up to `n` event times at or after `from`, in strictly
    /// increasing order (the first one may equal `from`).
    ///
    /// If some search fails, the failure becomes the last element of the
    /// returned sequence and the sequence ends there.
    pub fn next_n<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        n: usize,
    ) -> Vec<std::result::Result<DateTime<Tz>, SearchError>> {
        self.iter(from).take(n).collect()
    }

    /// Returns up to `n` event times at or before `from`, in strictly
    /// decreasing order (the first one may equal `from`).
    ///
    /// If some search fails, the failure becomes the last element of the
    /// returned sequence and the sequence ends there.
    pub fn previous_n<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        n: usize,
    ) -> Vec<std::result::Result<DateTime<Tz>, SearchError>> {
        self.iter_backward(from).take(n).collect()
    }

    /// Returns iterator of events starting from `from` (inclusively) and
    /// going forward in time.
    ///
    /// The iterator fuses after the first failed search, with the failure
    /// itself being the last yielded item.
    #[inline]
    pub fn iter<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> ScheduleIter<Tz> {
        ScheduleIter {
            schedule: self.clone(),
            cursor: Some(from.clone()),
            direction: Direction::Forward,
        }
    }

    /// Returns iterator of events starting from `from` (inclusively) and
    /// going backward in time.
    #[inline]
    pub fn iter_backward<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> ScheduleIter<Tz> {
        ScheduleIter {
            schedule: self.clone(),
            cursor: Some(from.clone()),
            direction: Direction::Backward,
        }
    }

    /// Cascading rollover search for the nearest satisfying timestamp.
    fn find<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        direction: Direction,
    ) -> std::result::Result<DateTime<Tz>, SearchError> {
        // Normalize the reference to the whole second, toward the search direction.
        let from = if from.nanosecond() > 0 {
            let truncated = from.with_nanosecond(0).ok_or(SearchError::NotFound)?;
            match direction {
                Direction::Forward => truncated
                    .checked_add_signed(TimeDelta::seconds(1))
                    .ok_or(SearchError::NotFound)?,
                Direction::Backward => truncated,
            }
        } else {
            from.clone()
        };

        let mut cursor = Cursor {
            year: from.year().clamp(0, u16::MAX as i32) as FieldValue,
            month: from.month() as FieldValue,
            day: from.day() as FieldValue,
            hour: from.hour() as FieldValue,
            minute: from.minute() as FieldValue,
            second: from.second() as FieldValue,
        };
        let limit = match direction {
            Direction::Forward => cursor.year.saturating_add(self.horizon),
            Direction::Backward => cursor.year.saturating_sub(self.horizon),
        };

        self.find_fields(&mut cursor, direction, limit)?;

        Ok(from
            .timezone()
            .with_ymd_and_hms(
                cursor.year as i32,
                cursor.month as u32,
                cursor.day as u32,
                cursor.hour as u32,
                cursor.minute as u32,
                cursor.second as u32,
            )
            .unwrap())
    }

    /// Advances the cursor to the nearest satisfying position, field by field
    /// from the coarsest one. Whenever some field jumps to a new value, all
    /// finer fields reset toward the search direction; whenever some field has
    /// no satisfying value left, the next coarser field makes a single
    /// carry/borrow step and the scan restarts from the year level.
    ///
    /// The `limit` year is a hard cap checked on every pass.
    fn find_fields(&self, c: &mut Cursor, dir: Direction, limit: FieldValue) -> std::result::Result<(), SearchError> {
        loop {
            // Year level.
            let Some(year) = self.year.nearest_matching(c.year, dir) else {
                return Err(SearchError::NotFound);
            };
            let beyond_limit = match dir {
                Direction::Forward => year > limit,
                Direction::Backward => year < limit,
            };
            if beyond_limit {
                return Err(SearchError::NotFound);
            }
            if year != c.year {
                c.year = year;
                c.reset_month(dir);
            }

            // Month level.
            match self.month.nearest_matching(c.month, dir) {
                None => {
                    c.carry_year(dir);
                    continue;
                }
                Some(month) if month != c.month => {
                    c.month = month;
                    c.reset_day(dir);
                }
                _ => {}
            }

            // Day level: day of month and day of week act as a joint constraint.
            match self.nearest_day(c.year, c.month, c.day, dir) {
                None => {
                    c.carry_month(dir);
                    continue;
                }
                Some(day) if day != c.day => {
                    c.day = day;
                    c.reset_hour(dir);
                }
                _ => {}
            }

            // Hour level.
            match self.hour.nearest_matching(c.hour, dir) {
                None => {
                    c.carry_day(dir);
                    continue;
                }
                Some(hour) if hour != c.hour => {
                    c.hour = hour;
                    c.reset_minute(dir);
                }
                _ => {}
            }

            // Minute level.
            match self.minute.nearest_matching(c.minute, dir) {
                None => {
                    c.carry_hour(dir);
                    continue;
                }
                Some(minute) if minute != c.minute => {
                    c.minute = minute;
                    c.reset_second(dir);
                }
                _ => {}
            }

            // Second level.
            match self.second.nearest_matching(c.second, dir) {
                None => {
                    c.carry_minute(dir);
                    continue;
                }
                Some(second) => {
                    c.second = second;
                    return Ok(());
                }
            }
        }
    }

    /// Nearest admissible day within the month, starting from `day` toward
    /// the search direction.
    fn nearest_day(
        &self,
        year: FieldValue,
        month: FieldValue,
        day: FieldValue,
        dir: Direction,
    ) -> Option<FieldValue> {
        let last = utils::days_in_month(year, month);
        match dir {
            Direction::Forward => (day..=last).find(|&d| self.day_matches(year, month, d)),
            Direction::Backward => (1..=day.min(last)).rev().find(|&d| self.day_matches(year, month, d)),
        }
    }

    /// Joint day-of-month/day-of-week admissibility.
    ///
    /// Standard cron rule: when both day fields are restricted, a day
    /// satisfying either one of them counts; when only one is restricted,
    /// that one alone decides.
    fn day_matches(&self, year: FieldValue, month: FieldValue, day: FieldValue) -> bool {
        match (self.dom.is_restricted(), self.dow.is_restricted()) {
            (false, false) => true,
            (true, false) => self.dom.contains(day),
            (false, true) => self.weekday_matches(utils::day_of_week(year, month, day)),
            (true, true) => {
                self.dom.contains(day) || self.weekday_matches(utils::day_of_week(year, month, day))
            }
        }
    }

    /// Both 0 and 7 denote Sunday.
    #[inline]
    fn weekday_matches(&self, weekday: FieldValue) -> bool {
        self.dow.contains(weekday) || (weekday == 0 && self.dow.contains(7))
    }
}

/// Search direction of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Forward,
    Backward,
}

impl Field {
    /// Directional alias for `next_matching`/`previous_matching`.
    #[inline]
    fn nearest_matching(&self, value: FieldValue, dir: Direction) -> Option<FieldValue> {
        match dir {
            Direction::Forward => self.next_matching(value),
            Direction::Backward => self.previous_matching(value),
        }
    }
}

/// Numeric calendar position of the search: always a valid date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    year: FieldValue,
    month: FieldValue,
    day: FieldValue,
    hour: FieldValue,
    minute: FieldValue,
    second: FieldValue,
}

impl Cursor {
    /// Resets month and all finer fields: to the minimums going forward,
    /// to the maximums going backward.
    fn reset_month(&mut self, dir: Direction) {
        self.month = match dir {
            Direction::Forward => 1,
            Direction::Backward => 12,
        };
        self.reset_day(dir);
    }

    /// Resets day and all finer fields. The year and month must be final:
    /// the backward reset lands on the last day of the current month.
    fn reset_day(&mut self, dir: Direction) {
        self.day = match dir {
            Direction::Forward => 1,
            Direction::Backward => utils::days_in_month(self.year, self.month),
        };
        self.reset_hour(dir);
    }

    /// Resets hour and all finer fields.
    fn reset_hour(&mut self, dir: Direction) {
        self.hour = match dir {
            Direction::Forward => 0,
            Direction::Backward => 23,
        };
        self.reset_minute(dir);
    }

    /// Resets minute and second.
    fn reset_minute(&mut self, dir: Direction) {
        self.minute = match dir {
            Direction::Forward => 0,
            Direction::Backward => 59,
        };
        self.reset_second(dir);
    }

    /// Resets second only.
    fn reset_second(&mut self, dir: Direction) {
        self.second = match dir {
            Direction::Forward => 0,
            Direction::Backward => 59,
        };
    }

    /// Steps the year by one unit toward the search direction and resets all
    /// finer fields. Saturates at year 0; the year field bounds terminate the
    /// search far before that anyway.
    fn carry_year(&mut self, dir: Direction) {
        self.year = match dir {
            Direction::Forward => self.year + 1,
            Direction::Backward => self.year.saturating_sub(1),
        };
        self.reset_month(dir);
    }

    /// Steps the month by one unit, with the year carry on over/underflow.
    fn carry_month(&mut self, dir: Direction) {
        match dir {
            Direction::Forward if self.month < 12 => {
                self.month += 1;
                self.reset_day(dir);
            }
            Direction::Backward if self.month > 1 => {
                self.month -= 1;
                self.reset_day(dir);
            }
            _ => self.carry_year(dir),
        }
    }

    /// Steps the day by one unit, with the month carry on over/underflow.
    fn carry_day(&mut self, dir: Direction) {
        match dir {
            Direction::Forward if self.day < utils::days_in_month(self.year, self.month) => {
                self.day += 1;
                self.reset_hour(dir);
            }
            Direction::Backward if self.day > 1 => {
                self.day -= 1;
                self.reset_hour(dir);
            }
            _ => self.carry_month(dir),
        }
    }

    /// Steps the hour by one unit, with the day carry on over/underflow.
    fn carry_hour(&mut self, dir: Direction) {
        match dir {
            Direction::Forward if self.hour < 23 => {
                self.hour += 1;
                self.reset_minute(dir);
            }
            Direction::Backward if self.hour > 0 => {
                self.hour -= 1;
                self.reset_minute(dir);
            }
            _ => self.carry_day(dir),
        }
    }

    /// Steps the minute by one unit, with the hour carry on over/underflow.
    fn carry_minute(&mut self, dir: Direction) {
        match dir {
            Direction::Forward if self.minute < 59 => {
                self.minute += 1;
                self.reset_second(dir);
            }
            Direction::Backward if self.minute > 0 => {
                self.minute -= 1;
                self.reset_second(dir);
            }
            _ => self.carry_hour(dir),
        }
    }
}

/// Lazy series of schedule events, see [`Schedule::iter`] and
/// [`Schedule::iter_backward`].
///
/// Yields `Ok` with the event time while searches succeed; the first failed
/// search yields its error and fuses the iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleIter<Tz: TimeZone> {
    schedule: Schedule,
    cursor: Option<DateTime<Tz>>,
    direction: Direction,
}

impl<Tz: TimeZone> Iterator for ScheduleIter<Tz> {
    type Item = std::result::Result<DateTime<Tz>, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.cursor.take()?;
        match self.schedule.find(&from, self.direction) {
            Ok(found) => {
                let step = match self.direction {
                    Direction::Forward => TimeDelta::seconds(1),
                    Direction::Backward => TimeDelta::seconds(-1),
                };
                self.cursor = found.clone().checked_add_signed(step);
                Some(Ok(found))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = ParseError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.second, self.minute, self.hour, self.dom, self.month, self.dow, self.year
        )
    }
}
