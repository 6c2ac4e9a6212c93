//! Cron expression parser with matching and bidirectional schedule search.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse almost all kinds of popular cron schedule formats;
//! - test whether a timestamp satisfies a schedule;
//! - look up the nearest event time before or after a reference timestamp,
//!   and series of such times in both directions.
//!
//! It has a single runtime dependency for calendar arithmetic - [chrono](https://crates.io/crates/chrono).
//!
//! _This is not a cron jobs scheduler or runner._ If you need a scheduler/runner,
//! look for [any similar crate](https://crates.io/search?q=async%20cron%20scheduler).
//!
//! ## Cron schedule format
//!
//! Traditionally, cron schedule expression has a 5-fields format: minutes, hours, days, months and days of week.
//! This crate uses such a format by default, but two optional fields may be added, seconds and years:
//! - if _seconds_ is empty, `0` is used by default;
//! - if _years_ is empty, `*` is used by default;
//! - if 6-fields schedule is specified, then _seconds_ field is assumed as first and years as empty (default).
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Required | Allowed values  | Allowed special characters |
//! |--------------|----------|-----------------|----------------------------|
//! | Seconds      | No       | 0-59            | * , - /                    |
//! | Minutes      | Yes      | 0-59            | * , - /                    |
//! | Hours        | Yes      | 0-23            | * , - /                    |
//! | Day of Month | Yes      | 1-31            | * , - /                    |
//! | Month        | Yes      | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | Yes      | 0-7 or SUN-SAT  | * , - /                    |
//! | Year         | No       | 1970-2099       | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`.
//!
//! Both `0` and `7` in the day of week field mean Sunday.
//!
//! If both days fields (day of month and day of week) are restricted (not `*`),
//! then a day satisfying either of them matches, which is the standard cron
//! convention.
//!
//! Also, short aliases for well-known schedule expressions are allowed:
//!
//! | Alias                      | Expression    |
//! |----------------------------|---------------|
//! | `@yearly` (or `@annually`) | 0 0 0 1 1 * * |
//! | `@monthly`                 | 0 0 0 1 * * * |
//! | `@weekly`                  | 0 0 0 * * 0 * |
//! | `@daily` (or `@midnight`)  | 0 0 0 * * * * |
//! | `@hourly`                  | 0 0 * * * * * |
//!
//! Some additional information about fields description and relationships may be found [here](https://en.wikipedia.org/wiki/Cron#Cron_expression) (this is not complete or exceptional documentation).
//!
//! ## How to use
//!
//! The single public entity of the crate is a [`Schedule`] structure, which has these basic methods:
//! - [new()](Schedule::new): constructor to parse and validate provided schedule;
//! - [matches()](Schedule::matches): tests whether a timestamp satisfies the schedule;
//! - [next()](Schedule::next)/[previous()](Schedule::previous): return time of the nearest schedule's
//!   event at or after/before the provided timestamp;
//! - [next_n()](Schedule::next_n)/[previous_n()](Schedule::previous_n): return series of event times;
//! - [iter()](Schedule::iter)/[iter_backward()](Schedule::iter_backward): return an `Iterator`
//!   which produces a series of event times according to the schedule.
//!
//! Every search is bounded: if no event exists within the schedule's horizon
//! ([`DEFAULT_HORIZON_YEARS`] from the reference, adjustable with
//! [with_horizon()](Schedule::with_horizon)), the search returns
//! [`SearchError::NotFound`] instead of looping indefinitely. This is the expected
//! outcome for impossible schedules like `0 0 31 2 *` (February never has a 31st day).
//!
//! ### Example with `next` and `previous`
//! ```rust
//! use chrono::Utc;
//! use cron_seek::{Result, Schedule};
//!
//! fn nearest_events() -> Result<()> {
//!     let schedule = Schedule::new("0 0 0 * * *")?;
//!     let now = Utc::now();
//!
//!     // Get the nearest events' timestamps around now
//!     let next = schedule.next(&now);
//!     let previous = schedule.previous(&now);
//!     assert!(next.is_ok());
//!     assert!(previous.is_ok());
//!
//!     println!("next: {:?}, previous: {:?}", next.unwrap(), previous.unwrap());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::Utc;
//! use cron_seek::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::new("0 0 0 * * *")?;
//!     let now = Utc::now();
//!
//!     // Get the next 10 timestamps starting from now
//!     schedule.iter(&now).take(10).flatten().for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`].

/// Crate specific Error implementations.
pub mod error;
mod field;
/// Cron schedule parser, matcher and event search.
pub mod schedule;
mod utils;

// Re-export of public entities.
pub use error::{ParseError, SearchError};
pub use field::{MAX_YEAR, MIN_YEAR};
pub use schedule::{Schedule, ScheduleIter, DEFAULT_HORIZON_YEARS};

/// Convenient alias for `Result`.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
