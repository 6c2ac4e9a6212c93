use crate::{error::ParseError, utils};
use std::fmt::Display;

/// Minimum valid year.
pub const MIN_YEAR: u16 = 1970;
/// Maximum valid year.
pub const MAX_YEAR: u16 = 2099;

pub(crate) type FieldValue = u16;

/// One named, bounded component of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Field {
    kind: FieldKind,
    pattern: FieldPattern,
}

impl Field {
    /// Parses a whole field substring: one or more comma-separated items.
    pub(crate) fn parse(kind: FieldKind, input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::InvalidSyntax {
                field: kind.name(),
                token: input.to_owned(),
            });
        }

        let mut items = input
            .split(',')
            .map(|item| Self::parse_item(kind, item))
            .collect::<Result<Vec<_>, _>>()?;

        // A wildcard inside a list makes the other items meaningless.
        if items.len() > 1 && items.contains(&FieldPattern::All) {
            return Err(ParseError::InvalidSyntax {
                field: kind.name(),
                token: input.to_owned(),
            });
        }

        let pattern = if items.len() > 1 {
            FieldPattern::List(items)
        } else {
            items.remove(0)
        };

        Ok(Self { kind, pattern })
    }

    /// Parses a single item: `*`, `a`, `a-b`, `*/n`, `a/n` or `a-b/n`.
    fn parse_item(kind: FieldKind, item: &str) -> Result<FieldPattern, ParseError> {
        if item == "*" {
            Ok(FieldPattern::All)
        } else if let Some((base, step)) = item.split_once('/') {
            let Some(step) = utils::parse_digital_value(step, 1, FieldValue::MAX) else {
                return Err(ParseError::InvalidStep {
                    field: kind.name(),
                    token: item.to_owned(),
                });
            };

            let base = if base == "*" {
                StepBase::All
            } else if let Some((lo, hi)) = base.split_once('-') {
                let lo = kind.parse(lo)?;
                let hi = kind.parse(hi)?;
                if lo > hi {
                    return Err(ParseError::InvalidRange {
                        field: kind.name(),
                        token: item.to_owned(),
                    });
                }
                StepBase::Span(lo, hi)
            } else {
                StepBase::From(kind.parse(base)?)
            };

            Ok(FieldPattern::Step(base, step))
        } else if let Some((lo, hi)) = item.split_once('-') {
            let lo = kind.parse(lo)?;
            let hi = kind.parse(hi)?;
            if lo > hi {
                return Err(ParseError::InvalidRange {
                    field: kind.name(),
                    token: item.to_owned(),
                });
            }
            Ok(FieldPattern::Range(lo, hi))
        } else {
            Ok(FieldPattern::Value(kind.parse(item)?))
        }
    }

    /// Returns `true` if `value` satisfies the field.
    #[inline]
    pub(crate) fn contains(&self, value: FieldValue) -> bool {
        self.pattern.contains(self.kind.bounds(), value)
    }

    /// Smallest satisfying value greater than or equal to `value`, within bounds.
    #[inline]
    pub(crate) fn next_matching(&self, value: FieldValue) -> Option<FieldValue> {
        self.pattern.next_matching(self.kind.bounds(), value)
    }

    /// Largest satisfying value less than or equal to `value`, within bounds.
    #[inline]
    pub(crate) fn previous_matching(&self, value: FieldValue) -> Option<FieldValue> {
        self.pattern.previous_matching(self.kind.bounds(), value)
    }

    /// A field is restricted unless it's a bare wildcard.
    #[inline]
    pub(crate) fn is_restricted(&self) -> bool {
        self.pattern != FieldPattern::All
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

/// The six schedule fields plus the optional year, with their value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldKind {
    Seconds,
    Minutes,
    Hours,
    Doms,
    Months,
    Dows,
    Years,
}

impl FieldKind {
    const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    /// Inclusive bounds of valid values. Day of week spans 0-7, with 7 being
    /// an alias of Sunday (0).
    pub(crate) fn bounds(&self) -> (FieldValue, FieldValue) {
        match self {
            Self::Seconds | Self::Minutes => (0, 59),
            Self::Hours => (0, 23),
            Self::Doms => (1, 31),
            Self::Months => (1, 12),
            Self::Dows => (0, 7),
            Self::Years => (MIN_YEAR, MAX_YEAR),
        }
    }

    /// Field name as it appears in error messages.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Doms => "day of month",
            Self::Months => "month",
            Self::Dows => "day of week",
            Self::Years => "year",
        }
    }

    /// Parses a single numeric (or, for months and days of week, mnemonic)
    /// token with bounds validation.
    fn parse(&self, input: &str) -> Result<FieldValue, ParseError> {
        let (min, max) = self.bounds();
        let (variants, starter_shift): (&[&str], FieldValue) = match self {
            Self::Months => (&Self::MONTHS, 1),
            Self::Dows => (&Self::DAYS_OF_WEEK, 0),
            _ => (&[], 0),
        };

        if let Some(value) = utils::parse_digital_value(input, min, max) {
            Ok(value)
        } else if let Some(value) = utils::parse_string_value(input, variants) {
            Ok(value + starter_shift)
        } else {
            Err(ParseError::InvalidValue {
                field: self.name(),
                token: input.to_owned(),
            })
        }
    }
}

/// Base of a stepped item: `*/n`, `a/n` or `a-b/n`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum StepBase {
    All,
    From(FieldValue),
    Span(FieldValue, FieldValue),
}

impl StepBase {
    /// Effective inclusive bounds of the base, given the field bounds.
    #[inline]
    fn bounds(&self, field_bounds: (FieldValue, FieldValue)) -> (FieldValue, FieldValue) {
        let (min, max) = field_bounds;
        match self {
            Self::All => (min, max),
            Self::From(lo) => (*lo, max),
            Self::Span(lo, hi) => (*lo, *hi),
        }
    }
}

impl Display for StepBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "*"),
            Self::From(lo) => write!(f, "{lo}"),
            Self::Span(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

/// Value-set representation of a single field.
///
/// All concrete values are validated against the field bounds at parse time,
/// so the queries below never need to re-validate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldPattern {
    All,
    Value(FieldValue),
    // start-finish
    Range(FieldValue, FieldValue),
    // base/step
    Step(StepBase, FieldValue),
    List(Vec<FieldPattern>),
}

impl FieldPattern {
    fn contains(&self, bounds: (FieldValue, FieldValue), value: FieldValue) -> bool {
        match self {
            Self::All => value >= bounds.0 && value <= bounds.1,
            Self::Value(v) => value == *v,
            Self::Range(lo, hi) => value >= *lo && value <= *hi,
            Self::Step(base, step) => {
                let (lo, hi) = base.bounds(bounds);
                value >= lo && value <= hi && (value - lo) % step == 0
            }
            Self::List(items) => items.iter().any(|item| item.contains(bounds, value)),
        }
    }

    fn next_matching(&self, bounds: (FieldValue, FieldValue), value: FieldValue) -> Option<FieldValue> {
        match self {
            Self::All => {
                let (min, max) = bounds;
                if value > max {
                    None
                } else {
                    Some(value.max(min))
                }
            }
            Self::Value(v) => (value <= *v).then_some(*v),
            Self::Range(lo, hi) => {
                let candidate = value.max(*lo);
                (candidate <= *hi).then_some(candidate)
            }
            Self::Step(base, step) => {
                let (lo, hi) = base.bounds(bounds);
                if value <= lo {
                    return Some(lo);
                }
                let rem = (value - lo) % step;
                let candidate = if rem == 0 { value } else { value + (step - rem) };
                (candidate <= hi).then_some(candidate)
            }
            Self::List(items) => items.iter().filter_map(|item| item.next_matching(bounds, value)).min(),
        }
    }

    fn previous_matching(&self, bounds: (FieldValue, FieldValue), value: FieldValue) -> Option<FieldValue> {
        match self {
            Self::All => {
                let (min, max) = bounds;
                if value < min {
                    None
                } else {
                    Some(value.min(max))
                }
            }
            Self::Value(v) => (value >= *v).then_some(*v),
            Self::Range(lo, hi) => {
                let candidate = value.min(*hi);
                (candidate >= *lo).then_some(candidate)
            }
            Self::Step(base, step) => {
                let (lo, hi) = base.bounds(bounds);
                if value < lo {
                    return None;
                }
                let candidate = value.min(hi);
                Some(candidate - (candidate - lo) % step)
            }
            Self::List(items) => items
                .iter()
                .filter_map(|item| item.previous_matching(bounds, value))
                .max(),
        }
    }
}

impl Display for FieldPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "*"),
            Self::Value(v) => write!(f, "{v}"),
            Self::Range(lo, hi) => write!(f, "{lo}-{hi}"),
            Self::Step(base, step) => write!(f, "{base}/{step}"),
            Self::List(items) => {
                let items = items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{items}")
            }
        }
    }
}
