use async_graphql::{Enum, InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, SecondsFormat, TimeZone, Utc};
use leaderboard::{
    store::{sail::SailFilter, Direction, OrderBy},
    ScoringType,
};

/// Instant in time. Serialized as RFC 3339 in UTC; accepted as RFC 3339, a
/// plain `YYYY-MM-DD` day (midnight UTC) or epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub DateTime<FixedOffset>);

impl Date {
    pub fn parse_str(text: &str) -> Option<Self> {
        let text = text.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(text) {
            return Some(Self(date));
        }

        if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            let midnight = Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));
            return Some(Self(midnight.with_timezone(&Utc.fix())));
        }

        text.parse::<i64>().ok().and_then(Self::from_millis)
    }

    fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|date| Self(date.with_timezone(&Utc.fix())))
    }
}

impl From<DateTime<FixedOffset>> for Date {
    fn from(date: DateTime<FixedOffset>) -> Self {
        Self(date)
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(date: DateTime<Utc>) -> Self {
        Self(date.with_timezone(&Utc.fix()))
    }
}

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        let date = match value {
            Value::String(ref text) => Self::parse_str(text),
            Value::Number(ref number) => number.as_i64().and_then(Self::from_millis),
            other => return Err(InputValueError::expected_type(other)),
        };

        date.ok_or_else(|| InputValueError::custom(format!("Invalid date {value}")))
    }

    fn to_value(&self) -> Value {
        Value::String(
            self.0
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "OrderBy", rename_items = "lowercase")]
pub enum OrderByArg {
    Position,
    Date,
}

impl From<OrderByArg> for OrderBy {
    fn from(order_by: OrderByArg) -> Self {
        match order_by {
            OrderByArg::Position => Self::Position,
            OrderByArg::Date => Self::Date,
        }
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "Direction", rename_items = "lowercase")]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for Direction {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Asc => Self::Asc,
            DirectionArg::Desc => Self::Desc,
        }
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "CategoryType", rename_items = "lowercase")]
pub enum CategoryType {
    Points,
    Weight,
}

impl From<CategoryType> for ScoringType {
    fn from(kind: CategoryType) -> Self {
        match kind {
            CategoryType::Points => Self::Points,
            CategoryType::Weight => Self::Weight,
        }
    }
}

impl From<ScoringType> for CategoryType {
    fn from(scoring: ScoringType) -> Self {
        match scoring {
            ScoringType::Points => Self::Points,
            ScoringType::Weight => Self::Weight,
        }
    }
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "SailFilter", rename_items = "lowercase")]
pub enum SailFilterArg {
    Departure,
    Arrival,
}

impl From<SailFilterArg> for SailFilter {
    fn from(filter: SailFilterArg) -> Self {
        match filter {
            SailFilterArg::Departure => Self::Departure,
            SailFilterArg::Arrival => Self::Arrival,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap().into()
    }

    #[test_case("2024-03-09T06:30:00Z", utc(2024, 3, 9, 6, 30, 0) ; "rfc3339 utc")]
    #[test_case("2024-03-09T00:30:00-06:00", utc(2024, 3, 9, 6, 30, 0) ; "rfc3339 with offset")]
    #[test_case("2024-03-09", utc(2024, 3, 9, 0, 0, 0) ; "plain day")]
    #[test_case("1709965800000", utc(2024, 3, 9, 6, 30, 0) ; "epoch millis as text")]
    fn parses_accepted_formats(input: &str, expected: DateTime<FixedOffset>) {
        assert_eq!(Date::parse_str(input), Some(Date(expected)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Date::parse_str("next tuesday"), None);
        assert!(<Date as ScalarType>::parse(Value::Boolean(true)).is_err());
    }

    #[test]
    fn epoch_millis_as_number() {
        let date = <Date as ScalarType>::parse(Value::from(1_709_965_800_000_i64)).unwrap();

        assert_eq!(date.0, utc(2024, 3, 9, 6, 30, 0));
    }

    #[test]
    fn serializes_as_utc_rfc3339() {
        let local = FixedOffset::west_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 0, 30, 0)
            .unwrap();

        assert_eq!(
            Date(local).to_value(),
            Value::String("2024-03-09T06:30:00.000Z".to_string())
        );
    }
}
