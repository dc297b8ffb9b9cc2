//! Приведение сырых полей к типам бронирования.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use super::Reservation;
use crate::{
    error::{ParseError, ParseResult},
    schema::Column,
    source::RawRecord,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Единственный литерал, который считается подтверждением.
const CONFIRMED_LITERAL: &str = "True";

const TOTAL_IN_RANGE: &str = "decimal number with durationHours × price in range";

/// Политика обрезки пробелов перед конвертацией.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimPolicy {
    /// Обрезать пробелы по краям у всех полей.
    #[default]
    Edges,
    /// Историческое поведение: числа, `confirmed` и `createdAt` допускают
    /// пробелы по краям, текст сохраняется как есть, а дата и время
    /// с пробелами по краям считаются ошибкой.
    Preserve,
}

impl TrimPolicy {
    fn apply(self, column: Column, text: &str) -> &str {
        match self {
            Self::Edges => text.trim(),
            Self::Preserve if column.kind().trimmed_by_default() => text.trim(),
            Self::Preserve => text,
        }
    }
}

/// Разбирает поле `confirmed`.
///
/// Истина только для точного литерала `True` после обрезки краёв.
/// Регистр учитывается; любое другое значение, включая пустое, даёт `false`.
///
/// # Пример
///
/// ```
/// use reservations::reservation::parse_confirmed;
///
/// assert!(parse_confirmed("True"));
/// assert!(parse_confirmed(" True\n"));
/// assert!(!parse_confirmed("TRUE"));
/// assert!(!parse_confirmed("1"));
/// ```
#[must_use]
pub fn parse_confirmed(text: &str) -> bool {
    text.trim() == CONFIRMED_LITERAL
}

impl Reservation {
    /// Конвертирует сырую запись с указанной политикой обрезки.
    ///
    /// Частичного результата нет: первая ошибка поля прерывает конвертацию
    /// всей записи.
    pub fn from_raw(raw: &RawRecord, trim: TrimPolicy) -> ParseResult<Self> {
        let fields = Fields { raw, trim };

        let reservation = Self {
            reservation_id: fields.parse(Column::ReservationId)?,
            name: fields.text(Column::Name),
            email: fields.text(Column::Email),
            phone: fields.text(Column::Phone),
            reservation_date: fields.date(Column::ReservationDate)?,
            reservation_time: fields.time(Column::ReservationTime)?,
            duration_hours: fields.parse(Column::DurationHours)?,
            price: fields.decimal(Column::Price)?,
            confirmed: parse_confirmed(fields.get(Column::Confirmed)),
            reserved_resource: fields.text(Column::ReservedResource),
            created_at: fields.timestamp(Column::CreatedAt)?,
        };

        // Отчёты считают часы × цену; запись с непредставимой суммой отклоняется.
        if reservation.total_price().is_none() {
            return Err(ParseError::TypeConversion {
                field: Column::Price.name(),
                line: raw.line(),
                expected: TOTAL_IN_RANGE,
                actual: fields.get(Column::Price).to_string(),
            });
        }

        Ok(reservation)
    }
}

impl TryFrom<&RawRecord> for Reservation {
    type Error = ParseError;

    fn try_from(raw: &RawRecord) -> Result<Self, Self::Error> {
        Self::from_raw(raw, TrimPolicy::default())
    }
}

/// Доступ к полям записи по имени колонки.
struct Fields<'a> {
    raw: &'a RawRecord,
    trim: TrimPolicy,
}

impl<'a> Fields<'a> {
    fn get(&self, column: Column) -> &'a str {
        self.trim.apply(column, self.raw.get(column))
    }

    fn text(&self, column: Column) -> String {
        self.get(column).to_string()
    }

    fn parse<T: FromStr>(&self, column: Column) -> ParseResult<T> {
        let text = self.get(column);
        text.parse().map_err(|_| self.error(column, text))
    }

    fn decimal(&self, column: Column) -> ParseResult<Decimal> {
        let text = self.get(column);
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| self.error(column, text))
    }

    /// Текст для разбора по формату chrono.
    ///
    /// chrono пропускает пробелы перед числовыми элементами формата,
    /// поэтому пробелы по краям проверяются здесь.
    fn formatted(&self, column: Column) -> ParseResult<&'a str> {
        let text = self.get(column);
        if text.trim() != text {
            return Err(self.error(column, text));
        }
        Ok(text)
    }

    fn date(&self, column: Column) -> ParseResult<NaiveDate> {
        let text = self.formatted(column)?;
        NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| self.error(column, text))
    }

    fn time(&self, column: Column) -> ParseResult<NaiveTime> {
        let text = self.formatted(column)?;
        NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|_| self.error(column, text))
    }

    fn timestamp(&self, column: Column) -> ParseResult<NaiveDateTime> {
        let text = self.formatted(column)?;
        NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|_| self.error(column, text))
    }

    fn error(&self, column: Column, text: &str) -> ParseError {
        ParseError::TypeConversion {
            field: column.name(),
            line: self.raw.line(),
            expected: column.kind().expected(),
            actual: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOOMIN: &str = "201|Moomin Valley|moomin@whitevalley.org|0509876543|2025-11-12|09:00|2|18.50|True|Forest Area 1|2025-08-12 14:33:20";

    fn raw(line: &str) -> RawRecord {
        RawRecord::parse_line(line, 1).unwrap()
    }

    /// Заменяет одно поле в строке-образце.
    fn with_field(column: Column, value: &str) -> RawRecord {
        let mut fields: Vec<&str> = MOOMIN.split('|').collect();
        fields[column.index()] = value;
        RawRecord::new(fields, 1).unwrap()
    }

    fn convert_err(raw: &RawRecord) -> ParseError {
        Reservation::try_from(raw).unwrap_err()
    }

    // ==================== Позитивные тесты ====================

    #[test]
    fn converts_reference_line() {
        let r = Reservation::try_from(&raw(MOOMIN)).unwrap();

        assert_eq!(r.reservation_id, 201);
        assert_eq!(r.name, "Moomin Valley");
        assert_eq!(r.email, "moomin@whitevalley.org");
        assert_eq!(r.phone, "0509876543");
        assert_eq!(r.reservation_date, NaiveDate::from_ymd_opt(2025, 11, 12).unwrap());
        assert_eq!(r.reservation_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(r.duration_hours, 2);
        assert_eq!(r.price, Decimal::new(1850, 2));
        assert!(r.confirmed);
        assert_eq!(r.reserved_resource, "Forest Area 1");
        assert_eq!(r.created_at.to_string(), "2025-08-12 14:33:20");
    }

    #[test]
    fn conversion_is_deterministic() {
        let raw = raw(MOOMIN);
        assert_eq!(Reservation::try_from(&raw).unwrap(), Reservation::try_from(&raw).unwrap());
    }

    #[test]
    fn decimal_accepts_scientific_notation() {
        let r = Reservation::try_from(&with_field(Column::Price, "1.5e1")).unwrap();
        assert_eq!(r.price, Decimal::new(15, 0));
    }

    #[test]
    fn edges_policy_trims_every_field() {
        let r = Reservation::try_from(&raw(
            " 201 | Moomin Valley |m|p| 2025-11-12 | 09:00 | 2 | 18.50 | True | Forest Area 1 | 2025-08-12 14:33:20 ",
        ))
        .unwrap();

        assert_eq!(r.reservation_id, 201);
        assert_eq!(r.name, "Moomin Valley");
        assert_eq!(r.reserved_resource, "Forest Area 1");
        assert!(r.confirmed);
    }

    #[test]
    fn preserve_policy_keeps_text_untrimmed() {
        let raw = with_field(Column::Name, " Moomin ");
        let r = Reservation::from_raw(&raw, TrimPolicy::Preserve).unwrap();
        assert_eq!(r.name, " Moomin ");

        let raw = with_field(Column::CreatedAt, " 2025-08-12 14:33:20 ");
        assert!(Reservation::from_raw(&raw, TrimPolicy::Preserve).is_ok());
    }

    #[test]
    fn preserve_policy_accepts_padded_numbers() {
        let raw = with_field(Column::DurationHours, " 2");
        let r = Reservation::from_raw(&raw, TrimPolicy::Preserve).unwrap();
        assert_eq!(r.duration_hours, 2);

        let raw = with_field(Column::Price, " 18.50 ");
        let r = Reservation::from_raw(&raw, TrimPolicy::Preserve).unwrap();
        assert_eq!(r.price, Decimal::new(1850, 2));

        let raw = with_field(Column::ReservationId, "201 ");
        assert!(Reservation::from_raw(&raw, TrimPolicy::Preserve).is_ok());
    }

    #[test]
    fn preserve_policy_rejects_padded_date_and_time() {
        let cases = [
            (Column::ReservationDate, " 2025-11-12", "reservationDate"),
            (Column::ReservationDate, "2025-11-12 ", "reservationDate"),
            (Column::ReservationTime, " 09:00", "reservationTime"),
            (Column::ReservationTime, "09:00\t", "reservationTime"),
        ];

        for (column, value, name) in cases {
            let err = Reservation::from_raw(&with_field(column, value), TrimPolicy::Preserve)
                .unwrap_err();
            match err {
                ParseError::TypeConversion { field, actual, .. } => {
                    assert_eq!(field, name);
                    assert_eq!(actual, value);
                }
                other => panic!("Expected TypeConversion for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn edges_policy_accepts_padded_date_and_time() {
        let raw = with_field(Column::ReservationDate, " 2025-11-12 ");
        assert!(Reservation::from_raw(&raw, TrimPolicy::Edges).is_ok());

        let raw = with_field(Column::ReservationTime, " 09:00");
        assert!(Reservation::from_raw(&raw, TrimPolicy::Edges).is_ok());
    }

    // ==================== Поле confirmed ====================

    #[test]
    fn confirmed_only_for_exact_literal() {
        for text in ["True", " True", "True ", "\tTrue\n"] {
            assert!(parse_confirmed(text), "{text:?} should be confirmed");
        }
        for text in ["TRUE", "true", "False", "false", "1", "yes", "", "Tru e", "True."] {
            assert!(!parse_confirmed(text), "{text:?} should not be confirmed");
        }
    }

    #[test]
    fn unconfirmed_value_is_not_an_error() {
        let r = Reservation::try_from(&with_field(Column::Confirmed, "garbage")).unwrap();
        assert!(!r.confirmed);
    }

    // ==================== Негативные тесты ====================

    #[test]
    fn malformed_date_fails() {
        match convert_err(&with_field(Column::ReservationDate, "2025-13-40")) {
            ParseError::TypeConversion { field, line, expected, actual } => {
                assert_eq!(field, "reservationDate");
                assert_eq!(line, 1);
                assert_eq!(expected, "date YYYY-MM-DD");
                assert_eq!(actual, "2025-13-40");
            }
            other => panic!("Expected TypeConversion, got {other:?}"),
        }
    }

    #[test]
    fn day_first_date_fails() {
        let err = convert_err(&with_field(Column::ReservationDate, "12.11.2025"));
        assert!(matches!(err, ParseError::TypeConversion { field: "reservationDate", .. }));
    }

    #[test]
    fn time_with_seconds_fails() {
        let err = convert_err(&with_field(Column::ReservationTime, "09:00:00"));
        assert!(matches!(err, ParseError::TypeConversion { field: "reservationTime", .. }));
    }

    #[test]
    fn time_out_of_range_fails() {
        let err = convert_err(&with_field(Column::ReservationTime, "25:00"));
        assert!(matches!(err, ParseError::TypeConversion { field: "reservationTime", .. }));
    }

    #[test]
    fn non_integer_id_fails() {
        let err = convert_err(&with_field(Column::ReservationId, "20a"));
        assert!(matches!(err, ParseError::TypeConversion { field: "reservationId", .. }));
    }

    #[test]
    fn fractional_duration_fails() {
        let err = convert_err(&with_field(Column::DurationHours, "2.5"));
        assert!(matches!(err, ParseError::TypeConversion { field: "durationHours", .. }));
    }

    #[test]
    fn invalid_price_fails() {
        let err = convert_err(&with_field(Column::Price, "18,50"));
        assert!(matches!(err, ParseError::TypeConversion { field: "price", .. }));
    }

    #[test]
    fn total_out_of_decimal_range_fails() {
        let mut fields: Vec<&str> = MOOMIN.split('|').collect();
        fields[Column::DurationHours.index()] = "9223372036854775807";
        fields[Column::Price.index()] = "79228162514264337593543950335";
        let err = convert_err(&RawRecord::new(fields, 4).unwrap());

        match err {
            ParseError::TypeConversion { field, line, actual, .. } => {
                assert_eq!(field, "price");
                assert_eq!(line, 4);
                assert_eq!(actual, "79228162514264337593543950335");
            }
            other => panic!("Expected TypeConversion, got {other:?}"),
        }
    }

    #[test]
    fn largest_representable_total_is_accepted() {
        let mut fields: Vec<&str> = MOOMIN.split('|').collect();
        fields[Column::DurationHours.index()] = "1";
        fields[Column::Price.index()] = "79228162514264337593543950335";
        let r = Reservation::try_from(&RawRecord::new(fields, 1).unwrap()).unwrap();

        assert_eq!(r.total_price(), Some(Decimal::MAX));
    }

    #[test]
    fn timestamp_without_seconds_fails() {
        let err = convert_err(&with_field(Column::CreatedAt, "2025-08-12 14:33"));
        assert!(matches!(err, ParseError::TypeConversion { field: "createdAt", .. }));
    }

    #[test]
    fn first_failing_column_is_reported() {
        let mut fields: Vec<&str> = MOOMIN.split('|').collect();
        fields[Column::ReservationDate.index()] = "bad";
        fields[Column::Price.index()] = "bad";
        let err = convert_err(&RawRecord::new(fields, 9).unwrap());

        assert!(matches!(err, ParseError::TypeConversion { field: "reservationDate", line: 9, .. }));
    }
}
