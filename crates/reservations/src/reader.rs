//! Потоковый reader для бронирований.
//!
//! Предоставляет [`ReservationReader`] — итератор, который читает строки
//! из любого источника, реализующего [`Read`], и конвертирует их в
//! [`Reservation`].

use std::io::Read;

use crate::{
    error::ParseResult,
    reservation::{Reservation, TrimPolicy},
    source::RawRecordReader,
};

/// Потоковый reader для бронирований.
///
/// Ошибка одной записи (неверное число полей, неверный тип поля)
/// возвращается как `Some(Err(_))`, после чего чтение можно продолжить.
/// Ошибка ввода/вывода завершает итерацию.
///
/// # Пример
///
/// ```ignore
/// use reservations::reader::ReservationReader;
/// use std::fs::File;
///
/// let file = File::open("reservations.txt")?;
/// for result in ReservationReader::new(file) {
///     let reservation = result?;
///     println!("{}", reservation.name);
/// }
/// ```
pub struct ReservationReader<R> {
    inner: RawRecordReader<R>,
    trim: TrimPolicy,
    /// Счётчик успешно сконвертированных записей.
    records_read: usize,
}

impl<R: Read> ReservationReader<R> {
    /// Создаёт reader с политикой обрезки по умолчанию.
    pub fn new(reader: R) -> Self {
        Self::with_trim(reader, TrimPolicy::default())
    }

    /// Создаёт reader с указанной политикой обрезки пробелов.
    pub fn with_trim(reader: R, trim: TrimPolicy) -> Self {
        Self { inner: RawRecordReader::new(reader), trim, records_read: 0 }
    }

    /// Возвращает количество успешно прочитанных записей.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Возвращает количество прочитанных строк источника, включая пустые.
    #[must_use]
    pub fn lines_read(&self) -> u64 {
        self.inner.lines_read()
    }
}

impl<R: Read> Iterator for ReservationReader<R> {
    type Item = ParseResult<Reservation>;

    fn next(&mut self) -> Option<Self::Item> {
        let converted = self.inner.next()?.and_then(|raw| Reservation::from_raw(&raw, self.trim));
        if converted.is_ok() {
            self.records_read += 1;
        }
        Some(converted)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::ParseError;

    const INPUT: &str = "\
201|Moomin Valley|moomin@whitevalley.org|0509876543|2025-11-12|09:00|2|18.50|True|Forest Area 1|2025-08-12 14:33:20
202|Little My|my@whitevalley.org|0401112233|2025-11-13|14:30|4|22.00|False|Meeting Room B|2025-08-13 09:10:00
";

    #[test]
    fn test_read_multiple_reservations() {
        let reader = ReservationReader::new(Cursor::new(INPUT));
        let reservations: ParseResult<Vec<_>> = reader.collect();
        let reservations = reservations.unwrap();

        assert_eq!(reservations.len(), 2);
        assert_eq!(reservations[0].reservation_id, 201);
        assert!(reservations[0].confirmed);
        assert_eq!(reservations[1].reservation_id, 202);
        assert!(!reservations[1].confirmed);
    }

    #[test]
    fn test_conversion_error_carries_line_number() {
        let input = format!("{INPUT}\n203|Snufkin|s@w|0|2025-13-40|10:00|1|5.00|True|Bridge|2025-08-14 10:00:00\n");
        let results: Vec<_> = ReservationReader::new(Cursor::new(input)).collect();

        assert_eq!(results.len(), 3);
        match &results[2] {
            Err(ParseError::TypeConversion { field, line, .. }) => {
                assert_eq!(*field, "reservationDate");
                assert_eq!(*line, 4);
            }
            other => panic!("Expected TypeConversion, got {other:?}"),
        }
    }

    #[test]
    fn test_records_read_counter() {
        let input = format!("broken line\n{INPUT}");
        let mut reader = ReservationReader::new(Cursor::new(input));

        assert_eq!(reader.records_read(), 0);
        assert!(matches!(reader.next(), Some(Err(ParseError::MalformedLine { line: 1, .. }))));
        assert_eq!(reader.records_read(), 0);
        assert!(matches!(reader.next(), Some(Ok(_))));
        assert!(matches!(reader.next(), Some(Ok(_))));
        assert!(reader.next().is_none());
        assert_eq!(reader.records_read(), 2);
        assert_eq!(reader.lines_read(), 3);
    }
}
