//! Основная структура бронирования.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Запись бронирования после приведения типов.
///
/// Одна строка источника даёт ровно одно бронирование; поля соответствуют
/// колонкам [`schema::COLUMNS`](crate::schema::COLUMNS) в том же порядке.
/// После конвертации запись не изменяется.
///
/// # Пример
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use reservations::reservation::Reservation;
/// use rust_decimal::Decimal;
///
/// let reservation = Reservation {
///     reservation_id: 201,
///     name: "Moomin Valley".to_string(),
///     email: "moomin@whitevalley.org".to_string(),
///     phone: "0509876543".to_string(),
///     reservation_date: NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(),
///     reservation_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     duration_hours: 2,
///     price: Decimal::new(1850, 2),
///     confirmed: true,
///     reserved_resource: "Forest Area 1".to_string(),
///     created_at: NaiveDate::from_ymd_opt(2025, 8, 12)
///         .unwrap()
///         .and_hms_opt(14, 33, 20)
///         .unwrap(),
/// };
///
/// assert_eq!(reservation.total_price(), Some(Decimal::new(3700, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Идентификатор бронирования. Уникальность не проверяется.
    pub reservation_id: i64,
    /// Имя заказчика.
    pub name: String,
    /// Электронная почта, без проверки формата.
    pub email: String,
    /// Телефон, без проверки формата.
    pub phone: String,
    /// Дата бронирования.
    pub reservation_date: NaiveDate,
    /// Время начала.
    pub reservation_time: NaiveTime,
    /// Длительность в часах.
    pub duration_hours: i64,
    /// Почасовая цена.
    pub price: Decimal,
    /// Подтверждено ли бронирование.
    pub confirmed: bool,
    /// Забронированный ресурс (зал, площадка).
    pub reserved_resource: String,
    /// Момент создания записи.
    pub created_at: NaiveDateTime,
}

impl Reservation {
    /// Полная стоимость: длительность × почасовая цена.
    ///
    /// `None`, если произведение не помещается в [`Decimal`].
    #[must_use]
    pub fn total_price(&self) -> Option<Decimal> {
        Decimal::from(self.duration_hours).checked_mul(self.price)
    }
}
