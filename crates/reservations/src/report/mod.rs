//! Отчёты по загруженным бронированиям.
//!
//! Каждая операция принимает срез бронирований, ничего не изменяет и
//! возвращает готовые строки для вывода в консоль. Порядок строк
//! совпадает с порядком бронирований в источнике.

pub mod format;

use rust_decimal::Decimal;

use crate::{
    reservation::Reservation,
    schema::{self, COLUMNS, Column},
};

/// Длительность (часы), начиная с которой бронирование считается длинным.
/// Граница не включается: ровно 3 часа — не длинное.
pub const LONG_THRESHOLD_HOURS: i64 = 3;

/// Подставляется вместо суммы, которая не помещается в [`Decimal`].
const OUT_OF_RANGE: &str = "out of range";

const SEPARATOR: &str =
    "------------------------------------------------------------------------";

/// Каталог отчётов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    Confirmed,
    Long,
    Statuses,
    Summary,
    Revenue,
    Details,
    Table,
}

impl Report {
    /// Пять основных отчётов в порядке печати по умолчанию.
    pub const SECTIONS: [Self; 5] =
        [Self::Confirmed, Self::Long, Self::Statuses, Self::Summary, Self::Revenue];

    /// Заголовок раздела.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed Reservations",
            Self::Long => "Long Reservations (> 3 h)",
            Self::Statuses => "Reservation Confirmation Status",
            Self::Summary => "Confirmation Summary",
            Self::Revenue => "Total Revenue from Confirmed Reservations",
            Self::Details => "Reservation Details",
            Self::Table => "Reservation Table",
        }
    }

    /// Строит отчёт.
    #[must_use]
    pub fn render(&self, reservations: &[Reservation]) -> Vec<String> {
        match self {
            Self::Confirmed => confirmed_reservations(reservations),
            Self::Long => long_reservations(reservations),
            Self::Statuses => confirmation_statuses(reservations),
            Self::Summary => confirmation_summary(reservations),
            Self::Revenue => total_revenue(reservations),
            Self::Details => reservation_details(reservations),
            Self::Table => reservation_table(reservations),
        }
    }
}

/// Все пять основных разделов с нумерованными заголовками.
///
/// ```
/// use reservations::report;
///
/// let lines = report::sections(&[]);
/// assert_eq!(lines[0], "1) Confirmed Reservations");
/// assert_eq!(lines.last().unwrap(), "Total revenue from confirmed reservations: 0,00 €");
/// ```
#[must_use]
pub fn sections(reservations: &[Reservation]) -> Vec<String> {
    Report::SECTIONS
        .iter()
        .enumerate()
        .flat_map(|(idx, report)| {
            std::iter::once(format!("{}) {}", idx + 1, report.title()))
                .chain(report.render(reservations))
        })
        .collect()
}

/// Подтверждённые бронирования:
/// `- {name}, {resource}, {dd.mm.yyyy} at {HH.MM}`.
#[must_use]
pub fn confirmed_reservations(reservations: &[Reservation]) -> Vec<String> {
    reservations
        .iter()
        .filter(|r| r.confirmed)
        .map(|r| {
            format!(
                "- {}, {}, {} at {}",
                r.name,
                r.reserved_resource,
                format::date(r.reservation_date),
                format::time(r.reservation_time)
            )
        })
        .collect()
}

/// Бронирования длиннее [`LONG_THRESHOLD_HOURS`]:
/// `- {name}, {dd.mm.yyyy} at {HH.MM}, duration {n} h, {resource}`.
#[must_use]
pub fn long_reservations(reservations: &[Reservation]) -> Vec<String> {
    reservations
        .iter()
        .filter(|r| r.duration_hours > LONG_THRESHOLD_HOURS)
        .map(|r| {
            format!(
                "- {}, {} at {}, duration {} h, {}",
                r.name,
                format::date(r.reservation_date),
                format::time(r.reservation_time),
                r.duration_hours,
                r.reserved_resource
            )
        })
        .collect()
}

/// Статус подтверждения каждого бронирования.
#[must_use]
pub fn confirmation_statuses(reservations: &[Reservation]) -> Vec<String> {
    reservations
        .iter()
        .map(|r| {
            let status = if r.confirmed { "Confirmed" } else { "NOT Confirmed" };
            format!("{} → {status}", r.name)
        })
        .collect()
}

/// Число подтверждённых и неподтверждённых бронирований.
#[must_use]
pub fn confirmation_summary(reservations: &[Reservation]) -> Vec<String> {
    let confirmed = reservations.iter().filter(|r| r.confirmed).count();
    let not_confirmed = reservations.len() - confirmed;

    vec![
        format!("- Confirmed reservations: {confirmed} pcs"),
        format!("- Not confirmed reservations: {not_confirmed} pcs"),
    ]
}

/// Выручка по подтверждённым бронированиям (часы × почасовая цена).
///
/// `None`, если сумма не помещается в [`Decimal`].
#[must_use]
pub fn revenue(reservations: &[Reservation]) -> Option<Decimal> {
    reservations
        .iter()
        .filter(|r| r.confirmed)
        .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.total_price()?))
}

/// Строка с выручкой по подтверждённым бронированиям.
#[must_use]
pub fn total_revenue(reservations: &[Reservation]) -> Vec<String> {
    vec![format!("Total revenue from confirmed reservations: {}", amount(revenue(reservations)))]
}

/// Сумма в евро или пометка о переполнении.
fn amount(value: Option<Decimal>) -> String {
    value.map_or_else(|| OUT_OF_RANGE.to_string(), format::euros)
}

/// Карточка каждого бронирования; карточки разделены пустой строкой.
#[must_use]
pub fn reservation_details(reservations: &[Reservation]) -> Vec<String> {
    let mut lines = Vec::new();

    for (idx, r) in reservations.iter().enumerate() {
        if idx > 0 {
            lines.push(String::new());
        }
        lines.extend([
            format!("Reservation number: {}", r.reservation_id),
            format!("Booker: {}", r.name),
            format!("Date: {}", format::date(r.reservation_date)),
            format!("Start time: {}", format::time(r.reservation_time)),
            format!("Number of hours: {}", r.duration_hours),
            format!("Hourly price: {}", format::euros(r.price)),
            format!("Total price: {}", amount(r.total_price())),
            format!("Paid: {}", format::yes_no(r.confirmed)),
            format!("Location: {}", r.reserved_resource),
            format!("Phone: {}", r.phone),
            format!("Email: {}", r.email),
        ]);
    }

    lines
}

/// Таблица: заголовок колонок, затем для каждой записи значения и их типы.
#[must_use]
pub fn reservation_table(reservations: &[Reservation]) -> Vec<String> {
    let mut lines = vec![schema::header().collect::<Vec<_>>().join(" | "), SEPARATOR.to_string()];
    let types = COLUMNS.iter().map(|c| c.kind().type_name()).collect::<Vec<_>>().join(" | ");

    for r in reservations {
        let values: Vec<String> = COLUMNS.iter().map(|&column| column_value(r, column)).collect();
        lines.push(values.join(" | "));
        lines.push(types.clone());
        lines.push(SEPARATOR.to_string());
    }

    lines
}

/// Значение колонки в исходном (не локализованном) виде.
fn column_value(r: &Reservation, column: Column) -> String {
    match column {
        Column::ReservationId => r.reservation_id.to_string(),
        Column::Name => r.name.clone(),
        Column::Email => r.email.clone(),
        Column::Phone => r.phone.clone(),
        Column::ReservationDate => r.reservation_date.to_string(),
        Column::ReservationTime => r.reservation_time.format("%H:%M").to_string(),
        Column::DurationHours => r.duration_hours.to_string(),
        Column::Price => r.price.to_string(),
        Column::Confirmed => r.confirmed.to_string(),
        Column::ReservedResource => r.reserved_resource.clone(),
        Column::CreatedAt => r.created_at.to_string(),
    }
}
