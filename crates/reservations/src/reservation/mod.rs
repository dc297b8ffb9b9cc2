//! Модель данных бронирования.
//!
//! Этот модуль определяет структуру [`Reservation`] и правила приведения
//! сырых полей строки к её типам.

mod convert;
mod types;

pub use convert::{TrimPolicy, parse_confirmed};
pub use types::Reservation;
