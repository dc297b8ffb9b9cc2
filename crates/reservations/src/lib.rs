//! Библиотека разбора файлов бронирований и построения отчётов.
//!
//! Файл бронирований — плоский текст, одна запись на строку, 11 полей,
//! разделённых символом `|`:
//!
//! ```text
//! reservationId|name|email|phone|reservationDate|reservationTime|durationHours|price|confirmed|reservedResource|createdAt
//! 201|Moomin Valley|moomin@whitevalley.org|0509876543|2025-11-12|09:00|2|18.50|True|Forest Area 1|2025-08-12 14:33:20
//! ```
//!
//! Конвейер линейный:
//!
//! - [`source`] — разбивает строки на сырые поля ([`RawRecord`](source::RawRecord))
//! - [`reservation`] — приводит поля к типам по схеме [`schema`]
//! - [`reader`] / [`load`] — потоковое и пакетное чтение бронирований
//! - [`report`] — отчёты по загруженным бронированиям
//!
//! # Быстрый старт
//!
//! ```
//! use reservations::prelude::*;
//!
//! let input = "201|Moomin Valley|moomin@whitevalley.org|0509876543|2025-11-12|09:00|2|18.50|True|Forest Area 1|2025-08-12 14:33:20\n";
//! let reservations: Vec<Reservation> =
//!     ReservationReader::new(input.as_bytes()).collect::<Result<_, _>>().unwrap();
//!
//! assert_eq!(
//!     report::confirmed_reservations(&reservations),
//!     vec!["- Moomin Valley, Forest Area 1, 12.11.2025 at 09.00".to_string()]
//! );
//! ```

pub mod error;
pub mod load;
pub mod reader;
pub mod report;
pub mod reservation;
pub mod schema;
pub mod source;

pub use error::{ParseError, ParseResult};

/// Часто используемые типы одним импортом.
pub mod prelude {
    pub use crate::{
        error::{ParseError, ParseResult},
        load::{ErrorPolicy, LoadOptions, Loaded, load_reservations, load_reservations_with},
        reader::ReservationReader,
        report::{self, Report},
        reservation::{Reservation, TrimPolicy},
        schema::{Column, FieldKind},
        source::{RawRecord, RawRecordReader},
    };
}
