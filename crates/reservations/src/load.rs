//! Пакетная загрузка бронирований из файла.
//!
//! [`load_reservations`] читает весь файл в память до того, как запускается
//! какой-либо отчёт. Файл закрывается при выходе из функции на любом пути,
//! в том числе при ошибке конвертации.

use std::{fs::File, path::Path};

use tracing::{debug, warn};

use crate::{
    error::{ParseError, ParseResult},
    reader::ReservationReader,
    reservation::{Reservation, TrimPolicy},
};

/// Что делать с записью, которую не удалось сконвертировать.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Прервать загрузку на первой ошибке.
    #[default]
    Abort,
    /// Пропустить запись и продолжить. Ошибка попадает в [`Loaded::skipped`].
    Skip,
}

/// Параметры загрузки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub trim: TrimPolicy,
    pub on_error: ErrorPolicy,
}

/// Результат загрузки.
#[derive(Debug, Default)]
pub struct Loaded {
    /// Бронирования в порядке следования в файле.
    pub reservations: Vec<Reservation>,
    /// Пропущенные записи (только при [`ErrorPolicy::Skip`]), каждая
    /// обёрнута в [`ParseError::InSource`].
    pub skipped: Vec<ParseError>,
}

/// Загружает все бронирования из файла.
///
/// Прерывается на первой ошибке.
///
/// # Ошибки
///
/// - [`ParseError::SourceUnavailable`] — файл не удалось открыть
/// - [`ParseError::InSource`] — ошибка строки или чтения, с путём к файлу
pub fn load_reservations(path: impl AsRef<Path>) -> ParseResult<Vec<Reservation>> {
    load_reservations_with(path, &LoadOptions::default()).map(|loaded| loaded.reservations)
}

/// Загружает бронирования из файла с указанными параметрами.
pub fn load_reservations_with(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> ParseResult<Loaded> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| ParseError::SourceUnavailable { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), ?options, "loading reservations");

    let reader = ReservationReader::with_trim(file, options.trim);
    let loaded = read_all(reader, options.on_error, path)?;

    debug!(
        path = %path.display(),
        loaded = loaded.reservations.len(),
        skipped = loaded.skipped.len(),
        "reservations loaded"
    );
    Ok(loaded)
}

/// Собирает записи; каждая ошибка получает путь к источнику.
fn read_all<R: std::io::Read>(
    reader: ReservationReader<R>,
    on_error: ErrorPolicy,
    path: &Path,
) -> ParseResult<Loaded> {
    let mut loaded = Loaded::default();

    for result in reader {
        match result {
            Ok(reservation) => loaded.reservations.push(reservation),
            Err(e) if on_error == ErrorPolicy::Skip && e.is_record_error() => {
                warn!(
                    path = %path.display(),
                    line = e.line(),
                    error = %e,
                    "skipping invalid reservation"
                );
                loaded.skipped.push(e.in_source(path));
            }
            Err(e) => return Err(e.in_source(path)),
        }
    }

    Ok(loaded)
}
