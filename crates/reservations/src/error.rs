//! Модуль ошибок чтения и разбора бронирований.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Главная ошибка загрузки бронирований.
///
/// Объединяет ошибки открытия источника, чтения строк, структуры строки
/// и приведения типов отдельных полей.
#[derive(Debug, Error)]
pub enum ParseError {
    // === Ошибки источника ===
    /// Источник не удалось открыть (нет файла, нет прав на чтение).
    #[error("Cannot open '{}': {source}", .path.display())]
    SourceUnavailable {
        /// Путь к источнику.
        path: PathBuf,
        /// Исходная ошибка ОС.
        #[source]
        source: io::Error,
    },

    /// Ошибка ввода/вывода при чтении уже открытого источника.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Ошибка разбиения строки на поля.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // === Ошибки структуры записи ===
    /// Строка не разбивается ровно на нужное число полей.
    #[error("Malformed line {line}: expected {expected} fields, got {actual}")]
    MalformedLine {
        /// Номер строки (1-based).
        line: u64,
        /// Ожидаемое число полей.
        expected: usize,
        /// Фактическое число полей.
        actual: usize,
    },

    // === Ошибки приведения типов ===
    /// Текст поля не соответствует ожидаемому типу или формату.
    #[error("Invalid value for {field} at line {line}: expected {expected}, got '{actual}'")]
    TypeConversion {
        /// Имя колонки.
        field: &'static str,
        /// Номер строки (1-based).
        line: u64,
        /// Ожидаемый тип/формат.
        expected: &'static str,
        /// Фактическое значение.
        actual: String,
    },

    // === Контекст ===
    /// Ошибка записи с указанием источника, из которого она прочитана.
    #[error("{}: {source}", .path.display())]
    InSource {
        /// Путь к источнику.
        path: PathBuf,
        /// Исходная ошибка.
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Номер строки, к которой относится ошибка, если он известен.
    #[must_use]
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::MalformedLine { line, .. } | Self::TypeConversion { line, .. } => Some(*line),
            Self::InSource { source, .. } => source.line(),
            _ => None,
        }
    }

    /// Ошибка относится к отдельной записи, а не к источнику целиком.
    ///
    /// Только такие ошибки можно пропускать при [`ErrorPolicy::Skip`](crate::load::ErrorPolicy::Skip).
    #[must_use]
    pub fn is_record_error(&self) -> bool {
        match self {
            Self::MalformedLine { .. } | Self::TypeConversion { .. } => true,
            Self::InSource { source, .. } => source.is_record_error(),
            _ => false,
        }
    }

    /// Оборачивает ошибку путём к источнику.
    #[must_use]
    pub fn in_source(self, path: impl Into<PathBuf>) -> Self {
        Self::InSource { path: path.into(), source: Box::new(self) }
    }
}

/// Удобный alias для Result с ParseError.
pub type ParseResult<T> = Result<T, ParseError>;
