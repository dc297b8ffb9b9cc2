//! Column layout of a reservation line.
//!
//! The eleven columns are described once, in [`COLUMNS`], in the order they
//! appear in the source file. The converter reads fields through [`Column`]
//! and the table report prints its header from the same list.

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Base-10 integer.
    Integer,
    /// Free text, no validation.
    Text,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// Time of day, `HH:MM`.
    Time,
    /// Decimal amount.
    Decimal,
    /// Only the exact literal `True` is true.
    Boolean,
    /// Date and time, `YYYY-MM-DD HH:MM:SS`.
    Timestamp,
}

impl FieldKind {
    /// Short type name used in the table report.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Text => "str",
            Self::Date => "date",
            Self::Time => "time",
            Self::Decimal => "decimal",
            Self::Boolean => "bool",
            Self::Timestamp => "datetime",
        }
    }

    /// Human readable description of the accepted input, used in errors.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Date => "date YYYY-MM-DD",
            Self::Time => "time HH:MM",
            Self::Decimal => "decimal number",
            Self::Boolean => "True",
            Self::Timestamp => "timestamp YYYY-MM-DD HH:MM:SS",
        }
    }

    /// Whether the historical conversion tolerated surrounding whitespace
    /// for this kind. Numbers were parsed by routines that skip it; booleans
    /// and timestamps were trimmed explicitly.
    #[must_use]
    pub const fn trimmed_by_default(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal | Self::Boolean | Self::Timestamp)
    }
}

/// One column of the reservation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ReservationId,
    Name,
    Email,
    Phone,
    ReservationDate,
    ReservationTime,
    DurationHours,
    Price,
    Confirmed,
    ReservedResource,
    CreatedAt,
}

/// All columns in file order.
pub const COLUMNS: [Column; 11] = [
    Column::ReservationId,
    Column::Name,
    Column::Email,
    Column::Phone,
    Column::ReservationDate,
    Column::ReservationTime,
    Column::DurationHours,
    Column::Price,
    Column::Confirmed,
    Column::ReservedResource,
    Column::CreatedAt,
];

/// Number of fields in a well-formed line.
pub const FIELD_COUNT: usize = COLUMNS.len();

impl Column {
    /// Position of the column in the line (0-based).
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Column name as printed in the header.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ReservationId => "reservationId",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ReservationDate => "reservationDate",
            Self::ReservationTime => "reservationTime",
            Self::DurationHours => "durationHours",
            Self::Price => "price",
            Self::Confirmed => "confirmed",
            Self::ReservedResource => "reservedResource",
            Self::CreatedAt => "createdAt",
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::ReservationId | Self::DurationHours => FieldKind::Integer,
            Self::Name | Self::Email | Self::Phone | Self::ReservedResource => FieldKind::Text,
            Self::ReservationDate => FieldKind::Date,
            Self::ReservationTime => FieldKind::Time,
            Self::Price => FieldKind::Decimal,
            Self::Confirmed => FieldKind::Boolean,
            Self::CreatedAt => FieldKind::Timestamp,
        }
    }
}

/// Column names in file order.
pub fn header() -> impl Iterator<Item = &'static str> {
    COLUMNS.into_iter().map(|column| column.name())
}
