use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::table::{FieldValue, Row, TableField};
use crate::{SeriesDate, ValidationError};

/// Identifier of an instrument as issued by the upstream API.
///
/// `0` is reserved as the "no selection" sentinel of the value-series endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(u64);

impl InstrumentId {
    pub const NONE: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a user supplied id. The sentinel `0` is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().parse::<u64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(ValidationError::InvalidInstrumentId {
                value: input.to_owned(),
            }),
        }
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Display for InstrumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Listed instrument as returned by `GET /Stocks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: InstrumentId,
    pub stock: String,
    pub industry: String,
    pub sector: String,
    pub currency_code: String,
}

impl Instrument {
    pub fn new(
        id: InstrumentId,
        stock: impl Into<String>,
        industry: impl Into<String>,
        sector: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            stock: stock.into(),
            industry: industry.into(),
            sector: sector.into(),
            currency_code: currency_code.into(),
        }
    }
}

/// Columns of the instrument table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentField {
    Id,
    Stock,
    Industry,
    Sector,
    CurrencyCode,
}

impl TableField for InstrumentField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Stock,
        Self::Industry,
        Self::Sector,
        Self::CurrencyCode,
    ];
    const SEARCHABLE: &'static [Self] =
        &[Self::Stock, Self::Industry, Self::Sector, Self::CurrencyCode];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Stock => "stock",
            Self::Industry => "industry",
            Self::Sector => "sector",
            Self::CurrencyCode => "currencyCode",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Stock => "Stock",
            Self::Industry => "Industry",
            Self::Sector => "Sector",
            Self::CurrencyCode => "Currency",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Self::Id)
    }
}

impl Row for Instrument {
    type Field = InstrumentField;

    fn field(&self, field: InstrumentField) -> FieldValue<'_> {
        match field {
            // Ids stay far below 2^53, so the f64 view is exact.
            InstrumentField::Id => FieldValue::Number(self.id.get() as f64),
            InstrumentField::Stock => FieldValue::Text(&self.stock),
            InstrumentField::Industry => FieldValue::Text(&self.industry),
            InstrumentField::Sector => FieldValue::Text(&self.sector),
            InstrumentField::CurrencyCode => FieldValue::Text(&self.currency_code),
        }
    }
}

/// One point of an instrument's value series, as returned by `GET /stockValues/{id}`.
///
/// The wire payload carries only `date` and `value`; `stock` is stamped by the client
/// with the owning instrument's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    #[serde(default)]
    pub stock: String,
    pub date: SeriesDate,
    pub value: f64,
}

impl ValuePoint {
    pub fn new(stock: impl Into<String>, date: SeriesDate, value: f64) -> Self {
        Self {
            stock: stock.into(),
            date,
            value,
        }
    }
}

/// Columns of the value-series table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueField {
    Stock,
    Date,
    Value,
}

impl TableField for ValueField {
    const ALL: &'static [Self] = &[Self::Stock, Self::Date, Self::Value];
    const SEARCHABLE: &'static [Self] = &[Self::Stock, Self::Date];

    fn name(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Date => "date",
            Self::Value => "value",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Date => "Date",
            Self::Value => "Value",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Self::Value)
    }
}

impl Row for ValuePoint {
    type Field = ValueField;

    fn field(&self, field: ValueField) -> FieldValue<'_> {
        match field {
            ValueField::Stock => FieldValue::Text(&self.stock),
            ValueField::Date => FieldValue::Date(&self.date),
            ValueField::Value => FieldValue::Number(self.value),
        }
    }
}
