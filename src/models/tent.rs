use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TentType {
    pub id: Uuid,
    pub type_name_ar: String,
    pub type_name_en: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tent {
    pub id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    pub slug_ar: String,
    pub slug_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub image_urls: Vec<String>,
    pub keywords_ar: Vec<String>,
    pub keywords_en: Vec<String>,
    pub tags_ar: Vec<String>,
    pub tags_en: Vec<String>,
    pub tent_type_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of a tent's size table.
///
/// `eave_height` and `ridge_height` are free text because the source data
/// sometimes gives a range ("3.00m – 4.00m"). The dome-only columns
/// (`diameter` .. `capacity_sit`) are NULL for polygonal and pyramid
/// variants, which use `bay_distance` instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TentSize {
    pub id: Uuid,
    pub tent_id: Uuid,
    pub type_code: String,
    pub wide: f64,
    pub eave_height: String,
    pub ridge_height: String,
    pub bay_distance: Option<f64>,
    pub diameter: Option<f64>,
    pub center_height: Option<f64>,
    pub area: Option<f64>,
    pub capacity_stand: Option<f64>,
    pub capacity_sit: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TentSize {
    pub fn is_dome(&self) -> bool {
        self.diameter.is_some()
    }

    pub fn eave_height_range(&self) -> Option<HeightRange> {
        HeightRange::parse(&self.eave_height)
    }

    pub fn ridge_height_range(&self) -> Option<HeightRange> {
        HeightRange::parse(&self.ridge_height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TentSpecification {
    pub id: Uuid,
    pub tent_id: Uuid,
    pub profile_material_ar: String,
    pub profile_material_en: String,
    pub connection_type_ar: String,
    pub connection_type_en: String,
    pub roof_cover_ar: String,
    pub roof_cover_en: String,
    pub properties_ar: String,
    pub properties_en: String,
    pub wall_type_ar: String,
    pub wall_type_en: String,
    pub door_type_ar: String,
    pub door_type_en: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TentAccessory {
    pub id: Uuid,
    pub tent_id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Separator used in range-valued measurements ("3.00m – 4.00m").
pub const RANGE_SEPARATOR: char = '–';

/// Leading meter value of a free-text measurement.
///
/// Takes the text before the first en dash, strips the trailing "m" and
/// parses what is left. Unparseable input yields 0. For a range this is the
/// low end: `"3.00m – 4.00m"` gives `3.0`.
pub fn parse_leading_meters(raw: &str) -> f64 {
    let first = raw.split(RANGE_SEPARATOR).next().unwrap_or("");
    parse_meters(first).unwrap_or(0.0)
}

fn parse_meters(segment: &str) -> Option<f64> {
    segment
        .trim()
        .trim_end_matches('m')
        .trim()
        .parse::<f64>()
        .ok()
}

/// A measurement that is either a single value or a "min – max" range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: f64,
    pub max: f64,
}

impl HeightRange {
    /// `"4.00m"` is `{4.0, 4.0}`, `"3.00m – 4.00m"` is `{3.0, 4.0}`.
    /// Returns `None` when the leading value does not parse.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(RANGE_SEPARATOR);
        let min = parse_meters(parts.next()?)?;
        let max = match parts.next() {
            Some(upper) => parse_meters(upper)?,
            None => min,
        };
        Some(Self { min, max })
    }

    pub fn is_single(&self) -> bool {
        self.min == self.max
    }
}

/// Derived footprint of a tent: widest size and tallest (low-end) ridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MaxDimensions {
    pub max_width: f64,
    pub max_height: f64,
}

impl MaxDimensions {
    /// Fold over a tent's sizes, seeded with the first size seen.
    /// No sizes gives 0 / 0.
    pub fn from_sizes<'a, I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = &'a TentSize>,
    {
        sizes
            .into_iter()
            .fold(None, |acc: Option<Self>, size| Some(match acc {
                None => Self::of(size),
                Some(dims) => dims.absorb(size),
            }))
            .unwrap_or_default()
    }

    fn of(size: &TentSize) -> Self {
        Self {
            max_width: size.wide,
            max_height: parse_leading_meters(&size.ridge_height),
        }
    }

    pub fn absorb(self, size: &TentSize) -> Self {
        Self {
            max_width: self.max_width.max(size.wide),
            max_height: self.max_height.max(parse_leading_meters(&size.ridge_height)),
        }
    }
}

/// A tent as shown in listings: row + type + derived dimensions.
#[derive(Debug, Clone, Serialize)]
pub struct TentListing {
    #[serde(flatten)]
    pub tent: Tent,
    pub tent_type: Option<TentType>,
    #[serde(flatten)]
    pub dimensions: MaxDimensions,
}

/// A size row as the detail page shows it, with both heights parsed.
///
/// The raw text columns stay in the output; the ranges are `null` when the
/// text does not parse.
#[derive(Debug, Clone, Serialize)]
pub struct TentSizeView {
    #[serde(flatten)]
    pub size: TentSize,
    pub is_dome: bool,
    pub eave_height_range: Option<HeightRange>,
    pub ridge_height_range: Option<HeightRange>,
}

impl From<TentSize> for TentSizeView {
    fn from(size: TentSize) -> Self {
        Self {
            is_dome: size.is_dome(),
            eave_height_range: size.eave_height_range(),
            ridge_height_range: size.ridge_height_range(),
            size,
        }
    }
}

/// Full tent aggregate for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct TentDetail {
    #[serde(flatten)]
    pub tent: Tent,
    pub tent_type: Option<TentType>,
    pub sizes: Vec<TentSizeView>,
    pub specification: Option<TentSpecification>,
    pub accessories: Vec<TentAccessory>,
    #[serde(flatten)]
    pub dimensions: MaxDimensions,
}
