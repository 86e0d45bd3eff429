use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// A named ocean trash accumulation zone.
///
/// The same rules apply when a record is written and when it is read back,
/// so anything the API accepted can always be listed again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Hotspot {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must lie in [-90, 90]"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must lie in [-180, 180]"))]
    pub longitude: f64,
    #[validate(range(min = 0.0, message = "density must not be negative"))]
    pub density: f64,
    #[validate(range(min = 0.0, message = "area_km2 must not be negative"))]
    pub area_km2: f64,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "collected_kg must not be negative"))]
    pub collected_kg: f64,
    /// Free text. Observed values are "medium", "high" and "critical".
    #[validate(length(min = 1, message = "severity must not be empty"))]
    pub severity: String,
    pub tags: Vec<String>,
}

impl Hotspot {
    /// Shapes a raw field map into a hotspot.
    ///
    /// Numbers may arrive as integers, doubles or numeric strings. Unknown
    /// keys such as `_id` are ignored. Optional fields default to no
    /// description, zero collected mass and no tags.
    pub fn parse(raw: &Document) -> Result<Self, AppError> {
        let hotspot = Hotspot {
            name: required_text(raw, "name")?,
            latitude: required_number(raw, "latitude")?,
            longitude: required_number(raw, "longitude")?,
            density: required_number(raw, "density")?,
            area_km2: required_number(raw, "area_km2")?,
            description: optional_text(raw, "description")?,
            collected_kg: optional_number(raw, "collected_kg")?.unwrap_or(0.0),
            severity: required_text(raw, "severity")?,
            tags: tags(raw)?,
        };

        hotspot.validate()?;
        Ok(hotspot)
    }

    /// Same as [`Hotspot::parse`] for a JSON request body. Only the known
    /// fields are carried over, so unrelated keys can hold any JSON value.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, AppError> {
        let Some(object) = value.as_object() else {
            return Err(AppError::validation("request body must be a JSON object"));
        };

        let raw: Document = FIELDS
            .iter()
            .filter_map(|field| {
                object
                    .get(*field)
                    .map(|value| (field.to_string(), json_to_bson(value)))
            })
            .collect();
        Self::parse(&raw)
    }

    /// The representation written to the document store.
    pub fn to_document(&self) -> Result<Document, AppError> {
        bson::to_document(self).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to serialize hotspot: {}", e))
        })
    }
}

const FIELDS: [&str; 9] = [
    "name",
    "latitude",
    "longitude",
    "density",
    "area_km2",
    "description",
    "collected_kg",
    "severity",
    "tags",
];

/// Integers beyond `i64` become doubles, as BSON has no unsigned type.
fn json_to_bson(value: &serde_json::Value) -> Bson {
    use serde_json::Value;

    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Bson::Int64(i),
            None => Bson::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(text) => Bson::String(text.clone()),
        Value::Array(items) => Bson::Array(items.iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(
            map.iter()
                .map(|(key, value)| (key.clone(), json_to_bson(value)))
                .collect(),
        ),
    }
}

fn missing(field: &str) -> AppError {
    AppError::validation(format!("{}: field required", field))
}

fn present<'a>(raw: &'a Document, field: &str) -> Option<&'a Bson> {
    match raw.get(field) {
        None | Some(Bson::Null) => None,
        Some(value) => Some(value),
    }
}

fn required_text(raw: &Document, field: &str) -> Result<String, AppError> {
    optional_text(raw, field)?.ok_or_else(|| missing(field))
}

fn optional_text(raw: &Document, field: &str) -> Result<Option<String>, AppError> {
    match present(raw, field) {
        None => Ok(None),
        Some(Bson::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(AppError::validation(format!(
            "{}: expected text, got {:?}",
            field,
            other.element_type()
        ))),
    }
}

fn required_number(raw: &Document, field: &str) -> Result<f64, AppError> {
    optional_number(raw, field)?.ok_or_else(|| missing(field))
}

fn optional_number(raw: &Document, field: &str) -> Result<Option<f64>, AppError> {
    let Some(value) = present(raw, field) else {
        return Ok(None);
    };

    let number = match value {
        Bson::Double(v) => *v,
        Bson::Int32(v) => f64::from(*v),
        Bson::Int64(v) => *v as f64,
        Bson::String(text) => text.trim().parse::<f64>().map_err(|_| {
            AppError::validation(format!("{}: '{}' is not a valid number", field, text))
        })?,
        other => {
            return Err(AppError::validation(format!(
                "{}: expected a number, got {:?}",
                field,
                other.element_type()
            )))
        }
    };

    if !number.is_finite() {
        return Err(AppError::validation(format!(
            "{}: number must be finite",
            field
        )));
    }

    Ok(Some(number))
}

fn tags(raw: &Document) -> Result<Vec<String>, AppError> {
    match present(raw, "tags") {
        None => Ok(Vec::new()),
        Some(Bson::Array(items)) => items
            .iter()
            .map(|item| match item {
                Bson::String(tag) => Ok(tag.clone()),
                other => Err(AppError::validation(format!(
                    "tags: expected text labels, got {:?}",
                    other.element_type()
                ))),
            })
            .collect(),
        Some(other) => Err(AppError::validation(format!(
            "tags: expected a list, got {:?}",
            other.element_type()
        ))),
    }
}
