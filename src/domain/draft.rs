// src/domain/draft.rs

use crate::domain::property_type::{default_image_for, PropertyType};
use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Raw add-property form input, exactly as the user typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub name: String,
    pub property_type: String,
    pub price: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub lat: String,
    pub lng: String,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        let kind = PropertyType::Plot;
        Self {
            name: String::new(),
            property_type: kind.label().to_string(),
            price: String::new(),
            location: String::new(),
            description: String::new(),
            image: kind.default_image().to_string(),
            lat: String::new(),
            lng: String::new(),
        }
    }
}

/// Body of `POST /properties`. Numbers that did not parse go out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub price: Option<f64>,
    pub location: String,
    pub description: String,
    pub image: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    MissingField(&'static str),
    NegativePrice,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingField(field) => write!(f, "{field} is required"),
            DraftError::NegativePrice => write!(f, "price must not be negative"),
        }
    }
}

impl Error for DraftError {}

impl PropertyDraft {
    /// Reads an `application/x-www-form-urlencoded` body. Unknown keys are ignored,
    /// missing keys stay empty.
    pub fn from_form_body(body: &str) -> Self {
        let mut draft = PropertyDraft {
            image: String::new(),
            ..PropertyDraft::default()
        };
        let mut saw_type = false;

        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "name" => draft.name = value,
                "type" => {
                    draft.property_type = value;
                    saw_type = true;
                }
                "price" => draft.price = value,
                "location" => draft.location = value,
                "description" => draft.description = value,
                "image" => draft.image = value,
                "lat" => draft.lat = value,
                "lng" => draft.lng = value,
                _ => {}
            }
        }

        if !saw_type {
            draft.property_type.clear();
        }
        draft
    }

    /// Required-field checks, then numeric coercion.
    pub fn normalize(&self) -> Result<NewProperty, DraftError> {
        let name = required("name", &self.name)?;
        let property_type = required("type", &self.property_type)?;
        let price_raw = required("price", &self.price)?;
        let location = required("location", &self.location)?;
        let description = required("description", &self.description)?;

        let price = parse_number(&price_raw);
        if matches!(price, Some(p) if p < 0.0) {
            return Err(DraftError::NegativePrice);
        }

        let image = match self.image.trim() {
            "" => default_image_for(&property_type).to_string(),
            url => url.to_string(),
        };

        Ok(NewProperty {
            name,
            property_type,
            price,
            location,
            description,
            image,
            lat: parse_number(&self.lat),
            lng: parse_number(&self.lng),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// `None` for empty, garbage or non-finite input.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
