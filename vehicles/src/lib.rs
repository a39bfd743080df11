//! Shared vehicle model for the CarLogix vehicle manager.
//!
//! This crate owns the draft record edited by the form, the enumerations that
//! feed its select fields, and the JSON payload posted to `/api/vehicles`.
//! The form controller (`form`) and submit coordinator (`submit`) are built on
//! top of it and are shared by the browser `client` and the `cli`.

pub mod form;
pub mod submit;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use form::{MessageKind, StatusMessage, SubmitPhase, VehicleForm};
pub use submit::{SubmitError, TransportError, VehicleTransport};

/// Collection endpoint for vehicle records.
pub const VEHICLES_ENDPOINT: &str = "/api/vehicles";

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Discriminator carried in the `type` key of every create payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    #[default]
    Car,
    Truck,
    Trailer,
}

impl VehicleKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
            Self::Trailer => "trailer",
        }
    }
}

/// Car body style. The draft stores the wire string, not this enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    #[default]
    Sedan,
    Suv,
    Hatchback,
    FullSizeSuv,
    Van,
    Pickup,
    UtilityTruck,
}

impl BodyType {
    pub const ALL: [Self; 7] = [
        Self::Sedan,
        Self::Suv,
        Self::Hatchback,
        Self::FullSizeSuv,
        Self::Van,
        Self::Pickup,
        Self::UtilityTruck,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Hatchback => "hatchback",
            Self::FullSizeSuv => "full_size_suv",
            Self::Van => "van",
            Self::Pickup => "pickup",
            Self::UtilityTruck => "utility_truck",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Hatchback => "Hatchback",
            Self::FullSizeSuv => "Full-size SUV",
            Self::Van => "Van",
            Self::Pickup => "Pickup",
            Self::UtilityTruck => "Utility truck",
        }
    }
}

/// Operating condition of a car.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarStatus {
    #[default]
    RunAndDrive,
    InoperableRolling,
    InoperableStuck,
    NoKeys,
}

impl CarStatus {
    pub const ALL: [Self; 4] = [
        Self::RunAndDrive,
        Self::InoperableRolling,
        Self::InoperableStuck,
        Self::NoKeys,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RunAndDrive => "run_and_drive",
            Self::InoperableRolling => "inoperable_rolling",
            Self::InoperableStuck => "inoperable_stuck",
            Self::NoKeys => "no_keys",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RunAndDrive => "Run and drive",
            Self::InoperableRolling => "Inoperable (rolling)",
            Self::InoperableStuck => "Inoperable (stuck)",
            Self::NoKeys => "No keys",
        }
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Every editable field of a [`VehicleDraft`], in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Vin,
    Make,
    Model,
    Year,
    Length,
    Width,
    Height,
    Wheelbase,
    BodyType,
    Status,
}

impl DraftField {
    pub const ALL: [Self; 10] = [
        Self::Vin,
        Self::Make,
        Self::Model,
        Self::Year,
        Self::Length,
        Self::Width,
        Self::Height,
        Self::Wheelbase,
        Self::BodyType,
        Self::Status,
    ];

    /// Fields that must be non-empty before a submit may issue a request.
    pub const REQUIRED: [Self; 3] = [Self::Vin, Self::Make, Self::Model];

    /// JSON key used in the create payload.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vin => "vin",
            Self::Make => "make",
            Self::Model => "model",
            Self::Year => "year",
            Self::Length => "length",
            Self::Width => "width",
            Self::Height => "height",
            Self::Wheelbase => "wheelbase",
            Self::BodyType => "body_type",
            Self::Status => "status",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Vin => "VIN",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Year => "Year",
            Self::Length => "Length",
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Wheelbase => "Wheelbase",
            Self::BodyType => "Body type",
            Self::Status => "Status",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress car entry. Every value is the raw string the user typed or
/// picked; numeric coercion is left to the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub wheelbase: String,
    pub body_type: String,
    pub status: String,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            vin: String::new(),
            make: String::new(),
            model: String::new(),
            year: String::new(),
            length: String::new(),
            width: String::new(),
            height: String::new(),
            wheelbase: String::new(),
            body_type: BodyType::default().as_str().to_owned(),
            status: CarStatus::default().as_str().to_owned(),
        }
    }
}

impl VehicleDraft {
    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Vin => &self.vin,
            DraftField::Make => &self.make,
            DraftField::Model => &self.model,
            DraftField::Year => &self.year,
            DraftField::Length => &self.length,
            DraftField::Width => &self.width,
            DraftField::Height => &self.height,
            DraftField::Wheelbase => &self.wheelbase,
            DraftField::BodyType => &self.body_type,
            DraftField::Status => &self.status,
        }
    }

    /// Copy of this draft with `field` replaced by `value`.
    #[must_use]
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    /// Required fields that are still empty, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    fn slot_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Vin => &mut self.vin,
            DraftField::Make => &mut self.make,
            DraftField::Model => &mut self.model,
            DraftField::Year => &mut self.year,
            DraftField::Length => &mut self.length,
            DraftField::Width => &mut self.width,
            DraftField::Height => &mut self.height,
            DraftField::Wheelbase => &mut self.wheelbase,
            DraftField::BodyType => &mut self.body_type,
            DraftField::Status => &mut self.status,
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `POST /api/vehicles`: the draft flattened next to its `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VehiclePayload {
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    #[serde(flatten)]
    pub draft: VehicleDraft,
}

impl VehiclePayload {
    #[must_use]
    pub fn car(draft: VehicleDraft) -> Self {
        Self { kind: VehicleKind::Car, draft }
    }
}

/// A stored vehicle as returned by the read endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw stored document.
    pub data: Value,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
