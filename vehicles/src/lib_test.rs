use super::*;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn filled_draft() -> VehicleDraft {
    VehicleDraft::default()
        .with_field(DraftField::Vin, "1HGCM82633A004352")
        .with_field(DraftField::Make, "Honda")
        .with_field(DraftField::Model, "Accord")
}

// =============================================================
// VehicleDraft defaults
// =============================================================

#[test]
fn default_draft_has_empty_text_fields() {
    let draft = VehicleDraft::default();
    for field in [
        DraftField::Vin,
        DraftField::Make,
        DraftField::Model,
        DraftField::Year,
        DraftField::Length,
        DraftField::Width,
        DraftField::Height,
        DraftField::Wheelbase,
    ] {
        assert_eq!(draft.get(field), "", "{field} should start empty");
    }
}

#[test]
fn default_draft_uses_sedan_and_run_and_drive() {
    let draft = VehicleDraft::default();
    assert_eq!(draft.body_type, "sedan");
    assert_eq!(draft.status, "run_and_drive");
}

// =============================================================
// with_field
// =============================================================

#[test]
fn with_field_replaces_only_the_named_field() {
    let before = filled_draft();
    let after = before.with_field(DraftField::Year, "2003");
    assert_eq!(after.year, "2003");
    for field in DraftField::ALL {
        if field != DraftField::Year {
            assert_eq!(after.get(field), before.get(field));
        }
    }
}

#[test]
fn with_field_leaves_original_untouched() {
    let before = VehicleDraft::default();
    let _ = before.with_field(DraftField::Make, "Ford");
    assert_eq!(before, VehicleDraft::default());
}

#[test]
fn with_field_last_write_wins() {
    let draft = VehicleDraft::default()
        .with_field(DraftField::Model, "Civic")
        .with_field(DraftField::Make, "Honda")
        .with_field(DraftField::Model, "Accord");
    assert_eq!(draft.model, "Accord");
    assert_eq!(draft.make, "Honda");
    assert_eq!(draft.vin, "");
}

#[test]
fn with_field_covers_every_field() {
    let mut draft = VehicleDraft::default();
    for field in DraftField::ALL {
        draft = draft.with_field(field, format!("v-{}", field.as_str()));
    }
    for field in DraftField::ALL {
        assert_eq!(draft.get(field), format!("v-{}", field.as_str()));
    }
}

// =============================================================
// missing_required
// =============================================================

#[test]
fn missing_required_lists_empty_required_fields_in_order() {
    let draft = VehicleDraft::default().with_field(DraftField::Make, "Honda");
    assert_eq!(draft.missing_required(), vec![DraftField::Vin, DraftField::Model]);
}

#[test]
fn missing_required_accepts_whitespace_values() {
    let draft = filled_draft().with_field(DraftField::Vin, " ");
    assert!(draft.missing_required().is_empty());
}

#[test]
fn missing_required_ignores_optional_fields() {
    assert!(filled_draft().missing_required().is_empty());
}

// =============================================================
// DraftField
// =============================================================

#[test]
fn only_vin_make_model_are_required() {
    let required: Vec<_> = DraftField::ALL.into_iter().filter(|f| f.is_required()).collect();
    assert_eq!(required, vec![DraftField::Vin, DraftField::Make, DraftField::Model]);
}

// =============================================================
// Enumerations
// =============================================================

#[test]
fn body_type_strings_match_serde() {
    for body in BodyType::ALL {
        assert_eq!(serde_json::to_value(body).unwrap(), json!(body.as_str()));
    }
}

#[test]
fn car_status_strings_match_serde() {
    for status in CarStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
    }
}

#[test]
fn vehicle_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(VehicleKind::Trailer).unwrap(), json!("trailer"));
    assert_eq!(VehicleKind::default().as_str(), "car");
}

// =============================================================
// Wire types
// =============================================================

#[test]
fn car_payload_flattens_draft_next_to_type() {
    let payload = VehiclePayload::car(filled_draft().with_field(DraftField::Year, "2003"));
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "car",
            "vin": "1HGCM82633A004352",
            "make": "Honda",
            "model": "Accord",
            "year": "2003",
            "length": "",
            "width": "",
            "height": "",
            "wheelbase": "",
            "body_type": "sedan",
            "status": "run_and_drive",
        })
    );
}

#[test]
fn payload_keeps_numeric_fields_as_strings() {
    let payload = VehiclePayload::car(filled_draft().with_field(DraftField::Length, "190.5"));
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["length"], json!("190.5"));
}

#[test]
fn vehicle_record_deserializes_api_response() {
    let raw = json!({
        "id": "65a1",
        "type": "car",
        "data": {"vin": "ABC", "make": "Honda"},
        "created_at": "2024-01-15T10:00:00",
        "updated_at": "2024-01-15T10:00:00",
    });
    let record: VehicleRecord = serde_json::from_value(raw).unwrap();
    assert_eq!(record.id, "65a1");
    assert_eq!(record.kind, "car");
    assert_eq!(record.data["make"], json!("Honda"));
}
