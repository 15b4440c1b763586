use anyhow::Result;
use lead_quote::{
    calculate_quote, LeadForm, LocalStorage, QuoteError, QuoteStatus, SessionHandoff,
};
use tempfile::TempDir;

const MOVE_OUT_FORM: &str = r#"
name = "Alex Rivera"
phone = "+1 541 555 0123"
email = "alex@example.com"
postalCode = "97702"
homeType = "Apartment/Condo"
serviceType = "Move-Out / Heavy Clean"
squareFootage = "Under 1,500 sq ft"
preferredServiceDate = "2025-06-01"
photos = ["kitchen.jpg", "bath.jpg"]
addOns = ["oven", "garage"]
addOnFrequency = "First cleaning only"
"#;

#[tokio::test]
async fn test_intake_file_to_booking_handoff() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let form_path = temp_dir.path().join("lead.toml");
    tokio::fs::write(&form_path, MOVE_OUT_FORM).await?;

    let intake = LeadForm::from_file(&form_path)?.into_intake()?;
    let quote = calculate_quote(&intake);
    assert_eq!(quote.status(), QuoteStatus::PendingManualReview);

    let storage_root = temp_dir.path().join("store");
    let handoff = SessionHandoff::new(LocalStorage::new(
        storage_root.to_str().unwrap().to_string(),
    ));
    handoff.save("booking-7f3a", &intake, &quote).await?;

    assert!(storage_root.join("sessions/booking-7f3a.json").exists());

    // The booking step reads it back without recomputing.
    let record = handoff.load("booking-7f3a").await?;
    assert_eq!(record.intake.contact.phone, "+15415550123");
    assert_eq!(record.quote.status, QuoteStatus::PendingManualReview);
    assert_eq!(record.quote.first_clean_price, None);
    assert_eq!(record.quote.add_on_lines.len(), 2);
    assert_eq!(record.quote.add_on_lines[0].name, "Oven");
    assert_eq!(record.quote.add_on_lines[1].price, None);
    assert!(record.quote.price_breakdown.contains("garage (price TBD)"));
    Ok(())
}

#[tokio::test]
async fn test_load_unknown_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let handoff = SessionHandoff::new(LocalStorage::new(
        temp_dir.path().to_str().unwrap().to_string(),
    ));

    let err = handoff.load("never-saved").await.unwrap_err();
    assert!(matches!(err, QuoteError::SessionNotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn test_json_intake_file_with_invalid_fields() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let form_path = temp_dir.path().join("lead.json");
    tokio::fs::write(
        &form_path,
        r#"{"name": "Jo", "phone": "12", "email": "jo@example.com",
            "homeType": "Other", "serviceType": "Standard Cleaning",
            "squareFootage": "Over 5,500 sq ft"}"#,
    )
    .await?;

    let err = LeadForm::from_file(&form_path)?.into_intake().unwrap_err();
    match err {
        QuoteError::InvalidLead { violations } => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["phone", "cleaningFrequency"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unsupported_intake_extension() {
    let temp_dir = TempDir::new().unwrap();
    let form_path = temp_dir.path().join("lead.yaml");
    std::fs::write(&form_path, "name: x").unwrap();

    assert!(LeadForm::from_file(&form_path).is_err());
}
