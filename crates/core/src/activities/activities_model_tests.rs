#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::activities::{
        parse_activity_date, ActivityUpdate, Category, NewActivity,
    };
    use crate::errors::{Error, ValidationError};

    #[test]
    fn test_category_round_trips_through_db_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_db_str()).unwrap(), category);
        }
    }

    #[test]
    fn test_category_rejects_unknown_values() {
        assert!(Category::from_str("exercise").is_err());
        assert!(Category::from_str("Household").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::Household.display_name(), "Household Contributions");
        assert_eq!(Category::Health.display_name(), "Health & Outdoors");
        assert_eq!(Category::Play.display_name(), "Play & Fun");
    }

    #[test]
    fn test_parse_activity_date_accepts_canonical_form() {
        let date = parse_activity_date("2024-03-10").unwrap();
        assert_eq!(date.to_string(), "2024-03-10");
    }

    #[test]
    fn test_parse_activity_date_rejects_unpadded_form() {
        // "2024-3-1" names a real day but would break string-ordered range
        // scans, so only the padded form is accepted.
        assert!(parse_activity_date("2024-3-1").is_err());
        assert!(parse_activity_date("03/10/2024").is_err());
        assert!(parse_activity_date("2024-13-01").is_err());
        assert!(parse_activity_date("").is_err());
    }

    #[test]
    fn test_new_activity_validation() {
        let input = NewActivity {
            id: None,
            user_id: "u1".to_string(),
            category: "creative".to_string(),
            description: "Painted the fence mural".to_string(),
            date: "2024-03-10".to_string(),
        };
        let (category, date) = input.validate().unwrap();
        assert_eq!(category, Category::Creative);
        assert_eq!(date.to_string(), "2024-03-10");
    }

    #[test]
    fn test_new_activity_rejects_blank_description() {
        let input = NewActivity {
            id: None,
            user_id: "u1".to_string(),
            category: "play".to_string(),
            description: "   ".to_string(),
            date: "2024-03-10".to_string(),
        };
        assert!(matches!(
            input.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_new_activity_rejects_bad_category_and_date() {
        let mut input = NewActivity {
            id: None,
            user_id: "u1".to_string(),
            category: "chores".to_string(),
            description: "Swept".to_string(),
            date: "2024-03-10".to_string(),
        };
        assert!(input.validate().is_err());

        input.category = "household".to_string();
        input.date = "next tuesday".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_activity_update_requires_id() {
        let update = ActivityUpdate {
            description: Some("Trimmed".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = ActivityUpdate {
            id: Some("a1".to_string()),
            description: Some("Trimmed".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_serde_wire_format_is_camel_case() {
        let json = r#"{
            "userId": "u1",
            "category": "health",
            "description": "Morning run",
            "date": "2024-03-10"
        }"#;
        let input: NewActivity = serde_json::from_str(json).unwrap();
        assert_eq!(input.user_id, "u1");
        assert_eq!(input.category, "health");
    }
}
