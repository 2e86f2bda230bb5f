//! Tests for valuation domain models.

#[cfg(test)]
mod tests {
    use crate::valuation::{
        calculate_as_of, PropertyType, ValuationInput, AGE_NEGATIVE, AGE_TOO_OLD,
        SIZE_NOT_POSITIVE, SIZE_TOO_LARGE,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_property_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PropertyType::Multifamily).unwrap(),
            "\"MULTIFAMILY\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyType::Retail).unwrap(),
            "\"RETAIL\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyType::Office).unwrap(),
            "\"OFFICE\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyType::Industrial).unwrap(),
            "\"INDUSTRIAL\""
        );
    }

    #[test]
    fn test_property_type_round_trips_through_as_str() {
        for property_type in PropertyType::ALL {
            let parsed: PropertyType = property_type.as_str().parse().unwrap();
            assert_eq!(parsed, property_type);
            assert_eq!(property_type.to_string(), property_type.as_str());
        }
    }

    #[test]
    fn test_property_type_parse_is_case_sensitive() {
        assert!("multifamily".parse::<PropertyType>().is_err());
        assert!(serde_json::from_value::<PropertyType>(json!("Office")).is_err());
    }

    #[test]
    fn test_unknown_property_type_is_named() {
        let err = "RESIDENTIAL".parse::<PropertyType>().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid property type 'RESIDENTIAL': expected one of MULTIFAMILY, RETAIL, OFFICE, INDUSTRIAL"
        );
    }

    #[test]
    fn test_valid_input() {
        let input = ValuationInput::new(PropertyType::Multifamily, 50_000, 15).unwrap();
        assert_eq!(input.property_type(), PropertyType::Multifamily);
        assert_eq!(input.size_sqft(), 50_000);
        assert_eq!(input.age_years(), 15);
    }

    #[test]
    fn test_input_bounds_are_inclusive() {
        assert!(ValuationInput::new(PropertyType::Office, 1, 0).is_ok());
        assert!(ValuationInput::new(PropertyType::Office, 10_000_000, 200).is_ok());
    }

    #[test]
    fn test_input_rejections() {
        let cases = [
            (0, 10, SIZE_NOT_POSITIVE),
            (-5_000, 10, SIZE_NOT_POSITIVE),
            (10_000_001, 10, SIZE_TOO_LARGE),
            (15_000_000, 10, SIZE_TOO_LARGE),
            (10_000, -1, AGE_NEGATIVE),
            (10_000, 201, AGE_TOO_OLD),
            (10_000, 250, AGE_TOO_OLD),
        ];
        for (size, age, expected) in cases {
            let err = ValuationInput::new(PropertyType::Office, size, age).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), expected, "size={size} age={age}");
        }
    }

    #[test]
    fn test_size_checked_before_age() {
        let err = ValuationInput::new(PropertyType::Retail, 0, -1).unwrap_err();
        assert_eq!(err.to_string(), SIZE_NOT_POSITIVE);
    }

    #[test]
    fn test_parse_input_rejects_unknown_type() {
        let err = ValuationInput::parse("RESIDENTIAL", 10_000, 10).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("RESIDENTIAL"));

        let input = ValuationInput::parse("RETAIL", 5_000, 8).unwrap();
        assert_eq!(input.property_type(), PropertyType::Retail);
    }

    #[test]
    fn test_result_serialization() {
        let at = Utc.with_ymd_and_hms(2024, 12, 11, 10, 30, 0).unwrap();
        let result = calculate_as_of(PropertyType::Multifamily, 50_000, 15, at).unwrap();
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["estimated_value"], json!(8500000.0));
        assert_eq!(value["valuation_timestamp"], json!("2024-12-11T10:30:00Z"));
        assert_eq!(
            value["methodology"],
            json!("Base rate ($200/sqft) with 15.0% age depreciation")
        );
        assert_eq!(value["breakdown"]["base_value"], json!(10000000.0));
        assert_eq!(value["breakdown"]["depreciation_factor"], json!(0.15));
        assert_eq!(value["breakdown"]["final_value"], json!(8500000.0));
    }
}
