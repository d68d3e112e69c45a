use super::error::{
    DomainError,
    DomainResult,
};

const MAX_CITY_LENGTH: usize = 100;

/// Returns the trimmed city name
pub fn validate_city(city: &str) -> DomainResult<&str> {
    let city = city.trim();

    if city.is_empty() {
        return Err(DomainError::InvalidInput(
            "City name cannot be empty".to_string(),
        ));
    }

    if city.chars().count() > MAX_CITY_LENGTH {
        return Err(DomainError::InvalidInput(format!(
            "City name cannot exceed {} characters",
            MAX_CITY_LENGTH
        )));
    }

    if city.chars().any(char::is_control) {
        return Err(DomainError::InvalidInput(
            "City name contains control characters".to_string(),
        ));
    }

    Ok(city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_city() {
        assert_eq!(validate_city("Paris").unwrap(), "Paris");
        assert_eq!(validate_city("  New York ").unwrap(), "New York");
        assert_eq!(validate_city("São Paulo").unwrap(), "São Paulo");

        assert!(validate_city("").is_err());
        assert!(validate_city("   ").is_err());
        assert!(validate_city("Paris\n").is_ok());
        assert!(validate_city("Pa\u{0}ris").is_err());
        assert!(validate_city(&"a".repeat(101)).is_err());
        assert!(validate_city(&"a".repeat(100)).is_ok());
    }
}
