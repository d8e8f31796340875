//! JSON declaration of parameter spaces.
//!
//! A space is declared as an object with a `parameters` array; each entry
//! carries a `name` and an ordered `values` array. JSON `null` maps to
//! [`Value::Null`](crate::Value) and is a legitimate domain member.

use crate::space::{ParameterSpace, SpaceError};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid parameter space: {0}")]
    Invalid(#[from] SpaceError),
}

/// Parse and structurally validate a JSON parameter-space declaration.
pub fn parse_space(json: &str) -> Result<ParameterSpace, ParseError> {
    let space: ParameterSpace = serde_json::from_str(json)?;
    space.validate()?;
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Value;

    #[test]
    fn test_parse_minimal_space() {
        let json = r#"{
            "parameters": [
                { "name": "payment", "values": ["card", "wire"] },
                { "name": "coupon", "values": [null, "WELCOME10"] }
            ]
        }"#;
        let space = parse_space(json).unwrap();
        assert_eq!(space.len(), 2);
        assert_eq!(space.parameters[0].name, "payment");
        assert_eq!(space.parameters[1].values[0], Value::Null);
        assert_eq!(space.parameters[1].values[1], Value::Text("WELCOME10".into()));
    }

    #[test]
    fn test_parse_mixed_value_kinds() {
        let json = r#"{
            "parameters": [
                { "name": "retries", "values": [0, 1, 3] },
                { "name": "secure", "values": [true, false] }
            ]
        }"#;
        let space = parse_space(json).unwrap();
        assert_eq!(space.parameters[0].values[2], Value::Int(3));
        assert_eq!(space.parameters[1].values[1], Value::Bool(false));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_space("not json at all"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_space() {
        let result = parse_space(r#"{ "parameters": [] }"#);
        assert!(matches!(
            result,
            Err(ParseError::Invalid(SpaceError::EmptySpace))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_domain() {
        let result = parse_space(
            r#"{ "parameters": [ { "name": "payment", "values": [] } ] }"#,
        );
        assert!(matches!(
            result,
            Err(ParseError::Invalid(SpaceError::EmptyDomain { .. }))
        ));
    }
}
