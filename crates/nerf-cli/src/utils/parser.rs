use nerfkit::core::models::vector::Vector;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid point '{0}'. Expected three comma-separated numbers 'x,y,z' (e.g., '1.0,-0.5,2').")]
    InvalidPointFormat(String),

    #[error("Invalid number '{value}' for the {axis} coordinate of '{point}'.")]
    InvalidCoordinate {
        axis: &'static str,
        value: String,
        point: String,
    },

    #[error("Invalid override '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Parses a point written as `x,y,z`. Whitespace around each number is ignored.
pub fn parse_point(s: &str) -> Result<Vector, ParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(ParseError::InvalidPointFormat(s.to_string()));
    };

    let coordinate = |axis: &'static str, value: &str| -> Result<f64, ParseError> {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidCoordinate {
                axis,
                value: value.to_string(),
                point: s.to_string(),
            })
    };

    Ok(Vector::new(
        coordinate("x", x)?,
        coordinate("y", y)?,
        coordinate("z", z)?,
    ))
}

/// Splits a `KEY=VALUE` override into its trimmed key and value.
pub fn parse_key_value(s: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(s.to_string()))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            input: s.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            input: s.to_string(),
        });
    }
    Ok((key, value))
}
