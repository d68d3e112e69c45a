use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("Required environment variable not found: {0}")]
    RequiredVarNotFound(String),

    #[error("Invalid variable syntax: {0}")]
    InvalidSyntax(String),
}

pub type InterpolationResult<T> = Result<T, InterpolationError>;

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("Invalid regex pattern")
});

/// Expands `${VAR}` and `${VAR:-default}` from the process environment.
///
/// Substituted values are inserted as-is and never expanded again.
pub fn interpolate(input: &str) -> InterpolationResult<String> {
    let mut output = String::with_capacity(input.len());
    let mut last = 0;

    for caps in VAR_PATTERN.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_literal(&mut output, &input[last..whole.start()])?;

        let var_name = &caps[1];
        let value = match std::env::var(var_name) {
            Ok(value) => value,
            Err(_) => match caps.get(2) {
                Some(default) => default.as_str().to_string(),
                None => {
                    return Err(InterpolationError::RequiredVarNotFound(var_name.to_string()))
                }
            },
        };
        output.push_str(&value);
        last = whole.end();
    }

    push_literal(&mut output, &input[last..])?;
    Ok(output)
}

fn push_literal(output: &mut String, literal: &str) -> InterpolationResult<()> {
    if literal.contains("${") {
        return Err(InterpolationError::InvalidSyntax(literal.to_string()));
    }
    output.push_str(literal);
    Ok(())
}

pub fn interpolate_toml(value: &mut toml::Value) -> InterpolationResult<()> {
    match value {
        toml::Value::String(s) => {
            *s = interpolate(s)?;
        }
        toml::Value::Array(arr) => {
            for item in arr {
                interpolate_toml(item)?;
            }
        }
        toml::Value::Table(table) => {
            for (_, v) in table.iter_mut() {
                interpolate_toml(v)?;
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn has_variables(input: &str) -> bool {
    VAR_PATTERN.is_match(input)
}
