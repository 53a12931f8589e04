use thiserror::Error;

/// A free-text field did not hold what the calculator needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Ingrese un número válido")]
    Empty,

    #[error("Ingrese un número válido: «{0}» no es un número")]
    InvalidNumber(String),

    #[error("Ingrese un conteo válido: «{0}» debe ser un entero no negativo")]
    InvalidCount(String),
}

/// Parses a single number. Accepts `,` as decimal separator.
pub fn parse_number(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber(trimmed.to_string()))
}

/// Parses a whole, non-negative count such as a number of cases.
/// Thousands may be grouped with `.`, `_` or spaces (`1.028.736`), but
/// every group after the first must have exactly three digits.
pub fn parse_count(text: &str) -> Result<u64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let invalid = || InputError::InvalidCount(trimmed.to_string());
    let groups: Vec<&str> = trimmed.split(['.', '_', ' ']).collect();
    let all_digits = groups
        .iter()
        .all(|g| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit()));
    if !all_digits {
        return Err(invalid());
    }
    if let [first, rest @ ..] = groups.as_slice() {
        if !rest.is_empty() && (first.len() > 3 || rest.iter().any(|g| g.len() != 3)) {
            return Err(invalid());
        }
    }
    groups.concat().parse::<u64>().map_err(|_| invalid())
}

/// Parses a list of numbers separated by `;`, `,` or whitespace.
pub fn parse_number_list(text: &str) -> Result<Vec<f64>, InputError> {
    let values = text
        .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}

/// Renders values back into the text form [`parse_number_list`] accepts.
pub fn format_number_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| crate::stats::descriptive::format_value(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 3.5 "), Ok(3.5));
        assert_eq!(parse_number("3,5"), Ok(3.5));
        assert_eq!(parse_number("-2"), Ok(-2.0));
        assert_eq!(parse_number(""), Err(InputError::Empty));
        assert_eq!(
            parse_number("abc"),
            Err(InputError::InvalidNumber("abc".to_string()))
        );
        assert!(parse_number("inf").is_err());
    }

    #[test]
    fn test_error_message_is_generic_notice() {
        assert!(
            parse_number("x")
                .unwrap_err()
                .to_string()
                .starts_with("Ingrese un número válido")
        );
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1.028.736"), Ok(1_028_736));
        assert_eq!(parse_count("2450"), Ok(2450));
        assert!(parse_count("-3").is_err());
        assert!(parse_count("2.5e3").is_err());
        assert_eq!(parse_count("12 500"), Ok(12_500));
        assert_eq!(parse_count("1_000"), Ok(1000));
        assert!(parse_count("2.5").is_err());
        assert!(parse_count("1 2").is_err());
        assert!(parse_count("1234.567").is_err());
        assert!(parse_count("1..000").is_err());
        assert_eq!(
            parse_count("2.5"),
            Err(InputError::InvalidCount("2.5".to_string()))
        );
    }

    #[test]
    fn test_parse_number_list() {
        assert_eq!(
            parse_number_list("2, 4;4\n5  9"),
            Ok(vec![2.0, 4.0, 4.0, 5.0, 9.0])
        );
        assert_eq!(parse_number_list(" ; "), Err(InputError::Empty));
        assert!(parse_number_list("1, dos, 3").is_err());
    }

    #[test]
    fn test_format_number_list_round_trips() {
        let values = vec![2.0, 4.5, 10.0];
        assert_eq!(format_number_list(&values), "2, 4.50, 10");
        assert_eq!(parse_number_list(&format_number_list(&values)), Ok(values));
    }
}
