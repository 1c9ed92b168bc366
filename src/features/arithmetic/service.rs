use crate::core::error::AppError;

// Both operands must parse; one bad operand fails the call.
pub fn add_operands(a: &str, b: &str) -> Result<i64, AppError> {
    match (parse_operand("a", a), parse_operand("b", b)) {
        (Ok(first), Ok(second)) => first.checked_add(second).ok_or_else(|| {
            AppError::invalid_number(format!("sum of {first} and {second} overflows"))
        }),
        (Err(message), Ok(_)) | (Ok(_), Err(message)) => Err(AppError::invalid_number(message)),
        (Err(first), Err(second)) => Err(AppError::invalid_number(format!("{first}; {second}"))),
    }
}

fn parse_operand(name: &str, value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|err| format!("operand `{name}` ({value:?}) is not an integer: {err}"))
}
