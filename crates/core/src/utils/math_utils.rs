use crate::errors::{Error, Result, ValidationError};

/// Calculates the factorial of a number iteratively.
///
/// Negative input is rejected with
/// [`ValidationError::NegativeInput`]; results past `u128::MAX`
/// (from 35! upward) are an [`Error::Overflow`].
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(ValidationError::NegativeInput(n).into());
    }

    let mut acc: u128 = 1;
    for i in 2..=n as u128 {
        acc = acc
            .checked_mul(i)
            .ok_or_else(|| Error::Overflow(format!("factorial({}) does not fit in u128", n)))?;
    }
    Ok(acc)
}
