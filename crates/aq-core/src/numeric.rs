use crate::AqError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AqError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AqError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Flow rates and durations go through this.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, AqError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(AqError::Negative { what, value: v });
    }
    Ok(v)
}
