use kata_common::error::{KataError, Result};

/// Computes the body mass index, rounded to one decimal place.
///
/// Weight is in kilograms, height in meters. Both must be finite and
/// strictly positive; a zero height would divide by zero and a zero
/// weight is no more meaningful.
pub fn bmi(weight: f64, height: f64) -> Result<f64> {
    if !weight.is_finite() || !height.is_finite() {
        return Err(KataError::validation("weight and height must be finite"));
    }
    if weight <= 0.0 {
        return Err(KataError::validation(format!(
            "weight must be positive, got {weight}"
        )));
    }
    if height <= 0.0 {
        return Err(KataError::validation(format!(
            "height must be positive, got {height}"
        )));
    }

    let raw = weight / (height * height);
    Ok((raw * 10.0).round() / 10.0)
}
