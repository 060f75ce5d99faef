use crate::GwError;

/// Edge weight type.
pub type Weight = f64;

/// Weight assigned when an edge is added without one.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Matrix cell value for a missing edge.
pub const NO_EDGE: Weight = 0.0;

pub fn ensure_finite(v: Weight, what: &'static str) -> Result<Weight, GwError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GwError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_accepts_regular_weights() {
        assert_eq!(ensure_finite(2.5, "weight"), Ok(2.5));
        assert_eq!(ensure_finite(-1.0, "weight"), Ok(-1.0));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Weight::NAN, "weight").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
        assert!(msg.contains("weight"));
    }

    #[test]
    fn ensure_finite_detects_infinity() {
        assert!(ensure_finite(Weight::INFINITY, "weight").is_err());
    }
}
