//! Possession balancing: the two sides always add up to 100.

use crate::errors::domain::{DomainError, ValidationKind};

pub const FULL_POSSESSION: i32 = 100;

/// Resolve possession from what the caller supplied.
///
/// - neither side: `Ok(None)`, keep whatever is stored
/// - one side: clamp it to `0..=100` and derive the other
/// - both sides: each must be in range and they must sum to 100
pub fn balance_possession(
    home: Option<i32>,
    away: Option<i32>,
) -> Result<Option<(i32, i32)>, DomainError> {
    match (home, away) {
        (None, None) => Ok(None),
        (Some(h), None) => {
            let h = h.clamp(0, FULL_POSSESSION);
            Ok(Some((h, FULL_POSSESSION - h)))
        }
        (None, Some(a)) => {
            let a = a.clamp(0, FULL_POSSESSION);
            Ok(Some((FULL_POSSESSION - a, a)))
        }
        (Some(h), Some(a)) => {
            let in_range = (0..=FULL_POSSESSION).contains(&h) && (0..=FULL_POSSESSION).contains(&a);
            if !in_range || h + a != FULL_POSSESSION {
                return Err(DomainError::validation(
                    ValidationKind::Possession,
                    format!("Possession must sum to 100 (got {h} + {a})"),
                ));
            }
            Ok(Some((h, a)))
        }
    }
}
