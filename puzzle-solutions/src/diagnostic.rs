//! Binary-diagnostic report decoding and bit-criteria rating selection.
//!
//! A diagnostic report is a set of fixed-width binary readings. Two
//! computations run over it:
//!
//! - [`compute_report`] derives the gamma/epsilon pair from per-position
//!   bit majorities over the whole set in one pass.
//! - [`select_rating`] narrows the set one bit position at a time under
//!   a [`BitCriteria`] policy until a single reading survives. The
//!   oxygen generator rating uses [`BitCriteria::MostCommon`], the CO2
//!   scrubber rating [`BitCriteria::LeastCommon`].
//!
//! Both are pure functions over the set; the bit width is a parameter,
//! carried by the caller rather than baked in.

use thiserror::Error;

/// A fixed-width binary reading, held as an unsigned value
pub type Diagnostic = u32;

/// Error type for diagnostic computations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticError {
    /// An empty diagnostic set was supplied
    #[error("diagnostic set is empty")]
    EmptySet,
    /// A reading does not fit in the declared bit width
    #[error("value {value:#b} does not fit in {width} bits")]
    WidthMismatch { value: Diagnostic, width: u32 },
    /// The declared bit width cannot describe a reading
    #[error("unsupported bit width: {0}")]
    UnsupportedWidth(u32),
}

/// Policy for choosing which partition survives a bit-criteria step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitCriteria {
    /// Keep the readings sharing the most common bit value; ties keep
    /// the readings with the bit set
    MostCommon,
    /// Keep the readings sharing the least common bit value; ties keep
    /// the readings with the bit clear
    LeastCommon,
}

/// Compute the gamma/epsilon pair for a diagnostic set.
///
/// Gamma's bit at each position is 1 exactly when a strict majority of
/// readings set that bit; an even split leaves the bit clear. Epsilon
/// is gamma's complement within `width` bits.
///
/// # Errors
///
/// Fails on an empty set, a width outside `1..=32`, or a reading that
/// does not fit in `width` bits.
pub fn compute_report(
    set: &[Diagnostic],
    width: u32,
) -> Result<(Diagnostic, Diagnostic), DiagnosticError> {
    let mask = validate(set, width)?;
    let half = set.len() / 2;
    let mut gamma = 0;
    for position in (0..width).rev() {
        gamma <<= 1;
        let ones = set.iter().filter(|&&d| d & (1 << position) != 0).count();
        if ones > half {
            gamma |= 1;
        }
    }
    Ok((gamma, !gamma & mask))
}

/// Select a single reading from a diagnostic set by bit criteria.
///
/// Starting from the most significant of `width` bit positions, the
/// working set is partitioned on the current bit and `criteria` decides
/// which partition survives; an empty partition keeps the other one. A
/// singleton working set terminates the reduction immediately. Should
/// every position be exhausted with duplicates still remaining, the
/// first surviving reading is returned.
///
/// # Errors
///
/// Fails on an empty set, a width outside `1..=32`, or a reading that
/// does not fit in `width` bits.
pub fn select_rating(
    set: &[Diagnostic],
    width: u32,
    criteria: BitCriteria,
) -> Result<Diagnostic, DiagnosticError> {
    validate(set, width)?;
    let mut working = set.to_vec();
    for position in (0..width).rev() {
        if working.len() == 1 {
            break;
        }
        let mask = 1 << position;
        let (ones, zeros): (Vec<_>, Vec<_>) = working.into_iter().partition(|&d| d & mask != 0);
        working = match criteria {
            _ if zeros.is_empty() => ones,
            _ if ones.is_empty() => zeros,
            BitCriteria::MostCommon if ones.len() >= zeros.len() => ones,
            BitCriteria::MostCommon => zeros,
            BitCriteria::LeastCommon if zeros.len() > ones.len() => ones,
            BitCriteria::LeastCommon => zeros,
        };
    }
    working.first().copied().ok_or(DiagnosticError::EmptySet)
}

/// Oxygen generator rating: reduction under [`BitCriteria::MostCommon`]
pub fn oxygen_generator_rating(
    set: &[Diagnostic],
    width: u32,
) -> Result<Diagnostic, DiagnosticError> {
    select_rating(set, width, BitCriteria::MostCommon)
}

/// CO2 scrubber rating: reduction under [`BitCriteria::LeastCommon`]
pub fn co2_scrubber_rating(set: &[Diagnostic], width: u32) -> Result<Diagnostic, DiagnosticError> {
    select_rating(set, width, BitCriteria::LeastCommon)
}

/// Check width and readings, returning the mask of valid bits
fn validate(set: &[Diagnostic], width: u32) -> Result<Diagnostic, DiagnosticError> {
    if width == 0 || width > Diagnostic::BITS {
        return Err(DiagnosticError::UnsupportedWidth(width));
    }
    if set.is_empty() {
        return Err(DiagnosticError::EmptySet);
    }
    let mask = if width == Diagnostic::BITS {
        Diagnostic::MAX
    } else {
        (1 << width) - 1
    };
    match set.iter().find(|&&value| value & !mask != 0) {
        Some(&value) => Err(DiagnosticError::WidthMismatch { value, width }),
        None => Ok(mask),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn report_from_three_readings() {
        let set = [0b000000000001, 0b000000000010, 0b000000000011];
        let (gamma, epsilon) = compute_report(&set, 12).unwrap();
        assert_eq!(gamma, 0b000000000011);
        assert_eq!(epsilon, 0b111111111100);
    }

    #[test]
    fn report_with_no_majorities() {
        let set = [0b000000000000, 0b000000000010, 0b000000000001];
        let (gamma, epsilon) = compute_report(&set, 12).unwrap();
        assert_eq!(gamma, 0b000000000000);
        assert_eq!(epsilon, 0b111111111111);
    }

    #[test]
    fn report_even_split_bit_goes_to_zero() {
        // Bit 0 is set in exactly half the readings; gamma must leave it clear.
        let set = [0b01, 0b11, 0b10, 0b00];
        let (gamma, epsilon) = compute_report(&set, 2).unwrap();
        assert_eq!(gamma, 0b00);
        assert_eq!(epsilon, 0b11);
    }

    #[test]
    fn report_on_empty_set_fails() {
        assert_eq!(compute_report(&[], 12), Err(DiagnosticError::EmptySet));
    }

    #[test]
    fn most_common_keeps_ones_on_tie() {
        let set = [0b000000000001, 0b000000000010, 0b000000000011];
        let rating = select_rating(&set, 12, BitCriteria::MostCommon).unwrap();
        assert_eq!(rating, 0b000000000011);
    }

    #[test]
    fn least_common_keeps_zeros_on_tie() {
        let set = [0b000000000001, 0b000000000010, 0b000000000011];
        let rating = select_rating(&set, 12, BitCriteria::LeastCommon).unwrap();
        assert_eq!(rating, 0b000000000001);
    }

    #[test]
    fn empty_partition_keeps_the_other_side() {
        // Every reading sets bit 11, so the first step cannot discard anything.
        let set = [0b100000000111, 0b111111111000, 0b100000000000];
        assert_eq!(
            select_rating(&set, 12, BitCriteria::MostCommon).unwrap(),
            0b100000000111
        );
        assert_eq!(
            select_rating(&set, 12, BitCriteria::LeastCommon).unwrap(),
            0b111111111000
        );
    }

    #[test]
    fn reduction_over_mixed_set() {
        let set = [
            0b000000000101,
            0b000000000110,
            0b000000000011,
        ];
        assert_eq!(
            select_rating(&set, 12, BitCriteria::MostCommon).unwrap(),
            0b000000000110
        );
        assert_eq!(
            select_rating(&set, 12, BitCriteria::LeastCommon).unwrap(),
            0b000000000011
        );
    }

    #[test]
    fn reduction_over_twelve_readings() {
        let set = [
            0b000000000100,
            0b000000011110,
            0b000000010110,
            0b000000010111,
            0b000000010101,
            0b000000001111,
            0b000000000111,
            0b000000011100,
            0b000000010000,
            0b000000011001,
            0b000000000010,
            0b000000001010,
        ];
        assert_eq!(oxygen_generator_rating(&set, 12).unwrap(), 0b000000010111);
        assert_eq!(co2_scrubber_rating(&set, 12).unwrap(), 0b000000001010);
    }

    #[test]
    fn singleton_returns_immediately() {
        for criteria in [BitCriteria::MostCommon, BitCriteria::LeastCommon] {
            assert_eq!(select_rating(&[0b101], 3, criteria).unwrap(), 0b101);
        }
    }

    #[test]
    fn duplicates_survive_width_exhaustion() {
        // Two identical readings can never be told apart; the fallback
        // returns the first survivor.
        let set = [0b10, 0b10];
        assert_eq!(select_rating(&set, 2, BitCriteria::MostCommon).unwrap(), 0b10);
        assert_eq!(select_rating(&set, 2, BitCriteria::LeastCommon).unwrap(), 0b10);
    }

    #[test]
    fn rating_on_empty_set_fails() {
        assert_eq!(
            select_rating(&[], 12, BitCriteria::MostCommon),
            Err(DiagnosticError::EmptySet)
        );
    }

    #[test]
    fn oversized_reading_rejected() {
        let result = select_rating(&[0b111, 0b1000], 3, BitCriteria::MostCommon);
        assert_eq!(
            result,
            Err(DiagnosticError::WidthMismatch {
                value: 0b1000,
                width: 3
            })
        );
        assert_eq!(
            compute_report(&[0b1000], 3),
            Err(DiagnosticError::WidthMismatch {
                value: 0b1000,
                width: 3
            })
        );
    }

    #[test]
    fn zero_and_oversized_widths_rejected() {
        assert_eq!(
            compute_report(&[0], 0),
            Err(DiagnosticError::UnsupportedWidth(0))
        );
        assert_eq!(
            select_rating(&[0], 33, BitCriteria::MostCommon),
            Err(DiagnosticError::UnsupportedWidth(33))
        );
    }

    #[test]
    fn full_width_readings_supported() {
        let set = [Diagnostic::MAX, 0];
        let (gamma, epsilon) = compute_report(&set, 32).unwrap();
        assert_eq!(gamma, 0);
        assert_eq!(epsilon, Diagnostic::MAX);
    }

    fn diagnostic_set() -> impl Strategy<Value = (u32, Vec<Diagnostic>)> {
        (1u32..=12).prop_flat_map(|width| {
            let limit = 1u32 << width;
            (
                Just(width),
                prop::collection::vec(0..limit, 1..40),
            )
        })
    }

    proptest! {
        /// The selected rating is always a member of the input set.
        #[test]
        fn prop_rating_is_member((width, set) in diagnostic_set()) {
            for criteria in [BitCriteria::MostCommon, BitCriteria::LeastCommon] {
                let rating = select_rating(&set, width, criteria).unwrap();
                prop_assert!(set.contains(&rating));
            }
        }

        /// Epsilon is always gamma's complement within the width.
        #[test]
        fn prop_epsilon_complements_gamma((width, set) in diagnostic_set()) {
            let (gamma, epsilon) = compute_report(&set, width).unwrap();
            let mask = (1u32 << width) - 1;
            prop_assert_eq!(epsilon, !gamma & mask);
            prop_assert_eq!(gamma & !mask, 0);
        }

        /// Re-running the reduction on its own output is a fixed point.
        #[test]
        fn prop_rating_idempotent((width, set) in diagnostic_set()) {
            for criteria in [BitCriteria::MostCommon, BitCriteria::LeastCommon] {
                let rating = select_rating(&set, width, criteria).unwrap();
                prop_assert_eq!(select_rating(&[rating], width, criteria).unwrap(), rating);
            }
        }
    }
}
