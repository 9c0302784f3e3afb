/// Rounds to the nearest whole number, ties going to the even neighbour.
pub(crate) fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Clamps into `0..=max` and rounds to a whole number.
pub(crate) fn clamp_round_u8(value: f64, max: u8) -> u8 {
    round_half_even(value.clamp(0.0, f64::from(max))) as u8
}
