// The resolver never clamps the requested quantity itself. These helpers are
// for callers that hold the quantity and bound it against `max_claimable`.

/// Bounds `requested` to `1..=max_claimable`, never going below 1.
pub fn clamp_quantity(requested: u64, max_claimable: u128) -> u64 {
    let upper = u64::try_from(max_claimable).unwrap_or(u64::MAX).max(1);
    requested.clamp(1, upper)
}

pub fn can_decrement(quantity: u64) -> bool {
    quantity > 1
}

pub fn can_increment(quantity: u64, max_claimable: u128) -> bool {
    (quantity as u128) < max_claimable
}
