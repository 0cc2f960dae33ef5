use num_traits::ToPrimitive;

/// Shannon entropy in bits of the distribution given by non-negative weights
///
/// Zero weights do not contribute. Returns `None` when the weights sum to
/// zero, since no distribution exists.
pub fn shannon_entropy<W>(weights: &[W]) -> Option<f64>
where
    W: ToPrimitive + Copy,
{
    let total: f64 = weights.iter().filter_map(ToPrimitive::to_f64).sum();
    if total <= 0.0 {
        return None;
    }

    let entropy = weights
        .iter()
        .filter_map(ToPrimitive::to_f64)
        .filter(|&w| w > 0.0)
        .map(|w| {
            let p = w / total;
            -p * p.log2()
        })
        .sum::<f64>();

    // A single certain outcome sums to -0.0
    Some(entropy.max(0.0))
}

/// Fraction of the total weight carried by each entry
///
/// Returns all zeros when the weights sum to zero.
pub fn normalize<W>(weights: &[W]) -> Vec<f64>
where
    W: ToPrimitive + Copy,
{
    let total: f64 = weights.iter().filter_map(ToPrimitive::to_f64).sum();
    weights
        .iter()
        .map(|w| {
            if total > 0.0 {
                w.to_f64().unwrap_or(0.0) / total
            } else {
                0.0
            }
        })
        .collect()
}
