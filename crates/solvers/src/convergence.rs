use descent_core::ObjectiveFunction;
use log::warn;

/// Returns true if `value` matches one of the objective's known minimum values.
///
/// Values are compared after rounding to six decimal places, so this is a
/// check on the objective value rather than on distance in input space. A
/// non-finite value is never a known minimum.
pub fn is_known_minimum<F, const N: usize>(objective: &F, value: f64) -> bool
where
    F: ObjectiveFunction<N> + ?Sized,
{
    if !value.is_finite() {
        warn!("non-finite objective value {value} cannot be a known minimum");
        return false;
    }

    let rounded = six_places(value);
    objective
        .minima()
        .values()
        .iter()
        .any(|&reference| six_places(reference) == rounded)
}

/// Formats to six decimal places, folding negative zero into zero.
///
/// Rounding works on the exact binary value and breaks exact ties toward the
/// even digit, so `0.0078125` becomes `"0.007812"`. Ties only arise for
/// values whose binary expansion ends exactly at the seventh decimal.
fn six_places(value: f64) -> String {
    let formatted = format!("{value:.6}");
    if formatted == "-0.000000" {
        "0.000000".to_owned()
    } else {
        formatted
    }
}
