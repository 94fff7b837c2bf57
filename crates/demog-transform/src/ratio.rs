//! Male/female ratio transform.

use demog_model::Selection;

/// Fractions of the male + female total; a zero total yields `(0.0, 0.0)`.
pub fn ratio_pair(male: f64, female: f64) -> (f64, f64) {
    let total = male + female;
    if total == 0.0 {
        return (0.0, 0.0);
    }
    (male / total, female / total)
}

/// Apply [`ratio_pair`] at every primary-axis position.
///
/// Non-Binary values are left untouched.
pub fn apply_ratio(selection: &mut Selection) {
    for (male, female) in selection.male.iter_mut().zip(selection.female.iter_mut()) {
        (*male, *female) = ratio_pair(*male, *female);
    }
}
