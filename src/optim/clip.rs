//! Gradient clipping utilities

use super::optimizer::ParameterSet;

/// Clip a gradient by its global L2 norm
///
/// If the norm exceeds `max_norm` every entry is scaled by
/// `max_norm / norm`, preserving direction.
///
/// # Returns
/// The norm before clipping
pub fn clip_grad_norm<P: ParameterSet>(gradient: &mut P, max_norm: f32) -> f32 {
    let global_norm = gradient.norm();
    if global_norm > max_norm && global_norm > 0.0 {
        gradient.scale(max_norm / global_norm);
    }
    global_norm
}
