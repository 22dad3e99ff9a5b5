//! Interpolation helpers:
//! - lerp_f32 / lerp_array (component-wise blend)
//! - damp (frame-rate independent approach toward a target)

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Component-wise linear interpolation of fixed-size value arrays.
#[inline]
pub fn lerp_array<const N: usize>(a: &[f32; N], b: &[f32; N], t: f32) -> [f32; N] {
    std::array::from_fn(|i| lerp_f32(a[i], b[i], t))
}

/// Exponential damping toward `target`.
/// `lambda` is the decay rate per second; the blend factor is `1 - e^(-lambda * dt)`,
/// so equal wall-clock time gives equal convergence regardless of frame rate.
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    lerp_f32(current, target, 1.0 - (-lambda * dt).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp_f32(-2.0, 10.0, 0.0), -2.0);
        assert_eq!(lerp_f32(-2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp_f32(-2.0, 10.0, 0.5), 4.0);
    }

    #[test]
    fn lerp_array_blends_each_component() {
        let out = lerp_array(&[0.0, 1.0, 2.0], &[2.0, 1.0, 0.0], 0.25);
        assert_eq!(out, [0.5, 1.0, 1.5]);
        assert_eq!(lerp_vec3([0.0; 3], [4.0; 3], 0.5), [2.0; 3]);
    }

    #[test]
    fn damp_splits_the_same_regardless_of_step_count() {
        let one = damp(0.0, 1.0, 6.0, 0.5);
        let mut two = damp(0.0, 1.0, 6.0, 0.25);
        two = damp(two, 1.0, 6.0, 0.25);
        assert!((one - two).abs() < 1e-5, "one={one} two={two}");
        assert_eq!(damp(0.3, 1.0, 6.0, 0.0), 0.3);
    }
}
