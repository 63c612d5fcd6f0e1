//! Ellipse shape sampler.
use std::f64::consts::TAU;

use mint::Vector2;
use rand::Rng;

use crate::sampling::rand01;

/// Random points inside the ellipse inscribed in a `max_width x max_height` box centered on the
/// origin.
///
/// Each point draws three uniforms: a radial fraction per axis and an angle. The x fraction is
/// scaled by `cos(angle)` and the y fraction by `sin(angle)`. The result stays inside the
/// ellipse but is not uniform over its area; callers rely on this density profile, so it is kept
/// as is.
pub fn random_points_in_ellipse(
    rng: &mut dyn Rng,
    count: usize,
    max_width: f64,
    max_height: f64,
) -> Vec<Vector2<f64>> {
    let half_w = max_width * 0.5;
    let half_h = max_height * 0.5;

    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let fx = rand01(rng);
        let fy = rand01(rng);
        let angle = rand01(rng) * TAU;
        out.push(Vector2 {
            x: fx * half_w * angle.cos(),
            y: fy * half_h * angle.sin(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::test_support::SeqRng;

    #[test]
    fn points_stay_inside_ellipse() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts = random_points_in_ellipse(&mut rng, 500, 20.0, 10.0);
        assert_eq!(pts.len(), 500);
        for p in pts {
            let r = (p.x / 10.0).powi(2) + (p.y / 5.0).powi(2);
            assert!(r <= 1.0 + 1e-12, "{p:?} outside ellipse");
        }
    }

    #[test]
    fn axes_scale_independently() {
        // fx = 1/2, fy = 1/4, angle = 1/8 turn
        let mut rng = SeqRng::from_fractions(&[0.5, 0.25, 0.125]);
        let p = random_points_in_ellipse(&mut rng, 1, 8.0, 4.0)[0];
        let c = std::f64::consts::FRAC_1_SQRT_2;
        assert!((p.x - 0.5 * 4.0 * c).abs() < 1e-12);
        assert!((p.y - 0.25 * 2.0 * c).abs() < 1e-12);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_points_in_ellipse(&mut rng, 0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn determinism_for_same_seed() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        assert_eq!(
            random_points_in_ellipse(&mut rng_a, 16, 3.0, 3.0),
            random_points_in_ellipse(&mut rng_b, 16, 3.0, 3.0)
        );
    }
}
