//! Shape samplers producing raw candidate points for random plans.
//!
//! Each sampler maps `(rng, count, max_width, max_height)` to `count` points centered on the
//! origin. [`Shape::sampler`] is the dispatch table from shape to sampler.
use mint::Vector2;
use rand::Rng;

pub mod ellipse;
pub mod rectangle;

pub use ellipse::random_points_in_ellipse;
pub use rectangle::random_points_in_rectangle;

/// Signature shared by all shape samplers.
pub type ShapeSampler = fn(&mut dyn Rng, usize, f64, f64) -> Vec<Vector2<f64>>;

/// Region shape random points are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Shape {
    #[default]
    Ellipse,
    Rectangle,
}

impl Shape {
    /// Sampler used for this shape.
    pub fn sampler(self) -> ShapeSampler {
        match self {
            Shape::Ellipse => random_points_in_ellipse,
            Shape::Rectangle => random_points_in_rectangle,
        }
    }
}

/// Generate a random float in the range [0, 1) with 53 bits of precision.
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[cfg(test)]
pub(crate) mod test_support {
    use core::convert::Infallible;

    use rand::TryRng;

    /// RNG returning the same word forever.
    pub(crate) struct FixedRng {
        pub(crate) value: u64,
    }

    impl TryRng for FixedRng {
        type Error = Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Infallible> {
            Ok((self.value >> 32) as u32)
        }

        fn try_next_u64(&mut self) -> Result<u64, Infallible> {
            Ok(self.value)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Infallible> {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
            Ok(())
        }
    }

    /// RNG cycling through a fixed list of words.
    pub(crate) struct SeqRng {
        pub(crate) values: Vec<u64>,
        pub(crate) next: usize,
    }

    impl SeqRng {
        /// Words that [`super::rand01`] maps exactly onto `fractions`.
        pub(crate) fn from_fractions(fractions: &[f64]) -> Self {
            let values = fractions
                .iter()
                .map(|f| ((f * (1u64 << 53) as f64) as u64) << 11)
                .collect();
            Self { values, next: 0 }
        }
    }

    impl TryRng for SeqRng {
        type Error = Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Infallible> {
            Ok((self.try_next_u64()? >> 32) as u32)
        }

        fn try_next_u64(&mut self) -> Result<u64, Infallible> {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            Ok(v)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Infallible> {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.try_next_u64()?.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
            Ok(())
        }
    }
}
