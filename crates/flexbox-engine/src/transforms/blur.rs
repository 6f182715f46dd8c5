use std::fmt;
use std::hash::{Hash, Hasher};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::EngineError;

use super::{is_valid_dimensions, BlurPrimitive, CacheKeyDigest, Transformation};

const ID: &str = "flexbox_engine::transforms::FastBlur";

/// Downsample-then-blur.
///
/// `radius` is clamped to `[0, 25]` and `sampling` to `>= 1` at construction;
/// the clamped values are what the cache key and equality see.
#[derive(Debug, Clone, Copy)]
pub struct FastBlur {
    radius: f32,
    sampling: f32,
}

impl FastBlur {
    pub const MAX_RADIUS: f32 = 25.0;

    /// A NaN radius means no blur.
    pub fn new(radius: f32, sampling: f32) -> Self {
        let radius = if radius.is_nan() { 0.0 } else { radius.clamp(0.0, Self::MAX_RADIUS) };
        Self { radius, sampling: sampling.max(1.0) }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn sampling(&self) -> f32 {
        self.sampling
    }

    fn downsample(&self, input: &RgbaImage) -> RgbaImage {
        let w = ((input.width() as f32 / self.sampling) as u32).max(1);
        let h = ((input.height() as f32 / self.sampling) as u32).max(1);
        imageops::resize(input, w, h, FilterType::Triangle)
    }
}

impl Transformation for FastBlur {
    fn transform(
        &self,
        ctx: &dyn BlurPrimitive,
        resource: RgbaImage,
        out_width: i32,
        out_height: i32,
    ) -> Result<RgbaImage, EngineError> {
        if !is_valid_dimensions(out_width, out_height) {
            return Err(EngineError::InvalidDimensions { width: out_width, height: out_height });
        }
        if self.radius <= 0.0 {
            return Ok(resource);
        }
        if self.sampling == 1.0 {
            return Ok(ctx.blur(&resource, self.radius));
        }
        // The scaled copy and the source are both dropped on the way out,
        // whether or not the primitive unwinds.
        let scaled = self.downsample(&resource);
        drop(resource);
        Ok(ctx.blur(&scaled, self.radius))
    }

    fn update_cache_key(&self, digest: &mut dyn CacheKeyDigest) {
        digest.update(ID.as_bytes());
        let mut params = [0u8; 8];
        params[..4].copy_from_slice(&self.radius.to_be_bytes());
        params[4..].copy_from_slice(&self.sampling.to_be_bytes());
        digest.update(&params);
    }
}

impl PartialEq for FastBlur {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius && self.sampling == other.sampling
    }
}

impl Hash for FastBlur {
    fn hash<S: Hasher>(&self, state: &mut S) {
        ID.hash(state);
        self.radius.to_bits().hash(state);
        self.sampling.to_bits().hash(state);
    }
}

impl fmt::Display for FastBlur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID}(radius={}, sampling={})", self.radius, self.sampling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::{GaussianBlur, SIZE_ORIGINAL};
    use image::Rgba;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key(b: &FastBlur) -> Vec<u8> {
        let mut v = Vec::new();
        b.update_cache_key(&mut v);
        v
    }

    fn checker(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 { Rgba([255, 255, 255, 255]) } else { Rgba([0, 0, 0, 255]) }
        })
    }

    /// Records calls and returns the input unchanged.
    #[derive(Default)]
    struct CountingBlur(AtomicUsize);

    impl BlurPrimitive for CountingBlur {
        fn blur(&self, bitmap: &RgbaImage, _radius: f32) -> RgbaImage {
            self.0.fetch_add(1, Ordering::SeqCst);
            bitmap.clone()
        }
    }

    // ── parameters ────────────────────────────────────────────────────────

    #[test]
    fn radius_and_sampling_are_clamped() {
        let b = FastBlur::new(80.0, 0.2);
        assert_eq!(b.radius(), 25.0);
        assert_eq!(b.sampling(), 1.0);
        assert_eq!(FastBlur::new(-3.0, 4.0).radius(), 0.0);
    }

    #[test]
    fn nan_parameters_clamp_to_the_floor() {
        let b = FastBlur::new(f32::NAN, f32::NAN);
        assert_eq!(b.radius(), 0.0);
        assert_eq!(b.sampling(), 1.0);
        assert_eq!(b, FastBlur::new(0.0, 1.0));

        let prim = CountingBlur::default();
        let src = checker(4, 4);
        assert_eq!(FastBlur::new(f32::NAN, 2.0).transform(&prim, src.clone(), 4, 4).unwrap(), src);
        assert_eq!(prim.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn equality_sees_clamped_values() {
        assert_eq!(FastBlur::new(30.0, 1.0), FastBlur::new(25.0, 0.5));
        assert_ne!(FastBlur::new(10.0, 1.0), FastBlur::new(10.0, 2.0));
    }

    // ── cache key ─────────────────────────────────────────────────────────

    #[test]
    fn cache_key_is_prefix_then_eight_big_endian_bytes() {
        let k = key(&FastBlur::new(10.0, 2.0));
        assert_eq!(&k[..ID.len()], ID.as_bytes());
        let tail = &k[ID.len()..];
        assert_eq!(tail.len(), 8);
        assert_eq!(&tail[..4], &10.0f32.to_be_bytes());
        assert_eq!(&tail[4..], &2.0f32.to_be_bytes());
    }

    #[test]
    fn cache_key_is_deterministic() {
        assert_eq!(key(&FastBlur::new(7.5, 3.0)), key(&FastBlur::new(7.5, 3.0)));
    }

    #[test]
    fn cache_keys_differ_per_parameter() {
        let mut seen = std::collections::HashSet::new();
        for r in 0..=25 {
            for s in 1..=4 {
                assert!(seen.insert(key(&FastBlur::new(r as f32, s as f32))), "collision at r={r} s={s}");
            }
        }
    }

    #[test]
    fn cache_key_hashes_through_blake3() {
        let mut a = blake3::Hasher::new();
        let mut b = blake3::Hasher::new();
        FastBlur::new(5.0, 1.0).update_cache_key(&mut a);
        FastBlur::new(5.0, 1.0).update_cache_key(&mut b);
        assert_eq!(a.finalize(), b.finalize());
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn rejects_invalid_dimensions_before_blurring() {
        let prim = CountingBlur::default();
        let b = FastBlur::new(10.0, 1.0);
        for (w, h) in [(0, 10), (10, 0), (-5, 10), (10, -1)] {
            let err = b.transform(&prim, checker(4, 4), w, h).unwrap_err();
            assert!(matches!(err, EngineError::InvalidDimensions { .. }));
        }
        assert_eq!(prim.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn size_original_is_accepted() {
        let prim = CountingBlur::default();
        FastBlur::new(10.0, 1.0).transform(&prim, checker(4, 4), SIZE_ORIGINAL, SIZE_ORIGINAL).unwrap();
        assert_eq!(prim.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_radius_returns_input_untouched() {
        let prim = CountingBlur::default();
        let src = checker(8, 8);
        let out = FastBlur::new(0.0, 4.0).transform(&prim, src.clone(), 8, 8).unwrap();
        assert_eq!(out, src);
        assert_eq!(prim.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn sampling_downscales_before_blurring() {
        let out = FastBlur::new(5.0, 4.0).transform(&CountingBlur::default(), checker(16, 8), 16, 8).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
    }

    #[test]
    fn downscale_never_reaches_zero() {
        let out = FastBlur::new(5.0, 10.0).transform(&CountingBlur::default(), checker(3, 3), 3, 3).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
    }

    #[test]
    fn gaussian_blur_smooths_a_checkerboard() {
        let out = FastBlur::new(4.0, 1.0).transform(&GaussianBlur, checker(16, 16), 16, 16).unwrap();
        assert_eq!(out.dimensions(), (16, 16));
        let Rgba([r, ..]) = *out.get_pixel(8, 8);
        assert!(r > 60 && r < 195, "center not smoothed: {r}");
    }

    #[test]
    fn display_names_parameters() {
        assert_eq!(
            FastBlur::new(3.0, 2.0).to_string(),
            "flexbox_engine::transforms::FastBlur(radius=3, sampling=2)"
        );
    }
}
