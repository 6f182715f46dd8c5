//! Image transformations registered with the host's image loader.
//!
//! The loader calls [`Transformation::transform`] on decoded bitmaps and asks
//! each transformation to contribute to the cache key, so equal parameters
//! hit the same cached result.

mod blur;

pub use blur::FastBlur;

use image::RgbaImage;

use crate::error::EngineError;

/// Target size meaning "keep the source dimensions".
pub const SIZE_ORIGINAL: i32 = i32::MIN;

/// `true` if `width` and `height` are each positive or [`SIZE_ORIGINAL`].
pub fn is_valid_dimensions(width: i32, height: i32) -> bool {
    let valid = |d: i32| d > 0 || d == SIZE_ORIGINAL;
    valid(width) && valid(height)
}

/// Sink for cache-key bytes.
pub trait CacheKeyDigest {
    fn update(&mut self, bytes: &[u8]);
}

impl CacheKeyDigest for Vec<u8> {
    fn update(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl CacheKeyDigest for blake3::Hasher {
    fn update(&mut self, bytes: &[u8]) {
        blake3::Hasher::update(self, bytes);
    }
}

/// The pixel-blur primitive. Treated as opaque by the transformations.
pub trait BlurPrimitive: Send + Sync {
    fn blur(&self, bitmap: &RgbaImage, radius: f32) -> RgbaImage;
}

/// Gaussian blur on the CPU via `image::imageops`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GaussianBlur;

impl BlurPrimitive for GaussianBlur {
    fn blur(&self, bitmap: &RgbaImage, radius: f32) -> RgbaImage {
        // Same radius → sigma mapping as the platform blur intrinsic.
        let sigma = 0.4 * radius + 0.6;
        image::imageops::blur(bitmap, sigma)
    }
}

/// A bitmap-to-bitmap step the image loader can apply and cache.
pub trait Transformation: Send + Sync {
    /// Transform `resource` for display at `out_width` × `out_height`.
    ///
    /// Fails before touching any pixels if the target size is invalid.
    fn transform(
        &self,
        ctx: &dyn BlurPrimitive,
        resource: RgbaImage,
        out_width: i32,
        out_height: i32,
    ) -> Result<RgbaImage, EngineError>;

    /// Feed everything that affects the output into `digest`.
    fn update_cache_key(&self, digest: &mut dyn CacheKeyDigest);
}
