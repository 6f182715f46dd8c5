use flexbox_engine::transforms::FastBlur;

use crate::build::RenderContext;
use crate::component::{CommonProps, HasCommon};

/// How a loaded bitmap is fitted into the image's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleType {
    #[default]
    FitCenter,
    Center,
    FitXy,
    CenterCrop,
    CenterInside,
}

/// An image loaded from a URL by the host's image loader.
#[derive(Debug, Clone, Default)]
pub struct NetworkImage {
    pub common: CommonProps,
    /// Empty when the image is not displayed, so nothing is fetched.
    pub url: String,
    pub scale_type: ScaleType,
    pub blur_radius: f32,
    pub blur_sampling: f32,
    /// Width / height; `0.0` leaves the box to `width` and `height`.
    pub aspect_ratio: f32,
}

impl NetworkImage {
    pub fn builder() -> ImageBuilder {
        ImageBuilder(NetworkImage { blur_sampling: 1.0, ..Default::default() })
    }

    /// The blur to register with the image loader, if any.
    pub fn blur_transform(&self) -> Option<FastBlur> {
        (self.blur_radius > 0.0).then(|| FastBlur::new(self.blur_radius, self.blur_sampling))
    }
}

pub struct ImageBuilder(NetworkImage);

impl ImageBuilder {
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.0.url = url.into();
        self
    }

    pub fn scale_type(&mut self, scale_type: ScaleType) -> &mut Self {
        self.0.scale_type = scale_type;
        self
    }

    /// Clamped to `0..=25`.
    pub fn blur_radius(&mut self, radius: f32) -> &mut Self {
        self.0.blur_radius = FastBlur::new(radius, 1.0).radius();
        self
    }

    /// At least 1.
    pub fn blur_sampling(&mut self, sampling: f32) -> &mut Self {
        self.0.blur_sampling = sampling.max(1.0);
        self
    }

    pub fn aspect_ratio(&mut self, ratio: f32) -> &mut Self {
        self.0.aspect_ratio = ratio.max(0.0);
        self
    }

    pub fn build(self, ctx: &RenderContext) -> NetworkImage {
        let mut image = self.0;
        image.common = image.common.scaled(ctx.density);
        image
    }
}

impl HasCommon for ImageBuilder {
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.0.common
    }
}
