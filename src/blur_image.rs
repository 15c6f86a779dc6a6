/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::{
    blur, BlurError, BlurImage, BlurImageMut, BlurParameters, FastBlurChannels, ThreadingPolicy,
    VariantConfig,
};
use image::{DynamicImage, GrayImage, Rgb32FImage, RgbImage, Rgba32FImage, RgbaImage};

fn blur_samples(
    samples: &[f32],
    width: u32,
    height: u32,
    channels: FastBlurChannels,
    params: BlurParameters,
    config: &VariantConfig,
    threading_policy: ThreadingPolicy,
) -> Result<Vec<f32>, BlurError> {
    let src = BlurImage::borrow(samples, width, height, channels);
    let mut dst = BlurImageMut::alloc(width, height, channels);
    blur(&src, &mut dst, params, config, threading_policy)?;
    Ok(dst.data.borrow().to_vec())
}

fn blur_u8(
    samples: &[u8],
    width: u32,
    height: u32,
    channels: FastBlurChannels,
    params: BlurParameters,
    config: &VariantConfig,
    threading_policy: ThreadingPolicy,
) -> Result<Vec<u8>, BlurError> {
    const SCALE: f32 = 1. / 255.;
    let normalized = samples
        .iter()
        .map(|&x| x as f32 * SCALE)
        .collect::<Vec<f32>>();
    let blurred = blur_samples(
        &normalized,
        width,
        height,
        channels,
        params,
        config,
        threading_policy,
    )?;
    Ok(blurred
        .iter()
        .map(|&x| (x * 255.).round().clamp(0., 255.) as u8)
        .collect())
}

/// Blurs a [DynamicImage] with the given variant.
///
/// 8-bit luma, RGB and RGBA and 32-bit float RGB and RGBA keep their format,
/// every other format is converted to RGBA 32F first. 8-bit samples are normalized
/// to `[0, 1]` so any variant, packed tiles included, accepts them.
///
/// NOTE: Alpha must be associated if this image with alpha
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate.
/// * `params`: Radius, weight profile and edge handling, see [BlurParameters].
/// * `config`: Variant to run, see [VariantConfig].
/// * `threading_policy`: Threads usage policy.
pub fn blur_image(
    image: &DynamicImage,
    params: BlurParameters,
    config: &VariantConfig,
    threading_policy: ThreadingPolicy,
) -> Result<DynamicImage, BlurError> {
    let (width, height) = (image.width(), image.height());
    match image {
        DynamicImage::ImageLuma8(gray) => {
            let blurred = blur_u8(
                gray.as_raw(),
                width,
                height,
                FastBlurChannels::Plane,
                params,
                config,
                threading_policy,
            )?;
            let new_image =
                GrayImage::from_raw(width, height, blurred).ok_or(BlurError::InvalidArguments)?;
            Ok(DynamicImage::ImageLuma8(new_image))
        }
        DynamicImage::ImageRgb8(img) => {
            let blurred = blur_u8(
                img.as_raw(),
                width,
                height,
                FastBlurChannels::Channels3,
                params,
                config,
                threading_policy,
            )?;
            let new_image =
                RgbImage::from_raw(width, height, blurred).ok_or(BlurError::InvalidArguments)?;
            Ok(DynamicImage::ImageRgb8(new_image))
        }
        DynamicImage::ImageRgba8(img) => {
            let blurred = blur_u8(
                img.as_raw(),
                width,
                height,
                FastBlurChannels::Channels4,
                params,
                config,
                threading_policy,
            )?;
            let new_image =
                RgbaImage::from_raw(width, height, blurred).ok_or(BlurError::InvalidArguments)?;
            Ok(DynamicImage::ImageRgba8(new_image))
        }
        DynamicImage::ImageRgb32F(img) => {
            let blurred = blur_samples(
                img.as_raw(),
                width,
                height,
                FastBlurChannels::Channels3,
                params,
                config,
                threading_policy,
            )?;
            let new_image =
                Rgb32FImage::from_raw(width, height, blurred).ok_or(BlurError::InvalidArguments)?;
            Ok(DynamicImage::ImageRgb32F(new_image))
        }
        DynamicImage::ImageRgba32F(img) => {
            let blurred = blur_samples(
                img.as_raw(),
                width,
                height,
                FastBlurChannels::Channels4,
                params,
                config,
                threading_policy,
            )?;
            let new_image = Rgba32FImage::from_raw(width, height, blurred)
                .ok_or(BlurError::InvalidArguments)?;
            Ok(DynamicImage::ImageRgba32F(new_image))
        }
        _ => {
            let converted = image.to_rgba32f();
            let blurred = blur_samples(
                converted.as_raw(),
                width,
                height,
                FastBlurChannels::Channels4,
                params,
                config,
                threading_policy,
            )?;
            let new_image = Rgba32FImage::from_raw(width, height, blurred)
                .ok_or(BlurError::InvalidArguments)?;
            Ok(DynamicImage::ImageRgba32F(new_image))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlurProfile, InlineReduction};
    use image::{GrayAlphaImage, LumaA, Rgb};

    #[test]
    fn test_constant_image_is_preserved() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([10, 128, 250])));
        let params = BlurParameters::new(5, BlurProfile::Gaussian(0.));
        for config in VariantConfig::catalog() {
            let blurred = blur_image(&image, params, &config, ThreadingPolicy::Single).unwrap();
            assert_eq!(blurred, image, "{config:?}");
        }
    }

    #[test]
    fn test_other_formats_become_rgba32f() {
        let image =
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(17, 9, LumaA([51, 255])));
        let params = BlurParameters::new(2, BlurProfile::Box);
        let config = VariantConfig::inline_fused(InlineReduction::GroupShared);
        let blurred = blur_image(&image, params, &config, ThreadingPolicy::Single).unwrap();
        let DynamicImage::ImageRgba32F(rgba) = blurred else {
            panic!("Expected RGBA 32F output");
        };
        for px in rgba.pixels() {
            let diff = (px.0[0] - 0.2).abs();
            assert!(
                diff < 1e-5,
                "Diff expected to be less than 1e-5, but it was {diff}"
            );
            assert!((px.0[3] - 1.).abs() < 1e-5);
        }
    }
}
