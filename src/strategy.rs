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
use crate::convolve::{inline_fused_pass, naive_2d_pass, separable_pass, sliding_window_pass};
use crate::packing::check_packed_range;
use crate::tile::{Axis, ImageView, OutputView, PackedStorage, UnpackedStorage};
use crate::variant::{BlurVariant, InlineReduction, SampleStorage};
use crate::{
    BlurError, BlurImage, BlurImageMut, BlurKernelWeights, BlurProfile, EdgeMode,
    FastBlurChannels, ThreadingPolicy, VariantConfig,
};

/// Blur parameters shared by every variant
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlurParameters {
    /// Kernel radius, `0..=MAX_BLUR_RADIUS`
    pub radius: u32,
    pub profile: BlurProfile,
    pub edge_mode: EdgeMode,
}

impl BlurParameters {
    pub fn new(radius: u32, profile: BlurProfile) -> BlurParameters {
        BlurParameters {
            radius,
            profile,
            edge_mode: EdgeMode::default(),
        }
    }

    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> BlurParameters {
        self.edge_mode = edge_mode;
        self
    }

    pub fn weights(&self) -> Result<BlurKernelWeights, BlurError> {
        BlurKernelWeights::new(self.radius, self.profile)
    }
}

/// One way of blurring an image on thread groups.
///
/// Every implementation produces the same image up to floating point rounding,
/// they only differ in how work is split into dispatches and group shared memory.
pub trait BlurStrategy: Send + Sync {
    fn config(&self) -> &VariantConfig;

    /// Blurs `src` into `dst`.
    ///
    /// Owned `dst` storage is reshaped after `src`, borrowed storage must match it.
    /// Everything is validated before the first dispatch, on error `dst` is untouched.
    fn apply(
        &self,
        src: &BlurImage<f32>,
        dst: &mut BlurImageMut<f32>,
        weights: &BlurKernelWeights,
        edge_mode: EdgeMode,
        threading_policy: ThreadingPolicy,
    ) -> Result<(), BlurError>;
}

type SinglePass = fn(&ImageView, &OutputView, &BlurKernelWeights, &VariantConfig, EdgeMode, usize);

type AxisPass =
    fn(&ImageView, &OutputView, &BlurKernelWeights, &VariantConfig, EdgeMode, usize, Axis);

type FusedPass = fn(
    &ImageView,
    &OutputView,
    &BlurKernelWeights,
    &VariantConfig,
    EdgeMode,
    usize,
    InlineReduction,
);

/// Monomorphized kernel for tile storage and channel count
macro_rules! select_pass {
    ($pass:ident, $storage:expr, $channels:expr) => {
        match ($storage, $channels) {
            (SampleStorage::Unpacked, FastBlurChannels::Plane) => $pass::<UnpackedStorage, 1>,
            (SampleStorage::Unpacked, FastBlurChannels::Channels3) => $pass::<UnpackedStorage, 3>,
            (SampleStorage::Unpacked, FastBlurChannels::Channels4) => $pass::<UnpackedStorage, 4>,
            (SampleStorage::Packed, FastBlurChannels::Plane) => $pass::<PackedStorage, 1>,
            (SampleStorage::Packed, FastBlurChannels::Channels3) => $pass::<PackedStorage, 3>,
            (SampleStorage::Packed, FastBlurChannels::Channels4) => $pass::<PackedStorage, 4>,
        }
    };
}

/// Checks everything a dispatch relies on, then reshapes owned destinations.
fn prepare(
    config: &VariantConfig,
    src: &BlurImage<f32>,
    dst: &mut BlurImageMut<f32>,
    weights: &BlurKernelWeights,
) -> Result<(), BlurError> {
    config.validate(weights.radius())?;
    src.check_layout()?;
    if config.is_packed() {
        for &sample in src.samples() {
            check_packed_range(sample)?;
        }
    }
    // Owned storage is reshaped only once nothing else can fail.
    dst.check_layout(Some(src))?;
    src.size_matches_mut(dst)?;
    log::debug!(
        "{:?} {:?}: {}x{} {:?}, radius {}, groups {}x{}, grids {:?}",
        config.variant,
        config.storage,
        src.width,
        src.height,
        src.channels,
        weights.radius(),
        config.group.width,
        config.group.height,
        config.dispatches(src.width, src.height)
    );
    Ok(())
}

fn output_view<'a>(dst: &'a mut BlurImageMut<f32>) -> Result<OutputView<'a>, BlurError> {
    let stride = dst.row_stride() as usize;
    let width = dst.width as usize;
    let height = dst.height as usize;
    let cn = dst.channels.channels();
    OutputView::new(dst.data.borrow_mut(), stride, width, height, cn)
}

fn workers(config: &VariantConfig, policy: ThreadingPolicy, width: u32, height: u32) -> usize {
    let groups = config
        .dispatches(width, height)
        .iter()
        .map(|size| size.group_count())
        .max()
        .unwrap_or(1);
    policy.group_workers(width, height, groups)
}

/// Horizontal dispatch into an intermediate image, then vertical into `dst`.
fn run_two_pass(
    pass: AxisPass,
    config: &VariantConfig,
    src: &BlurImage<f32>,
    dst: &mut BlurImageMut<f32>,
    weights: &BlurKernelWeights,
    edge_mode: EdgeMode,
    workers: usize,
) -> Result<(), BlurError> {
    let cn = src.channels.channels();
    let width = src.width as usize;
    let height = src.height as usize;
    let source = ImageView::from_image(src)?;
    let dst = output_view(dst)?;

    let mut transient = vec![0f32; width * height * cn];
    let transient_view = OutputView::new(&mut transient, width * cn, width, height, cn)?;
    pass(&source, &transient_view, weights, config, edge_mode, workers, Axis::Horizontal);

    let transient = ImageView::new(&transient, width * cn, width, height, cn)?;
    pass(&transient, &dst, weights, config, edge_mode, workers, Axis::Vertical);
    Ok(())
}

fn expect_variant(config: &VariantConfig, expected: BlurVariant) -> Result<(), BlurError> {
    if config.variant != expected {
        return Err(BlurError::InvalidArguments);
    }
    Ok(())
}

/// Direct 2D weighted sum, the reference every other strategy is compared to
pub struct NaiveBlur {
    config: VariantConfig,
}

impl NaiveBlur {
    pub fn new(config: VariantConfig) -> NaiveBlur {
        NaiveBlur { config }
    }
}

impl BlurStrategy for NaiveBlur {
    fn config(&self) -> &VariantConfig {
        &self.config
    }

    fn apply(
        &self,
        src: &BlurImage<f32>,
        dst: &mut BlurImageMut<f32>,
        weights: &BlurKernelWeights,
        edge_mode: EdgeMode,
        threading_policy: ThreadingPolicy,
    ) -> Result<(), BlurError> {
        let config = &self.config;
        expect_variant(config, BlurVariant::Naive2D)?;
        prepare(config, src, dst, weights)?;
        let _dispatcher: SinglePass = select_pass!(naive_2d_pass, config.storage, src.channels);
        let workers = workers(config, threading_policy, src.width, src.height);
        let source = ImageView::from_image(src)?;
        let dst = output_view(dst)?;
        _dispatcher(&source, &dst, weights, config, edge_mode, workers);
        Ok(())
    }
}

pub struct SeparableBlur {
    config: VariantConfig,
}

impl SeparableBlur {
    pub fn new(config: VariantConfig) -> SeparableBlur {
        SeparableBlur { config }
    }
}

impl BlurStrategy for SeparableBlur {
    fn config(&self) -> &VariantConfig {
        &self.config
    }

    fn apply(
        &self,
        src: &BlurImage<f32>,
        dst: &mut BlurImageMut<f32>,
        weights: &BlurKernelWeights,
        edge_mode: EdgeMode,
        threading_policy: ThreadingPolicy,
    ) -> Result<(), BlurError> {
        let config = &self.config;
        expect_variant(config, BlurVariant::SeparableTwoPass)?;
        prepare(config, src, dst, weights)?;
        let _dispatcher: AxisPass = select_pass!(separable_pass, config.storage, src.channels);
        let workers = workers(config, threading_policy, src.width, src.height);
        run_two_pass(_dispatcher, config, src, dst, weights, edge_mode, workers)
    }
}

pub struct SlidingWindowBlur {
    config: VariantConfig,
}

impl SlidingWindowBlur {
    pub fn new(config: VariantConfig) -> SlidingWindowBlur {
        SlidingWindowBlur { config }
    }
}

impl BlurStrategy for SlidingWindowBlur {
    fn config(&self) -> &VariantConfig {
        &self.config
    }

    fn apply(
        &self,
        src: &BlurImage<f32>,
        dst: &mut BlurImageMut<f32>,
        weights: &BlurKernelWeights,
        edge_mode: EdgeMode,
        threading_policy: ThreadingPolicy,
    ) -> Result<(), BlurError> {
        let config = &self.config;
        expect_variant(config, BlurVariant::SlidingWindowTwoPass)?;
        prepare(config, src, dst, weights)?;
        let _dispatcher: AxisPass =
            select_pass!(sliding_window_pass, config.storage, src.channels);
        let workers = workers(config, threading_policy, src.width, src.height);
        run_two_pass(_dispatcher, config, src, dst, weights, edge_mode, workers)
    }
}

pub struct InlineFusedBlur {
    config: VariantConfig,
}

impl InlineFusedBlur {
    pub fn new(config: VariantConfig) -> InlineFusedBlur {
        InlineFusedBlur { config }
    }
}

impl BlurStrategy for InlineFusedBlur {
    fn config(&self) -> &VariantConfig {
        &self.config
    }

    fn apply(
        &self,
        src: &BlurImage<f32>,
        dst: &mut BlurImageMut<f32>,
        weights: &BlurKernelWeights,
        edge_mode: EdgeMode,
        threading_policy: ThreadingPolicy,
    ) -> Result<(), BlurError> {
        let config = &self.config;
        let reduction = match config.variant {
            BlurVariant::InlineFused(reduction) => reduction,
            _ => return Err(BlurError::InvalidArguments),
        };
        prepare(config, src, dst, weights)?;
        let _dispatcher: FusedPass = select_pass!(inline_fused_pass, config.storage, src.channels);
        let workers = workers(config, threading_policy, src.width, src.height);
        let source = ImageView::from_image(src)?;
        let dst = output_view(dst)?;
        _dispatcher(&source, &dst, weights, config, edge_mode, workers, reduction);
        Ok(())
    }
}

/// Blurs `src` into `dst` with the strategy `config` describes.
///
/// # Arguments
///
/// * `src`: Source image, `f32` samples, when `config` packs tiles samples must be in `[0, 1]`.
/// * `dst`: Destination, owned storage is resized to `src`, borrowed storage must match it.
/// * `params`: Radius, weight profile and edge handling.
/// * `config`: Variant, thread group shape and tile storage, see [VariantConfig].
/// * `threading_policy`: Workers executing the thread groups, see [ThreadingPolicy].
pub fn blur(
    src: &BlurImage<f32>,
    dst: &mut BlurImageMut<f32>,
    params: BlurParameters,
    config: &VariantConfig,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    let weights = params.weights()?;
    config
        .strategy()
        .apply(src, dst, &weights, params.edge_mode, threading_policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::MismatchedSize;
    use crate::variant::Footprint;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::num::NonZeroUsize;

    fn random_image(width: u32, height: u32, channels: FastBlurChannels, seed: u64) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..width as usize * height as usize * channels.channels())
            .map(|_| rng.gen_range(0f32..=1f32))
            .collect()
    }

    fn run(
        config: &VariantConfig,
        data: &[f32],
        width: u32,
        height: u32,
        channels: FastBlurChannels,
        params: BlurParameters,
        policy: ThreadingPolicy,
    ) -> Vec<f32> {
        let src = BlurImage::borrow(data, width, height, channels);
        let mut dst = BlurImageMut::default();
        blur(&src, &mut dst, params, config, policy).unwrap();
        assert_eq!(dst.width, width);
        assert_eq!(dst.height, height);
        dst.data.borrow().to_vec()
    }

    fn all_configs() -> Vec<VariantConfig> {
        VariantConfig::catalog()
            .into_iter()
            .flat_map(|c| [c, c.with_storage(SampleStorage::Packed)])
            .collect()
    }

    fn assert_close(a: &[f32], b: &[f32], tolerance: f32, what: &str) {
        assert_eq!(a.len(), b.len());
        for (i, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
            let diff = (x - y).abs();
            assert!(
                diff < tolerance,
                "Diff expected to be less than {tolerance}, but it was {diff} at {i} for {what}"
            );
        }
    }

    #[test]
    fn test_zero_radius_is_identity() {
        let (width, height) = (37u32, 141u32);
        let data = (0..width * height * 3)
            .map(|i| (i % 257) as f32 / 256.)
            .map(|x| x.min(1.))
            .collect::<Vec<f32>>();
        for config in all_configs() {
            let params = BlurParameters::new(0, BlurProfile::Gaussian(0.));
            let out = run(
                &config,
                &data,
                width,
                height,
                FastBlurChannels::Channels3,
                params,
                ThreadingPolicy::Single,
            );
            assert_eq!(out, data, "{config:?}");
        }
    }

    #[test]
    fn test_naive_matches_direct_convolution() {
        let (width, height) = (23u32, 19u32);
        let data = random_image(width, height, FastBlurChannels::Plane, 7);
        let params = BlurParameters::new(3, BlurProfile::Tent);
        let weights = params.weights().unwrap();
        let out = run(
            &VariantConfig::naive_2d(),
            &data,
            width,
            height,
            FastBlurChannels::Plane,
            params,
            ThreadingPolicy::Single,
        );
        let clamp = |v: i64, n: u32| v.clamp(0, n as i64 - 1) as usize;
        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let mut acc = 0f32;
                for ky in -3i64..=3 {
                    for kx in -3i64..=3 {
                        let w = weights.weight(ky as i32) * weights.weight(kx as i32);
                        acc += w * data[clamp(y + ky, height) * width as usize
                            + clamp(x + kx, width)];
                    }
                }
                let diff = (out[y as usize * width as usize + x as usize] - acc).abs();
                assert!(
                    diff < 1e-5,
                    "Diff expected to be less than 1e-5, but it was {diff} at {x}, {y}"
                );
            }
        }
    }

    #[test]
    fn test_variants_agree_with_naive() {
        let cases = [
            (FastBlurChannels::Plane, 300u32, 21u32, 10u32, BlurProfile::Gaussian(3.)),
            (FastBlurChannels::Channels3, 45, 139, 4, BlurProfile::Box),
            (FastBlurChannels::Channels4, 19, 270, 7, BlurProfile::Tent),
            (FastBlurChannels::Channels4, 3, 2, 10, BlurProfile::Gaussian(0.)),
        ];
        for (seed, &(channels, width, height, radius, profile)) in cases.iter().enumerate() {
            let data = random_image(width, height, channels, seed as u64);
            let params = BlurParameters::new(radius, profile);
            let reference = run(
                &VariantConfig::naive_2d(),
                &data,
                width,
                height,
                channels,
                params,
                ThreadingPolicy::Single,
            );
            for config in all_configs() {
                let out = run(
                    &config,
                    &data,
                    width,
                    height,
                    channels,
                    params,
                    ThreadingPolicy::Single,
                );
                let tolerance = if config.is_packed() { 1e-3 } else { 1e-4 };
                assert_close(&out, &reference, tolerance, &format!("{config:?} {channels:?}"));
            }
        }
    }

    #[test]
    fn test_edge_feature_is_clamped() {
        let (width, height) = (40u32, 33u32);
        let radius = 4u32;
        let mut data = vec![0f32; (width * height) as usize];
        for y in 0..height as usize {
            data[y * width as usize] = 1.;
        }
        let params = BlurParameters::new(radius, BlurProfile::Box);
        let taps = (2 * radius + 1) as f32;
        for config in all_configs() {
            let out = run(
                &config,
                &data,
                width,
                height,
                FastBlurChannels::Plane,
                params,
                ThreadingPolicy::Single,
            );
            for y in 0..height as usize {
                for x in 0..width as usize {
                    let hits = (radius as i64 + 1 - x as i64).max(0) as f32;
                    let expected = hits / taps;
                    let diff = (out[y * width as usize + x] - expected).abs();
                    assert!(
                        diff < 1e-3,
                        "Diff expected to be less than 1e-3, but it was {diff} at {x}, {y} for {config:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_workers_do_not_change_result() {
        let (width, height) = (530u32, 260u32);
        let data = random_image(width, height, FastBlurChannels::Plane, 99);
        let params = BlurParameters::new(5, BlurProfile::Gaussian(2.));
        let policy = ThreadingPolicy::Fixed(NonZeroUsize::new(4).unwrap());
        for config in VariantConfig::catalog() {
            let single = run(
                &config,
                &data,
                width,
                height,
                FastBlurChannels::Plane,
                params,
                ThreadingPolicy::Single,
            );
            let threaded = run(
                &config,
                &data,
                width,
                height,
                FastBlurChannels::Plane,
                params,
                policy,
            );
            assert_eq!(single, threaded, "{config:?}");
        }
    }

    #[test]
    fn test_errors_leave_destination_untouched() {
        let data = random_image(20, 20, FastBlurChannels::Plane, 1);
        let src = BlurImage::borrow(&data, 20, 20, FastBlurChannels::Plane);
        let mut target = vec![-1f32; 400];

        let mut dst = BlurImageMut::borrow(&mut target, 20, 20, FastBlurChannels::Plane);
        let params = BlurParameters::new(11, BlurProfile::Box);
        for config in VariantConfig::catalog() {
            assert_eq!(
                blur(&src, &mut dst, params, &config, ThreadingPolicy::Single),
                Err(BlurError::InvalidRadius(11))
            );
        }

        let mut oversized = VariantConfig::naive_2d();
        oversized.footprint = Footprint::new(128, 128);
        let params = BlurParameters::new(1, BlurProfile::Box);
        assert_eq!(
            blur(&src, &mut dst, params, &oversized, ThreadingPolicy::Single),
            Err(BlurError::SampleCountExceeded(MismatchedSize {
                expected: 16384,
                received: 130 * 130
            }))
        );
        assert!(target.iter().all(|&x| x == -1.));
    }

    #[test]
    fn test_packed_rejects_out_of_range() {
        let mut data = vec![0.5f32; 64];
        data[17] = 1.5;
        let src = BlurImage::borrow(&data, 8, 8, FastBlurChannels::Plane);
        let mut dst = BlurImageMut::default();
        let params = BlurParameters::new(2, BlurProfile::Box);
        for config in VariantConfig::catalog() {
            let packed = config.with_storage(SampleStorage::Packed);
            assert_eq!(
                blur(&src, &mut dst, params, &packed, ThreadingPolicy::Single),
                Err(BlurError::SampleOutOfRange(1.5))
            );
            assert!(blur(&src, &mut dst, params, &config, ThreadingPolicy::Single).is_ok());
        }
    }

    #[test]
    fn test_rejected_blur_keeps_owned_destination() {
        let mut data = vec![0.25f32; 64];
        data[9] = 2.;
        let src = BlurImage::borrow(&data, 8, 8, FastBlurChannels::Plane);
        let params = BlurParameters::new(1, BlurProfile::Box);
        for config in VariantConfig::catalog() {
            let mut dst = BlurImageMut::<f32>::default();
            assert_eq!(
                blur(
                    &src,
                    &mut dst,
                    params,
                    &config.with_storage(SampleStorage::Packed),
                    ThreadingPolicy::Single
                ),
                Err(BlurError::SampleOutOfRange(2.))
            );
            assert_eq!(dst.width, 0, "{config:?}");
            assert_eq!(dst.height, 0, "{config:?}");
            assert!(dst.data.borrow().is_empty());

            let mut dst = BlurImageMut::<f32>::default();
            assert_eq!(
                blur(
                    &src,
                    &mut dst,
                    BlurParameters::new(11, BlurProfile::Box),
                    &config,
                    ThreadingPolicy::Single
                ),
                Err(BlurError::InvalidRadius(11))
            );
            assert!(dst.data.borrow().is_empty());
        }
    }

    #[test]
    fn test_mismatched_destination_rejected() {
        let data = random_image(10, 10, FastBlurChannels::Plane, 2);
        let src = BlurImage::borrow(&data, 10, 10, FastBlurChannels::Plane);
        let mut target = vec![0f32; 99];
        let mut dst = BlurImageMut::borrow(&mut target, 11, 9, FastBlurChannels::Plane);
        let params = BlurParameters::new(1, BlurProfile::Box);
        assert_eq!(
            blur(
                &src,
                &mut dst,
                params,
                &VariantConfig::naive_2d(),
                ThreadingPolicy::Single
            ),
            Err(BlurError::ImagesMustMatch)
        );
    }

    #[test]
    fn test_strategy_refuses_foreign_config() {
        let data = random_image(10, 10, FastBlurChannels::Plane, 3);
        let src = BlurImage::borrow(&data, 10, 10, FastBlurChannels::Plane);
        let mut dst = BlurImageMut::default();
        let weights = BlurKernelWeights::new(1, BlurProfile::Box).unwrap();
        let strategy = SeparableBlur::new(VariantConfig::naive_2d());
        assert_eq!(
            strategy.apply(
                &src,
                &mut dst,
                &weights,
                EdgeMode::Clamp,
                ThreadingPolicy::Single
            ),
            Err(BlurError::InvalidArguments)
        );
        for config in VariantConfig::catalog() {
            assert_eq!(config.strategy().config(), &config);
        }
    }

    #[test]
    fn test_strided_source() {
        let (width, height) = (9u32, 7u32);
        let stride = 12u32;
        let mut padded = vec![7f32; (stride * height) as usize];
        let data = random_image(width, height, FastBlurChannels::Plane, 4);
        for y in 0..height as usize {
            for x in 0..width as usize {
                padded[y * stride as usize + x] = data[y * width as usize + x];
            }
        }
        let params = BlurParameters::new(2, BlurProfile::Gaussian(0.));
        let tight = run(
            &VariantConfig::sliding_window_two_pass(),
            &data,
            width,
            height,
            FastBlurChannels::Plane,
            params,
            ThreadingPolicy::Single,
        );
        let mut src = BlurImage::borrow(&padded, width, height, FastBlurChannels::Plane);
        src.stride = stride;
        let mut dst = BlurImageMut::default();
        blur(
            &src,
            &mut dst,
            params,
            &VariantConfig::sliding_window_two_pass().with_storage(SampleStorage::Packed),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_close(dst.data.borrow(), &tight, 1e-3, "strided");
    }
}
