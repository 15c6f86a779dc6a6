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
use crate::compute::{dispatch, DispatchSize, ThreadGroup};
use crate::tile::{load_tile, Axis, ImageView, OutputView, Tile, TileRegion, TileStorage};
use crate::variant::Footprint;
use crate::weights::BoxTerm;
use crate::{BlurKernelWeights, EdgeMode, VariantConfig};

/// Running weighted sum along one scan line.
///
/// The kernel is held as centered boxes (see [BlurKernelWeights]); each box keeps a
/// plain running sum, so moving one sample forward costs one add and one subtract
/// per box regardless of the radius. A box kernel is a single term.
pub(crate) struct SlidingWindow<'a, const CN: usize> {
    terms: &'a [BoxTerm],
    sums: Vec<[f32; CN]>,
    center: usize,
}

impl<'a, const CN: usize> SlidingWindow<'a, CN> {
    pub(crate) fn new(terms: &'a [BoxTerm]) -> Self {
        SlidingWindow {
            terms,
            sums: vec![[0f32; CN]; terms.len()],
            center: 0,
        }
    }

    /// Sums every box directly around `center`, reading `center - r..=center + r`.
    pub(crate) fn seed(&mut self, center: usize, fetch: impl Fn(usize) -> [f32; CN]) {
        self.center = center;
        for (term, sum) in self.terms.iter().zip(self.sums.iter_mut()) {
            let mut acc = [0f32; CN];
            for i in center - term.radius..=center + term.radius {
                for (a, v) in acc.iter_mut().zip(fetch(i)) {
                    *a += v;
                }
            }
            *sum = acc;
        }
    }

    /// Moves the window one sample forward, sample `center + 1 + r` enters each box
    /// and sample `center - r` leaves it.
    pub(crate) fn advance(&mut self, fetch: impl Fn(usize) -> [f32; CN]) {
        let center = self.center;
        for (term, sum) in self.terms.iter().zip(self.sums.iter_mut()) {
            if term.radius == 0 {
                *sum = fetch(center + 1);
                continue;
            }
            let entering = fetch(center + 1 + term.radius);
            let leaving = fetch(center - term.radius);
            for ((s, e), l) in sum.iter_mut().zip(entering).zip(leaving) {
                *s += e - l;
            }
        }
        self.center = center + 1;
    }

    #[inline]
    pub(crate) fn value(&self) -> [f32; CN] {
        let mut acc = [0f32; CN];
        for (term, sum) in self.terms.iter().zip(self.sums.iter()) {
            for (a, &v) in acc.iter_mut().zip(sum.iter()) {
                *a += term.weight * v;
            }
        }
        acc
    }

    #[cfg(test)]
    pub(crate) fn center(&self) -> usize {
        self.center
    }
}

/// One group of the sliding window pass. All lanes load the tile, then one lane
/// per scan line seeds a window at the first output and walks it to the last.
fn sliding_window_group<S: TileStorage, const CN: usize>(
    group: &ThreadGroup,
    src: &ImageView,
    dst: &OutputView,
    weights: &BlurKernelWeights,
    footprint: Footprint,
    axis: Axis,
    edge_mode: EdgeMode,
) {
    let radius = weights.radius() as usize;
    let scan_footprint = footprint.width as usize;
    let line_footprint = footprint.height as usize;
    let (scan_group, line_group) = axis.split(group.id());
    let scan_origin = scan_group as usize * scan_footprint;
    let line_origin = line_group as usize * line_footprint;
    let (scan_len, line_len) = axis.extent(src.width, src.height);

    let mut tile = Tile::<S, CN>::new(scan_footprint + 2 * radius, line_footprint);
    load_tile(
        group,
        &mut tile,
        src,
        TileRegion {
            scan_origin: scan_origin as i64 - radius as i64,
            line_origin: line_origin as i64,
            axis,
        },
        edge_mode,
    );

    let tile = &tile;
    let visible = scan_footprint.min(scan_len - scan_origin);
    group.lanes(|lane| {
        for l in group.lane_items(lane, line_footprint) {
            if line_origin + l >= line_len {
                continue;
            }
            let fetch = |i: usize| tile.fetch(i, l);
            let mut window = SlidingWindow::<CN>::new(weights.box_terms());
            window.seed(radius, fetch);
            for s in 0..visible {
                if s != 0 {
                    window.advance(fetch);
                }
                let (x, y) = axis.to_image(scan_origin + s, line_origin + l);
                unsafe {
                    dst.write(x, y, window.value());
                }
            }
        }
    });
}

/// One dispatch of the sliding window blur along `axis`.
pub(crate) fn sliding_window_pass<S: TileStorage, const CN: usize>(
    src: &ImageView,
    dst: &OutputView,
    weights: &BlurKernelWeights,
    config: &VariantConfig,
    edge_mode: EdgeMode,
    workers: usize,
    axis: Axis,
) {
    let footprint = config.footprint;
    let (fx, fy) = axis.to_image(footprint.width, footprint.height);
    let size = DispatchSize::covering(src.width as u32, src.height as u32, fx, fy);
    let name = match axis {
        Axis::Horizontal => "sliding window horizontal",
        Axis::Vertical => "sliding window vertical",
    };
    dispatch(name, size, config.group, workers, |group| {
        sliding_window_group::<S, CN>(group, src, dst, weights, footprint, axis, edge_mode);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlurProfile;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn direct(line: &[f32], weights: &BlurKernelWeights, center: usize) -> f32 {
        let radius = weights.radius() as usize;
        weights
            .as_slice()
            .iter()
            .enumerate()
            .map(|(k, &w)| w * line[center + k - radius])
            .sum()
    }

    fn random_line(len: usize, seed: u64) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(0f32..1f32)).collect()
    }

    #[test]
    fn test_seed_covers_full_window() {
        // A spike exactly at the window edge must be part of the seeded sum.
        let radius = 3usize;
        let weights = BlurKernelWeights::new(radius as u32, BlurProfile::Box).unwrap();
        let mut line = vec![0f32; 32];
        line[0] = 7.;
        line[2 * radius] = 7.;
        let mut window = SlidingWindow::<1>::new(weights.box_terms());
        window.seed(radius, |i| [line[i]]);
        let expected = direct(&line, &weights, radius);
        assert!((window.value()[0] - expected).abs() < 1e-6);
        assert!((window.value()[0] - 2.).abs() < 1e-6);
        window.advance(|i| [line[i]]);
        assert_eq!(window.center(), radius + 1);
        assert!((window.value()[0] - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_matches_direct_sum_everywhere() {
        for profile in [
            BlurProfile::Box,
            BlurProfile::Tent,
            BlurProfile::Gaussian(2.),
        ] {
            for radius in [0u32, 1, 4, 10] {
                let weights = BlurKernelWeights::new(radius, profile).unwrap();
                let r = radius as usize;
                let line = random_line(300, radius as u64);
                let mut window = SlidingWindow::<1>::new(weights.box_terms());
                window.seed(r, |i| [line[i]]);
                for center in r..line.len() - r {
                    if center != r {
                        window.advance(|i| [line[i]]);
                    }
                    let expected = direct(&line, &weights, center);
                    let diff = (window.value()[0] - expected).abs();
                    assert!(
                        diff < 1e-4,
                        "Diff expected to be less than 1e-4, but it was {diff} at {center} for {profile:?} radius {radius}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_radius_is_exact() {
        let weights = BlurKernelWeights::new(0, BlurProfile::Box).unwrap();
        let line = random_line(64, 3);
        let mut window = SlidingWindow::<1>::new(weights.box_terms());
        window.seed(0, |i| [line[i]]);
        for (center, &v) in line.iter().enumerate() {
            if center != 0 {
                window.advance(|i| [line[i]]);
            }
            assert_eq!(window.value()[0], v);
        }
    }

    fn drift_after(len: usize) -> f32 {
        let radius = 10usize;
        let weights = BlurKernelWeights::new(radius as u32, BlurProfile::Gaussian(4.)).unwrap();
        let line = random_line(len + 2 * radius, 11);
        let mut window = SlidingWindow::<1>::new(weights.box_terms());
        window.seed(radius, |i| [line[i]]);
        for _ in 1..len {
            window.advance(|i| [line[i]]);
        }
        (window.value()[0] - direct(&line, &weights, radius + len - 1)).abs()
    }

    #[test]
    fn test_drift_is_bounded_by_line_length() {
        for len in [256usize, 4096, 65536] {
            let drift = drift_after(len);
            let bound = len as f32 * f32::EPSILON * 4.;
            assert!(
                drift <= bound,
                "Drift expected to be less than {bound}, but it was {drift} after {len} samples"
            );
        }
    }

    #[test]
    fn test_multichannel_window() {
        let weights = BlurKernelWeights::new(2, BlurProfile::Tent).unwrap();
        let line = random_line(40, 5);
        let mut window = SlidingWindow::<2>::new(weights.box_terms());
        let fetch = |i: usize| [line[i], 1. - line[i]];
        window.seed(2, fetch);
        for center in 3..38 {
            window.advance(fetch);
            let value = window.value();
            let expected = direct(&line, &weights, center);
            assert!((value[0] - expected).abs() < 1e-5);
            assert!((value[1] - (1. - expected)).abs() < 1e-5);
        }
    }
}
