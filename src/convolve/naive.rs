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
use crate::convolve::row_sum;
use crate::tile::{load_tile, Axis, ImageView, OutputView, Tile, TileRegion, TileStorage};
use crate::variant::Footprint;
use crate::{BlurKernelWeights, EdgeMode, VariantConfig};

/// One group of the naive kernel: loads a footprint plus halo in both axes and
/// computes every output with the full `(2r + 1)^2` weighted sum.
fn naive_2d_group<S: TileStorage, const CN: usize>(
    group: &ThreadGroup,
    src: &ImageView,
    dst: &OutputView,
    weights: &BlurKernelWeights,
    footprint: Footprint,
    edge_mode: EdgeMode,
) {
    let radius = weights.radius() as usize;
    let kernel = weights.as_slice();
    let fw = footprint.width as usize;
    let fh = footprint.height as usize;
    let id = group.id();
    let origin_x = id.x as usize * fw;
    let origin_y = id.y as usize * fh;

    let mut tile = Tile::<S, CN>::new(fw + 2 * radius, fh + 2 * radius);
    load_tile(
        group,
        &mut tile,
        src,
        TileRegion {
            scan_origin: origin_x as i64 - radius as i64,
            line_origin: origin_y as i64 - radius as i64,
            axis: Axis::Horizontal,
        },
        edge_mode,
    );

    let tile = &tile;
    group.lanes(|lane| {
        for item in group.lane_items(lane, fw * fh) {
            let ox = item % fw;
            let oy = item / fw;
            let x = origin_x + ox;
            let y = origin_y + oy;
            if x >= dst.width || y >= dst.height {
                continue;
            }
            let mut acc = [0f32; CN];
            for (ky, &wy) in kernel.iter().enumerate() {
                let row = row_sum(tile, kernel, ox, oy + ky);
                for (a, v) in acc.iter_mut().zip(row) {
                    *a += wy * v;
                }
            }
            unsafe {
                dst.write(x, y, acc);
            }
        }
    });
}

pub(crate) fn naive_2d_pass<S: TileStorage, const CN: usize>(
    src: &ImageView,
    dst: &OutputView,
    weights: &BlurKernelWeights,
    config: &VariantConfig,
    edge_mode: EdgeMode,
    workers: usize,
) {
    let size = DispatchSize::covering(
        src.width as u32,
        src.height as u32,
        config.footprint.width,
        config.footprint.height,
    );
    dispatch("naive 2d", size, config.group, workers, |group| {
        naive_2d_group::<S, CN>(group, src, dst, weights, config.footprint, edge_mode);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::GroupId;
    use crate::tile::UnpackedStorage;
    use crate::BlurProfile;

    #[test]
    fn test_partial_group_skips_outside_writes() {
        // 20x20 image: group (1, 1) only owns the 4x4 corner
        let (width, height) = (20usize, 20usize);
        let data = (0..width * height)
            .map(|i| (i % 11) as f32 / 11.)
            .collect::<Vec<f32>>();
        let mut out = vec![-1f32; width * height];
        let src = ImageView::new(&data, width, width, height, 1).unwrap();
        let dst = OutputView::new(&mut out, width, width, height, 1).unwrap();
        let weights = BlurKernelWeights::new(0, BlurProfile::Box).unwrap();
        let config = VariantConfig::naive_2d();
        let group = ThreadGroup::new(GroupId { x: 1, y: 1 }, config.group);
        naive_2d_group::<UnpackedStorage, 1>(
            &group,
            &src,
            &dst,
            &weights,
            config.footprint,
            EdgeMode::Clamp,
        );
        for y in 0..height {
            for x in 0..width {
                let v = out[y * width + x];
                if x >= 16 && y >= 16 {
                    assert_eq!(v, data[y * width + x]);
                } else {
                    assert_eq!(v, -1.);
                }
            }
        }
    }
}
