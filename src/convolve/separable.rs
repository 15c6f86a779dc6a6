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

/// One group of a 1D pass: `footprint.width` outputs along the scan axis on
/// `footprint.height` lines, each the direct weighted sum of `2r + 1` tile cells.
fn separable_group<S: TileStorage, const CN: usize>(
    group: &ThreadGroup,
    src: &ImageView,
    dst: &OutputView,
    weights: &BlurKernelWeights,
    footprint: Footprint,
    axis: Axis,
    edge_mode: EdgeMode,
) {
    let radius = weights.radius() as usize;
    let kernel = weights.as_slice();
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
    group.lanes(|lane| {
        for item in group.lane_items(lane, scan_footprint * line_footprint) {
            let s = item % scan_footprint;
            let l = item / scan_footprint;
            if scan_origin + s >= scan_len || line_origin + l >= line_len {
                continue;
            }
            let acc = row_sum(tile, kernel, s, l);
            let (x, y) = axis.to_image(scan_origin + s, line_origin + l);
            unsafe {
                dst.write(x, y, acc);
            }
        }
    });
}

/// One dispatch of the separable blur along `axis`, the caller provides the
/// intermediate surface and sequences the two passes.
pub(crate) fn separable_pass<S: TileStorage, const CN: usize>(
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
        Axis::Horizontal => "separable horizontal",
        Axis::Vertical => "separable vertical",
    };
    dispatch(name, size, config.group, workers, |group| {
        separable_group::<S, CN>(group, src, dst, weights, footprint, axis, edge_mode);
    });
}
