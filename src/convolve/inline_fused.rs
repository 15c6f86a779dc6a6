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
use crate::convolve::{row_sum, SlidingWindow};
use crate::tile::{load_tile, Axis, ImageView, OutputView, Tile, TileRegion, TileStorage};
use crate::variant::InlineReduction;
use crate::{BlurKernelWeights, EdgeMode, VariantConfig};

/// Both axes in one dispatch.
///
/// The group loads its footprint plus halo once, then walks it in `row_blocks`
/// horizontal blocks. For each block the rows it needs are reduced horizontally
/// into the `rows` tile, then one lane per column moves a vertical window over the
/// block. Vertical windows live across blocks, so only the first block seeds them.
fn inline_fused_group<S: TileStorage, const CN: usize>(
    group: &ThreadGroup,
    src: &ImageView,
    dst: &OutputView,
    weights: &BlurKernelWeights,
    config: &VariantConfig,
    reduction: InlineReduction,
    edge_mode: EdgeMode,
) {
    let radius = weights.radius() as usize;
    let kernel = weights.as_slice();
    let fw = config.footprint.width as usize;
    let fh = config.footprint.height as usize;
    let block_height = fh / config.row_blocks as usize;
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

    let mut rows = Tile::<S, CN>::new(fw, fh + 2 * radius);
    let mut windows: Vec<SlidingWindow<CN>> = (0..fw)
        .map(|_| SlidingWindow::new(weights.box_terms()))
        .collect();
    let mut ready = 0usize;

    for block in 0..config.row_blocks as usize {
        let block_y = block * block_height;
        if origin_y + block_y >= dst.height {
            break;
        }
        let needed = block_y + block_height + 2 * radius;

        match reduction {
            InlineReduction::GroupShared => {
                let pending = needed - ready;
                group.lanes(|lane| {
                    for item in group.lane_items(lane, fw * pending) {
                        let c = item % fw;
                        let r = ready + item / fw;
                        rows.put(c, r, row_sum(tile, kernel, c, r));
                    }
                });
            }
            InlineReduction::SlidingWindow => {
                group.lanes(|lane| {
                    for r in group.lane_items(lane, needed).filter(|&r| r >= ready) {
                        let fetch = |i: usize| tile.fetch(i, r);
                        let mut window = SlidingWindow::<CN>::new(weights.box_terms());
                        window.seed(radius, fetch);
                        for c in 0..fw {
                            if c != 0 {
                                window.advance(fetch);
                            }
                            rows.put(c, r, window.value());
                        }
                    }
                });
            }
        }
        ready = needed;

        let reduced = &rows;
        group.lanes(|lane| {
            for c in group.lane_items(lane, fw) {
                let x = origin_x + c;
                if x >= dst.width {
                    continue;
                }
                let fetch = |i: usize| reduced.fetch(c, i);
                let window = &mut windows[c];
                for oy in block_y..block_y + block_height {
                    if oy == 0 {
                        window.seed(radius, fetch);
                    } else {
                        window.advance(fetch);
                    }
                    let y = origin_y + oy;
                    if y >= dst.height {
                        continue;
                    }
                    unsafe {
                        dst.write(x, y, window.value());
                    }
                }
            }
        });
    }
}

/// Single dispatch blurring both axes, `reduction` selects how rows are reduced.
pub(crate) fn inline_fused_pass<S: TileStorage, const CN: usize>(
    src: &ImageView,
    dst: &OutputView,
    weights: &BlurKernelWeights,
    config: &VariantConfig,
    edge_mode: EdgeMode,
    workers: usize,
    reduction: InlineReduction,
) {
    let size = DispatchSize::covering(
        src.width as u32,
        src.height as u32,
        config.footprint.width,
        config.footprint.height,
    );
    let name = match reduction {
        InlineReduction::GroupShared => "inline fused group shared",
        InlineReduction::SlidingWindow => "inline fused sliding window",
    };
    dispatch(name, size, config.group, workers, |group| {
        inline_fused_group::<S, CN>(group, src, dst, weights, config, reduction, edge_mode);
    });
}
