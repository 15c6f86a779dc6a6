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
//! Convolution kernels, one group invocation at a time.
mod inline_fused;
mod naive;
mod separable;
mod sliding_window;

use crate::tile::{Tile, TileStorage};

pub(crate) use inline_fused::inline_fused_pass;
pub(crate) use naive::naive_2d_pass;
pub(crate) use separable::separable_pass;
pub(crate) use sliding_window::{sliding_window_pass, SlidingWindow};

/// Weighted sum of `kernel.len()` cells of tile row `y` starting at column `x`.
#[inline(always)]
pub(crate) fn row_sum<S: TileStorage, const CN: usize>(
    tile: &Tile<S, CN>,
    kernel: &[f32],
    x: usize,
    y: usize,
) -> [f32; CN] {
    let mut acc = [0f32; CN];
    for (k, &w) in kernel.iter().enumerate() {
        let px = tile.fetch(x + k, y);
        for (a, v) in acc.iter_mut().zip(px) {
            *a += w * v;
        }
    }
    acc
}
