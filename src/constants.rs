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
//! Shapes of the compute kernels.

/// Thread group side of the naive 2D kernel.
pub const BLUR_THREAD_GROUP_WIDTH: u32 = 16;
pub const ONE_DIMENSIONAL_BLUR_WIDTH: u32 = 256;
pub const ONE_DIMENSIONAL_BLUR_HEIGHT: u32 = 1;
pub const MAX_BLUR_RADIUS: u32 = 10;

pub const SLIDING_WINDOW_BLUR_WIDTH: u32 = 256;
/// Scan lines processed by one sliding window group.
pub const SLIDING_WINDOW_BLUR_HEIGHT: u32 = 2;

/// Output columns of one inline fused group.
pub const INLINE_SLIDING_WINDOW_BLUR_WIDTH: u32 = 16;
/// Output rows of one inline fused row block.
pub const INLINE_SLIDING_WINDOW_BLUR_HEIGHT: u32 = 16;
/// Row blocks an inline fused group walks through after its single tile load.
pub const INLINE_SLIDING_WINDOW_BLUR_HEIGHT_GROUPS: u32 = 8;

/// Inline fused group shape when the horizontal axis is reduced through group shared memory.
pub const INLINE_GROUP_SHARED_THREAD_GROUP_WIDTH: u32 = 16;
pub const INLINE_GROUP_SHARED_THREAD_GROUP_HEIGHT: u32 = 16;
/// Inline fused group shape when both axes slide in registers.
pub const INLINE_REGISTER_THREAD_GROUP_WIDTH: u32 = 2;
pub const INLINE_REGISTER_THREAD_GROUP_HEIGHT: u32 = 128;

pub const MAX_SAMPLES_PER_AXIS: u32 = 128;
/// Upper bound of group shared memory, in samples, for any dispatch step.
pub const MAX_SAMPLE_COUNT: u32 = MAX_SAMPLES_PER_AXIS * MAX_SAMPLES_PER_AXIS;

pub const MAX_THREAD_GROUP_LANES: u32 = 1024;
