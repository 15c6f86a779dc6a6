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
//! Two half precision samples in one 32-bit word.
//!
//! The first sample lives in the low 16 bits, the second in the high 16 bits.
//! Samples are normalized intensities, anything outside `[0, 1]` is refused by
//! [pack] so tiles never hold values the quantization error bound doesn't cover.
use crate::BlurError;
use half::f16;

pub type PackedBlurSample = u32;

/// Largest absolute error of a packed sample on `[0, 1]`,
/// half of an f16 ulp at the top of the range.
pub const PACKED_SAMPLE_EPSILON: f32 = 1. / 4096.;

pub const MIN_PACKED_SAMPLE: f32 = 0.;
pub const MAX_PACKED_SAMPLE: f32 = 1.;

#[inline]
pub fn check_packed_range(value: f32) -> Result<(), BlurError> {
    if (MIN_PACKED_SAMPLE..=MAX_PACKED_SAMPLE).contains(&value) {
        Ok(())
    } else {
        Err(BlurError::SampleOutOfRange(value))
    }
}

/// Packs two normalized samples.
pub fn pack(a: f32, b: f32) -> Result<PackedBlurSample, BlurError> {
    check_packed_range(a)?;
    check_packed_range(b)?;
    Ok(pack_lanes(a, b))
}

/// Unpacks a word produced by [pack].
#[inline]
pub fn unpack(word: PackedBlurSample) -> (f32, f32) {
    (
        f16::from_bits(word as u16).to_f32(),
        f16::from_bits((word >> 16) as u16).to_f32(),
    )
}

#[inline(always)]
pub(crate) fn pack_lanes(a: f32, b: f32) -> PackedBlurSample {
    f16::from_f32(a).to_bits() as u32 | ((f16::from_f32(b).to_bits() as u32) << 16)
}
