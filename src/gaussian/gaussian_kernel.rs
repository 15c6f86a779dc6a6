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
use num_traits::{AsPrimitive, Float};

/// Normalized gaussian kernel of `width` taps centered at `width / 2`.
pub fn gaussian_kernel_1d<T>(width: u32, sigma: T) -> Vec<T>
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
    u32: AsPrimitive<T>,
{
    let mut sum_norm = T::zero();
    let mut kernel = vec![T::zero(); width as usize];
    let two_pi: T = (2. * std::f64::consts::PI).as_();
    let scale = T::one() / (two_pi.sqrt() * sigma);
    let mean: T = (width / 2).as_();
    let minus_half: T = (-0.5f64).as_();

    for (x, item) in kernel.iter_mut().enumerate() {
        let position: T = (x as u32).as_();
        let dx = (position - mean) / sigma;
        let new_weight = (minus_half * dx * dx).exp() * scale;
        *item = new_weight;
        sum_norm = sum_norm + new_weight;
    }

    if sum_norm != T::zero() {
        let sum_scale = T::one() / sum_norm;
        for item in kernel.iter_mut() {
            *item = *item * sum_scale;
        }
    }

    kernel
}
