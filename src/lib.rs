// Copyright (c) Radzivon Bartoshyk. All rights reserved.

//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Image blurs written as compute kernels.
//!
//! Every variant splits the image into thread groups that load an apron padded tile
//! into group shared memory and convolve from there, executed here on a pool of CPU
//! workers. Variants trade dispatch count for shared memory and arithmetic:
//! a naive 2D sum, a separable two pass blur, a two pass sliding window and a
//! single pass fused kernel. See [VariantConfig] and [blur].

#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod blur_image;
mod channels_configuration;
mod compute;
mod constants;
mod convolve;
mod edge_mode;
mod gaussian;
mod image;
mod packing;
mod safe_math;
mod strategy;
mod threading_policy;
mod tile;
mod unsafe_slice;
mod util;
mod variant;
mod weights;

#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use blur_image::blur_image;
pub use channels_configuration::FastBlurChannels;
pub use compute::{DispatchSize, GroupId, GroupShape, Lane};
pub use constants::*;
pub use edge_mode::EdgeMode;
pub use gaussian::{gaussian_kernel_1d, sigma_size};
pub use image::{BlurImage, BlurImageMut, BufferStore};
pub use packing::{
    check_packed_range, pack, unpack, PackedBlurSample, MAX_PACKED_SAMPLE, MIN_PACKED_SAMPLE,
    PACKED_SAMPLE_EPSILON,
};
pub use strategy::{
    blur, BlurParameters, BlurStrategy, InlineFusedBlur, NaiveBlur, SeparableBlur,
    SlidingWindowBlur,
};
pub use threading_policy::ThreadingPolicy;
pub use util::{BlurError, MismatchedSize};
pub use variant::{BlurVariant, Footprint, InlineReduction, SampleStorage, VariantConfig};
pub use weights::{BlurKernelWeights, BlurProfile};
