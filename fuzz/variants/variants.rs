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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use manyblurs::{
    BlurError, BlurImage, BlurImageMut, BlurParameters, BlurProfile, EdgeMode, FastBlurChannels,
    SampleStorage, ThreadingPolicy, VariantConfig, MAX_BLUR_RADIUS,
};

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u16,
    pub src_height: u16,
    pub value: u8,
    pub radius: u8,
    pub edge_mode: u8,
    pub profile: u8,
    pub packed: bool,
    pub channels: u8,
}

fuzz_target!(|data: SrcImage| {
    if data.src_width > 300 || data.src_height > 300 {
        return;
    }
    let channels = FastBlurChannels::try_from([1usize, 3, 4][data.channels as usize % 3]).unwrap();
    let profile = match data.profile % 3 {
        0 => BlurProfile::Box,
        1 => BlurProfile::Tent,
        _ => BlurProfile::Gaussian(0.),
    };
    let edge_mode = EdgeMode::try_from(data.edge_mode as usize % 4).unwrap();
    let params = BlurParameters::new(data.radius as u32, profile).with_edge_mode(edge_mode);
    let storage = if data.packed {
        SampleStorage::Packed
    } else {
        SampleStorage::Unpacked
    };
    fuzz_variants(
        data.src_width as u32,
        data.src_height as u32,
        data.value as f32 / 255.,
        channels,
        params,
        storage,
    );
});

fn fuzz_variants(
    width: u32,
    height: u32,
    value: f32,
    channels: FastBlurChannels,
    params: BlurParameters,
    storage: SampleStorage,
) {
    let src_data = vec![value; width as usize * height as usize * channels.channels()];
    let src_image = BlurImage::borrow(&src_data, width, height, channels);
    for config in VariantConfig::catalog() {
        let config = config.with_storage(storage);
        let mut dst_image = BlurImageMut::default();
        let result = manyblurs::blur(
            &src_image,
            &mut dst_image,
            params,
            &config,
            ThreadingPolicy::Single,
        );
        if params.radius > MAX_BLUR_RADIUS {
            assert_eq!(result, Err(BlurError::InvalidRadius(params.radius)));
            continue;
        }
        if width == 0 || height == 0 {
            assert_eq!(result, Err(BlurError::ZeroBaseSize));
            continue;
        }
        result.unwrap();
        let tolerance = if config.is_packed() { 1e-3 } else { 1e-4 };
        for &v in dst_image.data.borrow() {
            assert!(
                (v - value).abs() < tolerance,
                "Constant image must stay constant, expected {value} but it was {v} for {config:?}"
            );
        }
    }
}
