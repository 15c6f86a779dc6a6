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

use criterion::{criterion_group, criterion_main, Criterion};
use manyblurs::{
    BlurImage, BlurImageMut, BlurParameters, BlurProfile, FastBlurChannels, InlineReduction,
    SampleStorage, ThreadingPolicy, VariantConfig,
};

fn noise(width: u32, height: u32, channels: FastBlurChannels) -> Vec<f32> {
    let mut state = 0x2545_f491u32;
    (0..width as usize * height as usize * channels.channels())
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 8) as f32 / (1u32 << 24) as f32
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (1920u32, 1080u32);
    let src_data = noise(width, height, FastBlurChannels::Channels4);
    let src_image = BlurImage::borrow(&src_data, width, height, FastBlurChannels::Channels4);
    let params = BlurParameters::new(10, BlurProfile::Gaussian(0.));

    let configs = [
        ("naive 2D", VariantConfig::naive_2d()),
        ("separable two pass", VariantConfig::separable_two_pass()),
        ("sliding window two pass", VariantConfig::sliding_window_two_pass()),
        (
            "inline fused, group shared",
            VariantConfig::inline_fused(InlineReduction::GroupShared),
        ),
        (
            "inline fused, sliding window",
            VariantConfig::inline_fused(InlineReduction::SlidingWindow),
        ),
    ];

    for (name, config) in configs.iter() {
        for storage in [SampleStorage::Unpacked, SampleStorage::Packed] {
            let config = config.with_storage(storage);
            c.bench_function(&format!("manyblurs: RGBA {name} {storage:?}"), |b| {
                let mut dst_image =
                    BlurImageMut::alloc(width, height, FastBlurChannels::Channels4);
                b.iter(|| {
                    manyblurs::blur(
                        &src_image,
                        &mut dst_image,
                        params,
                        &config,
                        ThreadingPolicy::Adaptive,
                    )
                    .unwrap();
                })
            });
        }
    }

    c.bench_function("manyblurs: RGBA sliding window two pass (Single Thread)", |b| {
        let mut dst_image = BlurImageMut::alloc(width, height, FastBlurChannels::Channels4);
        let config = VariantConfig::sliding_window_two_pass();
        b.iter(|| {
            manyblurs::blur(
                &src_image,
                &mut dst_image,
                params,
                &config,
                ThreadingPolicy::Single,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
