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

use image::{DynamicImage, ImageReader, Rgba32FImage};
use manyblurs::{
    blur_image, BlurParameters, BlurProfile, InlineReduction, SampleStorage, ThreadingPolicy,
    VariantConfig,
};
use std::time::Instant;

fn gradient(width: u32, height: u32) -> DynamicImage {
    let image = Rgba32FImage::from_fn(width, height, |x, y| {
        let checker = if (x / 32 + y / 32) % 2 == 0 { 1. } else { 0. };
        image::Rgba([
            x as f32 / width as f32,
            y as f32 / height as f32,
            checker,
            1.,
        ])
    });
    DynamicImage::ImageRgba32F(image)
}

fn main() {
    env_logger::init();

    let dyn_image = match std::env::args().nth(1) {
        Some(path) => ImageReader::open(path).unwrap().decode().unwrap(),
        None => gradient(1024, 768),
    };
    println!("dimensions {}x{}", dyn_image.width(), dyn_image.height());
    println!("type {:?}", dyn_image.color());

    let params = BlurParameters::new(10, BlurProfile::Gaussian(0.));
    let configs = [
        ("naive", VariantConfig::naive_2d()),
        ("separable", VariantConfig::separable_two_pass()),
        ("sliding", VariantConfig::sliding_window_two_pass()),
        (
            "fused_shared",
            VariantConfig::inline_fused(InlineReduction::GroupShared),
        ),
        (
            "fused_sliding",
            VariantConfig::inline_fused(InlineReduction::SlidingWindow),
        ),
        (
            "fused_sliding_packed",
            VariantConfig::inline_fused(InlineReduction::SlidingWindow)
                .with_storage(SampleStorage::Packed),
        ),
    ];

    for (name, config) in configs.iter() {
        let start = Instant::now();
        let blurred = match blur_image(&dyn_image, params, config, ThreadingPolicy::Adaptive) {
            Ok(blurred) => blurred,
            Err(err) => {
                log::error!("{name}: {err}");
                continue;
            }
        };
        println!("{name}: {:?}", start.elapsed());
        blurred
            .to_rgba8()
            .save(format!("blurred_{name}.png"))
            .unwrap();
    }
}
