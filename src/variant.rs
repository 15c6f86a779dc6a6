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
//! Which kernel runs and with which shapes.
use crate::compute::{DispatchSize, GroupShape};
use crate::safe_math::{SafeAdd, SafeMul};
use crate::strategy::{BlurStrategy, InlineFusedBlur, NaiveBlur, SeparableBlur, SlidingWindowBlur};
use crate::util::MismatchedSize;
use crate::{
    BlurError, BLUR_THREAD_GROUP_WIDTH, INLINE_GROUP_SHARED_THREAD_GROUP_HEIGHT,
    INLINE_GROUP_SHARED_THREAD_GROUP_WIDTH, INLINE_REGISTER_THREAD_GROUP_HEIGHT,
    INLINE_REGISTER_THREAD_GROUP_WIDTH, INLINE_SLIDING_WINDOW_BLUR_HEIGHT,
    INLINE_SLIDING_WINDOW_BLUR_HEIGHT_GROUPS, INLINE_SLIDING_WINDOW_BLUR_WIDTH, MAX_BLUR_RADIUS,
    MAX_SAMPLE_COUNT, ONE_DIMENSIONAL_BLUR_HEIGHT, ONE_DIMENSIONAL_BLUR_WIDTH,
    SLIDING_WINDOW_BLUR_HEIGHT, SLIDING_WINDOW_BLUR_WIDTH,
};

/// How the fused kernel reduces rows before the vertical sliding window
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InlineReduction {
    /// 16x16 groups, rows are summed directly into group shared memory
    GroupShared,
    /// 2x128 groups, rows are reduced with a sliding window as well
    SlidingWindow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlurVariant {
    /// Full 2D weighted sum per pixel, the reference
    Naive2D,
    /// Horizontal then vertical dispatch through an intermediate image
    SeparableTwoPass,
    /// As [BlurVariant::SeparableTwoPass] with running sums along each line
    SlidingWindowTwoPass,
    /// Both axes in one dispatch
    InlineFused(InlineReduction),
}

/// Layout of group shared tiles
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SampleStorage {
    /// One `f32` per sample
    #[default]
    Unpacked,
    /// Two half precision samples per `u32`, inputs must be in `[0, 1]`
    Packed,
}

/// Output pixels of one group. For the 1D passes `width` runs along the scan axis
/// and `height` counts lines, the vertical pass transposes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const fn new(width: u32, height: u32) -> Footprint {
        Footprint { width, height }
    }
}

/// Complete description of a blur kernel configuration.
///
/// Every field is public so shapes can be tuned, [VariantConfig::validate] refuses
/// shapes a group can't hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariantConfig {
    pub variant: BlurVariant,
    pub group: GroupShape,
    pub footprint: Footprint,
    /// Row blocks walked by a fused group, `1` for every other variant
    pub row_blocks: u32,
    pub storage: SampleStorage,
}

impl VariantConfig {
    pub fn naive_2d() -> VariantConfig {
        VariantConfig {
            variant: BlurVariant::Naive2D,
            group: GroupShape::new(BLUR_THREAD_GROUP_WIDTH, BLUR_THREAD_GROUP_WIDTH),
            footprint: Footprint::new(BLUR_THREAD_GROUP_WIDTH, BLUR_THREAD_GROUP_WIDTH),
            row_blocks: 1,
            storage: SampleStorage::Unpacked,
        }
    }

    pub fn separable_two_pass() -> VariantConfig {
        VariantConfig {
            variant: BlurVariant::SeparableTwoPass,
            group: GroupShape::new(ONE_DIMENSIONAL_BLUR_WIDTH, ONE_DIMENSIONAL_BLUR_HEIGHT),
            footprint: Footprint::new(ONE_DIMENSIONAL_BLUR_WIDTH, ONE_DIMENSIONAL_BLUR_HEIGHT),
            row_blocks: 1,
            storage: SampleStorage::Unpacked,
        }
    }

    pub fn sliding_window_two_pass() -> VariantConfig {
        VariantConfig {
            variant: BlurVariant::SlidingWindowTwoPass,
            group: GroupShape::new(SLIDING_WINDOW_BLUR_WIDTH, SLIDING_WINDOW_BLUR_HEIGHT),
            footprint: Footprint::new(SLIDING_WINDOW_BLUR_WIDTH, SLIDING_WINDOW_BLUR_HEIGHT),
            row_blocks: 1,
            storage: SampleStorage::Unpacked,
        }
    }

    pub fn inline_fused(reduction: InlineReduction) -> VariantConfig {
        let group = match reduction {
            InlineReduction::GroupShared => GroupShape::new(
                INLINE_GROUP_SHARED_THREAD_GROUP_WIDTH,
                INLINE_GROUP_SHARED_THREAD_GROUP_HEIGHT,
            ),
            InlineReduction::SlidingWindow => GroupShape::new(
                INLINE_REGISTER_THREAD_GROUP_WIDTH,
                INLINE_REGISTER_THREAD_GROUP_HEIGHT,
            ),
        };
        VariantConfig {
            variant: BlurVariant::InlineFused(reduction),
            group,
            footprint: Footprint::new(
                INLINE_SLIDING_WINDOW_BLUR_WIDTH,
                INLINE_SLIDING_WINDOW_BLUR_HEIGHT * INLINE_SLIDING_WINDOW_BLUR_HEIGHT_GROUPS,
            ),
            row_blocks: INLINE_SLIDING_WINDOW_BLUR_HEIGHT_GROUPS,
            storage: SampleStorage::Unpacked,
        }
    }

    /// Every built-in configuration with unpacked storage
    pub fn catalog() -> [VariantConfig; 5] {
        [
            VariantConfig::naive_2d(),
            VariantConfig::separable_two_pass(),
            VariantConfig::sliding_window_two_pass(),
            VariantConfig::inline_fused(InlineReduction::GroupShared),
            VariantConfig::inline_fused(InlineReduction::SlidingWindow),
        ]
    }

    pub fn with_storage(mut self, storage: SampleStorage) -> VariantConfig {
        self.storage = storage;
        self
    }

    #[inline]
    pub fn is_packed(&self) -> bool {
        self.storage == SampleStorage::Packed
    }

    #[inline]
    pub fn is_fused(&self) -> bool {
        matches!(self.variant, BlurVariant::InlineFused(_))
    }

    /// Dispatches issued per blur
    #[inline]
    pub fn passes(&self) -> usize {
        match self.variant {
            BlurVariant::Naive2D | BlurVariant::InlineFused(_) => 1,
            BlurVariant::SeparableTwoPass | BlurVariant::SlidingWindowTwoPass => 2,
        }
    }

    /// Samples a group keeps in shared memory for `radius`
    pub fn shared_samples(&self, radius: u32) -> Result<usize, BlurError> {
        let halo = 2 * radius.min(MAX_BLUR_RADIUS) as usize;
        let fw = self.footprint.width as usize;
        let fh = self.footprint.height as usize;
        match self.variant {
            BlurVariant::Naive2D => fw.safe_add(halo)?.safe_mul(fh.safe_add(halo)?),
            BlurVariant::SeparableTwoPass | BlurVariant::SlidingWindowTwoPass => {
                fw.safe_add(halo)?.safe_mul(fh)
            }
            BlurVariant::InlineFused(_) => {
                let rows = fh.safe_add(halo)?;
                let tile = fw.safe_add(halo)?.safe_mul(rows)?;
                tile.safe_add(fw.safe_mul(rows)?)
            }
        }
    }

    /// Checks that the configuration can run a kernel of `radius`
    pub fn validate(&self, radius: u32) -> Result<(), BlurError> {
        if radius > MAX_BLUR_RADIUS {
            return Err(BlurError::InvalidRadius(radius));
        }
        self.group.validate()?;
        if self.footprint.width == 0 || self.footprint.height == 0 || self.row_blocks == 0 {
            return Err(BlurError::InvalidArguments);
        }
        if self.is_fused() {
            if self.footprint.height % self.row_blocks != 0 {
                return Err(BlurError::InvalidArguments);
            }
        } else if self.row_blocks != 1 {
            return Err(BlurError::InvalidArguments);
        }
        let samples = self.shared_samples(radius)?;
        if samples > MAX_SAMPLE_COUNT as usize {
            return Err(BlurError::SampleCountExceeded(MismatchedSize {
                expected: MAX_SAMPLE_COUNT as usize,
                received: samples,
            }));
        }
        Ok(())
    }

    /// Grid of every dispatch for a `width` x `height` image, in execution order
    pub fn dispatches(&self, width: u32, height: u32) -> Vec<DispatchSize> {
        let fw = self.footprint.width;
        let fh = self.footprint.height;
        match self.variant {
            BlurVariant::Naive2D | BlurVariant::InlineFused(_) => {
                vec![DispatchSize::covering(width, height, fw, fh)]
            }
            BlurVariant::SeparableTwoPass | BlurVariant::SlidingWindowTwoPass => vec![
                DispatchSize::covering(width, height, fw, fh),
                DispatchSize::covering(width, height, fh, fw),
            ],
        }
    }

    /// Strategy executing this configuration
    pub fn strategy(&self) -> Box<dyn BlurStrategy> {
        match self.variant {
            BlurVariant::Naive2D => Box::new(NaiveBlur::new(*self)),
            BlurVariant::SeparableTwoPass => Box::new(SeparableBlur::new(*self)),
            BlurVariant::SlidingWindowTwoPass => Box::new(SlidingWindowBlur::new(*self)),
            BlurVariant::InlineFused(_) => Box::new(InlineFusedBlur::new(*self)),
        }
    }
}
