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
//! Group shared tiles and the cooperative loader filling them.
use crate::compute::{GroupId, ThreadGroup};
use crate::packing::{pack_lanes, unpack, PackedBlurSample};
use crate::unsafe_slice::UnsafeSlice;
use crate::util::check_slice_size;
use crate::{BlurError, BlurImage, EdgeMode};

/// Backing memory of a tile. Convolvers only see `f32` samples,
/// so any of them runs against packed or unpacked memory unchanged.
pub(crate) trait TileStorage: Send {
    fn alloc(len: usize) -> Self
    where
        Self: Sized;

    fn load(&self, index: usize) -> f32;

    fn store(&mut self, index: usize, value: f32);
}

pub(crate) struct UnpackedStorage {
    samples: Vec<f32>,
}

impl TileStorage for UnpackedStorage {
    fn alloc(len: usize) -> Self {
        UnpackedStorage {
            samples: vec![0.; len],
        }
    }

    #[inline(always)]
    fn load(&self, index: usize) -> f32 {
        self.samples[index]
    }

    #[inline(always)]
    fn store(&mut self, index: usize, value: f32) {
        self.samples[index] = value;
    }
}

/// Two samples per word, even indices in the low lane.
pub(crate) struct PackedStorage {
    words: Vec<PackedBlurSample>,
}

impl TileStorage for PackedStorage {
    fn alloc(len: usize) -> Self {
        PackedStorage {
            words: vec![0; len.div_ceil(2)],
        }
    }

    #[inline(always)]
    fn load(&self, index: usize) -> f32 {
        let (low, high) = unpack(self.words[index >> 1]);
        if index & 1 == 0 {
            low
        } else {
            high
        }
    }

    #[inline(always)]
    fn store(&mut self, index: usize, value: f32) {
        let word = &mut self.words[index >> 1];
        let (low, high) = unpack(*word);
        *word = if index & 1 == 0 {
            pack_lanes(value, high)
        } else {
            pack_lanes(low, value)
        };
    }
}

/// `width` x `height` cells of `CN` samples, row major.
pub(crate) struct Tile<S: TileStorage, const CN: usize> {
    storage: S,
    width: usize,
    height: usize,
}

impl<S: TileStorage, const CN: usize> Tile<S, CN> {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Tile {
            storage: S::alloc(width * height * CN),
            width,
            height,
        }
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub(crate) fn cells(&self) -> usize {
        self.width * self.height
    }

    #[inline(always)]
    pub(crate) fn fetch(&self, x: usize, y: usize) -> [f32; CN] {
        let offset = (y * self.width + x) * CN;
        std::array::from_fn(|c| self.storage.load(offset + c))
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, x: usize, y: usize, px: [f32; CN]) {
        let offset = (y * self.width + x) * CN;
        for (c, v) in px.into_iter().enumerate() {
            self.storage.store(offset + c, v);
        }
    }
}

/// Read-only view of a source surface
#[derive(Copy, Clone)]
pub(crate) struct ImageView<'a> {
    data: &'a [f32],
    stride: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl<'a> ImageView<'a> {
    pub(crate) fn new(
        data: &'a [f32],
        stride: usize,
        width: usize,
        height: usize,
        cn: usize,
    ) -> Result<ImageView<'a>, BlurError> {
        check_slice_size(data, stride, width, height, cn)?;
        Ok(ImageView {
            data,
            stride,
            width,
            height,
        })
    }

    pub(crate) fn from_image(image: &'a BlurImage<'_, f32>) -> Result<ImageView<'a>, BlurError> {
        ImageView::new(
            image.data.as_ref(),
            image.row_stride() as usize,
            image.width as usize,
            image.height as usize,
            image.channels.channels(),
        )
    }

    /// `x` and `y` must be inside the image
    #[inline(always)]
    pub(crate) fn fetch<const CN: usize>(&self, x: usize, y: usize) -> [f32; CN] {
        let offset = y * self.stride + x * CN;
        let px = &self.data[offset..offset + CN];
        std::array::from_fn(|c| px[c])
    }
}

/// Destination surface of a dispatch.
#[derive(Copy, Clone)]
pub(crate) struct OutputView<'a> {
    slice: UnsafeSlice<'a, f32>,
    stride: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl<'a> OutputView<'a> {
    pub(crate) fn new(
        data: &'a mut [f32],
        stride: usize,
        width: usize,
        height: usize,
        cn: usize,
    ) -> Result<OutputView<'a>, BlurError> {
        check_slice_size(data, stride, width, height, cn)?;
        Ok(OutputView {
            slice: UnsafeSlice::new(data),
            stride,
            width,
            height,
        })
    }

    /// SAFETY: every pixel must be written by exactly one lane of one group per dispatch
    /// and `x`, `y` must be inside the image.
    #[inline(always)]
    pub(crate) unsafe fn write<const CN: usize>(&self, x: usize, y: usize, px: [f32; CN]) {
        let offset = y * self.stride + x * CN;
        debug_assert!(offset + CN <= self.slice.len());
        for (c, v) in px.into_iter().enumerate() {
            unsafe {
                self.slice.write(offset + c, v);
            }
        }
    }
}

/// Direction of a 1D pass. Tiles are always laid out with the scan axis along
/// the tile rows, a vertical pass transposes while loading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Image coordinates of a (scan, line) position
    #[inline(always)]
    pub(crate) fn to_image<T>(self, scan: T, line: T) -> (T, T) {
        match self {
            Axis::Horizontal => (scan, line),
            Axis::Vertical => (line, scan),
        }
    }

    /// (scan, line) grid coordinates of a group
    #[inline]
    pub(crate) fn split(self, id: GroupId) -> (u32, u32) {
        self.to_image(id.x, id.y)
    }

    /// Image extent as (scan length, line count)
    #[inline]
    pub(crate) fn extent(self, width: usize, height: usize) -> (usize, usize) {
        self.to_image(width, height)
    }
}

/// Where the first cell of a tile sits, in scan/line coordinates of the image.
/// Origins are negative when the halo starts before the image.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TileRegion {
    pub(crate) scan_origin: i64,
    pub(crate) line_origin: i64,
    pub(crate) axis: Axis,
}

/// Cooperatively fills every cell of `tile` exactly once, resolving coordinates
/// outside of the image through `edge_mode`.
///
/// The tile is borrowed mutably for the whole load, so nothing reads it before
/// the group barrier at the end of the load phase.
pub(crate) fn load_tile<S: TileStorage, const CN: usize>(
    group: &ThreadGroup,
    tile: &mut Tile<S, CN>,
    src: &ImageView,
    region: TileRegion,
    edge_mode: EdgeMode,
) {
    let width = tile.width();
    let cells = tile.cells();
    group.lanes(|lane| {
        for cell in group.lane_items(lane, cells) {
            let s = cell % width;
            let l = cell / width;
            let (x, y) = region
                .axis
                .to_image(region.scan_origin + s as i64, region.line_origin + l as i64);
            let x = edge_mode.resolve(x, src.width);
            let y = edge_mode.resolve(y, src.height);
            tile.put(s, l, src.fetch::<CN>(x, y));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::GroupShape;
    use crate::packing::PACKED_SAMPLE_EPSILON;

    fn ramp(width: usize, height: usize) -> Vec<f32> {
        (0..width * height)
            .map(|i| i as f32 / (width * height) as f32)
            .collect()
    }

    #[test]
    fn test_packed_storage_keeps_neighbours() {
        let mut storage = PackedStorage::alloc(5);
        for i in 0..5 {
            storage.store(i, i as f32 * 0.2);
        }
        storage.store(2, 0.75);
        let expected = [0., 0.2, 0.75, 0.6, 0.8];
        for (i, &e) in expected.iter().enumerate() {
            let diff = (storage.load(i) - e).abs();
            assert!(
                diff <= PACKED_SAMPLE_EPSILON,
                "Diff expected to be less than {PACKED_SAMPLE_EPSILON}, but it was {diff} at {i}"
            );
        }
    }

    #[test]
    fn test_tile_load_clamps_halo() {
        let (width, height) = (5usize, 3usize);
        let data = ramp(width, height);
        let src = ImageView::new(&data, width, width, height, 1).unwrap();
        let group = ThreadGroup::new(GroupId { x: 0, y: 0 }, GroupShape::new(4, 4));
        let radius = 2i64;
        let mut tile = Tile::<UnpackedStorage, 1>::new(width + 4, height + 4);
        load_tile(
            &group,
            &mut tile,
            &src,
            TileRegion {
                scan_origin: -radius,
                line_origin: -radius,
                axis: Axis::Horizontal,
            },
            EdgeMode::Clamp,
        );
        for ty in 0..height + 4 {
            for tx in 0..width + 4 {
                let x = (tx as i64 - radius).clamp(0, width as i64 - 1) as usize;
                let y = (ty as i64 - radius).clamp(0, height as i64 - 1) as usize;
                assert_eq!(tile.fetch(tx, ty), [data[y * width + x]]);
            }
        }
    }

    #[test]
    fn test_vertical_tile_is_transposed() {
        let (width, height) = (3usize, 6usize);
        let data = ramp(width, height);
        let src = ImageView::new(&data, width, width, height, 1).unwrap();
        let group = ThreadGroup::new(GroupId { x: 0, y: 0 }, GroupShape::new(8, 1));
        let mut tile = Tile::<UnpackedStorage, 1>::new(height + 2, 2);
        load_tile(
            &group,
            &mut tile,
            &src,
            TileRegion {
                scan_origin: -1,
                line_origin: 1,
                axis: Axis::Vertical,
            },
            EdgeMode::Clamp,
        );
        for line in 0..2 {
            for s in 0..height + 2 {
                let y = (s as i64 - 1).clamp(0, height as i64 - 1) as usize;
                let x = line + 1;
                assert_eq!(tile.fetch(s, line), [data[y * width + x]]);
            }
        }
    }

    #[test]
    fn test_multichannel_cells() {
        let data = (0..2 * 2 * 3).map(|x| x as f32).collect::<Vec<f32>>();
        let src = ImageView::new(&data, 6, 2, 2, 3).unwrap();
        assert_eq!(src.fetch::<3>(1, 1), [9., 10., 11.]);
        let mut tile = Tile::<UnpackedStorage, 3>::new(2, 1);
        tile.put(1, 0, [1., 2., 3.]);
        assert_eq!(tile.fetch(1, 0), [1., 2., 3.]);
        assert_eq!(tile.fetch(0, 0), [0., 0., 0.]);
    }
}
