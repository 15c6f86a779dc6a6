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
use crate::{BlurError, FastBlurChannels, MismatchedSize};
use std::fmt::Debug;

/// Storage of a destination surface, either borrowed from the host or owned.
#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn resize(&mut self, new_size: usize, value: T) {
        match self {
            Self::Borrowed(_) => {}
            Self::Owned(vec) => vec.resize(new_size, value),
        }
    }
}

/// Read-only source surface
pub struct BlurImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: u32,
    pub height: u32,
    /// Items per row, 0 means tightly packed
    pub stride: u32,
    pub channels: FastBlurChannels,
}

/// Write-only destination surface.
/// Owned storage is resized to match the source on blur calls.
pub struct BlurImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: u32,
    pub height: u32,
    /// Items per row, 0 means tightly packed
    pub stride: u32,
    pub channels: FastBlurChannels,
}

impl<T: Clone + Copy + Default + Debug> Default for BlurImageMut<'_, T> {
    fn default() -> Self {
        BlurImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
            stride: 0,
            channels: FastBlurChannels::Plane,
        }
    }
}

fn check_surface_layout(
    data_len: usize,
    width: u32,
    height: u32,
    stride: u32,
    cn: usize,
) -> Result<(), BlurError> {
    if width == 0 || height == 0 {
        return Err(BlurError::ZeroBaseSize);
    }
    let stride = stride as usize;
    let width = width as usize;
    let height = height as usize;
    if data_len < stride * (height - 1) + width * cn {
        return Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * (height - 1) + width * cn,
            received: data_len,
        }));
    }
    if stride < width * cn {
        return Err(BlurError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: width * cn,
            received: stride,
        }));
    }
    Ok(())
}

impl<'a, T: Clone + Copy + Default + Debug> BlurImage<'a, T> {
    /// Allocates default image layout for given [FastBlurChannels]
    pub fn alloc(width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![
                T::default();
                width as usize
                    * height as usize
                    * channels.channels()
            ]),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Borrows existing data, stride will be `width * channels.channels()`
    pub fn borrow(arr: &'a [T], width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches_mut(&self, other: &BlurImageMut<'_, T>) -> Result<(), BlurError> {
        if self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
        {
            return Ok(());
        }
        Err(BlurError::ImagesMustMatch)
    }

    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels.channels() as u32
        } else {
            self.stride
        }
    }

    #[inline]
    pub fn check_layout(&self) -> Result<(), BlurError> {
        check_surface_layout(
            self.data.len(),
            self.width,
            self.height,
            self.row_stride(),
            self.channels.channels(),
        )
    }

    /// Iterates over samples of visible pixels, skipping row padding.
    pub(crate) fn samples(&self) -> impl Iterator<Item = &T> + '_ {
        let row_len = self.width as usize * self.channels.channels();
        self.data
            .as_ref()
            .chunks(self.row_stride() as usize)
            .take(self.height as usize)
            .flat_map(move |row| row[..row_len].iter())
    }
}

impl<'a, T: Clone + Copy + Default + Debug> BlurImageMut<'a, T> {
    /// Allocates default image layout for given [FastBlurChannels]
    pub fn alloc(width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: BufferStore::Owned(vec![
                T::default();
                width as usize * height as usize * channels.channels()
            ]),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Mutable borrows existing data, stride will be `width * channels.channels()`
    pub fn borrow(arr: &'a mut [T], width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels.channels() as u32
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements,
    /// owned storage is reshaped after `other` instead.
    #[inline]
    pub fn check_layout(&mut self, other: Option<&BlurImage<'_, T>>) -> Result<(), BlurError> {
        if let Some(other) = other {
            if matches!(self.data, BufferStore::Owned(_)) {
                self.resize(other.width, other.height, other.channels);
                return Ok(());
            }
        }
        check_surface_layout(
            self.data.borrow().len(),
            self.width,
            self.height,
            self.row_stride(),
            self.channels.channels(),
        )
    }

    #[inline]
    pub fn resize(&mut self, width: u32, height: u32, channels: FastBlurChannels) {
        self.height = height;
        self.width = width;
        self.channels = channels;
        self.stride = self.width * self.channels.channels() as u32;
        self.data.resize(
            self.row_stride() as usize * self.height as usize,
            T::default(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_destination_follows_source() {
        let src = BlurImage::<f32>::alloc(7, 5, FastBlurChannels::Channels3);
        let mut dst = BlurImageMut::<f32>::default();
        dst.check_layout(Some(&src)).unwrap();
        assert_eq!(dst.width, 7);
        assert_eq!(dst.height, 5);
        assert_eq!(dst.data.borrow().len(), 7 * 5 * 3);
        assert!(src.size_matches_mut(&dst).is_ok());
    }

    #[test]
    fn test_borrowed_destination_is_checked() {
        let mut storage = vec![0f32; 10];
        let src = BlurImage::<f32>::alloc(4, 4, FastBlurChannels::Plane);
        let mut dst = BlurImageMut::borrow(&mut storage, 4, 4, FastBlurChannels::Plane);
        assert!(matches!(
            dst.check_layout(Some(&src)),
            Err(BlurError::MinimumSliceSizeMismatch(_))
        ));
    }

    #[test]
    fn test_strided_layout_reports_required_len() {
        let data = vec![0f32; 20];
        let mut image = BlurImage::borrow(&data, 3, 3, FastBlurChannels::Plane);
        image.stride = 10;
        assert_eq!(
            image.check_layout(),
            Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 23,
                received: 20,
            }))
        );
        image.height = 2;
        assert!(image.check_layout().is_ok());
    }

    #[test]
    fn test_samples_skip_padding() {
        let data = [1f32, 2., -1., 3., 4., -1.];
        let image = BlurImage {
            data: std::borrow::Cow::Borrowed(&data[..]),
            width: 2,
            height: 2,
            stride: 3,
            channels: FastBlurChannels::Plane,
        };
        let visible = image.samples().copied().collect::<Vec<_>>();
        assert_eq!(visible, vec![1., 2., 3., 4.]);
    }
}
