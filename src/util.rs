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
use crate::compute::GroupShape;
use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Every error is raised before the first group of a dispatch runs,
/// a blur either completes or leaves the destination untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BlurError {
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    MinimumStrideSizeMismatch(MismatchedSize),
    ImagesMustMatch,
    ExceedingPointerSize,
    NegativeOrZeroSigma,
    InvalidArguments,
    /// Radius is above [crate::MAX_BLUR_RADIUS]
    InvalidRadius(u32),
    /// Group shared memory footprint, `expected` is the limit
    SampleCountExceeded(MismatchedSize),
    /// Sample can't be stored in a packed tile
    SampleOutOfRange(f32),
    InvalidGroupShape(GroupShape),
}

impl Error for BlurError {}

impl std::fmt::Display for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlurError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            BlurError::MinimumStrideSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum stride must have size at least {} but it is {}",
                size.expected, size.received
            )),
            BlurError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            BlurError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
            BlurError::ExceedingPointerSize => {
                f.write_str("Image bounds and blurring kernel/radius exceeds pointer capacity")
            }
            BlurError::NegativeOrZeroSigma => {
                f.write_str("Negative or zero sigma is not supported")
            }
            BlurError::InvalidArguments => f.write_str("Invalid arguments"),
            BlurError::InvalidRadius(radius) => f.write_fmt(format_args!(
                "Radius must be in 0..={} but it is {radius}",
                crate::MAX_BLUR_RADIUS
            )),
            BlurError::SampleCountExceeded(size) => f.write_fmt(format_args!(
                "Group footprint must not exceed {} samples but it requires {}",
                size.expected, size.received
            )),
            BlurError::SampleOutOfRange(value) => f.write_fmt(format_args!(
                "Packed samples must be in [0, 1] but received {value}"
            )),
            BlurError::InvalidGroupShape(shape) => f.write_fmt(format_args!(
                "Thread group {}x{} must have between 1 and {} lanes",
                shape.width,
                shape.height,
                crate::MAX_THREAD_GROUP_LANES
            )),
        }
    }
}

pub(crate) fn check_slice_size<T>(
    arr: &[T],
    stride: usize,
    width: usize,
    height: usize,
    cn: usize,
) -> Result<(), BlurError> {
    if width == 0 || height == 0 {
        return Err(BlurError::ZeroBaseSize);
    }
    if arr.len() < stride * (height - 1) + width * cn {
        return Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * (height - 1) + width * cn,
            received: arr.len(),
        }));
    }
    if (stride) < (width * cn) {
        return Err(BlurError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: width * cn,
            received: stride,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_size_checks() {
        let data = vec![0f32; 30];
        assert!(check_slice_size(&data, 10, 10, 3, 1).is_ok());
        assert_eq!(
            check_slice_size(&data, 10, 10, 4, 1),
            Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 40,
                received: 30,
            }))
        );
        assert_eq!(
            check_slice_size(&data, 5, 10, 2, 1),
            Err(BlurError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: 10,
                received: 5,
            }))
        );
        // A strided buffer only needs the last row up to its visible samples.
        let strided = vec![0f32; 33];
        assert!(check_slice_size(&strided, 12, 10, 3, 1).is_ok());
        assert_eq!(
            check_slice_size(&strided[..31], 12, 10, 3, 1),
            Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 34,
                received: 31,
            }))
        );
        assert_eq!(
            check_slice_size(&data, 10, 0, 3, 1),
            Err(BlurError::ZeroBaseSize)
        );
    }

    #[test]
    fn test_radius_message() {
        let message = BlurError::InvalidRadius(11).to_string();
        assert_eq!(message, "Radius must be in 0..=10 but it is 11");
    }
}
