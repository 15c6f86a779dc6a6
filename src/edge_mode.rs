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
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Declares how halo cells of a tile are addressed outside of the image
pub enum EdgeMode {
    /// Edge pixel is replicated across the halo `aaa|abcdefgh|hhh`
    #[default]
    Clamp = 0,
    /// Image repeats `fgh|abcdefgh|abc`
    Wrap = 1,
    /// Image is mirrored with rule `fedcba|abcdefgh|hgfedcb`
    Reflect = 2,
    /// Image is mirrored with rule `gfedcb|abcdefgh|gfedcba`
    Reflect101 = 3,
}

impl TryFrom<usize> for EdgeMode {
    type Error = crate::BlurError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EdgeMode::Clamp),
            1 => Ok(EdgeMode::Wrap),
            2 => Ok(EdgeMode::Reflect),
            3 => Ok(EdgeMode::Reflect101),
            _ => Err(crate::BlurError::InvalidArguments),
        }
    }
}

impl EdgeMode {
    /// Maps a possibly out of bounds coordinate into `0..n`, `n` must be non-zero.
    #[inline(always)]
    pub(crate) fn resolve(self, i: i64, n: usize) -> usize {
        let n = n as i64;
        if i >= 0 && i < n {
            return i as usize;
        }
        match self {
            EdgeMode::Clamp => i.clamp(0, n - 1) as usize,
            EdgeMode::Wrap => i.rem_euclid(n) as usize,
            EdgeMode::Reflect => {
                let m = i.rem_euclid(2 * n);
                if m < n {
                    m as usize
                } else {
                    (2 * n - 1 - m) as usize
                }
            }
            EdgeMode::Reflect101 => {
                if n == 1 {
                    return 0;
                }
                let m = i.rem_euclid(2 * n - 2);
                if m < n {
                    m as usize
                } else {
                    (2 * n - 2 - m) as usize
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(mode: EdgeMode, n: usize) -> Vec<usize> {
        (-3i64..n as i64 + 3).map(|i| mode.resolve(i, n)).collect()
    }

    #[test]
    fn test_clamp_replicates_edges() {
        assert_eq!(row(EdgeMode::Clamp, 4), vec![0, 0, 0, 0, 1, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(row(EdgeMode::Wrap, 4), vec![1, 2, 3, 0, 1, 2, 3, 0, 1, 2]);
    }

    #[test]
    fn test_reflect() {
        assert_eq!(row(EdgeMode::Reflect, 4), vec![2, 1, 0, 0, 1, 2, 3, 3, 2, 1]);
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(
            row(EdgeMode::Reflect101, 4),
            vec![3, 2, 1, 0, 1, 2, 3, 2, 1, 0]
        );
        assert_eq!(row(EdgeMode::Reflect101, 1), vec![0; 7]);
    }

    #[test]
    fn test_far_out_of_bounds_stays_inside() {
        for mode in [
            EdgeMode::Clamp,
            EdgeMode::Wrap,
            EdgeMode::Reflect,
            EdgeMode::Reflect101,
        ] {
            for i in -40i64..40 {
                assert!(mode.resolve(i, 3) < 3, "{mode:?} escaped at {i}");
            }
        }
    }
}
