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
use crate::gaussian::{gaussian_kernel_1d, sigma_size};
use crate::{BlurError, MAX_BLUR_RADIUS};

/// Shape of the convolution weights
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BlurProfile {
    /// Uniform weights
    Box,
    /// Weights falling linearly from the center, `radius + 1 - |offset|`
    Tent,
    /// Gaussian with the given sigma, if sigma is zero or negative it is derived
    /// from the kernel size with [sigma_size]
    Gaussian(f32),
}

impl Default for BlurProfile {
    fn default() -> Self {
        BlurProfile::Gaussian(0.)
    }
}

/// One centered box of the kernel decomposition, contributes
/// `weight * sum(samples[center - radius..=center + radius])`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct BoxTerm {
    pub(crate) radius: usize,
    pub(crate) weight: f32,
}

/// Normalized convolution weights for offsets `-radius..=radius`.
///
/// Every supported profile is symmetric and non-increasing away from the center,
/// so the kernel is also kept as a positive sum of centered boxes which is what
/// running-sum convolvers consume.
#[derive(Clone, Debug, PartialEq)]
pub struct BlurKernelWeights {
    radius: u32,
    profile: BlurProfile,
    weights: Vec<f32>,
    box_terms: Vec<BoxTerm>,
}

impl BlurKernelWeights {
    /// Builds weights for `radius` in `0..=MAX_BLUR_RADIUS`.
    pub fn new(radius: u32, profile: BlurProfile) -> Result<BlurKernelWeights, BlurError> {
        if radius > MAX_BLUR_RADIUS {
            return Err(BlurError::InvalidRadius(radius));
        }
        let kernel_size = radius as usize * 2 + 1;
        let center = radius as usize;
        let raw: Vec<f64> = match profile {
            BlurProfile::Box => vec![1.; kernel_size],
            BlurProfile::Tent => (0..kernel_size)
                .map(|i| (center + 1 - i.abs_diff(center)) as f64)
                .collect(),
            BlurProfile::Gaussian(sigma) => {
                if !sigma.is_finite() {
                    return Err(BlurError::NegativeOrZeroSigma);
                }
                let sigma = if sigma <= 0. {
                    sigma_size(kernel_size as f32)
                } else {
                    sigma
                };
                gaussian_kernel_1d(kernel_size as u32, sigma as f64)
            }
        };
        let sum: f64 = raw.iter().sum();
        if sum <= 0. || !sum.is_finite() {
            return Err(BlurError::InvalidArguments);
        }
        let normalized = raw.iter().map(|&x| x / sum).collect::<Vec<f64>>();

        let tail = &normalized[center..];
        let box_terms = tail
            .iter()
            .enumerate()
            .filter_map(|(j, &w)| {
                let next = tail.get(j + 1).copied().unwrap_or(0.);
                let weight = w - next;
                if weight > 0. {
                    Some(BoxTerm {
                        radius: j,
                        weight: weight as f32,
                    })
                } else {
                    None
                }
            })
            .collect();

        Ok(BlurKernelWeights {
            radius,
            profile,
            weights: normalized.iter().map(|&x| x as f32).collect(),
            box_terms,
        })
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    pub fn profile(&self) -> BlurProfile {
        self.profile
    }

    #[inline]
    pub fn kernel_size(&self) -> usize {
        self.weights.len()
    }

    /// Weights ordered from offset `-radius` to `+radius`
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }

    /// Weight at signed `offset`, zero outside of the kernel
    pub fn weight(&self, offset: i32) -> f32 {
        let index = offset + self.radius as i32;
        if index < 0 {
            return 0.;
        }
        self.weights.get(index as usize).copied().unwrap_or(0.)
    }

    #[inline]
    pub(crate) fn box_terms(&self) -> &[BoxTerm] {
        &self.box_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_above_bound_rejected() {
        assert_eq!(
            BlurKernelWeights::new(11, BlurProfile::Box),
            Err(BlurError::InvalidRadius(11))
        );
        assert!(BlurKernelWeights::new(MAX_BLUR_RADIUS, BlurProfile::Box).is_ok());
    }

    #[test]
    fn test_weights_are_normalized() {
        for radius in 0..=MAX_BLUR_RADIUS {
            for profile in [
                BlurProfile::Box,
                BlurProfile::Tent,
                BlurProfile::Gaussian(0.),
                BlurProfile::Gaussian(2.5),
            ] {
                let weights = BlurKernelWeights::new(radius, profile).unwrap();
                assert_eq!(weights.kernel_size(), radius as usize * 2 + 1);
                let sum: f32 = weights.as_slice().iter().sum();
                assert!(
                    (sum - 1.).abs() < 1e-5,
                    "Sum expected to be 1 but it was {sum} for {profile:?} radius {radius}"
                );
            }
        }
    }

    #[test]
    fn test_zero_radius_is_identity_kernel() {
        let weights = BlurKernelWeights::new(0, BlurProfile::Gaussian(3.)).unwrap();
        assert_eq!(weights.as_slice(), &[1.]);
        assert_eq!(
            weights.box_terms(),
            &[BoxTerm {
                radius: 0,
                weight: 1.
            }]
        );
    }

    #[test]
    fn test_box_profile_is_single_term() {
        let weights = BlurKernelWeights::new(4, BlurProfile::Box).unwrap();
        assert_eq!(weights.box_terms().len(), 1);
        assert_eq!(weights.box_terms()[0].radius, 4);
        assert!((weights.box_terms()[0].weight - 1. / 9.).abs() < 1e-7);
    }

    #[test]
    fn test_tent_profile() {
        let weights = BlurKernelWeights::new(2, BlurProfile::Tent).unwrap();
        let expected = [1. / 9., 2. / 9., 3. / 9., 2. / 9., 1. / 9.];
        for (w, e) in weights.as_slice().iter().zip(expected.iter()) {
            assert!((w - e).abs() < 1e-7);
        }
        assert_eq!(weights.weight(-2), weights.weight(2));
        assert_eq!(weights.weight(3), 0.);
        assert_eq!(weights.weight(-3), 0.);
    }

    #[test]
    fn test_box_terms_reconstruct_weights() {
        for profile in [
            BlurProfile::Box,
            BlurProfile::Tent,
            BlurProfile::Gaussian(1.3),
        ] {
            let weights = BlurKernelWeights::new(7, profile).unwrap();
            for offset in -7i32..=7 {
                let rebuilt: f32 = weights
                    .box_terms()
                    .iter()
                    .filter(|term| term.radius >= offset.unsigned_abs() as usize)
                    .map(|term| term.weight)
                    .sum();
                let diff = (rebuilt - weights.weight(offset)).abs();
                assert!(
                    diff < 1e-6,
                    "Diff expected to be less than 1e-6, but it was {diff} at {offset} for {profile:?}"
                );
            }
        }
    }

    #[test]
    fn test_non_finite_sigma_rejected() {
        assert_eq!(
            BlurKernelWeights::new(3, BlurProfile::Gaussian(f32::NAN)),
            Err(BlurError::NegativeOrZeroSigma)
        );
    }
}
