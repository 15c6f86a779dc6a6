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
use crate::compute::group::{GroupId, GroupShape, ThreadGroup};

/// Thread groups of one dispatch along x and y
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DispatchSize {
    pub groups_x: u32,
    pub groups_y: u32,
}

impl DispatchSize {
    /// Grid that covers `width` x `height` pixels with groups producing
    /// `footprint_width` x `footprint_height` pixels each, the last group on an axis
    /// may be partial.
    pub fn covering(
        width: u32,
        height: u32,
        footprint_width: u32,
        footprint_height: u32,
    ) -> DispatchSize {
        DispatchSize {
            groups_x: width.div_ceil(footprint_width.max(1)),
            groups_y: height.div_ceil(footprint_height.max(1)),
        }
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups_x as usize * self.groups_y as usize
    }

    #[inline]
    fn group_id(&self, index: usize) -> GroupId {
        let groups_x = self.groups_x.max(1) as usize;
        GroupId {
            x: (index % groups_x) as u32,
            y: (index / groups_x) as u32,
        }
    }
}

/// Runs `kernel` for every group of the grid and returns once all of them completed.
///
/// Groups are handed to `workers` in a strided order, nothing orders two groups of
/// the same dispatch.
pub(crate) fn dispatch<F>(
    name: &str,
    size: DispatchSize,
    shape: GroupShape,
    workers: usize,
    kernel: F,
) where
    F: Fn(&ThreadGroup) + Send + Sync,
{
    let count = size.group_count();
    log::trace!(
        "{name}: {}x{} groups of {}x{} lanes on {workers} workers",
        size.groups_x,
        size.groups_y,
        shape.width,
        shape.height
    );
    if workers <= 1 || count <= 1 {
        for index in 0..count {
            kernel(&ThreadGroup::new(size.group_id(index), shape));
        }
        return;
    }
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool,
        Err(err) => {
            log::warn!("{name}: worker pool is unavailable ({err}), running on current thread");
            for index in 0..count {
                kernel(&ThreadGroup::new(size.group_id(index), shape));
            }
            return;
        }
    };
    let kernel = &kernel;
    pool.scope(|scope| {
        for worker in 0..workers {
            scope.spawn(move |_| {
                for index in (worker..count).step_by(workers) {
                    kernel(&ThreadGroup::new(size.group_id(index), shape));
                }
            });
        }
    });
}
