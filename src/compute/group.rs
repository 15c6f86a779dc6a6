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
use crate::{BlurError, MAX_THREAD_GROUP_LANES};

/// Lanes of a thread group along x and y
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupShape {
    pub width: u32,
    pub height: u32,
}

impl GroupShape {
    pub const fn new(width: u32, height: u32) -> GroupShape {
        GroupShape { width, height }
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub(crate) fn validate(&self) -> Result<(), BlurError> {
        let lanes = self.lane_count();
        if lanes == 0 || lanes > MAX_THREAD_GROUP_LANES as usize {
            return Err(BlurError::InvalidGroupShape(*self));
        }
        Ok(())
    }
}

/// Position of a group in the dispatch grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupId {
    pub x: u32,
    pub y: u32,
}

/// One invocation inside a thread group
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lane {
    pub x: u32,
    pub y: u32,
    /// Flattened `y * width + x`
    pub index: usize,
}

pub(crate) struct ThreadGroup {
    id: GroupId,
    shape: GroupShape,
}

impl ThreadGroup {
    pub(crate) fn new(id: GroupId, shape: GroupShape) -> ThreadGroup {
        ThreadGroup { id, shape }
    }

    #[inline]
    pub(crate) fn id(&self) -> GroupId {
        self.id
    }

    #[inline]
    pub(crate) fn lane_count(&self) -> usize {
        self.shape.lane_count()
    }

    /// Runs `op` once for every lane.
    ///
    /// Returning from this call is the group barrier: whatever any lane stored into
    /// group shared memory is visible to all lanes of the next call. Shared memory
    /// borrowed mutably by `op` can't be read by another lane before that.
    pub(crate) fn lanes<F: FnMut(Lane)>(&self, mut op: F) {
        for y in 0..self.shape.height {
            for x in 0..self.shape.width {
                op(Lane {
                    x,
                    y,
                    index: y as usize * self.shape.width as usize + x as usize,
                });
            }
        }
    }

    /// Work items of `0..count` owned by `lane`, item `i` belongs to lane `i % lane_count`.
    #[inline]
    pub(crate) fn lane_items(&self, lane: Lane, count: usize) -> std::iter::StepBy<std::ops::Range<usize>> {
        (lane.index..count).step_by(self.lane_count())
    }
}
