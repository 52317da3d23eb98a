use std::ops::RangeInclusive;

use crate::error::SphereError;

/// Targets below this get [`SphereParams::MINIMAL`] without searching.
pub const MIN_SEARCH_TARGET: u32 = 12;

pub const SECTOR_RANGE: RangeInclusive<u32> = 4..=128;
pub const STACK_RANGE: RangeInclusive<u32> = 3..=64;

/// Admissible sectors/stacks ratios, inclusive.
pub const MIN_RATIO: f32 = 0.3;
pub const MAX_RATIO: f32 = 3.0;

/// Longitude (sector) and latitude (stack) subdivision of a UV sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SphereParams {
    pub sectors: u32,
    pub stacks: u32,
}

impl SphereParams {
    pub const MINIMAL: SphereParams = SphereParams{sectors: 4, stacks: 2};

    /// Checked construction for callers choosing the topology themselves.
    pub fn new(sectors: u32, stacks: u32) -> Result<Self, SphereError> {
        if sectors < 3 {
            return Err(SphereError::InvalidSectorCount(sectors));
        }
        if stacks < 2 {
            return Err(SphereError::InvalidStackCount(stacks));
        }
        Ok(Self{sectors, stacks})
    }

    /// Grid points including the duplicated seam column.
    pub fn vertex_count(&self) -> usize {
        (self.sectors as usize + 1) * (self.stacks as usize + 1)
    }

    /// Pole rows contribute one triangle per sector, every other row two.
    pub fn index_count(&self) -> usize {
        6 * self.sectors as usize * (self.stacks as usize).saturating_sub(1)
    }

    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }

    pub fn ratio(&self) -> f32 {
        self.sectors as f32 / self.stacks as f32
    }

    pub fn is_admissible(&self) -> bool {
        let ratio = self.ratio();
        !(ratio < MIN_RATIO || ratio > MAX_RATIO)
    }

    /// Closeness to `target` scaled down by the distance of the ratio from 1.
    pub fn quality(&self, target: u32) -> f32 {
        let diff = (self.vertex_count() as u64).abs_diff(target as u64);
        1.0 / (diff + 1) as f32 * (1.0 - (self.ratio() - 1.0).abs() * 0.5)
    }
}

/// Picks the topology whose vertex count best approximates `target`.
///
/// Every admissible pair in [`SECTOR_RANGE`] x [`STACK_RANGE`] is scored with
/// [`SphereParams::quality`]. Only a strictly better score replaces the current
/// best, so ties resolve to the lowest sector count, then the lowest stack count.
/// Changing the order changes which mesh a given target produces.
pub fn find_parameters(target: u32) -> SphereParams {
    if target < MIN_SEARCH_TARGET {
        return SphereParams::MINIMAL;
    }

    let mut best = SphereParams{sectors: 4, stacks: 3};
    let mut best_quality = 0.0f32;

    for sectors in SECTOR_RANGE {
        for stacks in STACK_RANGE {
            let candidate = SphereParams{sectors, stacks};
            if !candidate.is_admissible() {
                continue;
            }
            let quality = candidate.quality(target);
            if quality > best_quality {
                best_quality = quality;
                best = candidate;
            }
        }
    }

    log::debug!("Sphere parameters - target={:?}, sectors={:?}, stacks={:?}, vertices={:?}, quality={:?}"
                , target, best.sectors, best.stacks, best.vertex_count(), best_quality);
    best
}
