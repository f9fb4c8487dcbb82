//! Maps horizontal pointer coordinates to scale points.
//!
//! Ranges span consecutive slot edges. A range starting at a point slot
//! resolves to that point through its lower edge; a range starting at a
//! separator resolves to the following point through its upper edge. The
//! resolver remembers the last matching range so consecutive drag samples
//! skip the linear scan.

use crate::geometry::SlotKind;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEdge {
    Lower,
    Upper,
}

/// One span of the input axis and the point it resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRange {
    pub start: f32,
    pub end: f32,
    pub target: usize,
    pub edge: RangeEdge,
    closed: bool,
}

impl HitRange {
    /// Half-open `[start, end)`, except the final range which includes `end`.
    pub fn contains(&self, x: f32) -> bool {
        if self.closed {
            x >= self.start && x <= self.end
        } else {
            x >= self.start && x < self.end
        }
    }

    /// Coordinate of the edge the target point sits on.
    pub fn anchor(&self) -> f32 {
        match self.edge {
            RangeEdge::Lower => self.start,
            RangeEdge::Upper => self.end,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSource {
    Memo,
    Scan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point_index: usize,
    pub range_index: usize,
    pub anchor_x: f32,
    pub source: HitSource,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HitMemo {
    range_index: usize,
    range: HitRange,
}

impl HitMemo {
    fn hit(&self, source: HitSource) -> Hit {
        Hit {
            point_index: self.range.target,
            range_index: self.range_index,
            anchor_x: self.range.anchor(),
            source,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HitRegionResolver {
    ranges: SmallVec<[HitRange; 16]>,
    memo: Option<HitMemo>,
}

impl HitRegionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds ranges from the leading edge of every slot. Always drops the memo.
    pub fn rebuild_ranges(&mut self, edges: &[f32]) -> &[HitRange] {
        self.memo = None;
        self.ranges.clear();

        if edges.windows(2).any(|pair| pair[1] < pair[0]) {
            log::warn!("slot edges are not monotonic: {edges:?}");
        }

        let last = edges.len().saturating_sub(2);
        for (index, pair) in edges.windows(2).enumerate() {
            // A separator slot always precedes the next point's slot.
            let (target, edge) = match SlotKind::at(index) {
                SlotKind::Point(target) => (target, RangeEdge::Lower),
                SlotKind::Separator => ((index + 1) / 2, RangeEdge::Upper),
            };
            self.ranges.push(HitRange {
                start: pair[0],
                end: pair[1],
                target,
                edge,
                closed: index == last,
            });
        }
        &self.ranges
    }

    /// Resolves `x` to a point, trying the memoized range first.
    pub fn resolve(&mut self, x: f32) -> Option<Hit> {
        if let Some(memo) = self.memo {
            if memo.range.contains(x) {
                log::trace!("hit memo reused for x={x} (range {})", memo.range_index);
                return Some(memo.hit(HitSource::Memo));
            }
        }

        let (range_index, range) = self
            .ranges
            .iter()
            .enumerate()
            .find(|(_, range)| range.contains(x))
            .map(|(index, range)| (index, *range))?;
        let memo = HitMemo { range_index, range };
        self.memo = Some(memo);
        Some(memo.hit(HitSource::Scan))
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
        self.memo = None;
    }

    pub fn ranges(&self) -> &[HitRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Range index currently memoized, if any.
    pub fn memoized_range(&self) -> Option<usize> {
        self.memo.map(|memo| memo.range_index)
    }
}

#[cfg(test)]
#[path = "tests/hit_region_tests.rs"]
mod tests;
