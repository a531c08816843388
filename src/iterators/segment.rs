use glam::{DVec2, IVec2};

/// Iterator over the grid cells covered by a world-space segment.
///
/// The segment is sampled at `floor(max(|dx|, |dy|) / resolution) + 1` equal
/// steps, both endpoints included, so consecutive samples never move more than
/// one cell per axis. Where two consecutive samples land on diagonal cells the
/// corner cell nearer the segment is emitted between them, keeping the output
/// 4-connected. Repeated cells are collapsed.
#[derive(Debug, Clone)]
pub struct SegmentCells {
    /// Endpoints in grid units (relative to the origin, divided by resolution).
    start: DVec2,
    end: DVec2,
    steps: u32,
    next_sample: u64,
    prev: Option<IVec2>,
    pending: Option<IVec2>,
}

impl SegmentCells {
    pub fn new(start: DVec2, end: DVec2, origin: DVec2, resolution: f64) -> Self {
        let delta = (end - start).abs();
        let steps = ((delta.x.max(delta.y) / resolution).floor() as u32).saturating_add(1);
        Self {
            start: (start - origin) / resolution,
            end: (end - origin) / resolution,
            steps,
            next_sample: 0,
            prev: None,
            pending: None,
        }
    }

    /// Number of interpolation steps; the segment yields `steps + 1` samples.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    fn bridge(&self, prev: IVec2, cell: IVec2) -> IVec2 {
        let horizontal_first = IVec2::new(cell.x, prev.y);
        let vertical_first = IVec2::new(prev.x, cell.y);
        if self.offset_from_line(vertical_first) < self.offset_from_line(horizontal_first) {
            vertical_first
        } else {
            horizontal_first
        }
    }

    fn offset_from_line(&self, cell: IVec2) -> f64 {
        let center = cell.as_dvec2() + DVec2::splat(0.5);
        (self.end - self.start).perp_dot(center - self.start).abs()
    }
}

/// Clip the segment `start -> end` to the closed rectangle `[lo, hi]`.
///
/// Returns `None` when the segment misses the rectangle. Endpoints already
/// inside are returned unchanged.
pub fn clip_segment(start: DVec2, end: DVec2, lo: DVec2, hi: DVec2) -> Option<(DVec2, DVec2)> {
    let d = end - start;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-d.x, start.x - lo.x),
        (d.x, hi.x - start.x),
        (-d.y, start.y - lo.y),
        (d.y, hi.y - start.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    let clipped_start = if t0 > 0.0 { start + d * t0 } else { start };
    let clipped_end = if t1 < 1.0 { start + d * t1 } else { end };
    Some((clipped_start, clipped_end))
}

impl Iterator for SegmentCells {
    type Item = IVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(cell) = self.pending.take() {
            self.prev = Some(cell);
            return Some(cell);
        }

        loop {
            if self.next_sample > u64::from(self.steps) {
                return None;
            }
            let t = self.next_sample as f64 / self.steps as f64;
            self.next_sample += 1;

            let cell = self.start.lerp(self.end, t).floor().as_ivec2();
            match self.prev {
                Some(prev) if prev == cell => continue,
                Some(prev) if prev.x != cell.x && prev.y != cell.y => {
                    let bridge = self.bridge(prev, cell);
                    self.prev = Some(bridge);
                    self.pending = Some(cell);
                    return Some(bridge);
                }
                _ => {
                    self.prev = Some(cell);
                    return Some(cell);
                }
            }
        }
    }
}
