use super::{Crossing, Periods, PulseExtrema, WaveShape};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SegmentKind {
    Rise,
    HoldCrest,
    Fall,
    HoldTrough,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Segment {
    pub(crate) kind: SegmentKind,
    pub(crate) length: f32,
}

impl Segment {
    fn new(kind: SegmentKind, length: f32) -> Self {
        Self { kind, length }
    }
}

/// A point within the cycle where an extremum is reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Event {
    pub(crate) position: f32,
    pub(crate) crossing: Crossing,
}

/// One cycle of a wave laid out as consecutive segments.
///
/// The first segment covers `[0, end]`, every other one `(start, end]`. The interval is the end of
/// the last segment so the segments always partition it exactly.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Timeline {
    segments: [Segment; 4],
    ends: [f32; 4],
    count: usize,
}

impl Timeline {
    /// Lay out a cycle. Waits are expected to already be scaled.
    pub(crate) fn new(shape: WaveShape, periods: &Periods, crest_wait: f32, trough_wait: f32) -> Self {
        use SegmentKind::*;
        let rise = Segment::new(Rise, periods.effective_up_period());
        let fall = Segment::new(Fall, periods.effective_down_period());
        let hold_crest = Segment::new(HoldCrest, crest_wait);
        let hold_trough = Segment::new(HoldTrough, trough_wait);
        match shape {
            WaveShape::Wave => Self::from_segments(&[rise, fall]),
            WaveShape::Pulse => Self::from_segments(&[rise, fall, hold_trough]),
            WaveShape::InvertedPulse => Self::from_segments(&[fall, rise, hold_crest]),
            WaveShape::OneDirectionalPulse => Self::from_segments(&[rise, hold_crest, fall, hold_trough]),
        }
    }

    fn from_segments(input: &[Segment]) -> Self {
        let mut segments = [Segment::new(SegmentKind::Rise, 0.0); 4];
        let mut ends = [0.0; 4];
        let mut end = 0.0;
        for (index, segment) in input.iter().enumerate() {
            end += segment.length;
            segments[index] = *segment;
            ends[index] = end;
        }
        Self { segments, ends, count: input.len() }
    }

    pub(crate) fn interval(&self) -> f32 {
        self.ends[self.count - 1]
    }

    /// Reduce a raw phase into `[0, interval]`.
    pub(crate) fn reduce(&self, phase: f32) -> f32 {
        phase.rem_euclid(self.interval())
    }

    /// Find the segment a reduced phase falls in along with the progress through it, in `[0, 1]`.
    ///
    /// Zero length segments report a progress of 1 so they evaluate to their end value.
    pub(crate) fn locate(&self, position: f32) -> (SegmentKind, f32) {
        let last = self.count - 1;
        let index = self.ends[..last].iter().position(|end| position <= *end).unwrap_or(last);
        let segment = self.segments[index];
        if segment.length <= 0.0 {
            return (segment.kind, 1.0);
        }
        let start = self.ends[index] - segment.length;
        (segment.kind, ((position - start) / segment.length).clamp(0.0, 1.0))
    }

    /// The points in the cycle where extrema are reported.
    ///
    /// Reaching the end of a rise is a crest, reaching the end of a fall is a trough. When a hold
    /// follows, `extrema` decides whether the event fires when the hold starts, ends, or both.
    pub(crate) fn events(&self, extrema: PulseExtrema) -> impl Iterator<Item = Event> + '_ {
        (0..self.count).flat_map(move |index| {
            let arrival = self.ends[index];
            let crossing = match self.segments[index].kind {
                SegmentKind::Rise => Crossing::Crest,
                SegmentKind::Fall => Crossing::Trough,
                SegmentKind::HoldCrest | SegmentKind::HoldTrough => Crossing::None,
            };
            let next = self.segments[(index + 1) % self.count];
            let hold = match next.kind {
                SegmentKind::HoldCrest | SegmentKind::HoldTrough => next.length,
                SegmentKind::Rise | SegmentKind::Fall => 0.0,
            };
            let (early, late) = match crossing {
                Crossing::None => (None, None),
                _ if hold <= 0.0 => (Some(arrival), None),
                _ => match extrema {
                    PulseExtrema::Early => (Some(arrival), None),
                    PulseExtrema::Late => (None, Some(arrival + hold)),
                    PulseExtrema::Both => (Some(arrival), Some(arrival + hold)),
                },
            };
            [early, late].into_iter().flatten().map(move |position| Event { position, crossing })
        })
    }
}
