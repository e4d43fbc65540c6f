use rstest::rstest;
use strum::IntoEnumIterator;
use textwave::{
    Crossing, Direction, PulseExtrema, WaitMode, WaveConfig, WaveOverrides, WaveSample,
    wave::{Curve, CurveDefinition, Easing, Keyframe, WaveShape},
};

fn linear_wave() -> WaveConfig {
    WaveConfig::default().with_upward_curve(Curve::linear()).with_downward_curve(Curve::linear())
}

fn pulse(trough_wait: f32) -> WaveConfig {
    linear_wave().with_trough_wait(trough_wait).expect("invalid wait")
}

fn shaped(shape: WaveShape, velocity: f32) -> WaveConfig {
    let (crest_wait, trough_wait) = match shape {
        WaveShape::Wave => (0.0, 0.0),
        WaveShape::Pulse => (0.0, 0.5),
        WaveShape::InvertedPulse => (0.5, 0.0),
        WaveShape::OneDirectionalPulse => (0.25, 0.75),
    };
    let wave = WaveConfig::default()
        .with_velocity(velocity)
        .and_then(|w| w.with_crest_wait(crest_wait))
        .and_then(|w| w.with_trough_wait(trough_wait))
        .expect("invalid config");
    assert_eq!(wave.shape(), shape);
    wave
}

fn assert_sample(sample: WaveSample, value: f32, direction: Direction) {
    assert!((sample.value - value).abs() < 1e-4, "{sample:?} != {value}");
    assert_eq!(sample.direction, direction, "{sample:?}");
}

fn times(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    let steps = ((end - start) / step).floor() as usize;
    (0..=steps).map(move |index| start + index as f32 * step)
}

#[rstest]
#[case::at_start(0.0, 0.0, 1)]
#[case::halfway_up(0.5, 0.5, 1)]
#[case::crest_belongs_to_rise(1.0, 1.0, 1)]
#[case::halfway_down(1.5, 0.5, -1)]
#[case::wrapped(2.0, 0.0, 1)]
fn identity_curves(#[case] time: f32, #[case] value: f32, #[case] sign: i32) {
    let sample = linear_wave().evaluate(time, 0.0);
    assert!((sample.value - value).abs() < 1e-4, "{sample:?} != {value}");
    assert_eq!(sample.direction.signum(), sign, "{sample:?}");
}

#[test]
fn crest_crossed_just_before_it_is_reached() {
    let wave = linear_wave();
    assert_eq!(wave.passed_extrema(1.0, 0.1, 0.0), Crossing::Crest);
    assert_eq!(wave.passed_extrema(0.5, 0.1, 0.0), Crossing::None);
}

#[test]
fn pulse_holds_at_trough() {
    let wave = pulse(0.2);
    assert_sample(wave.evaluate(2.0, 0.0), 0.0, Direction::Down);
    assert_sample(wave.evaluate(2.1, 0.0), 0.0, Direction::Down);
    assert_sample(wave.evaluate(2.3, 0.0), 0.1, Direction::Up);
}

#[rstest]
#[case::wave(linear_wave())]
#[case::pulse(pulse(0.5))]
#[case::inverted_pulse(linear_wave().with_crest_wait(0.5).expect("invalid wait"))]
#[case::one_directional(
    linear_wave().with_crest_wait(0.25).and_then(|w| w.with_trough_wait(0.75)).expect("invalid waits")
)]
#[case::eased_and_fast(
    WaveConfig::default().with_velocity(2.0).and_then(|w| w.with_trough_wait(0.5)).expect("invalid config")
)]
fn periodic(#[case] wave: WaveConfig) {
    let interval = wave.interval(WaitMode::Realtime);
    for time in [0.3, 0.7, 1.3, 1.9, 2.35, 3.1] {
        let sample = wave.evaluate(time, 0.0);
        for cycles in [1.0, 3.0, -2.0] {
            let shifted = wave.evaluate(time + cycles * interval, 0.0);
            assert!((sample.value - shifted.value).abs() < 1e-3, "t={time}: {sample:?} vs {shifted:?}");
            assert_eq!(sample.direction, shifted.direction, "t={time}");
        }
    }
}

#[test]
fn presets_stay_within_amplitude() {
    for easing in Easing::iter() {
        let curve = Curve::easing(easing);
        let wave = WaveConfig::default()
            .with_upward_curve(curve.clone())
            .with_downward_curve(curve)
            .with_amplitude(3.0)
            .and_then(|w| w.with_trough_wait(0.3))
            .expect("invalid config");
        for time in times(-4.0, 12.0, 0.05) {
            let value = wave.evaluate(time, 0.0).value;
            assert!((-1e-4..=3.0 + 1e-4).contains(&value), "{easing} at {time}: {value}");
        }
    }
}

#[rstest]
#[case::amplified(2.0)]
#[case::flipped(-0.5)]
fn keyframed_curves_stay_within_their_bounds(#[case] amplitude: f32) {
    let upward = Curve::keyframes([Keyframe::new(0.0, -0.5), Keyframe::new(0.4, 1.5), Keyframe::new(1.0, 1.0)])
        .expect("invalid curve");
    let downward = Curve::keyframes([Keyframe::new(0.0, 0.25), Keyframe::new(1.0, -1.0)]).expect("invalid curve");
    let (low, high) = [upward.value_bounds(), downward.value_bounds()]
        .into_iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(low, high), (l, h)| (low.min(l), high.max(h)));
    assert!(low < 0.0 && high > 1.0);

    let wave = WaveConfig::default()
        .with_upward_curve(upward)
        .with_downward_curve(downward)
        .with_amplitude(amplitude)
        .and_then(|w| w.with_crest_wait(0.2))
        .and_then(|w| w.with_trough_wait(0.3))
        .expect("invalid config");
    let limit = amplitude.abs() * low.abs().max(high.abs());
    let (min, max) =
        if amplitude >= 0.0 { (low * amplitude, high * amplitude) } else { (high * amplitude, low * amplitude) };
    for time in times(-3.0, 9.0, 0.05) {
        let value = wave.evaluate(time, 0.7).value;
        assert!(value.abs() <= limit + 1e-4, "{value} at {time} exceeds {limit}");
        assert!((min - 1e-4..=max + 1e-4).contains(&value), "{value} at {time} outside [{min}, {max}]");
    }
}

#[test]
fn direction_matches_slope() {
    let wave = pulse(0.5);
    let step = 0.01;
    for time in times(0.0, 10.0, 0.05) {
        let now = wave.evaluate(time, 0.0);
        let next = wave.evaluate(time + step, 0.0);
        if now.direction != next.direction {
            continue;
        }
        match now.direction {
            Direction::Up => assert!(next.value >= now.value - 1e-4, "rising at {time}"),
            Direction::Down => assert!(next.value <= now.value + 1e-4, "falling at {time}"),
        }
    }
}

#[test]
fn one_crossing_of_each_kind_per_cycle() {
    let wave = linear_wave();
    let crossings: Vec<_> = times(0.25, 8.0, 0.25).map(|t| wave.passed_extrema(t, 0.25, 0.0)).collect();
    assert_eq!(crossings.iter().filter(|c| **c == Crossing::Crest).count(), 4);
    assert_eq!(crossings.iter().filter(|c| **c == Crossing::Trough).count(), 4);
}

#[rstest]
#[case::early(PulseExtrema::Early, 4)]
#[case::late(PulseExtrema::Late, 4)]
#[case::both(PulseExtrema::Both, 8)]
fn hold_reports_follow_flag(#[case] extrema: PulseExtrema, #[case] troughs: usize) {
    let wave = pulse(0.5);
    let crossings: Vec<_> = times(0.25, 10.0, 0.25)
        .map(|t| wave.passed_extrema_with(t, 0.25, 0.0, WaitMode::Realtime, extrema))
        .collect();
    assert_eq!(crossings.iter().filter(|c| **c == Crossing::Crest).count(), 4);
    assert_eq!(crossings.iter().filter(|c| **c == Crossing::Trough).count(), troughs);
}

#[test]
fn frame_by_frame_crossings_alternate() {
    const CYCLES: usize = 6;
    for shape in WaveShape::iter() {
        for velocity in [1.0, 2.0] {
            let wave = shaped(shape, velocity);
            let duration = CYCLES as f32 * wave.interval(WaitMode::Realtime) / velocity;
            let frames = (duration / 0.1).floor() as usize;
            for offset in [0.3, 1.0, 2.5] {
                let context = format!("{shape} at velocity {velocity}, offset {offset}");
                let mut previous = 0.0;
                let mut crossings = Vec::new();
                for frame in 1..=frames {
                    let time = frame as f32 * 0.1;
                    let crossing = wave.passed_extrema(time, time - previous, offset);
                    if crossing != Crossing::None {
                        crossings.push(crossing);
                    }
                    previous = time;
                }
                assert!(crossings.windows(2).all(|pair| pair[0] != pair[1]), "{context}: {crossings:?}");
                for kind in [Crossing::Crest, Crossing::Trough] {
                    let count = crossings.iter().filter(|c| **c == kind).count();
                    assert!((CYCLES - 1..=CYCLES).contains(&count), "{context}: {count} {kind}s");
                }
            }
        }
    }
}

#[test]
fn split_windows_agree_with_whole_window() {
    for shape in WaveShape::iter() {
        for velocity in [1.0, 2.0] {
            let wave = shaped(shape, velocity);
            for offset in [0.3, 1.0, 2.5] {
                for frame in 4..120 {
                    let (start, middle, end) =
                        ((frame - 2) as f32 * 0.1, (frame - 1) as f32 * 0.1, frame as f32 * 0.1);
                    let whole = wave.passed_extrema(end, end - start, offset);
                    let first = wave.passed_extrema(middle, middle - start, offset);
                    let second = wave.passed_extrema(end, end - middle, offset);
                    let expected = if second == Crossing::None { first } else { second };
                    assert_eq!(whole, expected, "{shape} at velocity {velocity}, offset {offset}, t={end}");
                }
            }
        }
    }
}

#[test]
fn splitting_a_window_keeps_its_crossing() {
    let wave = linear_wave();
    assert_eq!(wave.passed_extrema(1.25, 0.5, 0.0), Crossing::Crest);
    assert_eq!(wave.passed_extrema(1.0, 0.25, 0.0), Crossing::Crest);
    assert_eq!(wave.passed_extrema(1.25, 0.25, 0.0), Crossing::None);
}

#[test]
fn overrides_leave_original_untouched() {
    let wave = linear_wave();
    let before = wave.to_definition();
    let overrides = WaveOverrides {
        velocity: Some(3.0),
        downward_curve: Some(CurveDefinition::Easing(Easing::EaseOutQuad)),
        trough_wait: Some(0.5),
        ..Default::default()
    };
    let modified = wave.with_overrides(&overrides).expect("invalid overrides");

    assert_eq!(wave.to_definition(), before);
    assert_eq!(modified.periods().velocity(), 3.0);
    assert_eq!(modified.trough_wait(), 0.5);
    assert_eq!(modified.periods().up_period(), 1.0);
}

#[test]
fn yaml_definition_drives_sampling() {
    let wave = WaveConfig::from_yaml(
        r#"
up_period: 0.5
down_period: 1.5
upward_curve: linear
downward_curve: [[0.0, 0.0], [1.0, 1.0]]
trough_wait: 0.25
"#,
    )
    .expect("invalid definition");
    assert_sample(wave.evaluate(0.25, 0.0), 0.5, Direction::Up);
    assert_sample(wave.evaluate(1.25, 0.0), 0.5, Direction::Down);
    assert_sample(wave.evaluate(2.125, 0.0), 0.0, Direction::Down);
    assert_eq!(wave.interval(WaitMode::Realtime), 2.25);
}
