use horizon_watchface::raster::{scanline_spans, Span};
use horizon_watchface::{HorizonInstrument, HorizonPart, FULL_TURN};
use proptest::prelude::*;

fn coverage(spans: &[Span], width: usize, height: usize, counts: &mut [u32]) {
    for span in spans {
        for x in span.x_start..span.x_end {
            counts[span.y * width + x] += 1;
        }
    }
    assert_eq!(counts.len(), width * height);
}

fn sky_and_earth_counts(width: i32, height: i32, angle: i64) -> Vec<u32> {
    let mut instrument = HorizonInstrument::initialize(width, height).unwrap();
    instrument.set_rotation(angle);
    let commands = instrument.draw(width, height);

    let (w, h) = (width as usize, height as usize);
    let mut counts = vec![0; w * h];
    for command in commands
        .iter()
        .filter(|c| matches!(c.part, HorizonPart::Sky | HorizonPart::Earth))
    {
        coverage(&scanline_spans(&command.points, w, h), w, h, &mut counts);
    }
    counts
}

#[test]
fn test_watch_screen_is_partitioned_every_second() {
    for second in 0..60 {
        let angle = i64::from(horizon_watchface::rotation_for_seconds(second));
        let counts = sky_and_earth_counts(144, 168, angle);
        assert!(
            counts.iter().all(|&c| c == 1),
            "second {second}: sky and earth do not partition the screen"
        );
    }
}

#[test]
fn test_sky_is_above_earth_at_rest() {
    let mut instrument = HorizonInstrument::initialize(144, 168).unwrap();
    let commands = instrument.draw(144, 168);
    let sky = scanline_spans(&commands[0].points, 144, 168);
    let earth = scanline_spans(&commands[1].points, 144, 168);
    assert!(sky.iter().all(|s| s.y < 84));
    assert!(earth.iter().all(|s| s.y >= 84));
    assert_eq!(sky.len(), 84);
    assert_eq!(earth.len(), 84);
}

proptest! {
    #[test]
    fn prop_sky_and_earth_partition_the_canvas(
        width in 4..48i32,
        height in 4..48i32,
        angle in 0..FULL_TURN,
    ) {
        let counts = sky_and_earth_counts(width, height, i64::from(angle));
        prop_assert!(counts.iter().all(|&c| c == 1));
    }
}
