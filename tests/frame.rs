use chrono::{NaiveDate, NaiveDateTime};
use horizon_watchface::{Palette, Watchface, WatchfaceConfig};

const WIDTH: usize = 144;
const HEIGHT: usize = 168;

fn at(minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(13, minute, second)
        .unwrap()
}

fn render_at(face: &mut Watchface, time: NaiveDateTime) -> Vec<u8> {
    face.on_tick(&time);
    let mut frame = vec![0u8; WIDTH * HEIGHT * 4];
    face.render(&mut frame);
    frame
}

fn pixel(frame: &[u8], x: usize, y: usize) -> [u8; 4] {
    let idx = (y * WIDTH + x) * 4;
    [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
}

fn headless_face() -> Watchface {
    Watchface::with_font(WatchfaceConfig::default(), None).unwrap()
}

#[test]
fn test_top_of_minute_shows_sky_above_horizon() {
    let palette = Palette::default();
    let mut face = headless_face();
    let frame = render_at(&mut face, at(7, 0));

    assert_eq!(pixel(&frame, 100, 60), palette.sky.with_alpha(0xff));
    assert_eq!(pixel(&frame, 100, 110), palette.earth.with_alpha(0xff));
    assert_eq!(pixel(&frame, 100, 84), palette.tick.with_alpha(0xff));
}

#[test]
fn test_half_minute_turns_the_horizon_over() {
    let palette = Palette::default();
    let mut face = headless_face();
    let frame = render_at(&mut face, at(7, 30));

    assert_eq!(pixel(&frame, 100, 60), palette.earth.with_alpha(0xff));
    assert_eq!(pixel(&frame, 100, 110), palette.sky.with_alpha(0xff));
    assert_eq!(pixel(&frame, 100, 84), palette.tick.with_alpha(0xff));
}

#[test]
fn test_bezel_and_text_sit_above_the_instrument() {
    let config = WatchfaceConfig::default();
    let mut face = headless_face();
    let frame = render_at(&mut face, at(7, 0));

    let (r, g, b) = config.bezel.bezel_color.as_tuple();
    assert_eq!(pixel(&frame, 0, 0), [r, g, b, 0xff]);
    assert_eq!(pixel(&frame, 20, 140), config.text.background.with_alpha(0xff));
}

#[test]
fn test_next_minute_repeats_the_frame() {
    let mut face = headless_face();
    let first = render_at(&mut face, at(7, 0));
    render_at(&mut face, at(7, 45));
    let again = render_at(&mut face, at(8, 0));
    assert!(first == again);
}
