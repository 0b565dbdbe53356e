//! Frame transfer tests against a recording transport
//!
//! Run with: cargo test --test refresh

mod common;

use common::{Event, RecordingTransport};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use st7305::{Canvas, Config, ControllerState, Error, St7305, WIRE_BUFFER_SIZE};

fn ready_display() -> St7305<RecordingTransport> {
    let mut display = St7305::new(RecordingTransport::new(), Config::default()).unwrap();
    display.begin().unwrap();
    display
}

/// Transactions recorded after bring-up
fn frame_events(display: St7305<RecordingTransport>) -> Vec<Event> {
    let bus = display.release();
    assert!(bus.violations.is_empty(), "{:?}", bus.violations);
    let start = bus
        .events
        .iter()
        .rposition(|e| *e == Event::Delay(100))
        .map_or(0, |i| i + 1);
    bus.events[start..].to_vec()
}

#[test]
fn refresh_before_initialize_is_refused() {
    let mut display = St7305::new(RecordingTransport::new(), Config::default()).unwrap();
    assert_eq!(display.refresh(), Err(Error::NotInitialized));
    assert_eq!(display.set_window(), Err(Error::NotInitialized));
    assert_eq!(
        display.send_frame(&[0; WIRE_BUFFER_SIZE]),
        Err(Error::NotInitialized)
    );

    let bus = display.release();
    assert!(bus.events.is_empty());
}

#[test]
fn refresh_sets_window_then_streams_one_burst() {
    let mut display = ready_display();
    display.refresh().unwrap();
    assert_eq!(display.state(), ControllerState::Ready);

    let events = frame_events(display);
    assert_eq!(events.len(), 6);
    assert_eq!(events[0], Event::Command(0x2A));
    assert_eq!(events[1], Event::Data(vec![0x17, 0x24]));
    assert_eq!(events[2], Event::Command(0x2B));
    assert_eq!(events[3], Event::Data(vec![0x00, 0xBF]));
    assert_eq!(events[4], Event::Command(0x2C));
    match &events[5] {
        Event::Data(bytes) => {
            assert_eq!(bytes.len(), 8064);
            assert!(bytes.iter().all(|&b| b == 0));
        }
        other => panic!("expected frame data, got {:?}", other),
    }
}

#[test]
fn drawn_pixels_reach_the_wire_permuted() {
    let mut display = ready_display();
    display.set_pixel(0, 0, true);
    display.set_pixel(3, 0, true);
    display.refresh().unwrap();

    let events = frame_events(display);
    let Event::Data(frame) = &events[5] else {
        panic!("expected frame data");
    };
    assert_eq!(frame[0], 0x80);
    // column 3 is the right half of the second pair
    assert_eq!(frame[42], 0x40);
    assert_eq!(frame.iter().filter(|&&b| b != 0).count(), 2);
}

#[test]
fn every_refresh_sends_a_full_frame() {
    let mut display = ready_display();
    Rectangle::new(Point::new(10, 10), Size::new(50, 20))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(&mut display)
        .unwrap();
    display.refresh().unwrap();
    display.refresh().unwrap();

    let events = frame_events(display);
    let frames: Vec<&Vec<u8>> = events
        .iter()
        .filter_map(|e| match e {
            Event::Data(bytes) if bytes.len() > 2 => Some(bytes),
            _ => None,
        })
        .collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], frames[1]);
    assert!(frames.iter().all(|f| f.len() == WIRE_BUFFER_SIZE));
}

#[test]
fn cleared_display_sends_zeroes() {
    let mut display = ready_display();
    DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
    display.clear();
    display.refresh().unwrap();

    let events = frame_events(display);
    let Event::Data(frame) = &events[5] else {
        panic!("expected frame data");
    };
    assert!(frame.iter().all(|&b| b == 0));
}

#[test]
fn send_frame_streams_caller_buffer_verbatim() {
    let mut display = ready_display();
    let mut wire = [0u8; WIRE_BUFFER_SIZE];
    for (i, b) in wire.iter_mut().enumerate() {
        *b = (i % 251) as u8;
    }
    display.set_window().unwrap();
    display.send_frame(&wire).unwrap();

    let events = frame_events(display);
    assert_eq!(events[4], Event::Command(0x2C));
    assert_eq!(events[5], Event::Data(wire.to_vec()));
}

#[test]
fn canvas_dimensions_follow_config() {
    let config = Config::default().with_size(200, 96);
    let mut display = St7305::new(RecordingTransport::new(), config).unwrap();
    assert_eq!((display.width(), display.height()), (200, 96));
    assert_eq!(display.size(), Size::new(200, 96));

    display.set_pixel(200, 0, true);
    display.set_pixel(0, 96, true);
    assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
    assert_eq!(
        display.try_set_pixel(0, 96, true),
        Err(Error::OutOfBounds { x: 0, y: 96 })
    );
}

#[test]
fn oversized_config_is_rejected() {
    let config = Config::default().with_size(400, 168);
    assert!(matches!(
        St7305::new(RecordingTransport::new(), config),
        Err(Error::OutOfBounds { .. })
    ));
}
