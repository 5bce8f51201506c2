mod common;
use common::op::*;
use common::*;
use synacor::mach::{load_image, save_image, ErrorCode, Event, Runtime};

#[test]
fn test_little_endian_words() {
    let words = load_image(&[0x13, 0x00, 0x68, 0x00, 0x00, 0x80, 0x00, 0x00]).unwrap();
    assert_eq!(words, vec![OUT, 104, R0, HALT]);
}

#[test]
fn test_odd_length() {
    let error = load_image(&[0x13, 0x00, 0x68]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::MalformedImage);
}

#[test]
fn test_oversized_image() {
    let error = load_image(&vec![0u8; 2 * 32768 + 2]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::MalformedImage);
    assert!(load_image(&vec![0u8; 2 * 32768]).is_ok());
}

#[test]
fn test_saved_image_runs() {
    let bytes = save_image(&[OUT, 104, OUT, 105, HALT]);
    assert_eq!(bytes.len(), 10);
    let mut r = Runtime::new(load_image(&bytes).unwrap());
    assert_eq!(exec(&mut r), "hi");
}

#[test]
fn test_oversized_image_is_not_run() {
    let mut r = Runtime::new(vec![NOOP; 40000]);
    assert!(r.is_finished());
    let error = fault(&mut r);
    assert_eq!(error.code(), ErrorCode::MalformedImage);
    assert_eq!(error.pc(), Some(0));
    assert_eq!(r.cycles(), 0);
    let mut full = Runtime::new(vec![NOOP; 32768]);
    assert!(matches!(full.execute(1), Event::Running));
}

#[test]
fn test_short_image_padded_with_noop() {
    let r = Runtime::new(vec![HALT]);
    assert_eq!(r.memory().len(), 32768);
    assert_eq!(r.memory().read(0).unwrap(), HALT);
    assert!(r.memory().words()[1..].iter().all(|w| *w == NOOP));
}
