mod common;
use common::op::*;
use common::*;
use synacor::mach::{BufReadSource, ErrorCode, Event, Runtime};

#[test]
fn test_input_to_register() {
    let mut r = Runtime::new(vec![IN, R0, OUT, R0, HALT]);
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.pc(), 0);
    assert_eq!(r.cycles(), 0);
    r.enter("xy");
    assert_eq!(exec(&mut r), "x");
    assert_eq!(r.register(0), 'x' as u16);
}

#[test]
fn test_input_to_memory() {
    let mut r = Runtime::new(vec![IN, 200, HALT]);
    r.enter("q");
    exec(&mut r);
    assert_eq!(r.memory().read(200).unwrap(), 'q' as u16);
    assert!(r.registers().iter().all(|v| *v == 0));
}

#[test]
fn test_register_target_is_not_dereferenced() {
    let mut r = Runtime::new(vec![SET, R1, 300, IN, R1, HALT]);
    r.enter("a");
    exec(&mut r);
    assert_eq!(r.register(1), 'a' as u16);
    assert_eq!(r.memory().read(300).unwrap(), NOOP);
}

#[test]
fn test_line_terminator_appended() {
    let mut r = Runtime::new(vec![IN, R0, IN, R1, IN, R2, HALT]);
    r.enter("ab");
    exec(&mut r);
    assert_eq!(r.register(0), 'a' as u16);
    assert_eq!(r.register(1), 'b' as u16);
    assert_eq!(r.register(2), '\n' as u16);
}

#[test]
fn test_carriage_return_dropped() {
    let mut r = Runtime::new(vec![IN, R0, IN, R1, HALT]);
    r.enter("a\r\n");
    exec(&mut r);
    assert_eq!(r.register(1), '\n' as u16);
}

#[test]
fn test_refills_one_line_at_a_time() {
    let mut r = Runtime::new(vec![IN, R0, IN, R1, IN, R2, HALT]);
    let mut source = BufReadSource::new("a\nb\n".as_bytes());
    let mut sink = Vec::new();
    r.run(&mut source, &mut sink).unwrap();
    assert_eq!(r.register(0), 'a' as u16);
    assert_eq!(r.register(1), '\n' as u16);
    assert_eq!(r.register(2), 'b' as u16);
}

#[test]
fn test_echo_line() {
    let image = vec![IN, R0, OUT, R0, EQ, R1, R0, 10, JF, R1, 0, HALT];
    let (out, result) = exec_with_input(image, &["hello"]);
    assert!(result.is_ok());
    assert_eq!(out, "hello\n");
}

#[test]
fn test_input_exhausted() {
    let (out, result) = exec_with_input(vec![OUT, 62, IN, R0, HALT], &[]);
    assert_eq!(out, ">");
    let error = result.unwrap_err();
    assert_eq!(error.code(), ErrorCode::InputExhausted);
    assert_eq!(error.pc(), Some(2));
}

#[test]
fn test_end_of_input_with_pending_chars() {
    let mut r = Runtime::new(vec![IN, R0, IN, R0, IN, R0, HALT]);
    r.enter("z");
    r.end_of_input();
    match r.execute(100) {
        Event::Fault(error) => assert_eq!(error.code(), ErrorCode::InputExhausted),
        event => panic!("{:?}", event),
    }
    assert_eq!(r.register(0), '\n' as u16);
}

#[test]
fn test_unicode_input_and_output() {
    let mut r = Runtime::new(vec![IN, R0, OUT, R0, HALT]);
    r.enter("é");
    assert_eq!(exec(&mut r), "é");
}
