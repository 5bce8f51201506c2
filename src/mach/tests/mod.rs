use super::runtime::normalize;
use super::*;
use std::convert::TryFrom;


#[test]
fn test_normalize() {
    assert_eq!(normalize(0), 0);
    assert_eq!(normalize(32767), 32767);
    assert_eq!(normalize(32768), 0);
    assert_eq!(normalize(32772), 4);
    assert_eq!(normalize(-1), 32767);
    assert_eq!(normalize(-32768), 0);
    assert_eq!(normalize(32767 * 32767), 1);
}

#[test]
fn test_normalize_always_in_range() {
    for val in (-70000i64..70000).step_by(97) {
        assert!(normalize(val) < WORD_MODULUS);
    }
}

#[test]
fn test_opcode_decode() {
    for word in 0..=21u16 {
        let opcode = Opcode::try_from(word).unwrap();
        assert_eq!(opcode.code(), word);
        assert!(Opcode::is_opcode(word));
    }
    assert_eq!(Opcode::try_from(22u16), Err(22));
    assert_eq!(Opcode::try_from(9999u16), Err(9999));
    assert!(!Opcode::is_opcode(32768));
}

#[test]
fn test_opcode_arity() {
    assert_eq!(Opcode::Halt.arity(), 0);
    assert_eq!(Opcode::Ret.arity(), 0);
    assert_eq!(Opcode::Call.arity(), 1);
    assert_eq!(Opcode::In.arity(), 1);
    assert_eq!(Opcode::Wmem.arity(), 2);
    assert_eq!(Opcode::Not.arity(), 2);
    assert_eq!(Opcode::Mod.arity(), 3);
    assert_eq!(Opcode::Noop.to_string(), "NOOP");
}

#[test]
fn test_error_display() {
    assert_eq!(error!(StackUnderflow).to_string(), "STACK UNDERFLOW");
    assert_eq!(error!(DivisionByZero, 12).to_string(), "DIVISION BY ZERO AT 12");
    assert_eq!(
        error!(InvalidOpcode, 7; "WORD 9999").to_string(),
        "INVALID OPCODE AT 7; WORD 9999"
    );
    assert_eq!(error!(InputExhausted).at(3).at(9).pc(), Some(3));
}
