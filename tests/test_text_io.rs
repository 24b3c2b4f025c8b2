//! Tests for reading and writing the text form of a bitfield.

use packed_bitfield::{BitField, BitFieldError};
use std::io::{BufRead, Cursor, ErrorKind};

#[test]
fn test_read_pattern() {
    let mut bf = BitField::new(8).unwrap();
    bf.read_bits(Cursor::new("10100001")).unwrap();
    assert_eq!(bf.get_acts(), vec![0, 2, 7]);
}

#[test]
fn test_read_overwrites_previous_bits() {
    let mut bf = BitField::new(4).unwrap();
    for i in 0..4 {
        bf.set_bit(i).unwrap();
    }
    bf.read_bits(Cursor::new("0100")).unwrap();
    assert_eq!(bf.get_acts(), vec![1]);
}

#[test]
fn test_read_unknown_characters_are_no_ops() {
    let mut bf = BitField::new(5).unwrap();
    bf.set_bit(1).unwrap();
    bf.set_bit(3).unwrap();
    bf.read_bits(Cursor::new("1*0#1")).unwrap();
    // '*' keeps bit 1 set, '#' keeps bit 3 set
    assert_eq!(bf.get_acts(), vec![0, 1, 3, 4]);
}

#[test]
fn test_read_stops_after_length_characters() {
    let mut cursor = Cursor::new("110 rest");
    let mut bf = BitField::new(3).unwrap();
    bf.read_bits(&mut cursor).unwrap();
    assert_eq!(bf.get_acts(), vec![0, 1]);

    let mut rest = String::new();
    cursor.read_line(&mut rest).unwrap();
    assert_eq!(rest, " rest");
}

#[test]
fn test_read_across_lines() {
    let mut bf = BitField::new(6).unwrap();
    bf.read_bits(Cursor::new("10\n01\r\n11\n")).unwrap();
    assert_eq!(bf.get_acts(), vec![0, 3, 4, 5]);
}

#[test]
fn test_read_short_input_is_eof() {
    let mut bf = BitField::new(10).unwrap();
    match bf.read_bits(Cursor::new("111")) {
        Err(BitFieldError::Io(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
    assert_eq!(bf.get_acts(), vec![0, 1, 2]);
}

#[test]
fn test_read_never_touches_padding() {
    let mut bf = BitField::new(32).unwrap();
    bf.read_bits(Cursor::new("1".repeat(33))).unwrap();
    assert_eq!(bf.num_set(), 32);
    assert_eq!(bf.get_bit(32).unwrap(), 0);
}

#[test]
fn test_write_listing() {
    let mut bf = BitField::new(100).unwrap();
    bf.set_bit(3).unwrap();
    bf.set_bit(40).unwrap();
    bf.set_bit(99).unwrap();

    let mut out = Vec::new();
    bf.write_acts(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3 40 99\n");
}

#[test]
fn test_write_empty_listing() {
    let bf = BitField::new(16).unwrap();
    let mut out = Vec::new();
    bf.write_acts(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\n");
}

#[test]
fn test_read_then_write() {
    let mut bf = BitField::new(12).unwrap();
    bf.read_bits(Cursor::new("0110 0000 1001")).unwrap();

    let mut out = Vec::new();
    bf.write_acts(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1 2 8 11\n");
    assert_eq!(bf.to_string(), "1 2 8 11");
}

#[test]
fn test_from_bit_str() {
    let bf = BitField::from_bit_str("1 0 1 1").unwrap();
    assert_eq!(bf.length(), 4);
    assert_eq!(bf.get_acts(), vec![0, 2, 3]);

    let empty = BitField::from_bit_str("").unwrap();
    assert_eq!(empty.length(), 0);
}

#[test]
fn test_from_bit_str_non_ascii() {
    let bf = BitField::from_bit_str("é1").unwrap();
    assert_eq!(bf.length(), 2);
    assert_eq!(bf.get_acts(), vec![1]);
}

#[test]
fn test_write_has_no_trailing_space() {
    let bf = BitField::from_bit_str("11").unwrap();
    let mut out = Vec::new();
    bf.write_acts(&mut out).unwrap();
    assert_eq!(out, b"0 1\n");
}
