use super::*;

#[test]
fn positions_on_first_line() {
    let source = "print(1);";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.position(source, 0), Position::new(1, 1));
    assert_eq!(table.position(source, 6), Position::new(1, 7));
}

#[test]
fn positions_across_lines() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.position(source, 3), Position::new(1, 4));
    assert_eq!(table.position(source, 4), Position::new(2, 1));
    assert_eq!(table.position(source, 7), Position::new(2, 4));
    assert_eq!(table.position(source, 10), Position::new(3, 1));
}

#[test]
fn columns_count_characters() {
    let source = "\"héllo\" + x";
    let table = LineOffsetTable::build(source);
    let plus = u32::try_from(source.find('+').unwrap()).unwrap();
    assert_eq!(table.position(source, plus), Position::new(1, 9));
}

#[test]
fn offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.position(source, 2), Position::new(1, 3));
    assert_eq!(table.position(source, 50), Position::new(1, 3));
}

#[test]
fn line_text_strips_terminators() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}
