use super::{ErrorKind, Input};

#[test]
fn parse_pairs() {
    let mut input = Input::new(b"3   4\n-17   9\n", 0);
    let mut pairs = Vec::new();

    for value in input.lines::<(i64, i64)>() {
        pairs.push(value.unwrap());
    }

    assert_eq!(pairs, [(3, 4), (-17, 9)]);
}

#[test]
fn missing_final_newline() {
    let mut input = Input::new(b"3   4", 0);
    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), Some((3, 4)));
    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), None);
}

#[test]
fn rejects_bad_integer() {
    let mut input = Input::new(b"3   x\n", 0);
    let error = input.try_line::<(i64, i64)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger(..)));
    assert_eq!(error.span(), 4..5);
}

#[test]
fn rejects_trailing_words() {
    let mut input = Input::new(b"3   4   5\n", 0);
    let error = input.try_line::<(i64, i64)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput(..)));
    assert_eq!(error.span(), 8..9);
}

#[test]
fn rejects_short_line() {
    let mut input = Input::new(b"3\n3   4\n", 0);
    let error = input.try_line::<(i64, i64)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
}

#[test]
fn rejects_interior_blank_line() {
    let mut input = Input::new(b"3   4\n\n5   6\n", 0);
    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), Some((3, 4)));
    assert!(input.try_line::<(i64, i64)>().is_err());
}

#[test]
fn trailing_blank_lines_end_input() {
    let mut input = Input::new(b"3   4\n\n  \n", 0);
    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), Some((3, 4)));
    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), None);
}

#[test]
fn round_trip() {
    let pairs = [(0, 1), (-3, 7), (1000000, -1000000), (42, 42)];
    let mut text = String::new();

    for (l, r) in pairs {
        text.push_str(&format!("{l}   {r}\n"));
    }

    let mut input = Input::new(text.as_bytes(), 0);
    let mut back = Vec::new();

    for value in input.lines::<(i64, i64)>() {
        back.push(value.unwrap());
    }

    assert_eq!(back, pairs);
}
