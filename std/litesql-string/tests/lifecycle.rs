///
/// Buffer Lifecycle Integration Tests
///
/// Walks a ByteString through the full create / assign / append / measure /
/// teardown cycle the generator relies on, including re-creating a binding
/// after teardown and rebuilding text across many appends.
///

use litesql_string::ByteString;

#[test]
fn assign_then_append_scenario() {
    let mut b = ByteString::new().unwrap();
    b.assign(b"abc").unwrap();
    b.append_bytes(b"def").unwrap();
    assert_eq!(b.len(), 6);
    assert_eq!(b.as_bytes(), b"abcdef");
}

#[test]
fn empty_assign_then_append_scenario() {
    let mut b = ByteString::new().unwrap();
    b.assign(b"").unwrap();
    assert_eq!(b.len(), 0);
    b.append_bytes(b"xyz").unwrap();
    assert_eq!(b.len(), 3);
    assert_eq!(b.as_bytes(), b"xyz");
}

#[test]
fn teardown_then_recreate_yields_fresh_buffer() {
    let mut b = ByteString::new().unwrap();
    b.assign(b"stale content").unwrap();
    drop(b);

    let b = ByteString::new().unwrap();
    assert_eq!(b.len(), 0);
    assert_eq!(b.as_bytes_with_nul(), &[0]);
}

#[test]
fn repeated_appends_accumulate_exactly() {
    let mut b = ByteString::new().unwrap();
    let mut expected = Vec::new();
    for i in 0..32 {
        let piece = format!("chunk{i};");
        b.append_bytes(piece.as_bytes()).unwrap();
        expected.extend_from_slice(piece.as_bytes());
    }
    assert_eq!(b.len(), expected.len());
    assert_eq!(b.as_bytes(), expected.as_slice());
    assert_eq!(*b.as_bytes_with_nul().last().unwrap(), 0);
}

#[test]
fn append_between_two_built_buffers() {
    let mut head = ByteString::from_bytes(b"CREATE TABLE ").unwrap();
    let tail = ByteString::from_bytes(b"person_").unwrap();
    head.append(&tail).unwrap();
    assert_eq!(head.as_bytes(), b"CREATE TABLE person_");
    assert_eq!(head.len(), "CREATE TABLE person_".len());
    assert_eq!(head, ByteString::from_bytes(b"CREATE TABLE person_").unwrap());
    assert_eq!(tail.as_bytes(), b"person_");
}
