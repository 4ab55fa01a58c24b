use growvec::TextError;
use sortvec::{sort_numbers, Order, SortError};

fn run(input: &str, order: Order) -> Result<String, SortError> {
    let mut buffer = [0u8; 256];
    let mut out: &mut [u8] = &mut buffer;
    sort_numbers(input.as_bytes(), &mut out, order)?;
    let remaining = out.len();
    let written = buffer.len() - remaining;
    Ok(String::from_utf8(buffer[..written].to_vec()).unwrap())
}

#[test]
fn test_sort_ascending() {
    assert_eq!(run("3 1 2", Order::Ascending).unwrap(), "{ 1 2 3 }\n");
}

#[test]
fn test_sort_descending() {
    assert_eq!(
        run("10\n-4 7\t7", Order::Descending).unwrap(),
        "{ 10 7 7 -4 }\n"
    );
}

#[test]
fn test_sort_empty_input() {
    assert_eq!(run("  \n", Order::Ascending).unwrap(), "{ }\n");
}

#[test]
fn test_sort_rejects_non_numbers() {
    let err = run("1 two 3", Order::Ascending).unwrap_err();
    assert_eq!(
        err,
        SortError::Read(TextError::Parse {
            index: 1,
            position: 2,
        })
    );
    assert_eq!(
        err.to_string(),
        "Failed to read numbers: Parse error: token for element 1 at byte 2 is not a valid value"
    );
}

#[test]
fn test_sort_reports_short_output() {
    let mut buffer = [0u8; 4];
    let mut out: &mut [u8] = &mut buffer;
    let err = sort_numbers(&b"5 4 3"[..], &mut out, Order::Ascending).unwrap_err();
    assert!(matches!(err, SortError::Write(TextError::Io { .. })));
}

#[test]
fn test_sort_count() {
    let mut buffer = [0u8; 32];
    let mut out: &mut [u8] = &mut buffer;
    let count = sort_numbers(&b"9 8 7 6"[..], &mut out, Order::Ascending).unwrap();
    assert_eq!(count, 4);
}
