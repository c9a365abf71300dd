use crate::{Error, Slice};

#[test]
fn test_full_axis() {
    for bound in [0, 1, 10, 4096] {
        assert_eq!(Slice::ALL.size(bound).unwrap(), bound);
    }
}

#[test]
fn test_single_index() {
    assert_eq!(Slice::index(3), Slice { start: 3, end: 4, stride: 1 });
    assert_eq!(Slice::index(3).size(10).unwrap(), 1);
    assert_eq!(Slice::index(0).size(1).unwrap(), 1);
}

#[test]
fn test_open_ended() {
    // Indices 2 through 9 inclusive.
    assert_eq!(Slice::range(2, -1).size(10).unwrap(), 8);
    // The sentinel resolves as bound - (end + 1), so -2 reaches one
    // position past the bound.
    assert_eq!(Slice::range(0, -2).size(10).unwrap(), 11);
}

#[test]
fn test_strided_truncation() {
    // Indices 0,2,4,6 selected; the remainder is excluded, not rounded.
    assert_eq!(Slice::strided(0, 9, 2).size(9).unwrap(), 4);
    assert_eq!(Slice::strided(0, 10, 2).size(10).unwrap(), 5);
    assert_eq!(Slice::strided(1, 8, 3).size(8).unwrap(), 2);
}

#[test]
fn test_explicit_range() {
    assert_eq!(Slice::range(2, 5).size(10).unwrap(), 3);
    assert_eq!(Slice::range(0, 10).size(10).unwrap(), 10);
}

#[test]
fn test_start_past_bound_rejected() {
    let err = Slice::index(12).size(10).unwrap_err();
    assert!(matches!(err, Error::SliceOutOfBounds { start: 12, bound: 10 }));
}

#[test]
fn test_zero_stride_rejected() {
    let err = Slice::strided(0, 9, 0).size(10).unwrap_err();
    assert!(matches!(err, Error::ZeroStride { start: 0, end: 9 }));
}

#[test]
fn test_negative_size_rejected() {
    let err = Slice::range(5, 2).size(10).unwrap_err();
    assert!(matches!(err, Error::NegativeSliceSize { .. }));
}
