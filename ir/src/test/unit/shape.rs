use crate::{Error, Shape};

#[test]
fn test_prod() {
    assert_eq!(Shape::from([2, 3, 4]).prod(), 24);
    assert_eq!(Shape::from([5]).prod(), 5);
    assert_eq!(Shape::new([]).prod(), 1);
}

#[test]
fn test_max_min() {
    let shape = Shape::from([3, 7, 2]);
    assert_eq!(shape.max().unwrap(), 7);
    assert_eq!(shape.min().unwrap(), 2);

    let single = Shape::rank1(6);
    assert_eq!(single.max().unwrap(), 6);
    assert_eq!(single.min().unwrap(), 6);
}

#[test]
fn test_empty_shape_reductions_fail() {
    let scalar = Shape::new([]);
    assert!(matches!(scalar.max(), Err(Error::EmptyShape)));
    assert!(matches!(scalar.min(), Err(Error::EmptyShape)));
}

#[test]
fn test_size_and_indexing() {
    let mut shape = Shape::rank2(4, 9);
    assert_eq!(shape.size(), 2);
    assert_eq!(shape[0], 4);
    assert_eq!(shape[1], 9);

    // Element replacement by axis index.
    shape[1] = 16;
    assert_eq!(shape[1], 16);
    assert_eq!(shape.prod(), 64);
}

#[test]
fn test_constructors_agree() {
    assert_eq!(Shape::rank1(5), Shape::from([5]));
    assert_eq!(Shape::rank2(5, 6), Shape::from([5, 6]));
    assert_eq!(Shape::new([1, 2, 3]), [1, 2, 3].into_iter().collect());
}

#[test]
fn test_zero_extent() {
    // A zero extent along any axis empties the tensor.
    let shape = Shape::from([4, 0, 3]);
    assert_eq!(shape.prod(), 0);
    assert_eq!(shape.min().unwrap(), 0);
    assert_eq!(shape.max().unwrap(), 4);
}
