//! End-to-end scenarios exercising the Array container across modules

use varray::{Array, ArrayError, FillMode};

#[test]
fn test_negative_index_lookup() {
    let a = Array::from_slice(&[1, 2, 3, 4]).unwrap();
    assert_eq!(a[-1], 4);
}

#[test]
fn test_full_range_shift() {
    let mut a = Array::from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
    a.shift(1, ..).unwrap();
    assert_eq!(a.to_vec(), vec![6, 1, 2, 3, 4, 5]);
}

#[test]
fn test_repeat_fill_over_zeroed_array() {
    let mut a: Array<i32> = Array::with_len(10).unwrap();
    a.fill_pattern(&[1, 2, 3], FillMode::Repeat, ..).unwrap();
    assert_eq!(a.to_vec(), vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
}

#[test]
fn test_pattern_find_and_find_all() {
    let a = Array::from_slice(&[1, 2, 3, 4, 1, 2, 3, 2, 3]).unwrap();
    assert_eq!(a.find_seq(&[1, 2, 3], ..).unwrap(), Some(0));
    assert_eq!(a.find_all_seq(&[1, 2, 3], ..).unwrap().to_vec(), vec![0, 4]);
}

#[test]
fn test_broadcasting_add() {
    let a = Array::from_slice(&[1, 2, 3]).unwrap();
    let b = Array::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    assert_eq!((&a + &b).to_vec(), vec![2, 4, 6, 4, 5]);
}

#[test]
fn test_erase_sequence() {
    let mut a = Array::from_slice(&[1, 2, 3, 4]).unwrap();
    a.erase(0, 2).unwrap();
    assert_eq!(a.to_vec(), vec![3, 4]);
    a.erase(-1, 1).unwrap();
    assert_eq!(a.to_vec(), vec![3]);
}

#[test]
fn test_build_analyze_transform_pipeline() {
    // construct from an iterator, clean up, analyze, and transform
    let mut a: Array<i32> = (1..=8).collect();
    a.append_slice(&[4, 4, 2]).unwrap();

    let distinct = a.unique().unwrap();
    assert_eq!(distinct.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(a.sum(..).unwrap(), 46);
    assert_eq!(a.max(..).unwrap(), 8);
    assert_eq!(a.argmax(..).unwrap().to_vec(), vec![7]);
    assert_eq!(a.count(&4, ..).unwrap(), 3);

    let doubled = a.map(|v| v * 2).unwrap();
    assert_eq!(doubled.max(..).unwrap(), 16);

    let small = a.filter(|&v| v <= 3).unwrap();
    assert_eq!(small.to_vec(), vec![1, 2, 3, 2]);
}

#[test]
fn test_mask_pipeline() {
    let a = Array::from_slice(&[1, 6, 3, 8, 5]).unwrap();
    let big = a.gt_scalar(4);
    let odd: Array<bool> = a.map(|v| v % 2 == 1).unwrap();
    let big_or_odd = &big | &odd;
    assert_eq!(big_or_odd.to_vec(), vec![true, true, true, true, true]);
    let big_and_odd = &big & &odd;
    assert_eq!(big_and_odd.to_vec(), vec![false, false, false, false, true]);
    assert_eq!((!&big).to_vec(), vec![true, false, true, false, false]);
}

#[test]
fn test_error_taxonomy() {
    let mut a = Array::from_slice(&[1, 2, 3]).unwrap();

    match a.get(5) {
        Err(ArrayError::InvalidIndex { index, len }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 3);
        }
        other => panic!("expected InvalidIndex, got {:?}", other),
    }

    assert!(matches!(
        a.reverse(2..=0),
        Err(ArrayError::InvalidRange { .. })
    ));

    // failed validation leaves the array unchanged
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_range_spellings_are_equivalent() {
    let base = Array::from_slice(&[5, 4, 3, 2, 1]).unwrap();
    for sorted in [
        base.to_sorted(true, ..).unwrap(),
        base.to_sorted(true, 0..).unwrap(),
        base.to_sorted(true, ..=-1).unwrap(),
        base.to_sorted(true, 0..5).unwrap(),
        base.to_sorted(true, 0..=4).unwrap(),
        base.to_sorted(true, -5..=-1).unwrap(),
    ] {
        assert_eq!(sorted.to_vec(), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_stats_pipeline() {
    let a = Array::from_slice(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(a.mean(..).unwrap(), 5.0);
    // squared deviations sum to 32 over 8 samples
    assert!((a.variance(..).unwrap() - 32.0 / 7.0).abs() < 1e-9);
    assert!((a.stdev(..).unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
    assert_eq!(a.min(..).unwrap(), 2.0);
    assert_eq!(a.argmin(..).unwrap().to_vec(), vec![0]);
    assert_eq!(a.argmax(..).unwrap().to_vec(), vec![7]);
}

#[test]
fn test_stretch_fill_then_search() {
    let mut a: Array<i32> = Array::with_len(9).unwrap();
    a.fill_pattern(&[1, 2, 3], FillMode::Stretch, ..).unwrap();
    assert_eq!(a.to_vec(), vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
    assert_eq!(a.find_seq(&[1, 2], ..).unwrap(), Some(2));
    assert_eq!(a.count(&2, ..).unwrap(), 3);
}

#[test]
fn test_move_and_clone_semantics() {
    let a = Array::from_slice(&[1, 2, 3]).unwrap();
    let b = a.clone();
    let v = a.into_vec();
    assert_eq!(v, vec![1, 2, 3]);
    assert_eq!(b.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_display_formats_like_a_list() {
    let a = Array::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(format!("{}", a), "[1, 2, 3]");
}

#[test]
fn test_select_and_slice_extraction() {
    let a = Array::from_slice(&[10, 20, 30, 40, 50]).unwrap();
    assert_eq!(a.select(&[0, -1, 2]).unwrap().to_vec(), vec![10, 50, 30]);
    assert_eq!(a.slice(1..=3).unwrap().to_vec(), vec![20, 30, 40]);
    assert_eq!(a.slice(-2..).unwrap().to_vec(), vec![40, 50]);
}

#[test]
fn test_weighted_mean_against_plain_mean() {
    let a = Array::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let uniform = a.weighted_mean(&[1.0, 1.0, 1.0, 1.0], ..).unwrap();
    assert!((uniform - a.mean(..).unwrap()).abs() < 1e-9);
}
