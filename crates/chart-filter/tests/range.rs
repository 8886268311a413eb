// File: crates/chart-filter/tests/range.rs
// Purpose: Visible-window location over sorted series, including boundary neighbours.

use chart_filter::range::{lower_bound_index, upper_bound_index};
use chart_filter::{locate, IndexWindow, Points, VisibleRange};
use proptest::prelude::*;

fn xs(values: &[f64]) -> Points {
    Points::from_xy(&values.iter().map(|&x| (x, x * 2.0)).collect::<Vec<_>>())
}

#[test]
fn window_covering_everything_returns_full_range() {
    let p = xs(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    let w = locate(p.as_slice(), VisibleRange::new(0.0, 5.0)).expect("non-empty");
    assert_eq!(w, IndexWindow { lo: 0, hi: 5 });
    assert_eq!(w.len(), 6);
}

#[test]
fn window_wider_than_data_clamps_to_ends() {
    let p = xs(&[0.0, 1.0, 2.0, 3.0]);
    let w = locate(p.as_slice(), VisibleRange::new(-10.0, 10.0)).expect("non-empty");
    assert_eq!(w, IndexWindow { lo: 0, hi: 3 });
}

#[test]
fn interior_window_keeps_one_neighbour_per_side() {
    let p = xs(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let w = locate(p.as_slice(), VisibleRange::new(1.5, 4.5)).expect("non-empty");
    assert_eq!(w, IndexWindow { lo: 1, hi: 5 });
}

#[test]
fn exact_matches_are_not_widened() {
    let p = xs(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let w = locate(p.as_slice(), VisibleRange::new(2.0, 4.0)).expect("non-empty");
    assert_eq!(w, IndexWindow { lo: 2, hi: 4 });
}

#[test]
fn window_left_of_data_is_empty() {
    let p = xs(&[10.0, 11.0, 12.0]);
    assert_eq!(locate(p.as_slice(), VisibleRange::new(0.0, 9.99)), None);
}

#[test]
fn window_right_of_data_is_empty() {
    let p = xs(&[10.0, 11.0, 12.0]);
    assert_eq!(locate(p.as_slice(), VisibleRange::new(12.5, 20.0)), None);
}

#[test]
fn window_touching_an_end_is_not_empty() {
    let p = xs(&[10.0, 11.0, 12.0]);
    let left = locate(p.as_slice(), VisibleRange::new(0.0, 10.0)).expect("touches first");
    assert_eq!(left, IndexWindow { lo: 0, hi: 0 });
    let right = locate(p.as_slice(), VisibleRange::new(12.0, 30.0)).expect("touches last");
    assert_eq!(right, IndexWindow { lo: 2, hi: 2 });
}

#[test]
fn repeated_x_on_window_edges_is_kept_whole() {
    let p = xs(&[0.0, 1.0, 1.0, 1.0, 2.0]);
    assert_eq!(locate(p.as_slice(), VisibleRange::new(1.0, 2.0)), Some(IndexWindow { lo: 1, hi: 4 }));
    assert_eq!(locate(p.as_slice(), VisibleRange::new(0.0, 1.0)), Some(IndexWindow { lo: 0, hi: 3 }));
    assert_eq!(locate(p.as_slice(), VisibleRange::new(1.0, 1.0)), Some(IndexWindow { lo: 1, hi: 3 }));

    let flat = xs(&[5.0, 5.0, 5.0, 5.0]);
    assert_eq!(locate(flat.as_slice(), VisibleRange::new(5.0, 5.0)), Some(IndexWindow { lo: 0, hi: 3 }));
}

#[test]
fn repeated_x_outside_the_window_adds_a_single_neighbour() {
    let p = xs(&[0.0, 0.0, 0.0, 3.0, 6.0, 6.0, 6.0]);
    assert_eq!(locate(p.as_slice(), VisibleRange::new(1.0, 5.0)), Some(IndexWindow { lo: 2, hi: 4 }));
}

#[test]
fn empty_series_is_empty_window() {
    let p = Points::new(2).unwrap();
    assert_eq!(locate(p.as_slice(), VisibleRange::new(0.0, 1.0)), None);
}

#[test]
fn single_point_series() {
    let p = xs(&[3.0]);
    assert_eq!(locate(p.as_slice(), VisibleRange::new(0.0, 5.0)), Some(IndexWindow { lo: 0, hi: 0 }));
    assert_eq!(locate(p.as_slice(), VisibleRange::new(3.0, 3.0)), Some(IndexWindow { lo: 0, hi: 0 }));
}

#[test]
fn bound_searches_clamp_outside_values() {
    let p = xs(&[1.0, 2.0, 4.0, 8.0]);
    assert_eq!(lower_bound_index(p.as_slice(), -1.0), 0);
    assert_eq!(upper_bound_index(p.as_slice(), 100.0), 3);
    assert_eq!(lower_bound_index(p.as_slice(), 5.0), 2);
    assert_eq!(upper_bound_index(p.as_slice(), 5.0), 3);
    assert_eq!(lower_bound_index(p.as_slice(), 4.0), 2);
    assert_eq!(upper_bound_index(p.as_slice(), 4.0), 2);
}

#[test]
fn bound_searches_hit_exact_ends() {
    let p = xs(&[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(lower_bound_index(p.as_slice(), 3.0), 3);
    assert_eq!(upper_bound_index(p.as_slice(), 3.0), 3);
    assert_eq!(lower_bound_index(p.as_slice(), 0.0), 0);
    assert_eq!(upper_bound_index(p.as_slice(), 0.0), 0);

    let pair = xs(&[1.0, 1.0]);
    assert_eq!(lower_bound_index(pair.as_slice(), 1.0), 0);
    assert_eq!(upper_bound_index(pair.as_slice(), 1.0), 1);
}

fn sorted_series() -> impl Strategy<Value = Vec<f64>> {
    // small value domain so runs of equal x are common
    prop::collection::vec(-50i32..50, 1..200).prop_map(|mut v| {
        v.sort_unstable();
        v.into_iter().map(f64::from).collect()
    })
}

/// Window end: either an arbitrary value or one taken from the data.
fn window_end(data: &[f64], pick: usize, free: i32, from_data: bool) -> f64 {
    if from_data { data[pick % data.len()] } else { f64::from(free) }
}

proptest! {
    #[test]
    fn located_window_covers_range_and_at_most_one_neighbour(
        data in sorted_series(),
        picks in (any::<usize>(), any::<usize>()),
        free in (-60i32..60, -60i32..60),
        from_data in (any::<bool>(), any::<bool>()),
    ) {
        let a = window_end(&data, picks.0, free.0, from_data.0);
        let b = window_end(&data, picks.1, free.1, from_data.1);
        let range = VisibleRange::new(a.min(b), b.max(a));
        let p = xs(&data);
        let first = data[0];
        let last = data[data.len() - 1];

        match locate(p.as_slice(), range) {
            None => prop_assert!(range.max < first || range.min > last),
            Some(w) => {
                prop_assert!(w.lo <= w.hi && w.hi < data.len());
                for (i, &x) in data.iter().enumerate() {
                    if range.contains(x) {
                        prop_assert!(w.lo <= i && i <= w.hi, "x={} at {} outside {:?}", x, i, w);
                    }
                }
                let below = data[w.lo..=w.hi].iter().filter(|&&x| x < range.min).count();
                let above = data[w.lo..=w.hi].iter().filter(|&&x| x > range.max).count();
                prop_assert!(below <= 1, "{} points below {}", below, range.min);
                prop_assert!(above <= 1, "{} points above {}", above, range.max);
            }
        }
    }
}
