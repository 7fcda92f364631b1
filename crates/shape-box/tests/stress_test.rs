//! Concurrency stress for the shared box
//!
//! Run with: cargo test --package shape-box --test stress_test

use rayon::prelude::*;
use shape_box::prelude::*;
use shape_box_test_utils::{assert_close, circle, square};

#[test]
fn stress_parallel_adds_respect_capacity() {
    let capacity = 500;
    let shared = SharedShapeBox::new(capacity);

    let accepted = (0..2_000)
        .into_par_iter()
        .filter(|_| shared.add_shape(square(1.0)).is_ok())
        .count();

    assert_eq!(accepted, capacity);
    assert_eq!(shared.len(), capacity);
    assert_close(shared.sum_area(), 500.0);
}

#[test]
fn stress_mixed_operations_stay_consistent() {
    let shared = SharedShapeBox::new(1_000);
    (0..1_000).into_par_iter().for_each(|i| {
        let shape = if i % 2 == 0 { circle(1.0) } else { square(1.0) };
        shared.add_shape(shape).unwrap();
    });

    (0..1_000).into_par_iter().for_each(|i| match i % 4 {
        0 => {
            let _ = shared.get_by_index(i);
        }
        1 => {
            let _ = shared.replace_by_index(i, square(1.0));
        }
        2 => {
            let _ = shared.sum_perimeter();
        }
        _ => {
            let _ = shared.extract_by_index(i);
        }
    });

    let stats = shared.stats();
    assert!(stats.occupancy <= stats.capacity);
    assert_eq!(stats.vacant, 0);
    assert_eq!(shared.shapes().len(), stats.occupancy);

    // Either circles remain and get removed, or none survived the churn
    match shared.remove_all_circles() {
        Ok(()) | Err(BoxError::NothingRemoved) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
    assert!(shared.shapes().iter().all(|s| !s.is_circle()));
}
