//! Integration tests for the heatmap cost estimator.

use std::sync::Arc;
use std::thread;

use stencil_heatmap::config::EstimatorConfig;
use stencil_heatmap::{
    new_shared_estimator, CostEstimator, CostSource, MeasurementStore, StencilCost, Tile,
};

fn sample_estimator() -> CostEstimator {
    // A slice of a real-looking heatmap: M in {8, 16}, K = 4, N sweeping with gaps.
    let keys = [[8, 2, 4], [8, 3, 4], [8, 5, 4], [16, 1, 4], [16, 3, 4]];
    let values = [10.0, 12.0, 16.0, 20.0, 30.0];
    CostEstimator::new(MeasurementStore::build(&keys, &values), EstimatorConfig::default())
}

#[test]
fn test_every_measured_tile_is_returned_exactly() {
    let est = sample_estimator();
    for (tile, &value) in est.store().iter() {
        assert_eq!(
            est.estimate(&tile.to_array()),
            StencilCost { throughput: value, startup_cost: 32 }
        );
    }
}

#[test]
fn test_gap_between_measurements_is_averaged() {
    let est = sample_estimator();
    // (8,3,4)=12 and (8,5,4)=16
    assert_eq!(est.estimate(&[8, 4, 4]), StencilCost { throughput: 14.0, startup_cost: 32 });
    // (16,1,4)=20 and (16,3,4)=30
    assert_eq!(est.estimate(&[16, 2, 4]), StencilCost { throughput: 25.0, startup_cost: 32 });
}

#[test]
fn test_n_one_uses_upper_neighbor_without_lower() {
    let est = sample_estimator();
    // (8,0,4) is absent, (8,2,4)=10.
    assert_eq!(est.estimate(&[8, 1, 4]), StencilCost { throughput: 10.0, startup_cost: 32 });
}

#[test]
fn test_special_tile_with_non_matching_store() {
    let est = sample_estimator();
    assert_eq!(est.estimate(&[64, 16, 3]), StencilCost { throughput: 0.001, startup_cost: 32 });
}

#[test]
fn test_special_tile_with_empty_store() {
    let est = CostEstimator::new(MeasurementStore::default(), EstimatorConfig::default());
    assert_eq!(est.estimate(&[64, 16, 3]), StencilCost { throughput: 0.001, startup_cost: 32 });
}

#[test]
fn test_neighbor_average_beats_special_table() {
    let keys = [[64, 15, 3], [64, 17, 3]];
    let values = [2.0, 4.0];
    let store = MeasurementStore::build(&keys, &values);
    let est = CostEstimator::new(store, EstimatorConfig::default());

    let e = est.explain(Tile::new(64, 16, 3));
    assert_eq!(e.source, CostSource::Interpolated);
    assert_eq!(e.cost, StencilCost { throughput: 3.0, startup_cost: 32 });
}

#[test]
fn test_miss_returns_unknown() {
    let est = sample_estimator();
    for ranges in [[8u64, 6, 4], [8, 7, 4], [16, 4, 4], [32, 1, 4], [64, 16, 4]] {
        let cost = est.estimate(&ranges);
        assert_eq!(cost, StencilCost::UNKNOWN, "tile {ranges:?}");
        assert!(cost.is_unknown());
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let est = sample_estimator();
    for ranges in [[8u64, 4, 4], [8, 3, 4], [64, 16, 3], [1, 1, 1]] {
        let first = est.estimate(&ranges);
        for _ in 0..10 {
            let again = est.estimate(&ranges);
            assert_eq!(first.throughput.to_bits(), again.throughput.to_bits());
            assert_eq!(first.startup_cost, again.startup_cost);
        }
    }
}

#[test]
#[should_panic(expected = "3D tile")]
fn test_two_ranges_panic() {
    sample_estimator().estimate(&[8, 4]);
}

#[test]
#[should_panic(expected = "3D tile")]
fn test_empty_ranges_panic() {
    sample_estimator().estimate(&[]);
}

#[test]
fn test_shared_estimator_across_threads() {
    let store =
        MeasurementStore::from_entries((1..=64).map(|n| (Tile::new(4, n * 2, 4), n as f64)));
    let est = new_shared_estimator(store, EstimatorConfig::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let est = Arc::clone(&est);
            thread::spawn(move || {
                (1..=63u64)
                    .map(|n| est.estimate(&[4, n * 2 + 1, 4]).throughput)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<f64> = (1..=63).map(|n| (n as f64 + (n + 1) as f64) / 2.0).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
