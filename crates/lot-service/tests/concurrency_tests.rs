//! Concurrency tests: many threads parking and removing against one lot.

use lot_service::{FloorLayout, ParkingLotService, SpotId, VehicleType};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;

fn big_lot() -> ParkingLotService {
    // 3 floors, each 6x8 alternating two- and four-wheeler columns
    let floor: Vec<Vec<u8>> = (0..6)
        .map(|_| (0..8).map(|col| if col % 2 == 0 { 2 } else { 4 }).collect())
        .collect();
    let layouts = (0..3)
        .map(|_| FloorLayout::from_codes(floor.clone()).unwrap())
        .collect();
    ParkingLotService::from_layout(layouts).unwrap()
}

#[test]
fn test_concurrent_parks_never_share_a_spot() {
    let lot = big_lot();
    let capacity = lot.stats().capacity(VehicleType::FourWheeler);

    let results: Vec<Vec<SpotId>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let lot = &lot;
                s.spawn(move || {
                    let mut won = Vec::new();
                    for i in 0..capacity {
                        let plate = format!("V-{}-{}", t, i);
                        if let Some(spot) = lot.park(VehicleType::FourWheeler, &plate, &plate, t % 2) {
                            won.push(spot);
                        }
                    }
                    won
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let all: Vec<SpotId> = results.into_iter().flatten().collect();
    let unique: HashSet<_> = all.iter().copied().collect();

    assert_eq!(all.len(), capacity);
    assert_eq!(unique.len(), capacity);
    assert_eq!(lot.stats().free(VehicleType::FourWheeler), 0);
    assert_eq!(
        lot.stats().free(VehicleType::TwoWheeler),
        lot.stats().capacity(VehicleType::TwoWheeler)
    );
}

#[test]
fn test_concurrent_park_and_remove_keeps_counts() {
    let lot = Arc::new(big_lot());
    let capacity = lot.stats().capacity(VehicleType::TwoWheeler);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let lot = Arc::clone(&lot);
            thread::spawn(move || {
                for i in 0..200 {
                    let plate = format!("B-{}-{}", t, i);
                    if let Some(spot) = lot.park(VehicleType::TwoWheeler, &plate, &plate, i % 2) {
                        assert_eq!(lot.search(&plate), Some(spot));
                        assert!(lot.remove(&spot.to_string()));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = lot.stats();
    assert_eq!(stats.free(VehicleType::TwoWheeler), capacity);
    for floor in &stats.floors {
        for occupancy in floor.occupancy.values() {
            assert_eq!(occupancy.free, occupancy.capacity);
        }
    }
}

#[test]
fn test_concurrent_double_remove_succeeds_once() {
    let lot = big_lot();
    let spots: Vec<SpotId> = (0..20)
        .filter_map(|i| lot.park(VehicleType::FourWheeler, &format!("C-{}", i), &format!("T-{}", i), 0))
        .collect();

    let released: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let lot = &lot;
                let spots = &spots;
                s.spawn(move || spots.iter().filter(|spot| lot.remove_spot(**spot)).count())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(released, spots.len());
}
