//! Benchmarks for the availability ledger.
//!
//! Benchmarks cover:
//! - Splitting intervals into block rows
//! - Block/release cycles over pre-provisioned calendars
//! - Coverage checks across multi-day requests

use std::hint::black_box;

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use slot_ledger::availability::AvailabilityFacade;
use slot_ledger::core::{Owner, ResourceId, TimeSlot};
use slot_ledger::infra::InMemoryAvailabilityRepository;

fn days_slot(days: i64) -> TimeSlot {
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();
    TimeSlot::new(from, from + TimeDelta::days(days))
}

fn bench_split_to_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_to_blocks");
    for days in [1_i64, 7, 30, 365] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            let slot = days_slot(days);
            b.iter(|| black_box(slot.split_to_blocks(TimeDelta::days(1))));
        });
    }
    group.finish();
}

fn bench_block_release_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_release_cycle");
    for days in [1_i64, 7, 30] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            let facade =
                AvailabilityFacade::new(InMemoryAvailabilityRepository::new(), TimeDelta::days(1));
            let resource_id = ResourceId::new_one();
            let slot = days_slot(days);
            facade.create_resource_slots(resource_id, &slot).unwrap();
            let owner = Owner::new_one();
            b.iter(|| {
                assert!(facade.block(resource_id, &slot, owner).unwrap());
                assert!(facade.release(resource_id, &slot, owner).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_contended_single_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_single_days");
    group.bench_function("random_day_of_year", |b| {
        let facade =
            AvailabilityFacade::new(InMemoryAvailabilityRepository::new(), TimeDelta::days(1));
        let resource_id = ResourceId::new_one();
        let year = days_slot(365);
        facade.create_resource_slots(resource_id, &year).unwrap();
        let owner = Owner::new_one();
        let mut rng = rand::rng();
        b.iter(|| {
            let offset = rng.random_range(0..365_i64);
            let day = TimeSlot::new(
                year.from() + TimeDelta::days(offset),
                year.from() + TimeDelta::days(offset + 1),
            );
            if facade.block(resource_id, &day, owner).unwrap() {
                facade.release(resource_id, &day, owner).unwrap();
            }
        });
    });
    group.finish();
}

fn bench_unprovisioned_rejection(c: &mut Criterion) {
    c.bench_function("unprovisioned_rejection", |b| {
        let facade =
            AvailabilityFacade::new(InMemoryAvailabilityRepository::new(), TimeDelta::days(1));
        let resource_id = ResourceId::new_one();
        facade
            .create_resource_slots(resource_id, &days_slot(7))
            .unwrap();
        let two_weeks = days_slot(14);
        let owner = Owner::new_one();
        b.iter(|| {
            assert!(!facade.block(resource_id, &two_weeks, owner).unwrap());
        });
    });
}

criterion_group!(
    ledger_benches,
    bench_split_to_blocks,
    bench_block_release_cycle,
    bench_contended_single_days,
    bench_unprovisioned_rejection
);
criterion_main!(ledger_benches);
