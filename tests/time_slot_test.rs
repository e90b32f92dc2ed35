//! Tests for time-slot block arithmetic and containment.

use chrono::{TimeDelta, TimeZone, Utc};
use slot_ledger::core::TimeSlot;

fn day_block() -> TimeDelta {
    TimeDelta::days(1)
}

#[test]
fn splitting_a_day_into_day_blocks_reconstructs_it() {
    let day = TimeSlot::create_daily_time_slot_utc(2024, 6, 1).unwrap();

    let blocks = day.split_to_blocks(day_block());

    assert_eq!(blocks, vec![day]);
    assert_eq!(day.block_count(day_block()), 1);
}

#[test]
fn block_count_equals_duration_over_block_size_for_aligned_slots() {
    let from = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let slot = TimeSlot::new(from, from + TimeDelta::hours(6));
    let block = TimeDelta::hours(2);

    let blocks = slot.split_to_blocks(block);

    assert_eq!(blocks.len(), 3);
    assert_eq!(slot.block_count(block), 3);
    // Contiguous and exactly covering the slot.
    assert_eq!(blocks[0].from(), slot.from());
    assert_eq!(blocks[2].to(), slot.to());
    for pair in blocks.windows(2) {
        assert_eq!(pair[0].to(), pair[1].from());
    }
}

#[test]
fn splitting_a_multi_day_slot_yields_contiguous_days() {
    let jan_1 = TimeSlot::create_daily_time_slot_utc(2021, 1, 1).unwrap();
    let jan_2 = TimeSlot::create_daily_time_slot_utc(2021, 1, 2).unwrap();
    let jan_1_2 = TimeSlot::new(jan_1.from(), jan_2.to());

    let blocks = jan_1_2.split_to_blocks(day_block());

    assert_eq!(blocks, vec![jan_1, jan_2]);
}

#[test]
fn non_aligned_slot_normalizes_outward_to_the_block_grid() {
    let day = TimeSlot::create_daily_time_slot_utc(2024, 6, 1).unwrap();
    let fifteen_minutes = TimeSlot::new(day.from(), day.from() + TimeDelta::minutes(15));

    assert_eq!(fifteen_minutes.normalized_to_blocks(day_block()), day);
    assert_eq!(fifteen_minutes.block_count(day_block()), 1);
    assert_eq!(fifteen_minutes.split_to_blocks(day_block()), vec![day]);
}

#[test]
fn mid_slot_interval_normalizes_to_the_surrounding_day() {
    let day = TimeSlot::create_daily_time_slot_utc(2024, 6, 1).unwrap();
    let afternoon = TimeSlot::new(
        day.from() + TimeDelta::hours(13),
        day.from() + TimeDelta::hours(15),
    );

    assert_eq!(afternoon.normalized_to_blocks(day_block()), day);
}

#[test]
fn within_is_interval_containment() {
    let day = TimeSlot::create_daily_time_slot_utc(2024, 6, 1).unwrap();
    let part = TimeSlot::new(day.from(), day.from() + TimeDelta::hours(1));

    assert!(part.within(&day));
    assert!(day.within(&day));
    assert!(!day.within(&part));
}

#[test]
fn overlapping_and_disjoint_slots() {
    let jan_1 = TimeSlot::create_daily_time_slot_utc(2021, 1, 1).unwrap();
    let jan_2 = TimeSlot::create_daily_time_slot_utc(2021, 1, 2).unwrap();
    let jan_1_noon_on = TimeSlot::new(jan_1.from() + TimeDelta::hours(12), jan_2.to());

    assert!(jan_1.overlaps_with(&jan_1_noon_on));
    assert!(!jan_1.overlaps_with(&jan_2));
}

#[test]
fn empty_sentinel_has_no_blocks() {
    let empty = TimeSlot::empty();

    assert!(empty.is_empty());
    assert_eq!(empty.block_count(day_block()), 0);
    assert!(empty.split_to_blocks(day_block()).is_empty());
}

#[test]
fn monthly_slot_covers_whole_month() {
    let june = TimeSlot::create_monthly_time_slot_utc(2024, 6).unwrap();

    assert_eq!(june.block_count(day_block()), 30);
    assert_eq!(
        june.to(),
        Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
    );
}
