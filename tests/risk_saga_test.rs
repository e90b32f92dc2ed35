//! Tests for the risk saga's event handling and periodic evaluation.

use chrono::{TimeDelta, Utc};
use slot_ledger::allocation::{
    CapabilitiesAllocated, CapabilityReleased, Demand, Demands, Earnings, EarningsRecalculated,
    ProjectAllocationScheduled, ProjectAllocationsDemandsScheduled,
};
use slot_ledger::availability::ResourceTakenOver;
use slot_ledger::config::RiskConfig;
use slot_ledger::core::{Capability, Owner, ProjectId, ResourceId, TimeSlot};
use slot_ledger::risk::{RiskEvent, RiskPeriodicCheckSaga, RiskPeriodicCheckSagaStep};
use uuid::Uuid;

fn java_demands() -> Demands {
    Demands::of(vec![Demand::for_capability(Capability::skill("JAVA"))])
}

fn project_slot() -> TimeSlot {
    let from = Utc::now();
    TimeSlot::new(from, from + TimeDelta::days(60))
}

#[test]
fn earnings_recalculation_updates_earnings_and_decides_nothing() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), java_demands());

    let step = saga.handle(&RiskEvent::EarningsRecalculated(EarningsRecalculated {
        project_id: saga.project_id(),
        earnings: Earnings::of(2000),
        occurred_at: Utc::now(),
    }));

    assert_eq!(step, Some(RiskPeriodicCheckSagaStep::DoNothing));
    assert_eq!(saga.earnings(), Some(Earnings::of(2000)));
}

#[test]
fn demands_scheduled_with_missing_demands_decides_nothing() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), Demands::none());

    let step = saga.handle(&RiskEvent::ProjectAllocationsDemandsScheduled(
        ProjectAllocationsDemandsScheduled {
            project_id: saga.project_id(),
            missing_demands: java_demands(),
            occurred_at: Utc::now(),
        },
    ));

    assert_eq!(step, Some(RiskPeriodicCheckSagaStep::DoNothing));
    assert!(!saga.are_demands_satisfied());
}

#[test]
fn allocation_covering_all_demands_notifies_satisfaction() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), java_demands());

    let step = saga.handle(&RiskEvent::CapabilitiesAllocated(CapabilitiesAllocated {
        allocated_capability_id: Uuid::new_v4(),
        project_id: saga.project_id(),
        missing_demands: Demands::none(),
        occurred_at: Utc::now(),
    }));

    assert_eq!(
        step,
        Some(RiskPeriodicCheckSagaStep::NotifyAboutDemandsSatisfied)
    );
    assert!(saga.are_demands_satisfied());
}

#[test]
fn scheduling_the_project_slot_records_the_deadline_silently() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), java_demands());
    let slot = project_slot();

    let step = saga.handle(&RiskEvent::ProjectAllocationScheduled(
        ProjectAllocationScheduled {
            project_id: saga.project_id(),
            from_to: slot,
            occurred_at: Utc::now(),
        },
    ));

    assert_eq!(step, None);
    assert_eq!(saga.deadline(), Some(slot.to()));
}

#[test]
fn resource_taken_over_before_deadline_signals_possible_risk() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), java_demands());
    let slot = project_slot();
    saga.handle(&RiskEvent::ProjectAllocationScheduled(
        ProjectAllocationScheduled {
            project_id: saga.project_id(),
            from_to: slot,
            occurred_at: Utc::now(),
        },
    ));

    let step = saga.handle(&RiskEvent::ResourceTakenOver(ResourceTakenOver {
        resource_id: ResourceId::new_one(),
        previous_owners: vec![Owner::of(saga.project_id().id())],
        occurred_at: slot.to() - TimeDelta::days(1),
    }));

    assert_eq!(step, Some(RiskPeriodicCheckSagaStep::NotifyAboutPossibleRisk));
}

#[test]
fn resource_taken_over_after_deadline_decides_nothing() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), java_demands());
    let slot = project_slot();
    saga.handle(&RiskEvent::ProjectAllocationScheduled(
        ProjectAllocationScheduled {
            project_id: saga.project_id(),
            from_to: slot,
            occurred_at: Utc::now(),
        },
    ));

    let step = saga.handle(&RiskEvent::ResourceTakenOver(ResourceTakenOver {
        resource_id: ResourceId::new_one(),
        previous_owners: vec![Owner::of(saga.project_id().id())],
        occurred_at: slot.to() + TimeDelta::days(1),
    }));

    assert_eq!(step, Some(RiskPeriodicCheckSagaStep::DoNothing));
}

#[test]
fn resource_taken_over_without_a_known_deadline_decides_nothing() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), java_demands());

    let step = saga.handle(&RiskEvent::ResourceTakenOver(ResourceTakenOver {
        resource_id: ResourceId::new_one(),
        previous_owners: vec![Owner::of(saga.project_id().id())],
        occurred_at: Utc::now(),
    }));

    assert_eq!(step, Some(RiskPeriodicCheckSagaStep::DoNothing));
}

#[test]
fn capability_released_decides_nothing() {
    let mut saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), Demands::none());

    let step = saga.handle(&RiskEvent::CapabilityReleased(CapabilityReleased {
        project_id: saga.project_id(),
        missing_demands: java_demands(),
        occurred_at: Utc::now(),
    }));

    assert_eq!(step, Some(RiskPeriodicCheckSagaStep::DoNothing));
}

/// Saga with missing demands, a deadline `days_left` from now, and optional
/// earnings, ready for the periodic evaluation.
fn saga_with_deadline(days_left: i64, earnings: Option<i64>) -> RiskPeriodicCheckSaga {
    let project_id = ProjectId::new_one();
    let mut saga = match earnings {
        Some(value) => {
            let mut saga = RiskPeriodicCheckSaga::with_earnings(project_id, Earnings::of(value));
            saga.handle(&RiskEvent::ProjectAllocationsDemandsScheduled(
                ProjectAllocationsDemandsScheduled {
                    project_id,
                    missing_demands: java_demands(),
                    occurred_at: Utc::now(),
                },
            ));
            saga
        }
        None => RiskPeriodicCheckSaga::new(project_id, java_demands()),
    };
    let to = Utc::now() + TimeDelta::days(days_left);
    saga.handle(&RiskEvent::ProjectAllocationScheduled(
        ProjectAllocationScheduled {
            project_id,
            from_to: TimeSlot::new(to - TimeDelta::days(90), to),
            occurred_at: Utc::now(),
        },
    ));
    saga
}

#[test]
fn weekly_check_suggests_replacement_close_to_deadline_for_valuable_projects() {
    let saga = saga_with_deadline(10, Some(2000));

    let step = saga.handle_weekly_check(Utc::now(), &RiskConfig::default());

    assert_eq!(step, RiskPeriodicCheckSagaStep::SuggestReplacement);
}

#[test]
fn weekly_check_finds_available_close_to_deadline_for_low_earning_projects() {
    let saga = saga_with_deadline(10, Some(500));

    let step = saga.handle_weekly_check(Utc::now(), &RiskConfig::default());

    assert_eq!(step, RiskPeriodicCheckSagaStep::FindAvailable);
}

#[test]
fn weekly_check_finds_available_inside_the_wider_window() {
    let saga = saga_with_deadline(20, Some(2000));

    let step = saga.handle_weekly_check(Utc::now(), &RiskConfig::default());

    assert_eq!(step, RiskPeriodicCheckSagaStep::FindAvailable);
}

#[test]
fn weekly_check_does_nothing_far_from_the_deadline() {
    let saga = saga_with_deadline(45, Some(2000));

    let step = saga.handle_weekly_check(Utc::now(), &RiskConfig::default());

    assert_eq!(step, RiskPeriodicCheckSagaStep::DoNothing);
}

#[test]
fn weekly_check_does_nothing_after_the_deadline() {
    let saga = saga_with_deadline(-1, Some(2000));

    let step = saga.handle_weekly_check(Utc::now(), &RiskConfig::default());

    assert_eq!(step, RiskPeriodicCheckSagaStep::DoNothing);
}

#[test]
fn weekly_check_does_nothing_without_a_deadline() {
    let saga = RiskPeriodicCheckSaga::new(ProjectId::new_one(), java_demands());

    let step = saga.handle_weekly_check(Utc::now(), &RiskConfig::default());

    assert_eq!(step, RiskPeriodicCheckSagaStep::DoNothing);
}

#[test]
fn weekly_check_does_nothing_when_demands_are_satisfied() {
    let mut saga = saga_with_deadline(10, Some(2000));
    saga.handle(&RiskEvent::CapabilitiesAllocated(CapabilitiesAllocated {
        allocated_capability_id: Uuid::new_v4(),
        project_id: saga.project_id(),
        missing_demands: Demands::none(),
        occurred_at: Utc::now(),
    }));

    let step = saga.handle_weekly_check(Utc::now(), &RiskConfig::default());

    assert_eq!(step, RiskPeriodicCheckSagaStep::DoNothing);
}

#[test]
fn weekly_check_honors_a_custom_threshold() {
    let saga = saga_with_deadline(10, Some(500));
    let config = RiskConfig {
        risk_threshold_earnings: 100,
        ..RiskConfig::default()
    };

    let step = saga.handle_weekly_check(Utc::now(), &config);

    assert_eq!(step, RiskPeriodicCheckSagaStep::SuggestReplacement);
}
