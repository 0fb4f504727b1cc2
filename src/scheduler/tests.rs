//! Test suite for the greedy timetabler.

use super::*;
use crate::model::{Course, DayOfWeek, TimeSlot};

use std::cell::RefCell;
use std::rc::Rc;

fn slot(id: u32, day: DayOfWeek, start: u16, end: u16) -> TimeSlot {
    TimeSlot::new(id, day, start, end, "R-1").unwrap()
}

fn course(id: u32, code: &str) -> Course {
    Course::new(id, code, code, "", 3, 30, 1)
}

fn request(course_id: u32, code: &str, preferred: Option<TimeSlot>, priority: i32) -> ScheduleRequest {
    ScheduleRequest::new(course(course_id, code), preferred, priority)
}

mod pool_ordering {
    use super::*;

    #[test]
    fn pool_is_sorted_by_day_then_end_time() {
        let scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Tuesday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 720),
            slot(3, DayOfWeek::Monday, 540, 600),
        ]);

        let ids: Vec<u32> = scheduler.available_slots().iter().map(|s| s.id()).collect();
        assert_eq!(ids, [3, 2, 1]);
    }
}

mod single_requests {
    use super::*;

    #[test]
    fn free_preferred_slot_is_taken() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Monday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 660),
        ]);

        let result =
            scheduler.schedule_class(request(1, "MATH-101", Some(slot(2, DayOfWeek::Monday, 600, 660)), 5));

        assert!(result.is_success());
        assert_eq!(result.reason(), AssignmentReason::Preferred);
        assert_eq!(result.reason().to_string(), "preferred");
        assert_eq!(result.assigned_slot().unwrap().id(), 2);
    }

    #[test]
    fn occupied_preferred_slot_falls_back_to_first_fit() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Monday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 660),
        ]);

        let taken = slot(1, DayOfWeek::Monday, 540, 600);
        scheduler.schedule_class(request(1, "MATH-101", Some(taken.clone()), 9));
        let result = scheduler.schedule_class(request(2, "PHYS-101", Some(taken), 5));

        assert!(result.is_success());
        assert_eq!(result.reason(), AssignmentReason::Alternative);
        assert_eq!(result.reason().to_string(), "alternative");
        assert_eq!(result.assigned_slot().unwrap().id(), 2);
    }

    #[test]
    fn no_request_without_preference_takes_earliest_ending_slot() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Friday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 660),
        ]);

        let result = scheduler.schedule_class(request(1, "CHEM-101", None, 1));
        assert_eq!(result.assigned_slot().unwrap().id(), 2, "Monday slot ends first in week order");
    }

    #[test]
    fn exhausted_pool_reports_failure_and_commits_nothing() {
        let mut scheduler = GreedyScheduler::new(vec![slot(1, DayOfWeek::Monday, 540, 600)]);
        scheduler.schedule_class(request(1, "MATH-101", None, 5));

        let result = scheduler.schedule_class(request(2, "PHYS-101", None, 4));

        assert!(!result.is_success());
        assert!(result.assigned_slot().is_none());
        assert_eq!(result.reason(), AssignmentReason::NoSlotAvailable);
        assert_eq!(result.reason().to_string(), "no available time slots");
        assert_eq!(scheduler.scheduled_classes().len(), 1);
    }

    #[test]
    fn same_wall_clock_time_on_other_days_does_not_conflict() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Monday, 540, 600),
            slot(2, DayOfWeek::Tuesday, 540, 600),
        ]);

        let first = scheduler.schedule_class(request(1, "MATH-101", None, 2));
        let second = scheduler.schedule_class(request(2, "PHYS-101", None, 1));

        assert!(first.is_success() && second.is_success());
        assert!(!scheduler.has_conflicts());
    }
}

mod batch_scheduling {
    use super::*;

    #[test]
    fn preferred_then_alternative_example() {
        // Two requests preferring the same Monday 9-10 slot; the higher
        // priority wins it, the other lands on Monday 10-11.
        let nine_to_ten = slot(1, DayOfWeek::Monday, 540, 600);
        let ten_to_eleven = slot(2, DayOfWeek::Monday, 600, 660);
        let mut scheduler = GreedyScheduler::new(vec![nine_to_ten.clone(), ten_to_eleven]);

        let results = scheduler.schedule_optimal(vec![
            request(1, "COURSE-A", Some(nine_to_ten.clone()), 10),
            request(2, "COURSE-B", Some(nine_to_ten), 5),
        ]);

        assert_eq!(results[0].course().code(), "COURSE-A");
        assert_eq!(results[0].reason(), AssignmentReason::Preferred);
        assert_eq!(results[0].assigned_slot().unwrap().id(), 1);

        assert_eq!(results[1].course().code(), "COURSE-B");
        assert_eq!(results[1].reason(), AssignmentReason::Alternative);
        assert_eq!(results[1].assigned_slot().unwrap().id(), 2);

        assert!(!scheduler.has_conflicts());
    }

    #[test]
    fn results_come_back_in_priority_order_not_caller_order() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Monday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 660),
            slot(3, DayOfWeek::Monday, 660, 720),
        ]);

        let results = scheduler.schedule_optimal(vec![
            request(1, "LOW", None, 1),
            request(2, "HIGH", None, 9),
            request(3, "MID", None, 5),
        ]);

        let codes: Vec<&str> = results.iter().map(|r| r.course().code()).collect();
        assert_eq!(codes, ["HIGH", "MID", "LOW"]);
    }

    #[test]
    fn equal_priority_without_preferences_keeps_caller_order() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Monday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 660),
        ]);

        let results = scheduler.schedule_optimal(vec![
            request(1, "FIRST", None, 3),
            request(2, "SECOND", None, 3),
        ]);

        let codes: Vec<&str> = results.iter().map(|r| r.course().code()).collect();
        assert_eq!(codes, ["FIRST", "SECOND"]);
    }

    #[test]
    fn equal_priority_ties_break_on_preferred_end_time() {
        let early = slot(1, DayOfWeek::Monday, 540, 600);
        let late = slot(2, DayOfWeek::Monday, 600, 660);
        let mut scheduler = GreedyScheduler::new(vec![early.clone(), late.clone()]);

        let results = scheduler.schedule_optimal(vec![
            request(1, "LATE-PREF", Some(late), 3),
            request(2, "EARLY-PREF", Some(early), 3),
        ]);

        let codes: Vec<&str> = results.iter().map(|r| r.course().code()).collect();
        assert_eq!(codes, ["EARLY-PREF", "LATE-PREF"]);
    }

    #[test]
    fn identical_batches_produce_identical_schedules() {
        let pool = vec![
            slot(1, DayOfWeek::Monday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 660),
            slot(3, DayOfWeek::Tuesday, 540, 660),
            slot(4, DayOfWeek::Wednesday, 480, 540),
        ];
        let requests = vec![
            request(1, "A", Some(slot(3, DayOfWeek::Tuesday, 540, 660)), 4),
            request(2, "B", None, 4),
            request(3, "C", None, 7),
            request(4, "D", Some(slot(1, DayOfWeek::Monday, 540, 600)), 4),
        ];

        let run = |pool: Vec<TimeSlot>, requests: Vec<ScheduleRequest>| {
            let mut scheduler = GreedyScheduler::new(pool);
            scheduler
                .schedule_optimal(requests)
                .into_iter()
                .map(|r| (r.course().id(), r.assigned_slot().map(|s| s.id())))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(pool.clone(), requests.clone()), run(pool, requests));
    }

    #[test]
    fn successful_assignments_never_double_book() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Monday, 540, 600),
            slot(2, DayOfWeek::Monday, 570, 660),
            slot(3, DayOfWeek::Monday, 600, 690),
            slot(4, DayOfWeek::Tuesday, 540, 600),
        ]);

        let results = scheduler.schedule_optimal(
            (1..=6).map(|i| request(i, "X", None, i as i32)).collect(),
        );

        let assigned: Vec<&TimeSlot> =
            results.iter().filter_map(|r| r.assigned_slot()).collect();
        for i in 0..assigned.len() {
            for j in (i + 1)..assigned.len() {
                assert!(!assigned[i].overlaps(assigned[j]));
            }
        }
        assert!(!scheduler.has_conflicts());
    }

    #[test]
    fn high_priority_preference_can_shrink_the_schedule() {
        // The wide 9-12 slot conflicts with both one-hour slots. Honoring
        // the high-priority preference for it leaves nothing for the other
        // two requests, even though ignoring the preference would fit both.
        // This is the published greedy tradeoff.
        let wide = slot(1, DayOfWeek::Monday, 540, 720);
        let mut scheduler = GreedyScheduler::new(vec![
            wide.clone(),
            slot(2, DayOfWeek::Monday, 540, 600),
            slot(3, DayOfWeek::Monday, 600, 660),
        ]);

        let results = scheduler.schedule_optimal(vec![
            request(1, "SEMINAR", Some(wide), 10),
            request(2, "LAB-1", None, 5),
            request(3, "LAB-2", None, 1),
        ]);

        let successes: Vec<&str> = results
            .iter()
            .filter(|r| r.is_success())
            .map(|r| r.course().code())
            .collect();
        assert_eq!(successes, ["SEMINAR"]);
        assert_eq!(results[0].reason(), AssignmentReason::Preferred);
    }
}

mod schedule_state {
    use super::*;

    #[test]
    fn scheduled_classes_are_ordered_by_week_start() {
        let mut scheduler = GreedyScheduler::new(vec![
            slot(1, DayOfWeek::Wednesday, 540, 600),
            slot(2, DayOfWeek::Monday, 600, 660),
            slot(3, DayOfWeek::Tuesday, 480, 540),
        ]);

        scheduler.schedule_optimal(vec![
            request(1, "A", None, 1),
            request(2, "B", None, 2),
            request(3, "C", None, 3),
        ]);

        let days: Vec<DayOfWeek> = scheduler
            .scheduled_classes()
            .iter()
            .map(|c| c.slot().day())
            .collect();
        assert_eq!(
            days,
            [DayOfWeek::Monday, DayOfWeek::Tuesday, DayOfWeek::Wednesday]
        );
    }

    #[test]
    fn clear_schedule_frees_every_slot() {
        let mut scheduler = GreedyScheduler::new(vec![slot(1, DayOfWeek::Monday, 540, 600)]);
        scheduler.schedule_class(request(1, "MATH-101", None, 5));
        assert!(!scheduler.schedule_class(request(2, "PHYS-101", None, 5)).is_success());

        scheduler.clear_schedule();
        assert!(scheduler.scheduled_classes().is_empty());
        assert!(scheduler.schedule_class(request(3, "CHEM-101", None, 5)).is_success());
    }

    #[test]
    fn default_priority_weights_credits_times_capacity() {
        let heavy = Course::new(1, "BIO-301", "Genetics", "", 4, 120, 2);
        let request = ScheduleRequest::with_default_priority(heavy, None);
        assert_eq!(request.priority(), 480);
    }
}

mod observer_events {
    use super::*;

    #[derive(Default)]
    struct Recording {
        batch_sizes: Vec<usize>,
        assigned: Vec<(String, AssignmentReason)>,
        rejected: Vec<String>,
        totals: Option<(usize, usize)>,
    }

    struct RecordingObserver(Rc<RefCell<Recording>>);

    impl ScheduleObserver for RecordingObserver {
        fn on_batch_start(&mut self, request_count: usize) {
            self.0.borrow_mut().batch_sizes.push(request_count);
        }

        fn on_assignment(&mut self, course: &Course, _slot: &TimeSlot, reason: AssignmentReason) {
            self.0
                .borrow_mut()
                .assigned
                .push((course.code().to_string(), reason));
        }

        fn on_rejection(&mut self, course: &Course) {
            self.0.borrow_mut().rejected.push(course.code().to_string());
        }

        fn on_batch_end(&mut self, assigned: usize, rejected: usize) {
            self.0.borrow_mut().totals = Some((assigned, rejected));
        }
    }

    #[test]
    fn observer_sees_batch_and_assignment_events() {
        let recording = Rc::new(RefCell::new(Recording::default()));
        let mut scheduler = GreedyScheduler::new(vec![slot(1, DayOfWeek::Monday, 540, 600)]);
        scheduler.set_observer(Box::new(RecordingObserver(Rc::clone(&recording))));

        scheduler.schedule_optimal(vec![
            request(1, "MATH-101", None, 9),
            request(2, "PHYS-101", None, 1),
        ]);

        let seen = recording.borrow();
        assert_eq!(seen.batch_sizes, [2]);
        assert_eq!(
            seen.assigned,
            [("MATH-101".to_string(), AssignmentReason::Alternative)]
        );
        assert_eq!(seen.rejected, ["PHYS-101".to_string()]);
        assert_eq!(seen.totals, Some((1, 1)));
    }
}
