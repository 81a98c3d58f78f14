#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use shiftlog::libs::duration::final_duration;
    use shiftlog::libs::error::ShiftError;
    use shiftlog::libs::lifecycle::{self, ShiftPatch};
    use shiftlog::libs::scheduler::advance;
    use shiftlog::libs::shift::{Shift, ShiftGroup, ShiftStatus};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_full_lifecycle() {
        let planned = Shift::create_planned("2024-01-01T08:00").unwrap();
        let id = planned.id.clone();

        let (shifts, changed) = advance(&[planned], at(8, 5));
        assert!(changed);
        assert_eq!(shifts[0].status(), ShiftStatus::Running);
        assert_eq!(shifts[0].actual_start, Some(at(8, 0)));

        let shifts = lifecycle::finish_by_id(&shifts, &id, at(16, 0), 30).unwrap();
        let shift = shifts.find(&id).unwrap();
        assert_eq!(shift.status(), ShiftStatus::Finished);
        assert_eq!(shift.duration_minutes, Some(450));
        assert!(!shift.running);
    }

    #[test]
    fn test_start_sets_actual_start() {
        let shift = Shift::planned(at(8, 0));
        let started = lifecycle::start(&shift, at(7, 55)).unwrap();
        assert_eq!(started.actual_start, Some(at(7, 55)));
        assert_eq!(started.start, at(8, 0));
        assert_eq!(started.status(), ShiftStatus::Running);
        assert_eq!(started.id, shift.id);
    }

    #[test]
    fn test_start_rejected_unless_planned() {
        let running = Shift::started(at(8, 0));
        assert_eq!(
            lifecycle::start(&running, at(9, 0)),
            Err(ShiftError::InvalidTransition {
                action: "start",
                from: ShiftStatus::Running
            })
        );

        let finished = Shift::backdated(at(8, 0), at(9, 0), 0).unwrap();
        assert!(matches!(
            lifecycle::start(&finished, at(9, 0)),
            Err(ShiftError::InvalidTransition { from: ShiftStatus::Finished, .. })
        ));
    }

    #[test]
    fn test_finish_rejected_unless_running() {
        let planned = Shift::planned(at(8, 0));
        assert!(matches!(
            lifecycle::finish(&planned, at(16, 0), 0),
            Err(ShiftError::InvalidTransition { action: "finish", from: ShiftStatus::Planned })
        ));

        let finished = Shift::backdated(at(8, 0), at(9, 0), 0).unwrap();
        assert!(matches!(
            lifecycle::finish(&finished, at(16, 0), 0),
            Err(ShiftError::InvalidTransition { from: ShiftStatus::Finished, .. })
        ));
    }

    #[test]
    fn test_finish_rejects_end_before_effective_start() {
        let running = Shift::started(at(9, 0));
        let shifts = vec![running.clone()];

        let result = lifecycle::finish_by_id(&shifts, &running.id, at(8, 30), 0);
        assert!(matches!(result, Err(ShiftError::InvalidInput(_))));

        let result = lifecycle::finish(&running, at(9, 0), 0);
        assert!(matches!(result, Err(ShiftError::InvalidInput(_))));

        assert_eq!(shifts[0], running);
    }

    #[test]
    fn test_finish_pause_longer_than_shift() {
        let running = Shift::started(at(8, 0));
        let finished = lifecycle::finish(&running, at(8, 20), 30).unwrap();
        assert_eq!(finished.duration_minutes, Some(0));
    }

    #[test]
    fn test_finish_from_input() {
        let running = Shift::started(at(8, 0));

        let finished = lifecycle::finish_from_input(&running, "2024-01-01 12:00", "15 min").unwrap();
        assert_eq!(finished.duration_minutes, Some(225));

        let finished = lifecycle::finish_from_input(&running, "2024-01-01 12:00", "NaN").unwrap();
        assert_eq!(finished.pause_minutes, 0);
        assert_eq!(finished.duration_minutes, Some(240));

        assert!(matches!(
            lifecycle::finish_from_input(&running, "noon", "0"),
            Err(ShiftError::InvalidInput(_))
        ));
        assert!(matches!(
            lifecycle::finish_from_input(&running, "2024-01-01 12:00", "-10"),
            Err(ShiftError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_edit_pause_recomputes_duration() {
        let finished = Shift::backdated(at(8, 0), at(16, 0), 30).unwrap();
        let patch = ShiftPatch {
            pause_minutes: Some(60),
            ..Default::default()
        };

        let edited = lifecycle::edit(&finished, &patch).unwrap();
        assert_eq!(edited.duration_minutes, Some(420));
        assert_eq!(edited.start, finished.start);
        assert_eq!(edited.end, finished.end);
    }

    #[test]
    fn test_edit_start_of_running_shift_moves_actual_start() {
        let running = Shift::started(at(8, 0));
        let patch = ShiftPatch {
            start: Some(at(7, 30)),
            ..Default::default()
        };

        let edited = lifecycle::edit(&running, &patch).unwrap();
        assert_eq!(edited.start, at(7, 30));
        assert_eq!(edited.actual_start, Some(at(7, 30)));
        assert_eq!(edited.status(), ShiftStatus::Running);
        assert_eq!(edited.duration_minutes, None);
    }

    #[test]
    fn test_edit_start_of_planned_shift() {
        let planned = Shift::planned(at(8, 0));
        let patch = ShiftPatch {
            start: Some(at(10, 0)),
            ..Default::default()
        };

        let edited = lifecycle::edit(&planned, &patch).unwrap();
        assert_eq!(edited.start, at(10, 0));
        assert_eq!(edited.actual_start, None);
        assert_eq!(edited.status(), ShiftStatus::Planned);
    }

    #[test]
    fn test_edit_end_finishes_running_shift() {
        let running = Shift::started(at(8, 0));
        let patch = ShiftPatch {
            end: Some(at(12, 0)),
            ..Default::default()
        };

        let edited = lifecycle::edit(&running, &patch).unwrap();
        assert_eq!(edited.status(), ShiftStatus::Finished);
        assert!(!edited.running);
        assert_eq!(edited.duration_minutes, Some(240));
    }

    #[test]
    fn test_edit_rejects_inverted_interval() {
        let finished = Shift::backdated(at(8, 0), at(16, 0), 0).unwrap();
        let patch = ShiftPatch {
            start: Some(at(17, 0)),
            ..Default::default()
        };

        let shifts = vec![finished.clone()];
        let result = lifecycle::edit_by_id(&shifts, &finished.id, &patch);
        assert!(matches!(result, Err(ShiftError::InvalidInput(_))));
        assert_eq!(shifts[0], finished);
    }

    #[test]
    fn test_edit_matches_backdated_construction() {
        let (s, e, p) = (at(7, 45), at(15, 10), 25);

        let edited = lifecycle::edit(
            &Shift::planned(at(9, 0)),
            &ShiftPatch {
                start: Some(s),
                end: Some(e),
                pause_minutes: Some(p),
            },
        )
        .unwrap();
        let backdated = Shift::backdated(s, e, p).unwrap();

        assert_eq!(final_duration(&edited), final_duration(&backdated));
    }

    #[test]
    fn test_patch_from_input() {
        let patch = ShiftPatch::from_input(Some(""), Some("  "), None).unwrap();
        assert!(patch.is_empty());

        let patch = ShiftPatch::from_input(None, Some("2024-01-01 16:00"), Some("30")).unwrap();
        assert_eq!(patch.start, None);
        assert_eq!(patch.end, Some(at(16, 0)));
        assert_eq!(patch.pause_minutes, Some(30));
        assert!(!patch.is_empty());

        assert!(ShiftPatch::from_input(Some("later"), None, None).is_err());

        let patch = ShiftPatch::from_input(Some(" 2024-01-01 07:30 "), None, Some(" 15 ")).unwrap();
        assert_eq!(patch.start, Some(at(7, 30)));
        assert_eq!(patch.pause_minutes, Some(15));
    }

    #[test]
    fn test_remove() {
        let a = Shift::planned(at(8, 0));
        let b = Shift::started(at(9, 0));
        let shifts = vec![a.clone(), b.clone()];

        let remaining = lifecycle::remove(&shifts, &a.id);
        assert_eq!(remaining, vec![b]);

        let again = lifecycle::remove(&remaining, &a.id);
        assert_eq!(again, remaining);
        assert_eq!(shifts.len(), 2);
    }

    #[test]
    fn test_add_replaces_same_id() {
        let shift = Shift::planned(at(8, 0));
        let shifts = lifecycle::add(&[], shift.clone());
        assert_eq!(shifts.len(), 1);

        let moved = Shift {
            start: at(10, 0),
            ..shift.clone()
        };
        let shifts = lifecycle::add(&shifts, moved);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].start, at(10, 0));
    }

    #[test]
    fn test_by_id_unknown_shift() {
        let shifts = vec![Shift::planned(at(8, 0))];

        assert_eq!(
            lifecycle::start_by_id(&shifts, "missing", at(8, 0)),
            Err(ShiftError::NotFound("missing".to_string()))
        );
        assert!(matches!(
            lifecycle::finish_by_id(&shifts, "missing", at(9, 0), 0),
            Err(ShiftError::NotFound(_))
        ));
        assert!(matches!(
            lifecycle::edit_by_id(&shifts, "missing", &ShiftPatch::default()),
            Err(ShiftError::NotFound(_))
        ));
    }

    #[test]
    fn test_by_id_leaves_other_shifts() {
        let a = Shift::planned(at(8, 0));
        let b = Shift::planned(at(12, 0));
        let shifts = vec![a.clone(), b.clone()];

        let next = lifecycle::start_by_id(&shifts, &b.id, at(12, 5)).unwrap();
        assert_eq!(next[0], a);
        assert_eq!(next[1].status(), ShiftStatus::Running);
    }
}
