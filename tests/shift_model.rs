#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
    use serde_json::json;
    use shiftlog::libs::duration::final_duration;
    use shiftlog::libs::error::ShiftError;
    use shiftlog::libs::scheduler::advance;
    use shiftlog::libs::shift::{parse_pause, parse_timestamp, Shift, ShiftGroup, ShiftRecord, ShiftStatus};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn record(value: serde_json::Value) -> ShiftRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_status_is_derived_from_fields() {
        let mut shift = Shift::planned(at(1, 8, 0));
        assert_eq!(shift.status(), ShiftStatus::Planned);

        shift.running = true;
        assert_eq!(shift.status(), ShiftStatus::Running);

        shift.running = false;
        shift.actual_start = Some(at(1, 8, 0));
        assert_eq!(shift.status(), ShiftStatus::Running);

        shift.end = Some(at(1, 16, 0));
        assert_eq!(shift.status(), ShiftStatus::Finished);
    }

    #[test]
    fn test_create_planned() {
        let shift = Shift::create_planned("2024-01-01T08:00").unwrap();
        assert_eq!(shift.start, at(1, 8, 0));
        assert_eq!(shift.actual_start, None);
        assert_eq!(shift.status(), ShiftStatus::Planned);
        assert!(!shift.id.is_empty());
    }

    #[test]
    fn test_create_started() {
        let shift = Shift::create_started("2024-01-01 09:30").unwrap();
        assert_eq!(shift.actual_start, Some(at(1, 9, 30)));
        assert_eq!(shift.status(), ShiftStatus::Running);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Shift::planned(at(1, 8, 0));
        let b = Shift::planned(at(1, 8, 0));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_backdated_deducts_pause() {
        let shift = Shift::create_backdated("2024-01-01T08:00", "2024-01-01T16:00", "30").unwrap();
        assert_eq!(shift.status(), ShiftStatus::Finished);
        assert_eq!(shift.actual_start, Some(at(1, 8, 0)));
        assert_eq!(shift.duration_minutes, Some(450));
        assert_eq!(final_duration(&shift), Some(450));
    }

    #[test]
    fn test_create_backdated_rejects_end_before_start() {
        let result = Shift::create_backdated("2024-01-01T16:00", "2024-01-01T08:00", "0");
        assert!(matches!(result, Err(ShiftError::InvalidInput(_))));

        let result = Shift::create_backdated("2024-01-01T08:00", "2024-01-01T08:00", "0");
        assert!(matches!(result, Err(ShiftError::InvalidInput(_))));
    }

    #[test]
    fn test_create_backdated_rejects_negative_pause() {
        let result = Shift::create_backdated("2024-01-01T08:00", "2024-01-01T16:00", "-15");
        assert!(matches!(result, Err(ShiftError::InvalidInput(_))));
    }

    #[test]
    fn test_create_planned_rejects_garbage() {
        assert!(matches!(Shift::create_planned("tomorrow morning"), Err(ShiftError::InvalidInput(_))));
        assert!(matches!(Shift::create_planned(""), Err(ShiftError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_timestamp_local_formats() {
        assert_eq!(parse_timestamp("2024-01-01T08:00").unwrap(), at(1, 8, 0));
        assert_eq!(parse_timestamp("2024-01-01T08:00:00").unwrap(), at(1, 8, 0));
        assert_eq!(parse_timestamp("2024-01-01T08:00:00.000").unwrap(), at(1, 8, 0));
        assert_eq!(parse_timestamp("2024-01-01 08:00").unwrap(), at(1, 8, 0));
        assert_eq!(parse_timestamp("  2024-01-01 08:00:00 ").unwrap(), at(1, 8, 0));
    }

    #[test]
    fn test_parse_timestamp_with_offset_converts_to_local() {
        let expected = DateTime::parse_from_rfc3339("2024-01-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_timestamp("2024-01-01T08:00:00Z").unwrap(), expected);
    }

    #[test]
    fn test_parse_pause() {
        assert_eq!(parse_pause("30").unwrap(), 30);
        assert_eq!(parse_pause(" 45 min").unwrap(), 45);
        assert_eq!(parse_pause("+10").unwrap(), 10);
        assert_eq!(parse_pause("").unwrap(), 0);
        assert_eq!(parse_pause("NaN").unwrap(), 0);
        assert_eq!(parse_pause("abc").unwrap(), 0);
        assert_eq!(parse_pause("-0").unwrap(), 0);
        assert!(matches!(parse_pause("-5"), Err(ShiftError::InvalidInput(_))));
        assert!(matches!(parse_pause("- 10"), Err(ShiftError::InvalidInput(_))));
        assert_eq!(parse_pause("+ 10").unwrap(), 10);
    }

    #[test]
    fn test_normalize_accepts_planned_start_alias() {
        let shift = record(json!({"id": "a1", "plannedStart": "2024-01-01T08:00:00"})).normalize().unwrap();
        assert_eq!(shift.start, at(1, 8, 0));
        assert_eq!(shift.status(), ShiftStatus::Planned);
    }

    #[test]
    fn test_normalize_running_status_string() {
        let shift = record(json!({"id": "a1", "start": "2024-01-01T08:00:00", "status": "running"}))
            .normalize()
            .unwrap();
        assert_eq!(shift.status(), ShiftStatus::Running);
        assert_eq!(shift.effective_start(), at(1, 8, 0));
    }

    #[test]
    fn test_normalize_running_flag() {
        let shift = record(json!({"id": "a1", "start": "2024-01-01T08:00:00", "running": true}))
            .normalize()
            .unwrap();
        assert_eq!(shift.status(), ShiftStatus::Running);
    }

    #[test]
    fn test_normalize_end_wins_over_running_flag() {
        let shift = record(json!({
            "id": "a1",
            "start": "2024-01-01T08:00:00",
            "end": "2024-01-01T10:00:00",
            "running": true,
            "status": "running"
        }))
        .normalize()
        .unwrap();
        assert_eq!(shift.status(), ShiftStatus::Finished);
        assert!(!shift.running);
    }

    #[test]
    fn test_normalize_ignores_unknown_status() {
        let shift = record(json!({"id": "a1", "start": "2024-01-01T08:00:00", "status": "paused"}))
            .normalize()
            .unwrap();
        assert_eq!(shift.status(), ShiftStatus::Planned);
    }

    #[test]
    fn test_normalize_recovers_malformed_numbers() {
        let shift = record(json!({
            "id": "a1",
            "start": "2024-01-01T08:00:00",
            "end": "2024-01-01T10:00:00",
            "pauseMinutes": "abc",
            "durationMinutes": "NaN"
        }))
        .normalize()
        .unwrap();
        assert_eq!(shift.pause_minutes, 0);
        assert_eq!(shift.duration_minutes, None);
        assert_eq!(final_duration(&shift), Some(120));
    }

    #[test]
    fn test_normalize_numeric_pause_values() {
        let shift = record(json!({"id": "a1", "start": "2024-01-01T08:00:00", "pauseMinutes": 29.6}))
            .normalize()
            .unwrap();
        assert_eq!(shift.pause_minutes, 30);

        let shift = record(json!({"id": "a1", "start": "2024-01-01T08:00:00", "pauseMinutes": -10}))
            .normalize()
            .unwrap();
        assert_eq!(shift.pause_minutes, 0);
    }

    #[test]
    fn test_normalize_drops_duration_without_end() {
        let running = record(json!({"id": "a1", "start": "2024-01-01T08:00:00", "running": true, "durationMinutes": 50}))
            .normalize()
            .unwrap();
        assert_eq!(running.status(), ShiftStatus::Running);
        assert_eq!(running.duration_minutes, None);
        assert_eq!(final_duration(&running), None);

        let planned = record(json!({"id": "a2", "start": "2024-01-01T08:00:00", "durationMinutes": 120}))
            .normalize()
            .unwrap();
        assert_eq!(planned.duration_minutes, None);

        let (started, changed) = advance(&[planned], at(1, 9, 0));
        assert!(changed);
        assert_eq!(started[0].status(), ShiftStatus::Running);
        assert_eq!(started[0].duration_minutes, None);
    }

    #[test]
    fn test_normalize_keeps_duration_of_finished_record() {
        let shift = record(json!({
            "id": "a1",
            "start": "2024-01-01T08:00:00",
            "end": "2024-01-01T16:00:00",
            "durationMinutes": 400
        }))
        .normalize()
        .unwrap();
        assert_eq!(shift.duration_minutes, Some(400));
    }

    #[test]
    fn test_normalize_drops_unreadable_optional_timestamp() {
        let shift = record(json!({"id": "a1", "start": "2024-01-01T08:00:00", "end": "soon"}))
            .normalize()
            .unwrap();
        assert_eq!(shift.end, None);
        assert_eq!(shift.status(), ShiftStatus::Planned);
    }

    #[test]
    fn test_normalize_skips_records_without_id_or_start() {
        assert!(record(json!({"start": "2024-01-01T08:00:00"})).normalize().is_none());
        assert!(record(json!({"id": "a1"})).normalize().is_none());
        assert!(record(json!({"id": "a1", "start": "not a date"})).normalize().is_none());
    }

    #[test]
    fn test_normalize_keeps_inverted_interval_with_zero_duration() {
        let shift = record(json!({"id": "a1", "start": "2024-01-01T10:00:00", "end": "2024-01-01T08:00:00"}))
            .normalize()
            .unwrap();
        assert_eq!(shift.status(), ShiftStatus::Finished);
        assert_eq!(final_duration(&shift), Some(0));
    }

    #[test]
    fn test_record_round_trip() {
        let shifts = vec![
            Shift::planned(at(2, 8, 0)),
            Shift::started(at(1, 9, 0)),
            Shift::backdated(at(1, 8, 0), at(1, 16, 0), 30).unwrap(),
        ];

        for shift in &shifts {
            let json = serde_json::to_string(&ShiftRecord::from(shift)).unwrap();
            assert!(json.contains("\"pauseMinutes\""));
            let restored = serde_json::from_str::<ShiftRecord>(&json).unwrap().normalize().unwrap();
            assert_eq!(&restored, shift);
        }
    }

    #[test]
    fn test_group_running_and_next_planned() {
        let running = Shift::started(at(1, 8, 0));
        let later = Shift::planned(at(3, 8, 0));
        let sooner = Shift::planned(at(2, 8, 0));
        let past = Shift::planned(at(1, 6, 0));
        let shifts = vec![later.clone(), running.clone(), sooner.clone(), past];

        assert_eq!(shifts.running().map(|s| s.id.as_str()), Some(running.id.as_str()));
        assert_eq!(shifts.next_planned(at(1, 12, 0)).map(|s| s.id.as_str()), Some(sooner.id.as_str()));
        assert!(shifts.next_planned(at(4, 0, 0)).is_none());

        let idle: Vec<Shift> = vec![later];
        assert!(idle.running().is_none());
    }

    #[test]
    fn test_group_on_day_and_find() {
        let evening = Shift::planned(at(1, 18, 0));
        let morning = Shift::started(at(1, 6, 0));
        let other_day = Shift::planned(at(2, 8, 0));
        let shifts = vec![evening.clone(), other_day, morning.clone()];

        let day = shifts.on_day(at(1, 0, 0).date());
        let ids: Vec<&str> = day.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![morning.id.as_str(), evening.id.as_str()]);

        assert_eq!(shifts.find(&evening.id), Some(&evening));
        assert!(shifts.find("missing").is_none());
    }

    #[test]
    fn test_group_format() {
        let finished = Shift::backdated(at(1, 8, 0), at(1, 16, 0), 30).unwrap();
        let running = Shift::started(at(2, 8, 0));
        let planned = Shift::planned(at(3, 8, 0));
        let shifts = vec![finished.clone(), running, planned];

        let rows = shifts.format(at(2, 9, 15));
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].id, finished.id[..8]);
        assert_eq!(rows[0].start, "08:00");
        assert_eq!(rows[0].end, "16:00");
        assert_eq!(rows[0].pause, "0h 30min");
        assert_eq!(rows[0].duration, "7h 30min");
        assert_eq!(rows[0].status, "finished");

        assert_eq!(rows[1].end, "-");
        assert_eq!(rows[1].duration, "1h 15min");
        assert_eq!(rows[1].status, "running");

        assert_eq!(rows[2].duration, "--");
        assert_eq!(rows[2].status, "planned");
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("Running".parse::<ShiftStatus>().unwrap(), ShiftStatus::Running);
        assert_eq!(ShiftStatus::Finished.to_string(), "finished");
        assert!("paused".parse::<ShiftStatus>().is_err());
    }
}
