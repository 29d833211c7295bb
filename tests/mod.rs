use chrono::NaiveDate;
use coursecal::{CellGrid, CellValue};

pub fn date(s: &str) -> CellValue {
    CellValue::Date(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
}

pub fn text_row(cells: &[&str]) -> Vec<CellValue> {
    cells
        .iter()
        .map(|&cell| {
            if cell.is_empty() {
                CellValue::Empty
            } else {
                cell.into()
            }
        })
        .collect()
}

pub const HEADER: [&str; 9] = [
    "",
    "Course Listing",
    "Credits",
    "Section",
    "Instructional Format",
    "Meeting Patterns",
    "Instructor",
    "Start Date",
    "End Date",
];

pub fn course_row(
    listing: &str,
    format: &str,
    pattern: &str,
    instructor: Option<&str>,
    start: &str,
    end: &str,
) -> Vec<CellValue> {
    vec![
        CellValue::Empty,
        listing.into(),
        CellValue::Number(4.0),
        format!("{listing} - 01").into(),
        format.into(),
        pattern.into(),
        instructor.into(),
        date(start),
        date(end),
    ]
}

/// A schedule export laid out like the student registration report.
pub fn registration_export() -> Vec<Vec<CellValue>> {
    vec![
        text_row(&["View My Courses"]),
        text_row(&["Student", "", "Jordan Example"]),
        vec![],
        text_row(&["My Enrolled Courses"]),
        text_row(&["3 items"]),
        text_row(&HEADER),
        course_row(
            "CS 2500 - Fundamentals of Computer Science 1",
            "Lecture",
            "M-W-R | 11:45 AM - 1:25 PM | West Village H 108",
            Some("Ada Lovelace"),
            "2024-09-04",
            "2024-12-10",
        ),
        course_row(
            "CS 2501 - Lab for CS 2500",
            "Lab",
            "T | 9:50 AM - 11:30 AM | Hastings Suite 104",
            None,
            "2024-09-04",
            "2024-12-10",
        ),
        course_row(
            "MATH 1365 - Introduction to Mathematical Reasoning",
            "Lecture",
            "F-T | 1:35 PM - 3:15 PM | Ryder Hall 247",
            Some("Grace Hopper"),
            "2024-09-04",
            "2024-12-10",
        ),
        text_row(&["My Dropped/Withdrawn Courses"]),
        vec![],
        text_row(&HEADER),
        course_row(
            "HIST 1130 - Introduction to the History of the United States",
            "Lecture",
            "not a meeting pattern",
            None,
            "2024-09-04",
            "2024-12-10",
        ),
    ]
}

pub fn registration_grid() -> CellGrid {
    CellGrid::new(registration_export())
}

pub mod parser {
    use crate::{course_row, date, registration_export, registration_grid, text_row};
    use chrono::NaiveDateTime;
    use coursecal::{
        CellGrid, CellValue, ParseError, ParserOptions, ScheduleParser, parse, types::Weekday,
    };

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn registration_export_sections() {
        let schedule = parse(&registration_grid()).unwrap();
        assert_eq!(schedule.len(), 3);

        let lecture = &schedule[0];
        assert_eq!(lecture.name(), "CS 2500 Lecture");
        assert_eq!(
            lecture.description(),
            "Fundamentals of Computer Science 1 with Ada Lovelace"
        );
        assert_eq!(lecture.location(), "West Village H 108");
        assert_eq!(
            lecture.days(),
            &[Weekday::Monday, Weekday::Wednesday, Weekday::Thursday]
        );
        // Term starts on a Wednesday, which is a meeting day
        assert_eq!(lecture.first_start(), at("2024-09-04 11:45"));
        assert_eq!(lecture.first_end(), at("2024-09-04 13:25"));
        assert_eq!(
            lecture.recurrence_end(),
            date("2024-12-10").as_date().unwrap()
        );

        let lab = &schedule[1];
        assert_eq!(lab.name(), "CS 2501 Lab");
        assert_eq!(lab.description(), "Lab for CS 2500");
        assert_eq!(lab.days(), &[Weekday::Tuesday]);
        assert_eq!(lab.first_start(), at("2024-09-10 09:50"));
        assert_eq!(lab.first_end(), at("2024-09-10 11:30"));

        let math = &schedule[2];
        assert_eq!(math.days(), &[Weekday::Tuesday, Weekday::Friday]);
        assert_eq!(math.first_start(), at("2024-09-06 13:35"));
        assert_eq!(math.first_end(), at("2024-09-06 15:15"));
    }

    #[test]
    fn alignment_keeps_time_of_day() {
        let mut rows = registration_export();
        rows.truncate(6);
        // 2024-09-02 is a Monday
        rows.push(course_row(
            "ENGW 1111 - First-Year Writing",
            "Seminar",
            "W | 8:00 AM - 9:05 AM | Meserve 102",
            None,
            "2024-09-02",
            "2024-12-10",
        ));
        let schedule = parse(&CellGrid::new(rows)).unwrap();
        assert_eq!(schedule[0].first_start(), at("2024-09-04 08:00"));
        assert_eq!(schedule[0].first_end(), at("2024-09-04 09:05"));
    }

    #[test]
    fn completed_courses_marker_stops_parsing() {
        let mut rows = registration_export();
        rows[9] = text_row(&["My Completed Courses"]);
        let schedule = parse(&CellGrid::new(rows)).unwrap();
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn idempotent() {
        let grid = registration_grid();
        assert_eq!(parse(&grid).unwrap(), parse(&grid).unwrap());
    }

    #[test]
    fn missing_enrolled_marker() {
        let mut rows = registration_export();
        rows.remove(3);
        assert_eq!(
            parse(&CellGrid::new(rows)),
            Err(ParseError::HeaderNotFound)
        );
    }

    #[test]
    fn header_row_past_the_end() {
        let grid = CellGrid::new(vec![text_row(&["My Enrolled Courses"])]);
        assert_eq!(
            parse(&grid),
            Err(ParseError::InvalidHeaderRow { index: 2, rows: 1 })
        );
    }

    #[test]
    fn missing_column() {
        let mut rows = registration_export();
        rows[5][6] = "Teacher".into();
        let err = parse(&CellGrid::new(rows)).unwrap_err();
        assert_eq!(err, ParseError::ColumnNotFound("Instructor".to_owned()));
        insta::assert_snapshot!(err.to_string(), @"unable to find the Instructor column");
    }

    #[test]
    fn one_bad_row_fails_everything() {
        let mut rows = registration_export();
        rows[7][5] = "T | 9:50 AM - 13:30 PM | Hastings Suite 104".into();
        let err = parse(&CellGrid::new(rows)).unwrap_err();
        assert_eq!(err, ParseError::InvalidTimeString("13:30 PM".to_owned()));
        insta::assert_snapshot!(err.to_string(), @r#"failed to parse time string: "13:30 PM""#);
    }

    #[test]
    fn start_date_must_be_a_date() {
        let mut rows = registration_export();
        rows[6][7] = "9/4/2024".into();
        let err = parse(&CellGrid::new(rows)).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidField {
                field: "startDate".to_owned(),
                expected: "date"
            }
        );
        insta::assert_snapshot!(err.to_string(), @"startDate: expected date");
    }

    #[test]
    fn end_date_must_be_a_date() {
        let mut rows = registration_export();
        rows[8][8] = CellValue::Number(45636.0);
        assert!(matches!(
            parse(&CellGrid::new(rows)),
            Err(ParseError::InvalidField { ref field, .. }) if field == "endDate"
        ));
    }

    #[test]
    fn course_listing_must_be_text() {
        let mut rows = registration_export();
        rows[6][1] = CellValue::Number(2500.0);
        assert!(matches!(
            parse(&CellGrid::new(rows)),
            Err(ParseError::InvalidField { ref field, .. }) if field == "courseName"
        ));
    }

    #[test]
    fn blank_rows() {
        let mut rows = registration_export();
        rows.insert(7, vec![]);
        let grid = CellGrid::new(rows);
        assert!(matches!(
            parse(&grid),
            Err(ParseError::InvalidField { ref field, .. }) if field == "courseName"
        ));

        let lenient = ScheduleParser::new(&grid).with_options(ParserOptions {
            skip_blank_rows: true,
            ..Default::default()
        });
        assert_eq!(lenient.parse().unwrap().len(), 3);
    }

    #[test]
    fn custom_column_names() {
        let mut rows = registration_export();
        rows[5][5] = "Meeting Pattern".into();
        let grid = CellGrid::new(rows);
        let mut options = ParserOptions::default();
        options.columns.meeting_patterns = "Meeting Pattern".to_owned();
        let schedule = ScheduleParser::new(&grid)
            .with_options(options)
            .parse()
            .unwrap();
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn renamed_date_column_reports_field_key() {
        let mut rows = registration_export();
        rows[5][7] = "Begins".into();
        rows[6][7] = "soon".into();
        let grid = CellGrid::new(rows);
        let mut options = ParserOptions::default();
        options.columns.start_date = "Begins".to_owned();
        let err = ScheduleParser::new(&grid)
            .with_options(options)
            .parse()
            .unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"startDate: expected date");
    }

    #[test]
    fn section_iterator_stops_after_error() {
        let mut rows = registration_export();
        rows[7][5] = "T | 9:50 AM | Hastings Suite 104".into();
        let grid = CellGrid::new(rows);
        let parser = ScheduleParser::new(&grid);
        let results: Vec<_> = parser.sections().unwrap().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}

pub mod calendar {
    use crate::registration_grid;
    use chrono::{NaiveDateTime, TimeZone, Utc};
    use coursecal::{
        Schedule, Section,
        calendar::{CalendarBuilder, CalendarOptions, UntilStyle, render},
        component::{Component, IcalTimeZone},
        generator::Emitter,
        parse,
        types::Weekday,
    };
    use itertools::Itertools;
    use std::collections::HashSet;

    fn section(name: &str, days: &[Weekday], start: &str, end: &str, until: &str) -> Section {
        let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
        Section::builder()
            .name(name)
            .description(format!("{name} description"))
            .location("Room 1")
            .days(days.iter().copied())
            .first_meeting(at(start), at(end))
            .recurrence_end(chrono::NaiveDate::parse_from_str(until, "%Y-%m-%d").unwrap())
            .build()
            .unwrap()
    }

    fn property_values<'a>(ics: &'a str, name: &str) -> Vec<&'a str> {
        ics.split("\r\n")
            .filter_map(|line| line.strip_prefix(name))
            .filter_map(|rest| rest.split_once(':').map(|(_, value)| value))
            .collect()
    }

    fn byday_set(rrule: &str) -> HashSet<&str> {
        rrule
            .split(';')
            .find_map(|part| part.strip_prefix("BYDAY="))
            .unwrap()
            .split(',')
            .collect()
    }

    /// The `BEGIN:VTIMEZONE` .. `END:VTIMEZONE` lines of a document.
    fn vtimezone_block(ics: &str) -> &str {
        let start = ics.find("BEGIN:VTIMEZONE\r\n").unwrap();
        let end = ics.find("END:VTIMEZONE\r\n").unwrap() + "END:VTIMEZONE\r\n".len();
        &ics[start..end]
    }

    fn until(rrule: &str) -> &str {
        rrule
            .split(';')
            .find_map(|part| part.strip_prefix("UNTIL="))
            .unwrap()
    }

    #[test]
    fn two_sections_two_events() {
        let schedule: Schedule = [
            section(
                "CS 2500 Lecture",
                &[Weekday::Monday, Weekday::Wednesday],
                "2024-09-04 10:00",
                "2024-09-04 11:05",
                "2024-12-10",
            ),
            section(
                "CS 2501 Lab",
                &[Weekday::Tuesday],
                "2024-09-10 09:50",
                "2024-09-10 11:30",
                "2024-12-03",
            ),
        ]
        .into_iter()
        .collect();

        let ics = schedule.to_icalendar();
        assert_eq!(ics.matches("BEGIN:VCALENDAR\r\n").count(), 1);
        assert_eq!(ics.matches("BEGIN:VTIMEZONE\r\n").count(), 1);
        assert_eq!(ics.matches("BEGIN:VEVENT\r\n").count(), 2);
        assert_eq!(ics.matches("END:VEVENT\r\n").count(), 2);

        assert_eq!(
            property_values(&ics, "SUMMARY"),
            vec!["CS 2500 Lecture", "CS 2501 Lab"]
        );

        let rrules = property_values(&ics, "RRULE");
        assert_eq!(rrules.len(), 2);
        assert_eq!(byday_set(rrules[0]), HashSet::from(["WE", "MO"]));
        assert_eq!(byday_set(rrules[1]), HashSet::from(["TU"]));
        assert_eq!(until(rrules[0]), "20241210");
        assert_eq!(until(rrules[1]), "20241203");
        assert!(rrules.iter().all(|rule| rule.starts_with("FREQ=WEEKLY;")));
    }

    #[test]
    fn events_follow_schedule_order() {
        let schedule = parse(&registration_grid()).unwrap();
        let calendar = CalendarBuilder::new(&schedule).build();
        let summaries = calendar
            .events
            .iter()
            .map(|event| event.get_summary().unwrap())
            .collect_vec();
        assert_eq!(
            summaries,
            vec!["CS 2500 Lecture", "CS 2501 Lab", "MATH 1365 Lecture"]
        );
        assert_eq!(calendar.get_tzids(), vec!["America/New_York"]);
        assert!(calendar.events.iter().map(|e| e.get_uid()).all_unique());
    }

    #[test]
    fn times_are_local_to_the_reference_timezone() {
        let schedule = parse(&registration_grid()).unwrap();
        let ics = schedule.to_icalendar();
        assert_eq!(
            property_values(&ics, "DTSTART;TZID=America/New_York"),
            vec!["20240904T114500", "20240910T095000", "20240906T133500"]
        );
        assert_eq!(
            property_values(&ics, "DTEND;TZID=America/New_York"),
            vec!["20240904T132500", "20240910T113000", "20240906T151500"]
        );
    }

    #[test]
    fn embeds_the_bundled_timezone_definition() {
        let schedule = parse(&registration_grid()).unwrap();
        let ics = schedule.to_icalendar();
        let bundled = IcalTimeZone::from_tzid("America/New_York").unwrap();
        let block = vtimezone_block(&ics);
        similar_asserts::assert_eq!(block, bundled.generate());
        // Yearly rules keep the definition valid beyond the term
        assert!(block.contains("\r\nRRULE:FREQ=YEARLY;"));
        assert!(block.contains("BEGIN:DAYLIGHT\r\n"));
        assert!(block.contains("BEGIN:STANDARD\r\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let schedule = parse(&registration_grid()).unwrap();
        let options = CalendarOptions::default();
        similar_asserts::assert_eq!(render(&schedule, &options), render(&schedule, &options));
    }

    #[test]
    fn single_section_document() {
        let schedule: Schedule = parse(&registration_grid())
            .unwrap()
            .into_iter()
            .take(1)
            .collect();
        let options = CalendarOptions {
            calendar_name: Some("Fall 2024".to_owned()),
            dtstamp: Some(Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap()),
            uid_domain: "example.edu".to_owned(),
            ..Default::default()
        };
        let ics = render(&schedule, &options);
        let bundled = IcalTimeZone::from_tzid("America/New_York").unwrap().generate();
        similar_asserts::assert_eq!(vtimezone_block(&ics), bundled);
        similar_asserts::assert_eq!(
            ics.replacen(&bundled, "", 1),
            include_str!("./resources/single_section.ics")
        );
    }

    #[test]
    fn utc_until() {
        let schedule = parse(&registration_grid()).unwrap();
        let options = CalendarOptions {
            until: UntilStyle::UtcEndOfDay,
            ..Default::default()
        };
        let ics = render(&schedule, &options);
        for rrule in property_values(&ics, "RRULE") {
            assert_eq!(until(rrule), "20241211T045959Z");
        }
    }

    #[test]
    fn other_reference_timezone() {
        let schedule = parse(&registration_grid()).unwrap();
        let options = CalendarOptions::default()
            .with_timezone_name("America/Los_Angeles")
            .unwrap();
        let calendar = CalendarBuilder::new(&schedule).with_options(options).build();
        assert_eq!(calendar.get_tzids(), vec!["America/Los_Angeles"]);
        assert!(
            calendar
                .get_property("X-WR-TIMEZONE")
                .is_some_and(|prop| prop.value.as_deref() == Some("America/Los_Angeles"))
        );
        let dtstart = calendar.events[0].get_property("DTSTART").unwrap();
        assert_eq!(dtstart.params.get_tzid(), Some("America/Los_Angeles"));
        assert_eq!(dtstart.value.as_deref(), Some("20240904T114500"));
    }

    #[test]
    fn text_is_escaped() {
        let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
        let schedule: Schedule = [Section::builder()
            .name("ART 1000 Studio")
            .description("Drawing, painting; sculpture")
            .location("Ell Hall\nRoom 2")
            .days([Weekday::Friday])
            .first_meeting(at("2024-09-06 14:00"), at("2024-09-06 16:00"))
            .recurrence_end(chrono::NaiveDate::from_ymd_opt(2024, 12, 6).unwrap())
            .build()
            .unwrap()]
        .into_iter()
        .collect();
        let ics = schedule.to_icalendar();
        assert!(ics.contains("DESCRIPTION:Drawing\\, painting\\; sculpture\r\n"));
        assert!(ics.contains("LOCATION:Ell Hall\\nRoom 2\r\n"));
    }

    #[test]
    fn empty_schedule_still_has_timezone() {
        let ics = Schedule::new().to_icalendar();
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(ics.matches("BEGIN:VTIMEZONE\r\n").count(), 1);
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
