use pgtemporal::{
    Component, ConversionError, Era, PgDate, PgInterval, PgTime, PgTimestamp,
    PgTimestampFormatter, Quantity, Style, Zone,
};

fn error_of(style: Style, text: &str) -> (ConversionError, usize) {
    let err = PgTimestampFormatter::new(style).parse(text).unwrap_err();
    (err.underlying().clone(), err.position())
}

#[test]
fn timestamps_survive_formatting() {
    let dates = [
        (Era::Ad, 2024, 2, 29),
        (Era::Ad, 1, 1, 1),
        (Era::Ad, 9999, 12, 31),
        (Era::Bc, 1, 2, 29),
        (Era::Bc, 4713, 11, 24),
    ];
    let times = [
        "00:00:00",
        "23:59:59.999999",
        "12:30:00.5+05:30",
        "01:02:03-09:30",
        "18:00:00+12",
    ];

    for (era, year, month, day) in dates {
        let date = PgDate::new(era, year, month, day).unwrap();
        assert_eq!(date.to_string().parse::<PgDate>().unwrap(), date);

        for time in times {
            let time: PgTime = time.parse().unwrap();
            assert_eq!(time.to_string().parse::<PgTime>().unwrap(), time);

            let ts = PgTimestamp::new(date, time);
            assert_eq!(ts.to_string().parse::<PgTimestamp>().unwrap(), ts, "{ts}");
        }
    }
}

#[test]
fn sentinels() {
    let formatter = PgTimestampFormatter::new(Style::Timestamp);
    assert_eq!(formatter.parse("infinity").unwrap(), PgTimestamp::DISTANT_FUTURE);
    assert_eq!(formatter.parse("-infinity").unwrap(), PgTimestamp::DISTANT_PAST);
    assert_eq!(formatter.format(&PgTimestamp::DISTANT_FUTURE).as_deref(), Some("infinity"));
    assert_eq!("infinity".parse::<PgDate>().unwrap(), PgDate::DistantFuture);
    assert!(PgTimestampFormatter::new(Style::Time).format(&PgTimestamp::DISTANT_PAST).is_none());
}

#[test]
fn month_out_of_range() {
    let (err, at) = error_of(Style::Timestamp, "2024-13-01 00:00:00");
    assert!(matches!(err, ConversionError::NonexistentDate(c) if c.month == 13));
    assert_eq!(at, 7);
}

#[test]
fn time_zone_forms() {
    let zone = |text: &str| {
        let ts: PgTimestamp = format!("2024-01-15 10:00:00{text}").parse().unwrap();
        ts.time().and_then(PgTime::time_zone).unwrap()
    };
    assert_eq!(zone("+05"), Zone::new(5, 0).unwrap());
    assert_eq!(zone("+0530"), Zone::new(5, 30).unwrap());
    assert_eq!(zone("+05:30"), Zone::new(5, 30).unwrap());
    assert_eq!(zone("-12"), Zone::new(-12, 0).unwrap());

    for text in ["+1530", "+9960"] {
        let (err, _) = error_of(Style::Timestamp, &format!("2024-01-15 10:00:00{text}"));
        assert!(matches!(err, ConversionError::InvalidTimeZoneOffset(_)), "{text}");
    }
}

#[test]
fn era() {
    let formatter = PgTimestampFormatter::new(Style::Date);
    let ts = formatter.parse("0044-03-15 BC").unwrap();
    let date = ts.date().civil().unwrap();
    assert_eq!((date.era(), date.year()), (Era::Bc, 44));
    assert_eq!(formatter.format(&ts).as_deref(), Some("0044-03-15 BC"));
}

#[test]
fn early_termination() {
    assert_eq!(error_of(Style::Date, "2024-01"), (ConversionError::EarlyTermination, 7));
    assert_eq!(error_of(Style::Timestamp, "2024-01-15 10:"), (ConversionError::EarlyTermination, 14));
}

#[test]
fn position_accuracy() {
    let err = "2024-01-0X".parse::<PgDate>().unwrap_err();
    assert_eq!(err.position(), 9);
    assert_eq!(err.character(), Some('X'));
    assert_eq!(err.source_text(), "2024-01-0X");
}

#[test]
fn interval_rules() {
    let err = "3 days 4 days".parse::<PgInterval>().unwrap_err();
    assert_eq!(
        err.underlying(),
        &ConversionError::RedundantQuantity {
            old: Quantity::Integer(3),
            new: Quantity::Integer(4),
            component: Component::Days,
        }
    );

    let err = "3 days 5".parse::<PgInterval>().unwrap_err();
    assert_eq!(err.underlying(), &ConversionError::UnitlessQuantity(Quantity::Integer(5)));
}

#[test]
fn interval_output_is_accepted_as_input() {
    for text in [
        "1 year 2 mons -3 days 04:05:06.5",
        "-1 day 2 hours",
        "100 hours",
        "0 secs",
        "-0.25 secs",
        "2 years -1 mon",
    ] {
        let printed = text.parse::<PgInterval>().unwrap().to_string();
        let reparsed = printed.parse::<PgInterval>().unwrap();
        assert_eq!(reparsed.to_string(), printed, "{text}");
    }
}

#[test]
fn display_output_parses_back_equal() {
    for text in ["1 year -2 hours", "90 mins", "3 days 0 secs", "-1 day 2 hours", "0 days"] {
        let iv: PgInterval = text.parse().unwrap();
        assert_eq!(iv.to_string().parse::<PgInterval>().unwrap(), iv, "{text}");
    }

    for date in [
        PgDate::new(Era::Ad, 2024, 1, 15).unwrap(),
        PgDate::new(Era::Bc, 1, 2, 29).unwrap(),
        PgDate::DistantPast,
    ] {
        let ts = PgTimestamp::from(date);
        assert_eq!(ts.to_string().parse::<PgTimestamp>().unwrap(), ts, "{ts}");
    }
}
