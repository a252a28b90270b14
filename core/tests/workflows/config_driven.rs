// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the views produced by [`Calview`].

use calview_core::{Calview, Config, Error, ViewMode, ViewModel};
use jiff::SignedDuration;
use jiff::civil::date;

use crate::common::{
    TempDirs, TestConfigBuilder, provider_feed, provider_record, setup_temp_dirs, ts,
};

async fn write_feed(records: &[String]) -> (TempDirs, std::path::PathBuf) {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs
        .create_events_file("events.json", &provider_feed(records))
        .await
        .unwrap();
    (temp_dirs, path)
}

#[tokio::test]
async fn month_cell_cap_is_configurable() {
    let records: Vec<_> = (0..4)
        .map(|i| {
            provider_record(
                &format!("Event {i}"),
                &format!("2024-03-05T0{i}:00:00Z"),
                &format!("2024-03-05T0{i}:30:00Z"),
            )
        })
        .collect();
    let (_dirs, path) = write_feed(&records).await;

    let config = TestConfigBuilder::new(&path).with_month_cell_cap(1).build();
    let app = Calview::new(config).unwrap();
    let ViewModel::Month(month) = app.view(ViewMode::Month, date(2024, 3, 1)).await.unwrap() else {
        panic!("Expected month view");
    };
    let cell = month.cell(date(2024, 3, 5)).unwrap();
    assert_eq!(cell.visible().len(), 1);
    assert_eq!(cell.remaining(), 3);
}

#[tokio::test]
async fn day_slots_and_proximity_are_configurable() {
    let records = [
        provider_record("A", "2024-03-14T09:00:00Z", "2024-03-14T09:30:00Z"),
        provider_record("B", "2024-03-14T09:20:00Z", "2024-03-14T09:40:00Z"),
    ];
    let (_dirs, path) = write_feed(&records).await;

    let config = TestConfigBuilder::new(&path)
        .with_day_slots(1)
        .with_slot_proximity(SignedDuration::from_mins(30))
        .build();
    let app = Calview::new(config)
        .unwrap()
        .with_now(ts("2024-03-14T08:00:00Z"));
    let ViewModel::Day(day) = app.view(ViewMode::Day, app.today()).await.unwrap() else {
        panic!("Expected day view");
    };
    assert_eq!(day.hours[9].slots.len(), 1);
    assert!(!day.timed[0].overflow);
    assert!(day.timed[1].overflow);
}

#[tokio::test]
async fn zero_day_slots_is_rejected() {
    let (_dirs, path) = write_feed(&[]).await;
    let config = TestConfigBuilder::new(&path).with_day_slots(0).build();
    assert!(matches!(Calview::new(config), Err(Error::Config(_))));
}

#[tokio::test]
async fn config_parses_from_toml() {
    let (_dirs, path) = write_feed(&[provider_record(
        "Standup",
        "2024-03-14T09:00:00Z",
        "2024-03-14T09:15:00Z",
    )])
    .await;

    let toml = format!(
        r#"
events_path = "{}"
time_zone = "utc"
slot_proximity = "00:05"
"#,
        path.to_str().unwrap().replace('\\', "/")
    );
    let config: Config = toml::from_str(&toml).unwrap();
    let app = Calview::new(config).unwrap();
    assert_eq!(
        app.view_config().slot_proximity,
        SignedDuration::from_mins(5)
    );

    let results = app.search("standup").await.unwrap();
    assert_eq!(results.len(), 1);
}
