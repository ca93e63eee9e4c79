use time::macros::date;

use crate::domain::date_label::{parse_iso_date, GameCalendar};
use crate::error::AppError;

fn calendar() -> GameCalendar {
    GameCalendar::new(date!(2022 - 02 - 23))
}

#[test]
fn todays_game_has_no_label() {
    let cal = calendar();
    let today = date!(2025 - 07 - 10);
    let today_id = cal.game_id_for(today);
    assert_eq!(cal.label(today_id, today), "");
}

#[test]
fn past_game_label_shows_the_offset_date() {
    let cal = calendar();
    let today = date!(2025 - 07 - 10);
    let game_id = cal.game_id_for(today) - 3;
    assert_eq!(cal.label(game_id, today), " (07/07/2025)");
}

#[test]
fn future_game_label_is_formatted_identically() {
    let cal = calendar();
    let today = date!(2025 - 07 - 10);
    let game_id = cal.game_id_for(today) + 2;
    assert_eq!(cal.label(game_id, today), " (12/07/2025)");
}

#[test]
fn game_id_and_date_round_trip() {
    let cal = calendar();
    let day = date!(2024 - 01 - 15);
    assert_eq!(cal.date_for(cal.game_id_for(day)), day);
}

#[test]
fn epoch_is_game_zero() {
    let cal = calendar();
    assert_eq!(cal.game_id_for(date!(2022 - 02 - 23)), 0);
    assert_eq!(cal.game_id_for(date!(2022 - 02 - 24)), 1);
}

#[test]
fn iso_dates_parse() {
    assert_eq!(parse_iso_date("2025-07-09").unwrap(), date!(2025 - 07 - 09));
}

#[test]
fn malformed_dates_are_rejected() {
    let err = parse_iso_date("09/07/2025").unwrap_err();
    assert!(matches!(err, AppError::InvalidDate { input } if input == "09/07/2025"));
}
