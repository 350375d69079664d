//! Config parser contract tests.

use tui_arcade::config::Config;
use tui_arcade::types::Rgb;

#[test]
fn one_entry_per_valid_line() {
    let config = Config::parse("width: 800\n# comment\nheight:600\nbad line\n");
    assert_eq!(config.len(), 2);
    assert_eq!(config.get("width"), Some("800"));
    assert_eq!(config.get("height"), Some("600"));
    assert_eq!(config.get("bad line"), None);
}

#[test]
fn only_the_first_colon_splits() {
    let config = Config::parse("url: http://x:80\n");
    assert_eq!(config.get("url"), Some("http://x:80"));
}

#[test]
fn hash_comments_only_count_at_line_start() {
    let config = Config::parse("   # indented comment\nwidth: 800 # not a comment\n");
    assert_eq!(config.len(), 1);
    assert_eq!(config.get("width"), Some("800 # not a comment"));
}

#[test]
fn typed_getters_read_through_or_fall_back() {
    let config = Config::parse("width: eighty\nspeed: -15\nfg: #0095DD\nbg: teal\n");
    assert_eq!(config.get_u16("width"), None);
    assert_eq!(config.get_f32("speed"), Some(-15.0));
    assert_eq!(config.get_color("fg"), Some(Rgb::new(0x00, 0x95, 0xDD)));
    assert_eq!(config.get_color("bg"), None);
    assert_eq!(config.get_color("missing"), None);
}

#[test]
fn merge_lets_the_user_overlay_win() {
    let mut config = Config::parse("width: 96\nheight: 32\nball_speed: 50\n");
    config.merge(Config::parse("ball_speed: 80\npaddle_speed: 70\n"));

    assert_eq!(config.get_f32("ball_speed"), Some(80.0));
    assert_eq!(config.get("width"), Some("96"));
    assert_eq!(config.get("paddle_speed"), Some("70"));
}

#[test]
fn load_reports_the_missing_path() {
    let err = Config::load("/nonexistent/arcade.game").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/arcade.game"));
}
