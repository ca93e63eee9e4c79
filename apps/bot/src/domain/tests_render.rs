use crate::domain::guess::GuessResult;
use crate::domain::proximity::{BarColor, ProximityScale, RankScale, ANSI_RESET};
use crate::domain::render::{ProximityRenderer, TOTAL_BAR_WIDTH};

/// Scale with a fixed fill so bar math is easy to assert against.
struct FixedScale {
    percent: u8,
}

impl ProximityScale for FixedScale {
    fn color(&self, _distance: u32) -> BarColor {
        BarColor::Green
    }

    fn fill_percent(&self, _distance: u32) -> u8 {
        self.percent
    }
}

fn guess(word: &str, distance: Option<u32>) -> GuessResult {
    GuessResult {
        word: word.into(),
        lemma: word.to_lowercase(),
        distance,
        error: None,
    }
}

fn visible_cells(row: &str) -> usize {
    // Strip ANSI escapes and the rank suffix, count cells between brackets.
    let stripped = row
        .replace(ANSI_RESET, "")
        .replace(BarColor::Green.ansi_prefix(), "");
    let open = stripped.find('[').unwrap();
    let close = stripped.rfind(']').unwrap();
    stripped[open + 1..close].chars().count()
}

#[test]
fn row_always_spans_the_full_bar_width() {
    let renderer = ProximityRenderer::new(FixedScale { percent: 50 });
    let row = renderer.row(&guess("casa", Some(5)));
    assert_eq!(visible_cells(&row), TOTAL_BAR_WIDTH);
}

#[test]
fn row_displays_rank_distance_plus_one() {
    let renderer = ProximityRenderer::new(RankScale);
    let row = renderer.row(&guess("casa", Some(5)));
    assert!(row.ends_with("] 6"), "row was: {row}");
}

#[test]
fn exact_match_row_displays_rank_one() {
    let renderer = ProximityRenderer::new(RankScale);
    let row = renderer.row(&guess("casa", Some(0)));
    assert!(row.ends_with("] 1"), "row was: {row}");
}

#[test]
fn half_fill_splits_between_word_and_fill_glyphs() {
    let renderer = ProximityRenderer::new(FixedScale { percent: 50 });
    let row = renderer.row(&guess("casa", Some(5)));
    // 50% of 30 cells = 15; the 4-letter word leaves 11 fill glyphs
    // and 15 filler dashes.
    assert_eq!(row.matches('█').count(), 11);
    assert_eq!(row.matches('-').count(), 15);
}

#[test]
fn word_longer_than_fill_never_underflows() {
    let renderer = ProximityRenderer::new(FixedScale { percent: 10 });
    let row = renderer.row(&guess("extraordinarily", Some(900)));
    assert_eq!(row.matches('█').count(), 0);
    assert_eq!(row.matches('-').count(), TOTAL_BAR_WIDTH - 15);
}

#[test]
fn word_longer_than_bar_renders_without_filler() {
    let renderer = ProximityRenderer::new(FixedScale { percent: 100 });
    let long_word = "a".repeat(TOTAL_BAR_WIDTH + 5);
    let row = renderer.row(&guess(&long_word, Some(1)));
    assert_eq!(row.matches('█').count(), 0);
    assert_eq!(row.matches('-').count(), 0);
}

#[test]
fn bar_width_counts_characters_not_bytes() {
    let renderer = ProximityRenderer::new(FixedScale { percent: 50 });
    // 4 characters, 8 bytes in UTF-8.
    let row = renderer.row(&guess("ãéîô", Some(5)));
    assert_eq!(row.matches('█').count(), 11);
}

#[test]
fn block_separates_newest_guess_with_a_blank_line() {
    let renderer = ProximityRenderer::new(RankScale);
    let newest = guess("roof", Some(3));
    let closest = vec![guess("door", Some(1)), guess("wall", Some(8))];
    let block = renderer.block(&newest, &closest);

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("roof"));
    assert_eq!(lines[1], "");
    assert!(lines[2].contains("door"));
    assert!(lines[3].contains("wall"));
}

#[test]
fn block_skips_history_entry_matching_the_newest_lemma() {
    let renderer = ProximityRenderer::new(RankScale);
    let newest = guess("door", Some(1));
    let closest = vec![guess("door", Some(1)), guess("wall", Some(8))];
    let block = renderer.block(&newest, &closest);
    assert_eq!(block.matches("door").count(), 1);
}

#[test]
fn block_with_no_history_is_the_single_row() {
    let renderer = ProximityRenderer::new(RankScale);
    let newest = guess("door", Some(1));
    let block = renderer.block(&newest, &[]);
    assert_eq!(block.lines().count(), 1);
}
