use super::*;

// -----------------------------------------------------------------------
// to_half_width
// -----------------------------------------------------------------------

#[test]
fn converts_full_width_digits_and_letters() {
    assert_eq!(to_half_width("ＭＡＴＨ１０１ａｂｃ"), "MATH101abc");
}

#[test]
fn leaves_kana_kanji_and_ascii_untouched() {
    assert_eq!(to_half_width("線形代数学Ａ (2)"), "線形代数学A (2)");
}

#[test]
fn leaves_full_width_punctuation_untouched() {
    // Only letters and digits are mapped; brackets stay full-width.
    assert_eq!(to_half_width("（Ｂ）"), "（B）");
}

#[test]
fn half_width_is_idempotent() {
    let inputs = ["ＭＡＴＨ１０１", "Calculus", "線形代数学Ｂ", "", "０９ＡＺａｚ"];
    for input in inputs {
        let once = to_half_width(input);
        assert_eq!(to_half_width(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn boundaries_of_each_range_convert() {
    assert_eq!(to_half_width("０９ＡＺａｚ"), "09AZaz");
}

// -----------------------------------------------------------------------
// split_lines
// -----------------------------------------------------------------------

#[test]
fn split_lines_trims_and_drops_blank_lines() {
    assert_eq!(
        split_lines("山田 太郎\n\n   鈴木 花子  \n"),
        vec!["山田 太郎".to_owned(), "鈴木 花子".to_owned()]
    );
}

#[test]
fn split_lines_of_empty_cell_is_empty() {
    assert!(split_lines("").is_empty());
    assert!(split_lines("  \n ").is_empty());
}

// -----------------------------------------------------------------------
// normalize_teacher / normalize_category
// -----------------------------------------------------------------------

#[test]
fn teacher_name_loses_ideographic_space() {
    assert_eq!(normalize_teacher("山田\u{3000}太郎"), "山田太郎");
}

#[test]
fn teacher_name_is_half_widthed() {
    assert_eq!(normalize_teacher("Ｊｏｈｎ\u{3000}Ｓｍｉｔｈ"), "JohnSmith");
}

#[test]
fn category_is_half_widthed_and_compacted() {
    assert_eq!(normalize_category(" 専門 Ａ\n群 "), "専門A群");
}

#[test]
fn category_keeps_ideographic_space() {
    assert_eq!(normalize_category("専門\u{3000}Ａ群"), "専門\u{3000}A群");
}
