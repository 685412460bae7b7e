//! 통합 테스트 - 공개 분해 API

use jaso::core::unicode::{HANGUL_SYLLABLE_FIRST, HANGUL_SYLLABLE_LAST};
use jaso::core::{CHO, JONG, JOONG};
use jaso::report::{parse_line, JamoColumns};
use jaso::{
    decompose, decompose_text, decompose_text_checked, is_hangul, is_jamo, is_latin1,
    Decomposition,
};

fn parts(cho: Option<char>, joong: Option<char>, jong: Option<char>) -> Option<Decomposition> {
    Some(Decomposition { cho, joong, jong })
}

#[test]
fn test_round_trip_every_syllable() {
    for cp in HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST {
        let c = char::from_u32(cp).unwrap();
        let d = decompose(c).unwrap().unwrap();

        let cho = CHO.iter().position(|&x| Some(x) == d.cho).unwrap() as u32;
        let joong = JOONG.iter().position(|&x| Some(x) == d.joong).unwrap() as u32;
        let jong = JONG.iter().position(|&x| x == d.jong).unwrap() as u32;

        assert_eq!(((cho * 21) + joong) * 28 + jong + 0xAC00, cp);
    }
}

#[test]
fn test_table_symbols_are_hangul_jamo() {
    for c in CHO.iter().chain(JOONG.iter()).chain(JONG.iter().flatten()) {
        assert!(is_jamo(*c));
        assert!(is_hangul(&c.to_string()));
    }
}

#[test]
fn test_empty_text_is_hangul() {
    assert!(is_hangul(""));
    assert!(is_latin1(""));
}

#[test]
fn test_decompose_edge_cases() {
    assert_eq!(decompose('A'), Ok(None));
    assert_eq!(decompose('ㄱ'), Ok(parts(Some('ㄱ'), None, None)));
    assert_eq!(decompose('가'), Ok(parts(Some('ㄱ'), Some('ㅏ'), None)));
    assert_eq!(decompose('힣'), Ok(parts(Some('ㅎ'), Some('ㅣ'), Some('ㅎ'))));
}

#[test]
fn test_decompose_text_keeps_latin_in_place() {
    let expected = format!(
        "{}A{}",
        decompose('한').unwrap().unwrap(),
        decompose('글').unwrap().unwrap()
    );
    assert_eq!(decompose_text("한A글", true, ""), expected);
    assert_eq!(expected, "ㅎㅏㄴAㄱㅡㄹ");
}

#[test]
fn test_decompose_text_drops_emoji_when_filtering() {
    assert_eq!(decompose_text("한🎉글", true, ""), "ㅎㅏㄴㄱㅡㄹ");
    assert_eq!(decompose_text("한🎉글", false, ""), "ㅎㅏㄴ🎉ㄱㅡㄹ");
}

#[test]
fn test_decompose_text_mixed_jamo_and_syllables() {
    let result = decompose_text_checked("ㅋㅋ 웃겨", true, " ");
    assert_eq!(result.text, "ㅋ ㅋ  ㅇㅜㅅ ㄱㅕ ");
    assert!(result.issues.is_empty());
}

#[test]
fn test_efficiency_report_line() {
    assert_eq!(parse_line("한글\t한국 글자").unwrap().to_string(), "2.00\t2.00");
}

#[test]
fn test_permute_default_word_first_line() {
    let columns = JamoColumns::from_word("글롬자이").unwrap();
    assert_eq!(
        columns.lines().next().as_deref(),
        Some("ㄱㅡㄹ ㄹㅗㅁ ㅈㅏ ㅇㅣ")
    );
}
