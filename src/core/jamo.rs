//! 초성/중성/종성 자모 테이블
//!
//! 테이블 순서가 곧 음절 산술에 쓰이는 인덱스이므로 순서를 바꾸면 안 된다.
//! 모든 문자는 호환용 자모 영역(U+3131~U+3163)의 문자이다.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// 초성 (19개)
// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
pub const CHO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 (21개)
// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
pub const JOONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 (28개, 0 = 종성 없음)
// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
pub const JONG: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'),
    Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'),
    Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JamoKind {
    /// 초성
    Leading,
    /// 중성
    Vowel,
    /// 종성
    Trailing,
}

lazy_static! {
    /// 자모 문자 -> 유형
    /// 초성과 종성에 모두 있는 자음(ㄱ, ㄴ 등)은 초성으로 분류된다.
    static ref JAMO_KINDS: HashMap<char, JamoKind> = {
        let mut map = HashMap::with_capacity(CHO.len() + JOONG.len() + JONG.len());
        for c in JONG.iter().flatten() {
            map.insert(*c, JamoKind::Trailing);
        }
        for c in JOONG {
            map.insert(c, JamoKind::Vowel);
        }
        for c in CHO {
            map.insert(c, JamoKind::Leading);
        }
        map
    };
}

/// 자모 문자의 유형 (자모가 아니면 None)
pub fn jamo_kind(c: char) -> Option<JamoKind> {
    JAMO_KINDS.get(&c).copied()
}

/// 한 글자를 분해한 결과 (초성, 중성, 종성)
/// 비어 있는 자리는 None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decomposition {
    pub cho: Option<char>,
    pub joong: Option<char>,
    pub jong: Option<char>,
}

impl Decomposition {
    /// 낱자모 하나를 해당 자리에 둔 분해 결과
    pub fn single(kind: JamoKind, c: char) -> Self {
        match kind {
            JamoKind::Leading => Self {
                cho: Some(c),
                ..Self::default()
            },
            JamoKind::Vowel => Self {
                joong: Some(c),
                ..Self::default()
            },
            JamoKind::Trailing => Self {
                jong: Some(c),
                ..Self::default()
            },
        }
    }

    /// 초성/중성/종성 순서로 비어 있지 않은 자모를 순회
    pub fn components(&self) -> impl Iterator<Item = char> {
        [self.cho, self.joong, self.jong].into_iter().flatten()
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.components() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
