//! 한글 판별 및 자모 분해

use crate::core::jamo::{jamo_kind, Decomposition, JamoKind, CHO, JONG, JOONG};
use crate::core::unicode::{decompose_index, is_latin1_char, is_syllable, HANGUL_SYLLABLE_FIRST};
use crate::error::DecomposeError;

/// 문자 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// 낱자모 (초성/중성/종성 테이블에 있는 문자)
    Jamo(JamoKind),
    /// 완성형 음절 (가-힣)
    Syllable,
    /// 한글이 아닌 Latin-1 문자
    Latin1,
    /// 그 외
    Other,
}

impl CharClass {
    pub fn is_hangul(self) -> bool {
        matches!(self, CharClass::Jamo(_) | CharClass::Syllable)
    }
}

/// 문자 하나를 분류
pub fn classify(c: char) -> CharClass {
    if let Some(kind) = jamo_kind(c) {
        CharClass::Jamo(kind)
    } else if is_syllable(c) {
        CharClass::Syllable
    } else if is_latin1_char(c) {
        CharClass::Latin1
    } else {
        CharClass::Other
    }
}

/// 모든 문자가 낱자모 또는 완성형 음절이면 true (빈 문자열도 true)
pub fn is_hangul(text: &str) -> bool {
    text.chars().all(|c| classify(c).is_hangul())
}

/// 초성/중성/종성 테이블에 있는 낱자모인지 확인
pub fn is_jamo(c: char) -> bool {
    jamo_kind(c).is_some()
}

/// 모든 문자가 Latin-1 범위이면 true (빈 문자열도 true)
pub fn is_latin1(text: &str) -> bool {
    text.chars().all(is_latin1_char)
}

/// 한글 한 글자를 초성/중성/종성으로 분해
///
/// - 한글이 아니면 `Ok(None)`
/// - 낱자모면 해당 자리에만 값이 있는 결과
/// - 완성형 음절이면 세 자모 (종성 없으면 `jong`이 None)
pub fn decompose(c: char) -> Result<Option<Decomposition>, DecomposeError> {
    match classify(c) {
        CharClass::Jamo(kind) => Ok(Some(Decomposition::single(kind, c))),
        // classify가 음절 범위를 보장하므로 오프셋은 음수가 될 수 없다
        CharClass::Syllable => {
            let code_point = c as u32;
            lookup(code_point, decompose_index(code_point - HANGUL_SYLLABLE_FIRST)).map(Some)
        }
        CharClass::Latin1 | CharClass::Other => Ok(None),
    }
}

/// 인덱스 세 개를 자모 테이블에서 조회
fn lookup(code_point: u32, indices: (u32, u32, u32)) -> Result<Decomposition, DecomposeError> {
    let (cho, joong, jong) = indices;
    let out_of_range = || DecomposeError::IndexOutOfRange {
        code_point,
        cho,
        joong,
        jong,
    };

    let cho_char = CHO.get(cho as usize).copied().ok_or_else(out_of_range)?;
    let joong_char = JOONG.get(joong as usize).copied().ok_or_else(out_of_range)?;
    let jong_char = JONG.get(jong as usize).copied().ok_or_else(out_of_range)?;

    Ok(Decomposition {
        cho: Some(cho_char),
        joong: Some(joong_char),
        jong: jong_char,
    })
}

/// 텍스트 분해 결과와 글자별 분해 실패 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDecomposition {
    pub text: String,
    pub issues: Vec<DecomposeError>,
}

/// 텍스트 전체를 자모 단위로 분해
///
/// 한글(낱자모, 완성형)은 분해한 뒤 `compose_separator`를 붙인다.
/// 한글이 아닌 문자는 `latin_filter`가 켜져 있으면 Latin-1 범위만 남기고,
/// 꺼져 있으면 그대로 둔다.
/// 분해에 실패한 글자는 경고 로그를 남기고 건너뛴다.
pub fn decompose_text(text: &str, latin_filter: bool, compose_separator: &str) -> String {
    decompose_text_checked(text, latin_filter, compose_separator).text
}

/// `decompose_text`와 같지만 글자별 분해 실패를 함께 돌려준다
pub fn decompose_text_checked(
    text: &str,
    latin_filter: bool,
    compose_separator: &str,
) -> TextDecomposition {
    let mut result = TextDecomposition {
        text: String::with_capacity(text.len() * 3),
        issues: Vec::new(),
    };

    for c in text.chars() {
        match classify(c) {
            CharClass::Jamo(_) => {
                result.text.push(c);
                result.text.push_str(compose_separator);
            }
            CharClass::Syllable => match decompose(c) {
                Ok(Some(parts)) => {
                    result.text.extend(parts.components());
                    result.text.push_str(compose_separator);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("음절 분해 실패, 건너뜀: {}", e);
                    result.issues.push(e);
                }
            },
            CharClass::Latin1 => result.text.push(c),
            CharClass::Other => {
                if !latin_filter {
                    result.text.push(c);
                }
            }
        }
    }

    log::debug!(
        "텍스트 분해: {}자 -> {}자 (실패 {}건)",
        text.chars().count(),
        result.text.chars().count(),
        result.issues.len()
    );

    result
}
