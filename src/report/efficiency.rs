//! 약어 타이핑 효율 계산
//!
//! 입력 한 줄은 `약어<TAB>원어` 형식이다.
//! - 음절 효율: 원어(공백 제외) 글자 수 / 약어 글자 수
//! - 타이핑 효율: 원어 자모 수 / 약어 자모 수

use std::fmt;

use crate::core::decompose_text;
use crate::error::ReportError;

/// 약어 한 쌍의 효율
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiency {
    pub syllable: f64,
    pub typing: f64,
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\t{:.2}", self.syllable, self.typing)
    }
}

/// 기본 분해 설정(Latin-1 필터, 구분자 없음)으로 센 자모 수
fn jamo_count(text: &str) -> usize {
    decompose_text(text, true, "").chars().count()
}

/// 약어와 원어로 효율 계산
pub fn measure(abbrev: &str, origin: &str) -> Result<Efficiency, ReportError> {
    let abbrev_jamo = jamo_count(abbrev);
    if abbrev_jamo == 0 {
        return Err(ReportError::EmptyAbbreviation(abbrev.to_string()));
    }
    let typing = jamo_count(origin) as f64 / abbrev_jamo as f64;

    let origin_len = origin.chars().filter(|&c| c != ' ').count();
    let syllable = origin_len as f64 / abbrev.chars().count() as f64;

    Ok(Efficiency { syllable, typing })
}

/// `약어<TAB>원어` 한 줄을 읽어 효율 계산
/// 줄 끝 공백은 무시하고, 탭은 정확히 하나여야 한다
pub fn parse_line(line: &str) -> Result<Efficiency, ReportError> {
    let line = line.trim_end();
    let (abbrev, origin) = line
        .split_once('\t')
        .ok_or_else(|| ReportError::MissingTab(line.to_string()))?;
    if origin.contains('\t') {
        return Err(ReportError::ExtraTab(line.to_string()));
    }
    measure(abbrev, origin)
}
