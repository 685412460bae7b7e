//! 에러 타입 정의

use std::io;

/// 음절 분해 실패
///
/// 유효한 음절 범위 안에서는 발생하지 않으며,
/// 범위를 벗어난 코드포인트가 산술 분해로 흘러들어온 경우에만 나타난다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecomposeError {
    #[error(
        "자모 인덱스 범위 초과: U+{code_point:04X} (초성 {cho}, 중성 {joong}, 종성 {jong})"
    )]
    IndexOutOfRange {
        code_point: u32,
        cho: u32,
        joong: u32,
        jong: u32,
    },
}

/// 설정 파일 로드/저장 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] io::Error),

    #[error("설정 JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 리포트 입력 에러
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("탭으로 구분된 줄이 아닙니다: {0:?}")]
    MissingTab(String),

    #[error("탭이 두 개 이상인 줄입니다: {0:?}")]
    ExtraTab(String),

    #[error("약어가 비어 있습니다: {0:?}")]
    EmptyAbbreviation(String),

    #[error("순열 대상 단어가 비어 있습니다")]
    EmptyWord,

    #[error("한글이 아닌 문자가 포함되어 있습니다: {0:?}")]
    NotHangul(String),

    #[error("단어가 너무 깁니다: {len}자 (최대 {max}자)")]
    WordTooLong { len: usize, max: usize },

    #[error(transparent)]
    Decompose(#[from] DecomposeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = DecomposeError::IndexOutOfRange {
            code_point: 0xD7A4,
            cho: 19,
            joong: 0,
            jong: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("U+D7A4"));
        assert!(msg.contains("초성 19"));
    }

    #[test]
    fn test_report_error_from_decompose() {
        let err: ReportError = DecomposeError::IndexOutOfRange {
            code_point: 0xAC00,
            cho: 0,
            joong: 21,
            jong: 0,
        }
        .into();
        assert!(matches!(err, ReportError::Decompose(_)));
    }
}
