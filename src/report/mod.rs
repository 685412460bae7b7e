//! 분해 API를 사용하는 리포트
//!
//! - [`efficiency`]: 약어/원어 쌍의 타이핑 효율
//! - [`permute`]: 단어의 초성/중성/종성 순열 출력

pub mod efficiency;
pub mod permute;

pub use efficiency::{measure, parse_line, Efficiency};
pub use permute::{permutations, JamoColumns, DEFAULT_PERMUTE_WORD, MAX_PERMUTE_LEN};
