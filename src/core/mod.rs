//! 한글 음절 분해 핵심 모듈

mod decomposer;
pub mod jamo;
pub mod unicode;

pub use decomposer::{
    classify, decompose, decompose_text, decompose_text_checked, is_hangul, is_jamo, is_latin1,
    CharClass, TextDecomposition,
};
pub use jamo::{jamo_kind, Decomposition, JamoKind, CHO, JONG, JOONG};
