pub mod config;
pub mod core;
pub mod error;
pub mod report;

pub use self::core::{
    classify, decompose, decompose_text, decompose_text_checked, is_hangul, is_jamo, is_latin1,
    CharClass, Decomposition, JamoKind, TextDecomposition,
};
pub use error::{ConfigError, DecomposeError, ReportError};
