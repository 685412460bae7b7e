//! 초성/중성/종성 순열 출력
//!
//! 단어를 글자별로 분해해 초성, 중성, 종성 열을 만들고,
//! 세 열을 각각 독립적으로 섞은 모든 조합을 한 줄씩 만든다.
//! 줄 수는 (n!)^3 이므로 단어 길이를 제한한다.

use crate::core::{decompose, is_hangul};
use crate::error::ReportError;

/// 기본 순열 대상 단어
pub const DEFAULT_PERMUTE_WORD: &str = "글롬자이";

/// 순열 대상 단어 최대 길이 (5자 = 1,728,000줄)
pub const MAX_PERMUTE_LEN: usize = 5;

/// 모든 순열 (인덱스 사전순)
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}

/// 단어의 초성/중성/종성 열
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JamoColumns {
    pub chos: Vec<Option<char>>,
    pub joongs: Vec<Option<char>>,
    pub jongs: Vec<Option<char>>,
}

impl JamoColumns {
    /// 단어를 분해해 열 생성
    pub fn from_word(word: &str) -> Result<Self, ReportError> {
        let len = word.chars().count();
        if len == 0 {
            return Err(ReportError::EmptyWord);
        }
        if len > MAX_PERMUTE_LEN {
            return Err(ReportError::WordTooLong {
                len,
                max: MAX_PERMUTE_LEN,
            });
        }
        if !is_hangul(word) {
            return Err(ReportError::NotHangul(word.to_string()));
        }

        let mut columns = Self {
            chos: Vec::with_capacity(len),
            joongs: Vec::with_capacity(len),
            jongs: Vec::with_capacity(len),
        };
        for c in word.chars() {
            let parts = decompose(c)?.unwrap_or_default();
            columns.chos.push(parts.cho);
            columns.joongs.push(parts.joong);
            columns.jongs.push(parts.jong);
        }
        Ok(columns)
    }

    /// 모든 조합을 한 줄씩 생성 (초성 순열이 가장 바깥, 종성 순열이 가장 안쪽)
    pub fn lines(&self) -> impl Iterator<Item = String> {
        let chos = permutations(&self.chos);
        let joongs = permutations(&self.joongs);
        let jongs = permutations(&self.jongs);

        chos.into_iter().flat_map(move |cho| {
            let jongs = jongs.clone();
            joongs.clone().into_iter().flat_map(move |joong| {
                let cho = cho.clone();
                jongs
                    .clone()
                    .into_iter()
                    .map(move |jong| render_line(&cho, &joong, &jong))
            })
        })
    }
}

/// 위치별로 초성+중성+종성을 이어 붙이고 공백으로 구분
fn render_line(chos: &[Option<char>], joongs: &[Option<char>], jongs: &[Option<char>]) -> String {
    let mut line = String::with_capacity(chos.len() * 10);
    for (i, ((cho, joong), jong)) in chos.iter().zip(joongs).zip(jongs).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.extend([cho, joong, jong].into_iter().flatten());
    }
    line
}
