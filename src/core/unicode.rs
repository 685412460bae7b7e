//! 유니코드 한글 음절 산술 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// Latin-1 영역 시작 (NUL)
pub const LATIN1_FIRST: u32 = 0x0000;
/// Latin-1 영역 끝 (ÿ)
pub const LATIN1_LAST: u32 = 0x00FF;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// Latin-1 범위(U+0000~U+00FF) 문자인지 확인
pub fn is_latin1_char(c: char) -> bool {
    (LATIN1_FIRST..=LATIN1_LAST).contains(&(c as u32))
}

/// 오프셋을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
///
/// 범위 검사는 하지 않는다. 음절 범위 밖의 오프셋은 초성 인덱스가 18을 넘는다.
pub fn decompose_index(offset: u32) -> (u32, u32, u32) {
    let mut code = offset;
    let jongseong = code % JONGSEONG_COUNT;
    code /= JONGSEONG_COUNT;
    let jungseong = code % JUNGSEONG_COUNT;
    code /= JUNGSEONG_COUNT;
    let choseong = code;
    (choseong, jungseong, jongseong)
}
