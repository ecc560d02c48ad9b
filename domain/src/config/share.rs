//! Default share text

/// Text placed before `<CODE> (<description>)` in share output
pub const DEFAULT_SHARE_PREFIX: &str = "내 친구가 생각하는 나의 MBTI는";

/// Text placed after `<CODE> (<description>)` in share output
pub const DEFAULT_SHARE_SUFFIX: &str = "입니다!";
