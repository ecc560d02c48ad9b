//! Built-in question set and description table
//!
//! Ten questions about a friend, with the axis pattern
//! `[E/I, J/P, T/F, J/P, S/N, S/N, T/F, E/I, S/N, J/P]`.

use super::axis::Axis;
use super::bank::QuestionBank;
use super::description::ResultDescriptions;
use super::question::Question;
use super::type_code::TypeCode;

const QUESTIONS: [(&str, [&str; 2], Axis); 10] = [
    (
        "친구는 새로운 사람들과 쉽게 친해지나요?",
        ["네, 매우 활발하게 대화를 나눕니다", "아니요, 조금 소극적인 편입니다"],
        Axis::EI,
    ),
    (
        "친구는 계획을 세우는 것을 좋아하나요?",
        ["네, 모든 것을 계획적으로 합니다", "아니요, 즉흥적인 것을 좋아합니다"],
        Axis::JP,
    ),
    (
        "친구는 논리적인 판단을 하나요?",
        ["네, 이성적으로 판단합니다", "아니요, 감정적으로 판단합니다"],
        Axis::TF,
    ),
    (
        "친구는 마감일을 잘 지키나요?",
        ["네, 항상 시간을 잘 지킵니다", "아니요, 유연하게 대처합니다"],
        Axis::JP,
    ),
    (
        "친구는 새로운 경험을 좋아하나요?",
        ["네, 새로운 것을 시도하는 것을 좋아합니다", "아니요, 익숙한 것을 선호합니다"],
        Axis::SN,
    ),
    (
        "친구는 상상력이 풍부한 편인가요?",
        ["네, 창의적인 생각을 많이 합니다", "아니요, 현실적인 생각을 합니다"],
        Axis::SN,
    ),
    (
        "친구는 갈등 상황에서 어떻게 대처하나요?",
        ["직접적으로 해결하려고 합니다", "조화롭게 해결하려고 합니다"],
        Axis::TF,
    ),
    (
        "친구는 휴식 시간을 어떻게 보내나요?",
        ["혼자 있는 시간이 필요합니다", "사람들과 함께 있는 것을 좋아합니다"],
        Axis::EI,
    ),
    (
        "친구는 미래에 대해 어떻게 생각하나요?",
        ["미래의 가능성을 많이 생각합니다", "현재의 상황을 중시합니다"],
        Axis::SN,
    ),
    (
        "친구는 결정을 내릴 때 어떻게 하나요?",
        ["신중하게 생각한 후 결정합니다", "직관적으로 빠르게 결정합니다"],
        Axis::JP,
    ),
];

const DESCRIPTIONS: [(&str, &str); 16] = [
    ("ISTJ", "신뢰할 수 있는 현실주의자"),
    ("ISFJ", "용감한 수호자"),
    ("INFJ", "선의의 옹호자"),
    ("INTJ", "용의주도한 전략가"),
    ("ISTP", "만능 재주꾼"),
    ("ISFP", "호기심 많은 예술가"),
    ("INFP", "열정적인 중재자"),
    ("INTP", "논리적인 사색가"),
    ("ESTP", "모험을 즐기는 사업가"),
    ("ESFP", "자유로운 영혼의 연예인"),
    ("ENFP", "재기발랄한 활동가"),
    ("ENTP", "논쟁을 즐기는 변론가"),
    ("ESTJ", "엄격한 관리자"),
    ("ESFJ", "사교적인 외교관"),
    ("ENFJ", "정의로운 사회운동가"),
    ("ENTJ", "대담한 통솔자"),
];

impl QuestionBank {
    /// The built-in ten-question set
    pub fn reference() -> QuestionBank {
        let questions = QUESTIONS
            .iter()
            .map(|(prompt, options, axis)| {
                Question::new(*prompt, *options, *axis).expect("built-in question is valid")
            })
            .collect();
        QuestionBank::new(questions).expect("built-in bank is non-empty")
    }
}

impl ResultDescriptions {
    /// The built-in description table covering all 16 codes
    pub fn reference() -> ResultDescriptions {
        ResultDescriptions::from_entries(DESCRIPTIONS.iter().map(|(code, text)| {
            let code: TypeCode = code.parse().expect("built-in type code is valid");
            (code, text.to_string())
        }))
    }
}
