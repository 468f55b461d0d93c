//! Copy for the landing page.

/// Example queries typed into the hero search preview.
pub const HERO_PHRASES: &[&str] = &[
    "지난주 시험 범위가 뭐였지?",
    "어제 떠올랐던 기획 아이디어",
    "회의록에서 언급된 수치 찾아줘",
];

pub struct Problem {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROBLEMS: &[Problem] = &[
    Problem {
        title: "검색의 한계",
        description: "제목이 기억나지 않으면 영영 찾을 수 없는 죽은 메모들",
    },
    Problem {
        title: "정리의 피로",
        description: "분류하고 태그를 다느라 정작 기록할 에너지를 다 써버린 어제",
    },
    Problem {
        title: "파편화된 정보",
        description: "텍스트 조각들이 서로 연결되지 못하고 흩어져 있는 상태",
    },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-layer-group",
        title: "맥락 기반 분류",
        description: "폴더를 수동으로 만들 필요가 없습니다. AI가 내용의 깊이를 읽고 자동으로 의미를 연결합니다.",
    },
    Feature {
        icon: "fa-magnifying-glass",
        title: "의미 기반 검색",
        description: "'지난주 기획안'처럼 모호한 검색어도 찰떡같이 알아듣습니다. 키워드보다 맥락이 중요하니까요.",
    },
    Feature {
        icon: "fa-bullseye",
        title: "개인 맞춤 학습",
        description: "당신이 기록하는 방식과 관심사를 학습하여, 시간이 갈수록 당신의 사고방식에 더 가까워집니다.",
    },
    Feature {
        icon: "fa-lock",
        title: "철저한 보안",
        description: "모든 기록은 강력하게 암호화됩니다. 오직 당신만이 자신의 소중한 생각들을 파묘할 수 있습니다.",
    },
];

pub struct Screenshot {
    pub file: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        file: "ai-search.png",
        alt: "AI 자연어 검색",
        title: "🔍 자연어 AI 검색",
        description: "\"청소한거 공지 찾아줘\"처럼 자연스러운 말로 검색하면 AI가 맥락을 이해하고 정확한 메모를 찾아줍니다.",
    },
    Screenshot {
        file: "folders.png",
        alt: "스마트 폴더 & 태그",
        title: "📁 스마트 폴더 & 태그",
        description: "AI가 자동으로 메모를 주제별로 분류하고 관련 태그를 생성합니다. 수동 정리는 이제 그만.",
    },
    Screenshot {
        file: "memo-detail.png",
        alt: "메모 상세 보기",
        title: "📝 깔끔한 메모 관리",
        description: "폴더와 태그가 자동으로 연결되어 있어 관련된 메모들을 한눈에 탐색할 수 있습니다.",
    },
];

pub struct Scenario {
    pub title: &'static str,
    pub content: &'static str,
    pub author: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        title: "시험 기간, 흩어진 정보를 한눈에",
        content: "시험 전날 '강조하셨던 부분 요약해줘'라고 했더니 수업 시간의 메모, 친구에게 받은 사진 내용까지 다 합쳐서 알려주더라고요. 진짜 말도 안 돼요.",
        author: "대학생 이OO 님",
    },
    Scenario {
        title: "회의실에서의 즉석 비서",
        content: "갑자기 예전 프로젝트 데이터가 필요했는데, 파묘한테 물어보니까 1초 만에 파일 링크랑 작년 코멘트를 뽑아줬어요. 정리를 따로 안 했는데도 말이죠.",
        author: "기획자 김OO 님",
    },
    Scenario {
        title: "책 읽으며 남기는 짧은 영감",
        content: "아이디어가 떠오를 때마다 그냥 한 줄씩 적어요. 나중에 '영감 받은 문구들 보여줘' 하면 파묘가 알아서 무드별로 묶어줍니다. 정리가 즐거워졌어요.",
        author: "작가 박OO 님",
    },
    Scenario {
        title: "정리가 귀찮은 프로 기록러",
        content: "그냥 생각나는 대로 다 적어두기만 해요. 나중에 필요한 것만 쏙쏙 찾아주니까, 정리에 쓰던 시간이 아예 사라졌습니다. 너무 홀가분해요.",
        author: "마케터 정OO 님",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub lines: [&'static str; 2],
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "0%",
        label: "정리 스트레스 제로",
        lines: ["기록하는 즐거움만 남기고", "분류의 고통은 걷어냅니다."],
    },
    Stat {
        value: "1초",
        label: "지체 없는 파묘",
        lines: ["복잡한 필터링 대신", "대화하듯 바로 찾습니다."],
    },
    Stat {
        value: "∞",
        label: "무한한 확정",
        lines: ["잠들어 있던 생각이", "새로운 가치로 이어집니다."],
    },
];

pub const FOOTER_LINKS: &[&str] = &["이용약관", "개인정보처리방침", "도움말", "문의하기"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_has_phrases_to_cycle() {
        assert!(HERO_PHRASES.len() > 1);
        assert!(HERO_PHRASES.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn gallery_has_three_distinct_screenshots() {
        assert_eq!(SCREENSHOTS.len(), 3);
        let mut files: Vec<_> = SCREENSHOTS.iter().map(|s| s.file).collect();
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), 3);
    }
}
