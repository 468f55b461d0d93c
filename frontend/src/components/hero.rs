use crate::components::cta_button::CtaButton;
use crate::config::CycleTiming;
use crate::content::HERO_PHRASES;
use crate::hooks::use_typed_phrases;
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let query = use_typed_phrases(HERO_PHRASES, CycleTiming::default());

    html! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="hero-badge glass-card">
                    <i class="fas fa-wand-magic-sparkles"></i>
                    <span>{"Deep Discovery AI"}</span>
                </div>
                <h1 class="hero-title">
                    {"파묘,"}<br/>
                    <span class="gradient-text">{"찾던 것이 나왔다"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"묻어두기만 했던 수많은 기록들."}<br class="desktop-only"/>
                    {"이제 AI가 맥락을 이해하고 당신의 생각을 다시 깨워냅니다."}
                </p>
                <div class="hero-cta-group">
                    <CtaButton class="hero-cta cta-glow">
                        {"지금 파묘 시작하기"}<i class="fas fa-chevron-right"></i>
                    </CtaButton>
                    <CtaButton class="hero-cta-secondary glass-card">{"체험해보기"}</CtaButton>
                </div>

                <div class="search-preview">
                    <div class="search-preview-card glass-card">
                        <div class="search-bar">
                            <i class="fas fa-magnifying-glass"></i>
                            <span class="search-query">
                                {query}<span class="caret">{"|"}</span>
                            </span>
                        </div>
                        // Static mockup, not derived from the query above
                        <div class="search-result">
                            <div class="search-result-label">
                                <div class="ping-dot"></div>
                                <p>{"AI 파묘 결과"}</p>
                            </div>
                            <p>
                                {"지난 5월 '전략 기획' 폴더에 저장하신 메모에 따르면, "}<br/>
                                {"찾으시는 내용은 "}<b>{"\"사용자 경험의 본질적 가치\""}</b>{" 세션에 기록되어 있습니다."}
                            </p>
                        </div>
                    </div>
                    <div class="float-orb orb-top"></div>
                    <div class="float-orb orb-bottom"></div>
                </div>
            </div>
        </section>
    }
}
