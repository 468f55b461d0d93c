use crate::components::cards::{FeatureCard, ScenarioCard, ScreenshotCard};
use crate::components::coming_soon_modal::ComingSoonModal;
use crate::components::cta_button::CtaButton;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::config::{asset_url, SECTION_FEATURES, SECTION_SCENARIOS, SECTION_WHY};
use crate::content::{FEATURES, FOOTER_LINKS, PROBLEMS, SCENARIOS, SCREENSHOTS, STATS};
use crate::state::modal::{ModalHandle, ModalState};
use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_reducer(ModalState::default);

    // Start at the top on mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ModalHandle> context={modal}>
            <div class="landing-page">
                <head>
                    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
                </head>
                <style>{LANDING_CSS}</style>
                <ComingSoonModal />
                <Navbar />
                <Hero />

                <section class="problem-section">
                    <div class="problem-grid">
                        <div>
                            <h2>
                                {"기록은 쌓이는데,"}<br/>
                                <span class="muted">{"기억은 파묻히나요?"}</span>
                            </h2>
                            <div class="problem-list">
                                { for PROBLEMS.iter().enumerate().map(|(idx, problem)| html! {
                                    <div class="problem-item" key={idx}>
                                        <div class="problem-number">{idx + 1}</div>
                                        <div>
                                            <h4>{problem.title}</h4>
                                            <p>{problem.description}</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                        <div class="depth-card">
                            <div class="depth-icon"><i class="fas fa-bullseye"></i></div>
                            <p>
                                {"중요한 건 폴더 위치가 아닙니다."}<br/>
                                <span class="underline">{"메모에 담긴 '맥락'과 '본질'입니다."}</span>
                            </p>
                            <div class="depth-rule"></div>
                            <p class="depth-tagline">{"Discover the depth"}</p>
                        </div>
                    </div>
                </section>

                <section id={SECTION_FEATURES} class="features-section">
                    <div class="section-heading">
                        <h2>{"본질에 집중한 기능"}</h2>
                        <p>{"복잡한 기능은 덜어내고, 오직 당신의 기록을 위해 설계했습니다."}</p>
                    </div>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|f| html! {
                            <FeatureCard icon={f.icon} title={f.title} description={f.description} />
                        }) }
                    </div>
                </section>

                <section class="screenshots-section">
                    <div class="section-heading">
                        <h2>{"실제로 이렇게 작동합니다"}</h2>
                        <p>{"당신의 메모가 AI로 재탄생하는 과정을 직접 확인하세요"}</p>
                    </div>
                    <div class="screenshot-grid">
                        { for SCREENSHOTS.iter().map(|s| html! {
                            <ScreenshotCard
                                src={asset_url(s.file)}
                                alt={s.alt}
                                title={s.title}
                                description={s.description}
                            />
                        }) }
                    </div>
                    <p class="more-soon">{"✨ 더 많은 기능들이 곧 공개됩니다"}</p>
                </section>

                <section id={SECTION_SCENARIOS} class="scenarios-section">
                    <div class="section-heading">
                        <h2>{"당신의 일상이 파묘되는 순간"}</h2>
                        <p>{"파묘와 함께하는 사용자들의 생생한 기록입니다."}</p>
                    </div>
                    <div class="scenario-grid">
                        { for SCENARIOS.iter().map(|s| html! {
                            <ScenarioCard title={s.title} content={s.content} author={s.author} />
                        }) }
                    </div>
                </section>

                <section id={SECTION_WHY} class="why-section">
                    <h2>{"왜 파묘여야 하는가?"}</h2>
                    <div class="stat-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <p class="stat-label">{stat.label}</p>
                                <p class="stat-desc">{stat.lines[0]}<br/>{stat.lines[1]}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="final-cta-section">
                    <div class="final-cta glass-card">
                        <h2>
                            {"지금, 당신의 기억을 "}<br class="mobile-only"/>
                            <span class="accent">{"파묘"}</span>{"해보세요."}
                        </h2>
                        <p>
                            {"매일 쏟아지는 정보들 속에서 길을 잃지 않도록. "}<br/>
                            {"파묘가 당신의 가장 든든한 기록 비서가 되어드릴게요."}
                        </p>
                        <CtaButton class="final-cta-button cta-glow">
                            {"무료로 시작하기"}<i class="fas fa-arrow-right"></i>
                        </CtaButton>
                        <div class="privacy-note">
                            <i class="fas fa-lock"></i>
                            <span>{"개인 데이터 보호 기능 탑재"}</span>
                        </div>
                    </div>
                </section>

                <footer class="site-footer">
                    <div class="brand">
                        <div class="brand-mark small">{"P"}</div>
                        <span class="brand-name">{"pamyo"}</span>
                    </div>
                    <div class="footer-links">
                        { for FOOTER_LINKS.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                    </div>
                    <p class="copyright">{"© 2024 PAMYO AI. ALL RIGHTS RESERVED."}</p>
                </footer>
            </div>
        </ContextProvider<ModalHandle>>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --burgundy: #800020;
        --burgundy-light: #a3324f;
    }
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: 'Pretendard', -apple-system, sans-serif;
    }
    ::selection {
        background: var(--burgundy);
        color: #fff;
    }
    .glass-card {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid rgba(255, 255, 255, 0.08);
        backdrop-filter: blur(12px);
    }
    .gradient-text {
        background: linear-gradient(45deg, #fff, var(--burgundy-light));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .cta-glow {
        box-shadow: 0 0 30px rgba(128, 0, 32, 0.35);
    }
    button {
        cursor: pointer;
        font: inherit;
        color: inherit;
        border: none;
        background: none;
    }

    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        transition: all 0.5s;
    }
    .navbar.top {
        background: transparent;
        padding: 2rem 0;
    }
    .navbar.scrolled {
        background: rgba(0, 0, 0, 0.9);
        backdrop-filter: blur(24px);
        padding: 1rem 0;
        border-bottom: 1px solid rgba(128, 0, 32, 0.1);
    }
    .navbar-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .brand-mark {
        width: 2.25rem;
        height: 2.25rem;
        background: var(--burgundy);
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
    }
    .brand-mark.small {
        width: 2rem;
        height: 2rem;
    }
    .brand-name {
        font-size: 1.5rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        text-transform: uppercase;
    }
    .nav-desktop {
        display: flex;
        align-items: center;
        gap: 2.5rem;
        font-weight: 600;
        font-size: 0.875rem;
    }
    .nav-link {
        color: #9ca3af;
    }
    .nav-link:hover {
        color: var(--burgundy-light);
    }
    .nav-cta {
        background: var(--burgundy);
        padding: 0.625rem 1.5rem;
        border-radius: 9999px;
    }
    .nav-toggle {
        display: none;
        font-size: 1.5rem;
    }
    .nav-mobile {
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: #000;
        padding: 2rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .nav-mobile-link {
        text-align: left;
        font-size: 1.125rem;
        color: #d1d5db;
    }
    .nav-mobile-cta {
        background: var(--burgundy);
        padding: 1rem 1.25rem;
        border-radius: 1rem;
        font-weight: 700;
    }

    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(4px);
        padding: 0 1rem;
    }
    .modal-dialog {
        max-width: 28rem;
        width: 100%;
        padding: 2.5rem;
        border-radius: 1.5rem;
        background: rgba(0, 0, 0, 0.9);
        text-align: center;
    }
    .modal-icon {
        font-size: 3.75rem;
    }
    .modal-dialog p {
        color: #9ca3af;
    }
    .modal-confirm {
        width: 100%;
        padding: 1rem 2rem;
        background: var(--burgundy);
        border-radius: 1rem;
        font-weight: 700;
    }

    .hero {
        position: relative;
        padding: 14rem 2rem 10rem;
        overflow: hidden;
        text-align: center;
    }
    .hero-title {
        font-size: 6rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        line-height: 1.05;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        color: #9ca3af;
        max-width: 48rem;
        margin: 0 auto;
    }
    .hero-cta-group {
        display: flex;
        justify-content: center;
        gap: 1.25rem;
        padding-top: 1.5rem;
    }
    .hero-cta, .final-cta-button {
        background: var(--burgundy);
        padding: 1.25rem 2.5rem;
        border-radius: 1rem;
        font-weight: 700;
        font-size: 1.125rem;
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .hero-cta-secondary {
        padding: 1.25rem 2.5rem;
        border-radius: 1rem;
        font-weight: 700;
        font-size: 1.125rem;
    }
    .search-preview {
        position: relative;
        max-width: 48rem;
        margin: 8rem auto 0;
    }
    .search-preview-card {
        border-radius: 2.5rem;
        padding: 2.5rem;
        background: rgba(0, 0, 0, 0.4);
    }
    .search-bar {
        display: flex;
        align-items: center;
        gap: 1rem;
        background: rgba(0, 0, 0, 0.6);
        padding: 1.25rem;
        border-radius: 1rem;
        border: 1px solid rgba(128, 0, 32, 0.3);
        text-align: left;
        font-weight: 600;
        font-size: 1.125rem;
    }
    .caret {
        color: var(--burgundy);
        animation: pulse 1s infinite;
    }
    .search-result {
        margin-top: 2rem;
        background: rgba(128, 0, 32, 0.1);
        padding: 1.5rem;
        border-radius: 1rem;
        text-align: left;
    }
    .search-result b {
        color: var(--burgundy-light);
    }
    .search-result-label {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
        color: var(--burgundy-light);
        text-transform: uppercase;
    }
    .ping-dot {
        width: 0.5rem;
        height: 0.5rem;
        background: var(--burgundy);
        border-radius: 9999px;
    }
    .float-orb {
        position: absolute;
        border-radius: 9999px;
        background: rgba(128, 0, 32, 0.2);
        filter: blur(64px);
        animation: floating 5s ease-in-out infinite;
    }
    .orb-top {
        top: -2.5rem;
        right: -2.5rem;
        width: 10rem;
        height: 10rem;
    }
    .orb-bottom {
        bottom: -4rem;
        left: -4rem;
        width: 16rem;
        height: 16rem;
        animation-delay: 2.5s;
    }

    .problem-section, .features-section, .screenshots-section,
    .scenarios-section, .why-section, .final-cta-section {
        padding: 8rem 2rem;
    }
    .problem-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 5rem;
        align-items: center;
    }
    .muted {
        color: #4b5563;
    }
    .problem-item {
        display: flex;
        gap: 1.5rem;
        margin-top: 2.5rem;
    }
    .problem-number {
        flex-shrink: 0;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.75rem;
        background: rgba(128, 0, 32, 0.1);
        display: flex;
        align-items: center;
        justify-content: center;
        color: var(--burgundy);
        font-weight: 700;
    }
    .depth-card {
        aspect-ratio: 4 / 5;
        background: linear-gradient(135deg, #151515, #050505);
        border-radius: 3rem;
        padding: 3rem;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        gap: 2.5rem;
    }
    .depth-tagline {
        color: var(--burgundy-light);
        font-weight: 900;
        letter-spacing: 0.1em;
        text-transform: uppercase;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 5rem;
    }
    .section-heading p {
        color: #6b7280;
        font-size: 1.125rem;
    }
    .feature-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
    }
    .feature-card {
        padding: 2.5rem;
        border-radius: 1.5rem;
        transition: border-color 0.5s;
    }
    .feature-card:hover {
        border-color: rgba(128, 0, 32, 0.6);
    }
    .feature-icon {
        width: 3.5rem;
        height: 3.5rem;
        background: rgba(128, 0, 32, 0.1);
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: var(--burgundy);
        font-size: 1.5rem;
        margin-bottom: 2rem;
    }
    .feature-card p, .screenshot-body p {
        color: #9ca3af;
        line-height: 1.6;
    }
    .screenshot-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .screenshot-card {
        position: relative;
    }
    .screenshot-body {
        position: relative;
        border-radius: 1.5rem;
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.6);
    }
    .screenshot-frame {
        aspect-ratio: 9 / 19;
        border-radius: 1rem;
        overflow: hidden;
        margin-bottom: 1.5rem;
        background: linear-gradient(180deg, #111827, #000);
    }
    .screenshot-frame img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .more-soon {
        margin-top: 4rem;
        text-align: center;
        color: #6b7280;
        font-size: 0.875rem;
    }
    .scenario-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2.5rem;
    }
    .scenario-card {
        padding: 2rem;
        border-radius: 1rem;
        border-left: 4px solid rgba(128, 0, 32, 0.4);
    }
    .scenario-card h4 {
        color: var(--burgundy-light);
    }
    .scenario-quote {
        color: #e5e7eb;
        font-style: italic;
    }
    .scenario-author {
        font-size: 0.75rem;
        color: #6b7280;
    }
    .why-section {
        text-align: center;
    }
    .stat-grid {
        max-width: 64rem;
        margin: 5rem auto 0;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 4rem;
    }
    .stat-value {
        font-size: 4.5rem;
        font-weight: 900;
        color: var(--burgundy);
    }
    .stat-desc {
        color: #6b7280;
    }
    .final-cta {
        max-width: 72rem;
        margin: 0 auto;
        border-radius: 4rem;
        padding: 6rem;
        text-align: center;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
    }
    .accent {
        color: var(--burgundy);
    }
    .privacy-note {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #6b7280;
        font-size: 0.875rem;
    }
    .site-footer {
        padding: 4rem 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 2.5rem;
    }
    .footer-links {
        display: flex;
        gap: 2.5rem;
    }
    .footer-links a {
        color: #6b7280;
        text-decoration: none;
        font-weight: 600;
        font-size: 0.875rem;
    }
    .copyright {
        color: #4b5563;
        font-size: 0.75rem;
    }
    .mobile-only {
        display: none;
    }

    @keyframes pulse {
        50% { opacity: 0; }
    }
    @keyframes floating {
        50% { transform: translateY(-20px); }
    }

    @media (max-width: 768px) {
        .nav-desktop, .desktop-only {
            display: none;
        }
        .mobile-only {
            display: inline;
        }
        .nav-toggle {
            display: block;
        }
        .hero {
            padding: 10rem 2rem 6rem;
        }
        .hero-title {
            font-size: 3rem;
        }
        .hero-subtitle {
            font-size: 1.125rem;
        }
        .hero-cta-group {
            flex-direction: column;
        }
        .problem-grid, .feature-grid, .screenshot-grid,
        .scenario-grid, .stat-grid {
            grid-template-columns: 1fr;
        }
        .final-cta {
            padding: 4rem 2rem;
        }
        .site-footer {
            flex-direction: column;
        }
    }
"#;
