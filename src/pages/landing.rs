use yew::prelude::*;

use crate::theme::THEME;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧭",
        title: "Guided Paths",
        body: "Structured tracks from arrays to graphs, each step building on the last.",
    },
    Feature {
        icon: "⚡",
        title: "Instant Feedback",
        body: "Run your solution against edge cases the moment you write it.",
    },
    Feature {
        icon: "🧠",
        title: "Pattern First",
        body: "Learn the sliding window, two pointers and friends before the problems.",
    },
    Feature {
        icon: "📈",
        title: "Progress Tracking",
        body: "See which topics are solid and which ones need another pass.",
    },
];

struct Template {
    tag: &'static str,
    title: &'static str,
    body: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        tag: "Arrays",
        title: "Two Pointers",
        body: "Shrink the search space from both ends in a single pass.",
    },
    Template {
        tag: "Graphs",
        title: "Breadth-First Search",
        body: "Level-order traversal for shortest paths on unweighted graphs.",
    },
    Template {
        tag: "DP",
        title: "Memoised Recursion",
        body: "Turn an exponential recursion into a table lookup.",
    },
];

/// `(data-target, label)`. Targets are literal attribute text.
const STATS: &[(&str, &str)] = &[
    ("1500", "Problems Solved"),
    ("2500000", "Lines Reviewed"),
    ("42", "Topics Covered"),
    ("98", "Completion Rate %"),
];

struct Achievement {
    image: &'static str,
    title: &'static str,
    body: &'static str,
}

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        image: "/static/images/streak.webp",
        title: "30 Day Streak",
        body: "Practice every day for a month.",
    },
    Achievement {
        image: "/static/images/graph-master.webp",
        title: "Graph Master",
        body: "Clear every traversal template.",
    },
    Achievement {
        image: "/static/images/speedrun.webp",
        title: "Speedrunner",
        body: "Solve a hard problem in under ten minutes.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let gradients = THEME.gradients.orbs;
    let orbs = [
        ("orb-blue", gradients.blue),
        ("orb-orange", gradients.orange),
        ("orb-green", gradients.green),
    ];

    html! {
        <>
        <div class="preloader">
            <div class="preloader-mark">{"◆"}</div>
        </div>

        <main class="landing-page">
            <section id="home" class="hero">
                { for orbs.iter().map(|(class, gradient)| html! {
                    <div class={classes!("gradient-orb", *class)} style={format!("background: {};", gradient)}></div>
                }) }

                <div class="hero-content">
                    <span class="hero-badge">{"Your digital DSA instructor"}</span>
                    <h1>{"Master data structures "}<span class="highlight">{"one pattern at a time"}</span></h1>
                    <p class="hero-subtitle">
                        {"Rover walks you through algorithms the way a good mentor would: the idea first, then the template, then the problems."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#templates">
                            <button class="btn-primary btn-large">{"Start Learning"}</button>
                        </a>
                        <a href="#features">
                            <button class="btn-secondary">{"See Features"}</button>
                        </a>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="code-window">
                        <div class="window-header">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                        </div>
                        <pre class="window-content"><code>{"fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {\n    let (mut lo, mut hi) = (0, nums.len().checked_sub(1)?);\n    while lo < hi {\n        match (nums[lo] + nums[hi]).cmp(&target) {\n            Ordering::Equal => return Some((lo, hi)),\n            Ordering::Less => lo += 1,\n            Ordering::Greater => hi -= 1,\n        }\n    }\n    None\n}"}</code></pre>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <div class="section-header">
                    <h2>{"Why Rover"}</h2>
                    <p>{"Everything you need to go from brute force to optimal."}</p>
                </div>
                <div class="card-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="templates" class="templates">
                <div class="section-header">
                    <h2>{"Templates"}</h2>
                    <p>{"Reusable shapes that solve whole families of problems."}</p>
                </div>
                <div class="card-grid">
                    { for TEMPLATES.iter().map(|template| html! {
                        <div class="template-card">
                            <span class="template-tag">{template.tag}</span>
                            <h3>{template.title}</h3>
                            <p>{template.body}</p>
                            <button class="btn-outline">{"Open Template"}</button>
                        </div>
                    }) }
                </div>
            </section>

            <section id="stats" class="stats">
                <div class="card-grid">
                    { for STATS.iter().map(|(target, label)| html! {
                        <div class="stat-card">
                            <div class="stat-value" data-target={*target}>{"0"}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="achievements" class="achievements">
                <div class="section-header">
                    <h2>{"Achievements"}</h2>
                    <p>{"Milestones worth chasing."}</p>
                </div>
                <div class="card-grid">
                    { for ACHIEVEMENTS.iter().map(|achievement| html! {
                        <div class="achievement-card">
                            <img data-src={achievement.image} alt={achievement.title} class="achievement-image" />
                            <h3>{achievement.title}</h3>
                            <p>{achievement.body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="get-started" class="cta">
                <h2>{"Ready to stop memorising solutions?"}</h2>
                <p>{"Pick a template and solve your first problem in five minutes."}</p>
                <button class="btn-primary btn-large">{"Get Started Free"}</button>
            </section>
        </main>

        <footer class="footer">
            <p>{"© 2025 Rover. Built for people who like to understand why."}</p>
            <div class="footer-links">
                <a href="#home">{"Back to top"}</a>
            </div>
        </footer>

        <style>
            {r#"
            body {
                margin: 0;
                background: var(--bg-primary);
                color: var(--text-primary);
                font-family: var(--font-family);
            }

            .landing-page {
                overflow-x: hidden;
            }

            section {
                padding: var(--spacing-2xl) var(--spacing-md);
                max-width: 1200px;
                margin: 0 auto;
            }

            .preloader {
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: var(--bg-primary);
                z-index: var(--z-notification);
                transition: opacity 0.3s ease;
            }

            .preloader-mark {
                color: var(--mclaren-orange);
                font-size: var(--font-size-5xl);
                animation: bounce 2s ease-in-out infinite;
            }

            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                gap: var(--spacing-xl);
                padding-top: calc(var(--navbar-height) + var(--spacing-xl));
            }

            .hero-content {
                flex: 1;
                z-index: 1;
            }

            .hero-content h1 {
                font-size: var(--font-size-5xl);
                font-weight: var(--font-weight-black);
                line-height: 1.1;
            }

            .highlight {
                color: var(--mclaren-orange);
            }

            .hero-badge {
                display: inline-block;
                padding: 0.3rem 0.8rem;
                border-radius: var(--radius-full);
                border: 1px solid rgba(255, 128, 0, 0.4);
                color: var(--mclaren-orange);
                font-size: var(--font-size-sm);
            }

            .hero-subtitle {
                color: var(--text-secondary);
                font-size: var(--font-size-lg);
            }

            .hero-cta-group {
                display: flex;
                gap: var(--spacing-sm);
                margin-top: var(--spacing-lg);
            }

            .hero-visual {
                flex: 1;
                z-index: 1;
            }

            .gradient-orb {
                position: absolute;
                width: 400px;
                height: 400px;
                border-radius: 50%;
                filter: blur(80px);
                opacity: 0.3;
                z-index: var(--z-background);
                animation: float 20s ease-in-out infinite;
            }

            .orb-blue { top: 10%; left: -10%; }
            .orb-orange { top: 40%; right: -10%; }
            .orb-green { bottom: 0; left: 30%; }

            .code-window {
                background: rgba(18, 18, 18, 0.8);
                backdrop-filter: blur(20px);
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: var(--radius-lg);
                box-shadow: var(--shadow-lg);
            }

            .window-header {
                display: flex;
                gap: 6px;
                padding: var(--spacing-xs) var(--spacing-sm);
            }

            .dot { width: 12px; height: 12px; border-radius: 50%; }
            .dot.red { background: #FF5F56; }
            .dot.yellow { background: #FFBD2E; }
            .dot.green { background: #27C93F; }

            .window-content {
                margin: 0;
                padding: var(--spacing-sm) var(--spacing-md);
                color: var(--terminal-green);
                font-size: var(--font-size-sm);
                overflow-x: auto;
            }

            .section-header {
                text-align: center;
                margin-bottom: var(--spacing-xl);
            }

            .section-header h2 {
                font-size: var(--font-size-4xl);
            }

            .section-header p {
                color: var(--text-secondary);
            }

            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: var(--spacing-md);
            }

            .feature-card,
            .template-card,
            .stat-card,
            .achievement-card {
                background: var(--bg-card);
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: var(--radius-lg);
                padding: var(--spacing-lg);
            }

            .feature-card:hover {
                border-color: var(--meta-blue);
            }

            .feature-icon {
                font-size: var(--font-size-3xl);
            }

            .template-tag {
                color: var(--meta-blue);
                font-size: var(--font-size-xs);
                text-transform: uppercase;
                letter-spacing: 0.08em;
            }

            .stat-card {
                text-align: center;
            }

            .stat-value {
                color: var(--mclaren-orange);
                font-size: var(--font-size-4xl);
                font-weight: var(--font-weight-extrabold);
            }

            .stat-label {
                color: var(--text-muted);
                font-size: var(--font-size-sm);
            }

            .achievement-image {
                width: 100%;
                aspect-ratio: 16 / 9;
                object-fit: cover;
                border-radius: var(--radius-md);
                background: var(--bg-hover);
            }

            .cta {
                text-align: center;
            }

            .btn-primary,
            .btn-secondary,
            .btn-outline {
                border-radius: var(--radius-full);
                padding: 0.75rem 1.5rem;
                font-size: var(--font-size-sm);
                font-weight: var(--font-weight-semibold);
                cursor: pointer;
                transition: transform var(--transition-fast), box-shadow var(--transition-fast);
            }

            .btn-primary {
                background: var(--mclaren-orange);
                color: var(--text-primary);
                border: none;
            }

            .btn-primary:hover {
                box-shadow: 0 0 24px rgba(255, 128, 0, 0.4);
            }

            .btn-secondary {
                background: transparent;
                color: var(--text-primary);
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .btn-outline {
                background: transparent;
                color: var(--mclaren-orange);
                border: 1px solid var(--mclaren-orange);
                margin-top: var(--spacing-sm);
            }

            .btn-large {
                padding: 1rem 2rem;
                font-size: var(--font-size-base);
            }

            .footer {
                text-align: center;
                padding: var(--spacing-xl) var(--spacing-md);
                color: var(--text-muted);
                border-top: 1px solid rgba(255, 255, 255, 0.1);
            }

            .footer a {
                color: var(--mclaren-orange);
                text-decoration: none;
            }

            .skip-link:focus {
                outline: 2px solid var(--mclaren-orange);
            }

            @keyframes ripple {
                to {
                    transform: scale(4);
                    opacity: 0;
                }
            }

            @keyframes float {
                0%, 100% { transform: translate(0, 0); }
                50% { transform: translate(30px, -30px); }
            }

            @keyframes bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-12px); }
            }

            @media (max-width: 768px) {
                .hero {
                    flex-direction: column;
                    text-align: center;
                }

                .hero-content h1 {
                    font-size: var(--font-size-3xl);
                }

                .hero-cta-group {
                    justify-content: center;
                }
            }
            "#}
        </style>
        </>
    }
}
