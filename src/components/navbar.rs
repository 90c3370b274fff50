use yew::prelude::*;
use log::info;

use crate::theme::{self, ThemePreference};

/// `(section id, label)` in page order.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("features", "Features"),
    ("templates", "Templates"),
    ("stats", "Stats"),
    ("achievements", "Achievements"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let preference = use_state(theme::load_preference);

    {
        use_effect_with_deps(
            move |preference: &ThemePreference| {
                theme::apply_preference(*preference);
                || ()
            },
            *preference,
        );
    }

    let toggle_theme = {
        let preference = preference.clone();
        Callback::from(move |_: MouseEvent| {
            let next = preference.toggled();
            info!("Switching to {} theme", next.as_str());
            theme::store_preference(next);
            preference.set(next);
        })
    };

    let theme_icon = match *preference {
        ThemePreference::Dark => "☀️",
        ThemePreference::Light => "🌙",
    };

    html! {
        <nav id="navbar" class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <span class="logo-mark">{"◆"}</span>
                    {"Rover"}
                </a>

                <ul id="navMenu" class="nav-menu">
                    { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <li>
                            <a href={format!("#{}", id)} class="nav-link">{*label}</a>
                        </li>
                    }) }
                </ul>

                <div class="nav-actions">
                    <button
                        id="darkModeToggle"
                        class="theme-toggle"
                        aria-label="Toggle colour theme"
                        onclick={toggle_theme}
                    >
                        {theme_icon}
                    </button>
                    <button id="mobileMenuToggle" class="mobile-menu-toggle" aria-label="Toggle navigation">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: var(--navbar-height);
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(20px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    z-index: var(--z-fixed);
                    transition: background var(--transition-base), box-shadow var(--transition-base);
                }

                .navbar.scrolled {
                    background: rgba(0, 0, 0, 0.95);
                    box-shadow: var(--shadow-md);
                }

                .nav-container {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 var(--spacing-md);
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: var(--text-primary);
                    font-weight: var(--font-weight-extrabold);
                    font-size: var(--font-size-xl);
                    text-decoration: none;
                }

                .logo-mark {
                    color: var(--mclaren-orange);
                    margin-right: 0.4rem;
                }

                .nav-menu {
                    display: flex;
                    gap: var(--spacing-md);
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .nav-link {
                    color: var(--text-secondary);
                    text-decoration: none;
                    font-size: var(--font-size-sm);
                    transition: color var(--transition-fast);
                    padding-bottom: 4px;
                    border-bottom: 2px solid transparent;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: var(--text-primary);
                    border-bottom-color: var(--mclaren-orange);
                }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: var(--spacing-xs);
                }

                .theme-toggle {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: var(--radius-full);
                    padding: 0.35rem 0.6rem;
                    cursor: pointer;
                }

                .mobile-menu-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: transparent;
                    border: none;
                    cursor: pointer;
                }

                .mobile-menu-toggle span {
                    width: 22px;
                    height: 2px;
                    background: var(--text-primary);
                    transition: transform var(--transition-fast), opacity var(--transition-fast);
                }

                .mobile-menu-toggle.active span:nth-child(1) {
                    transform: translateY(6px) rotate(45deg);
                }

                .mobile-menu-toggle.active span:nth-child(2) {
                    opacity: 0;
                }

                .mobile-menu-toggle.active span:nth-child(3) {
                    transform: translateY(-6px) rotate(-45deg);
                }

                @media (max-width: 768px) {
                    .mobile-menu-toggle {
                        display: flex;
                    }

                    .nav-menu {
                        position: fixed;
                        top: var(--navbar-height);
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: var(--spacing-md);
                        background: rgba(0, 0, 0, 0.95);
                        transform: translateY(-120%);
                        transition: transform var(--transition-base);
                    }

                    .nav-menu.active {
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </nav>
    }
}
