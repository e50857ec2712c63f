use leptos::prelude::*;

/// Outbound link shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Footer links, baked in at build time. Unset variables are skipped.
pub fn configured_links() -> Vec<SocialLink> {
    [
        ("GitHub", option_env!("VERDICT_GITHUB_URL")),
        ("LinkedIn", option_env!("VERDICT_LINKEDIN_URL")),
        ("Instagram", option_env!("VERDICT_INSTAGRAM_URL")),
        ("Facebook", option_env!("VERDICT_FACEBOOK_URL")),
    ]
    .into_iter()
    .filter_map(|(label, href)| {
        href.filter(|h| !h.is_empty())
            .map(|href| SocialLink { label, href })
    })
    .collect()
}

#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-btn"
                            aria-label=link.label
                            title=link.label
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
