use leptos::prelude::*;

use contracts::shared::localized::resolve;
use contracts::system::settings::{SiteSettings, SocialLinks};

use crate::shared::locale::use_locale;

/// Non-empty social links as `(label, url)` pairs.
pub fn social_entries(links: &SocialLinks) -> Vec<(&'static str, String)> {
    [
        ("Twitter", &links.twitter),
        ("Facebook", &links.facebook),
        ("LinkedIn", &links.linkedin),
        ("YouTube", &links.youtube),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.clone().filter(|u| !u.trim().is_empty()).map(|u| (label, u)))
    .collect()
}

#[component]
pub fn Footer(settings: RwSignal<SiteSettings>) -> impl IntoView {
    let locale = use_locale();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__contact">
                <strong>{move || settings.with(|s| s.site_name.resolve(locale.code()))}</strong>
                <span>{move || settings.with(|s| resolve(s.address.as_ref(), locale.code()))}</span>
                <span>{move || settings.with(|s| s.contact_email.clone().unwrap_or_default())}</span>
                <span dir="ltr">{move || settings.with(|s| s.contact_phone.clone().unwrap_or_default())}</span>
            </div>
            <div class="footer__social">
                {move || settings.with(|s| social_entries(&s.social)).into_iter().map(|(label, url)| view! {
                    <a href=url target="_blank" rel="noopener">{label}</a>
                }).collect_view()}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_entries_skip_blank() {
        let links = SocialLinks {
            twitter: Some("https://x.com/institute".into()),
            facebook: Some(" ".into()),
            linkedin: None,
            youtube: Some("https://youtube.com/@institute".into()),
        };
        let labels: Vec<&str> = social_entries(&links).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Twitter", "YouTube"]);
    }
}
