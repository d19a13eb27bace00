use crate::{
    app::{
        headless::{ElementState, HeadlessHost},
        host::{CarouselKind, Slot},
        session::Session,
    },
    config::SiteConfig,
    content::model::ContentBundle,
    foundation::{core::ScrollMetrics, error::FolioResult},
    render::markup::html_escape,
    scroll::schedule::SectionId,
};

/// Boot a session on a full-page headless host, feed it `content` and serialize the
/// result. A failed load still yields a page, with every content slot empty.
#[tracing::instrument(skip_all)]
pub fn render_static_page(
    config: &SiteConfig,
    content: FolioResult<ContentBundle>,
) -> FolioResult<String> {
    let mut host = HeadlessHost::with_page_skeleton(ScrollMetrics::default());
    let mut session = Session::new(config.clone())?;
    session.boot(&mut host);
    session.content_loaded(&mut host, content)?;
    let html = render_document(config, &host);
    tracing::info!(bytes = html.len(), "static page rendered");
    Ok(html)
}

/// Full HTML document for the current state of `host`. Slots the host does not carry are
/// left out.
pub fn render_document(config: &SiteConfig, host: &HeadlessHost) -> String {
    let page = &config.page;
    let title = html_escape(&page.title);
    let stylesheet = page
        .stylesheet
        .as_deref()
        .map(|href| format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(href)))
        .unwrap_or_default();

    let nav = format!(
        r#"<nav class="top-nav">
        <div class="nav-brand">{title}</div>
        {hamburger}
        {links}
    </nav>"#,
        hamburger = element(
            host,
            Slot::Hamburger,
            "button",
            "hamburger",
            "<span></span><span></span><span></span>"
        ),
        links = element(host, Slot::NavLinks, "ul", "nav-links", ""),
    );

    let sections: String = SectionId::ALL
        .into_iter()
        .map(|id| section(config, host, id))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {stylesheet}
</head>
<body>
    {nav}
    <main>
{sections}    </main>
</body>
</html>
"#
    )
}

fn section(config: &SiteConfig, host: &HeadlessHost, id: SectionId) -> String {
    let slot = Slot::Section(id);
    let Some(el) = host.element(slot) else {
        return String::new();
    };
    let heading = format!("<h2>{}</h2>", html_escape(id.label()));

    let body = match id {
        SectionId::Hero => format!(
            "{}{}<p class=\"tagline\">{}</p>",
            element(host, Slot::LensContainer, "div", "lens-container", ""),
            element(
                host,
                Slot::MainTitle,
                "h1",
                "main-title",
                &html_escape(&config.page.title)
            ),
            html_escape(&config.page.tagline),
        ),
        SectionId::Projects => format!("{heading}{}", carousel(host, CarouselKind::Projects)),
        SectionId::Skills => format!(
            "{heading}{}",
            element(host, Slot::SkillsContainer, "div", "tech-grid", "")
        ),
        SectionId::Experience => format!(
            "{heading}{}",
            element(host, Slot::ExperienceContainer, "div", "exp-list", "")
        ),
        SectionId::Certificates => {
            format!("{heading}{}", carousel(host, CarouselKind::Certificates))
        }
        SectionId::Contact => {
            let mail = config
                .page
                .contact_email
                .as_deref()
                .filter(|m| !m.is_empty())
                .map(|m| {
                    let m = html_escape(m);
                    format!(r#"<a class="contact-link" href="mailto:{m}">{m}</a>"#)
                })
                .unwrap_or_default();
            format!("{heading}{mail}")
        }
    };

    let class = if id.is_module() {
        format!("{} module", slot.key())
    } else {
        slot.key().to_string()
    };
    format!(
        "        <section class=\"{}\"{}>{body}</section>\n",
        classes(&class, el),
        style(el)
    )
}

fn carousel(host: &HeadlessHost, kind: CarouselKind) -> String {
    let (prev_class, next_class) = match kind {
        CarouselKind::Projects => ("carousel-btn prev", "carousel-btn next"),
        CarouselKind::Certificates => ("carousel-btn cert-prev", "carousel-btn cert-next"),
    };
    format!(
        r#"<div class="carousel">{}<div class="carousel-viewport">{}</div>{}</div>{}"#,
        element(host, Slot::Prev(kind), "button", prev_class, "&#8249;"),
        element(host, Slot::Track(kind), "div", "carousel-track", ""),
        element(host, Slot::Next(kind), "button", next_class, "&#8250;"),
        element(host, Slot::Dots(kind), "div", "carousel-dots", ""),
    )
}

/// `<tag id=..>` for `slot`. Host-rendered markup wins over `fallback_inner`.
fn element(host: &HeadlessHost, slot: Slot, tag: &str, class: &str, fallback_inner: &str) -> String {
    let Some(el) = host.element(slot) else {
        return String::new();
    };
    let inner = if el.html.is_empty() {
        fallback_inner
    } else {
        el.html.as_str()
    };
    format!(
        r#"<{tag} id="{}" class="{}"{}>{inner}</{tag}>"#,
        slot.key(),
        classes(class, el),
        style(el)
    )
}

fn classes(base: &str, el: &ElementState) -> String {
    let mut out = base.to_string();
    for c in &el.classes {
        out.push(' ');
        out.push_str(&html_escape(c));
    }
    out
}

fn style(el: &ElementState) -> String {
    if el.style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, html_escape(&el.style_attr()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/document.rs"]
mod tests;
