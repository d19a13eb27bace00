use crate::{
    content::model::{Certificate, ExperienceEntry, Project, SkillName, present},
    render::{
        icons::{TechBadge, project_gradient, tech_badge},
        markup::{html_escape, join_map},
    },
};

/// Certificate cards list at most this many skill tags before collapsing into `+N`.
pub const CERT_VISIBLE_TAGS: usize = 3;

pub fn render_projects(projects: &[Project]) -> String {
    join_map(projects, render_project_card)
}

fn render_project_card(project: &Project) -> String {
    let preview = match present(&project.image) {
        // `project-*` images are placeholder assets and lose to the gradient.
        Some(img) if !img.contains("project-") => {
            format!(
                "background: url('{}') center/cover no-repeat;",
                html_escape(img)
            )
        }
        _ => format!(
            "background: linear-gradient(135deg, {});",
            project_gradient(&project.id)
        ),
    };

    let badges = join_map(&project.tech_stack, |tech| {
        format!(r#"<span class="tech-badge">{}</span>"#, html_escape(tech))
    });

    let mut links = String::new();
    if let Some(page) = present(&project.case_study_page) {
        links.push_str(&format!(
            r#"<a href="{}" class="p-link case-study">Case Study →</a>"#,
            html_escape(page)
        ));
    }
    if let Some(demo) = present(&project.demo) {
        links.push_str(&format!(
            r#"<a href="{}" target="_blank" class="p-link demo">Live Demo →</a>"#,
            html_escape(demo)
        ));
    }

    format!(
        concat!(
            r#"<div class="p-card">"#,
            r#"<div class="p-preview" style="{preview}"></div>"#,
            r#"<div class="p-content">"#,
            r#"<div class="p-header">{name}</div>"#,
            r#"<div class="p-body">{body}</div>"#,
            r#"<div class="p-tech-stack">{badges}</div>"#,
            r#"<div class="p-links">{links}</div>"#,
            "</div></div>"
        ),
        preview = preview,
        name = html_escape(&project.name),
        body = html_escape(&project.description),
        badges = badges,
        links = links,
    )
}

pub fn render_skills(skills: &[SkillName]) -> String {
    join_map(skills, |skill| {
        let visual = match tech_badge(skill) {
            TechBadge::Icon { url } => format!(
                r#"<img src="{}" alt="{}" class="tech-card-logo"/>"#,
                html_escape(&url),
                html_escape(skill)
            ),
            TechBadge::Placeholder { glyph } => format!(
                r#"<div class="tech-card-placeholder">{}</div>"#,
                html_escape(&glyph)
            ),
        };
        format!(
            r#"<div class="tech-card">{visual}<span class="tech-card-name">{}</span></div>"#,
            html_escape(skill)
        )
    })
}

pub fn render_experience(entries: &[ExperienceEntry]) -> String {
    join_map(entries, |exp| {
        let class = if exp.current {
            "exp-block current"
        } else {
            "exp-block"
        };
        let details = present(&exp.details_page)
            .map(|page| {
                format!(
                    r#"<a href="{}" class="exp-details-btn">View Details →</a>"#,
                    html_escape(page)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="{class}"><h4>{} — {}</h4><span class="exp-meta">{}</span><p>{}</p>{details}</div>"#,
            html_escape(&exp.title),
            html_escape(&exp.organization),
            html_escape(&exp.period),
            html_escape(&exp.description),
        )
    })
}

pub fn render_certificates(certificates: &[Certificate]) -> String {
    join_map(certificates, render_certificate_card)
}

fn render_certificate_card(cert: &Certificate) -> String {
    let (status_class, status_label) = if cert.verified {
        ("verified", "VERIFIED")
    } else {
        ("pending", "PENDING")
    };

    let credential = present(&cert.credential_url)
        .map(|url| {
            format!(
                r#"<a href="{}" target="_blank" class="cert-link-icon" title="View Credential">↗</a>"#,
                html_escape(url)
            )
        })
        .unwrap_or_default();

    let thumb = match present(&cert.image) {
        Some(img) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            html_escape(img),
            html_escape(&cert.name)
        ),
        None => r#"<div class="cert-placeholder">📄</div>"#.to_string(),
    };

    let tags = cert
        .skills
        .as_deref()
        .map(render_cert_tags)
        .unwrap_or_default();

    let mut html = String::from(r#"<div class="cert-card-glass">"#);
    html.push_str(&format!(
        r#"<div class="cert-header"><div class="cert-status {status_class}"><span class="status-dot"></span>{status_label}</div>{credential}</div>"#
    ));
    html.push_str(&format!(
        r#"<div class="cert-body"><div class="cert-thumb">{thumb}</div><div class="cert-info"><h4>{}</h4><div class="cert-issuer"><span class="data-label">ISSUER:</span> {}</div><div class="cert-date"><span class="data-label">DATE:</span> {}</div></div></div>"#,
        html_escape(&cert.name),
        html_escape(&cert.issuer),
        html_escape(&cert.date),
    ));
    html.push_str(&format!(r#"<div class="cert-footer">{tags}</div>"#));
    html.push_str("</div>");
    html
}

fn render_cert_tags(skills: &[String]) -> String {
    let shown = &skills[..skills.len().min(CERT_VISIBLE_TAGS)];
    let mut tags = join_map(shown, |s| {
        format!(r#"<span class="glass-tag">{}</span>"#, html_escape(s))
    });
    if skills.len() > CERT_VISIBLE_TAGS {
        tags.push_str(&format!(
            r#"<span class="glass-tag">+{}</span>"#,
            skills.len() - CERT_VISIBLE_TAGS
        ));
    }
    format!(r#"<div class="cert-tags">{tags}</div>"#)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sections.rs"]
mod tests;
