/// Known technology names (lowercase) and their Simple Icons slug.
const TECH_ICONS: &[(&str, &str)] = &[
    // languages
    ("python", "python"),
    ("javascript", "javascript"),
    ("typescript", "typescript"),
    // frontend
    ("react", "react"),
    ("next.js", "nextdotjs"),
    ("html/css", "html5"),
    // backend
    ("node.js", "nodedotjs"),
    ("express.js", "express"),
    ("fastapi", "fastapi"),
    ("flask", "flask"),
    // databases
    ("mysql", "mysql"),
    ("mongodb", "mongodb"),
    ("postgresql", "postgresql"),
    // apis and tooling
    ("rest apis", "postman"),
    ("graphql", "graphql"),
    ("git", "git"),
    ("github", "github"),
    ("docker", "docker"),
    // cloud
    ("aws", "amazonaws"),
    ("google cloud", "googlecloud"),
    ("vercel", "vercel"),
    // ai / ml
    ("tensorflow", "tensorflow"),
    ("pytorch", "pytorch"),
    ("langchain", "langchain"),
    ("openai apis", "openai"),
    ("gemini api", "googlegemini"),
    ("ai agents", "probot"),
    ("llm integration", "openai"),
    ("machine learning", "scikitlearn"),
    // fundamentals
    ("data structures", "databricks"),
    ("algorithms", "thealgorithms"),
    // design
    ("figma", "figma"),
    ("canva", "canva"),
    ("adobe express", "adobe"),
];

const ICON_CDN: &str = "https://cdn.simpleicons.org";

const PROJECT_GRADIENTS: &[(&str, &str)] = &[
    ("carbontwin", "#1B5E20, #4CAF50"),
    ("crud-flask", "#D84315, #FF6F00"),
    ("nexa-ai", "#6A1B9A, #AB47BC"),
    ("ecowaste", "#00695C, #26A69A"),
    ("agrowise", "#2E7D32, #66BB6A"),
];

const FALLBACK_GRADIENT: &str = "#FF7D36, #00FFAA";

/// How a skill card shows its technology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TechBadge {
    Icon { url: String },
    /// No known icon: show the first character of the name.
    Placeholder { glyph: String },
}

/// Case-insensitive icon slug lookup. An unknown name is not an error.
pub fn icon_slug(tech: &str) -> Option<&'static str> {
    let normalized = tech.to_lowercase();
    TECH_ICONS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, slug)| *slug)
}

pub fn tech_badge(tech: &str) -> TechBadge {
    match icon_slug(tech) {
        Some(slug) => TechBadge::Icon {
            url: format!("{ICON_CDN}/{slug}"),
        },
        None => TechBadge::Placeholder {
            glyph: tech.chars().next().map(String::from).unwrap_or_default(),
        },
    }
}

/// Gradient colour stops for a project card without a usable preview image.
pub fn project_gradient(id: &str) -> &'static str {
    PROJECT_GRADIENTS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, g)| *g)
        .unwrap_or(FALLBACK_GRADIENT)
}

#[cfg(test)]
#[path = "../../tests/unit/render/icons.rs"]
mod tests;
