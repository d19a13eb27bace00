use super::*;

#[test]
fn parses_camel_case_fields() {
    let bundle = ContentBundle::from_json_str(
        r#"{
            "projects": [{
                "id": "nexa-ai",
                "name": "Nexa",
                "description": "assistant",
                "techStack": ["Python", "FastAPI"],
                "caseStudyPage": "nexa.html"
            }],
            "skills": ["Rust"],
            "experience": [{
                "title": "Intern",
                "organization": "Acme",
                "period": "2024",
                "description": "things",
                "current": true,
                "detailsPage": "acme.html"
            }],
            "certificates": [{
                "name": "Cloud",
                "issuer": "AWS",
                "date": "2025",
                "verified": true,
                "credentialUrl": "https://example.com/c"
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(bundle.projects[0].tech_stack, vec!["Python", "FastAPI"]);
    assert_eq!(bundle.projects[0].case_study_page.as_deref(), Some("nexa.html"));
    assert!(bundle.projects[0].demo.is_none());
    assert!(bundle.experience[0].current);
    assert_eq!(
        bundle.certificates[0].credential_url.as_deref(),
        Some("https://example.com/c")
    );
    assert!(bundle.certificates[0].skills.is_none());
}

#[test]
fn missing_and_null_collections_are_empty() {
    let bundle = ContentBundle::from_json_str(r#"{"projects": null, "skills": ["Go"]}"#).unwrap();
    assert!(bundle.projects.is_empty());
    assert!(bundle.experience.is_empty());
    assert!(bundle.certificates.is_empty());
    assert_eq!(bundle.skills, vec!["Go"]);
    assert!(!bundle.is_empty());
    assert!(ContentBundle::default().is_empty());
}

#[test]
fn malformed_document_is_a_load_error() {
    let err = ContentBundle::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, FolioError::Load(_)));

    let err = ContentBundle::from_json_str(r#"{"projects": [{"id": "x"}]}"#).unwrap_err();
    assert!(err.to_string().contains("load error:"));
}

#[test]
fn present_treats_empty_as_missing() {
    assert_eq!(present(&Some(String::new())), None);
    assert_eq!(present(&None), None);
    assert_eq!(present(&Some("a".to_string())), Some("a"));
}
