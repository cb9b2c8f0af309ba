use anyhow::Result;
use folio::export::manifest::PackageManifest;
use folio::{generate_project, normalize, PortfolioDraft, PortfolioRecord, ThemeGenerator, ThemeId};
use folio_test_utils::{cooked_template_literals, json_literals_after, load_fixture_json, record_fixtures};
use strum::IntoEnumIterator;

fn rich_text_values(record: &PortfolioRecord) -> Vec<String> {
    let mut values = vec![
        record.name.clone(),
        record.bio.clone(),
        record.about_text.clone(),
    ];
    for entry in &record.work_experience {
        values.push(entry.title.clone());
        values.push(entry.company.clone());
        values.push(entry.duration.clone());
        values.push(entry.description.clone());
    }
    values.extend(record.skills.iter().map(|s| s.name.clone()));
    values.extend(record.projects.iter().map(|p| p.title.clone()));
    values
}

#[test]
fn every_fixture_renders_cookable_literals_in_every_theme() -> Result<()> {
    for (fixture, bytes) in record_fixtures()? {
        let draft: PortfolioDraft = serde_json::from_slice(&bytes)?;
        for theme in ThemeId::iter() {
            let files = theme.generator().generate(&draft)?;
            let record = normalize(&draft, theme);
            let cooked = cooked_template_literals(&files["app/page.tsx"])
                .map_err(|e| anyhow::anyhow!("{} / {}: {}", fixture, theme, e))?;

            for value in rich_text_values(&record) {
                assert!(
                    cooked.contains(&value),
                    "{} / {}: {:?} not embedded verbatim",
                    fixture,
                    theme,
                    value
                );
            }
        }
    }
    Ok(())
}

#[test]
fn hostile_strings_cannot_break_out_of_literals() -> Result<()> {
    let draft: PortfolioDraft = load_fixture_json("records/hostile.json")?;
    let files = generate_project(&draft)?;
    let page = &files["app/page.tsx"];

    let cooked = cooked_template_literals(page).map_err(anyhow::Error::msg)?;
    assert!(cooked.contains(&"Eve `the` ${hacker}".to_string()));
    assert!(cooked.contains(&"ends with backslash \\".to_string()));
    assert!(cooked
        .iter()
        .any(|v| v.starts_with("Backslash \\ then backtick ` then ${window.alert(1)}")));

    let attributes = json_literals_after(page, "={ ").map_err(anyhow::Error::msg)?;
    assert!(attributes.contains(&"https://img.example.com/a\"b}.png".to_string()));
    assert!(attributes.contains(&"https://github.com/eve/\"repo\"".to_string()));
    assert!(attributes.contains(&"mailto:eve@example.com\" onClick=\"x".to_string()));

    let children = json_literals_after(page, ">{ ").map_err(anyhow::Error::msg)?;
    assert!(children.contains(&"\"}; alert(1); {\"".to_string()));
    Ok(())
}

#[test]
fn layout_metadata_uses_plain_name() -> Result<()> {
    let draft: PortfolioDraft = load_fixture_json("records/hostile.json")?;
    let files = generate_project(&draft)?;
    let layout = &files["app/layout.tsx"];

    let titles = json_literals_after(layout, "title: ").map_err(anyhow::Error::msg)?;
    assert_eq!(titles, vec!["Eve `the` ${hacker} | Portfolio".to_string()]);
    let descriptions = json_literals_after(layout, "description: ").map_err(anyhow::Error::msg)?;
    assert_eq!(descriptions, vec!["Portfolio of Eve `the` ${hacker}".to_string()]);

    let starter = generate_project(&PortfolioRecord::starter().into())?;
    assert!(starter["app/layout.tsx"].contains("title: \"Alex Galaxy | Portfolio\""));
    assert!(starter["app/layout.tsx"]
        .contains("href={ \"https://nocodefolio.vercel.app/favicon.ico\" }"));
    Ok(())
}

#[test]
fn bio_markup_is_embedded_byte_identical() -> Result<()> {
    let draft: PortfolioDraft = load_fixture_json("records/starter.json")?;
    let files = generate_project(&draft)?;
    assert!(files["app/page.tsx"]
        .contains("__html: `Creative <span class='text-sky-400'>Frontend Developer</span>`"));
    Ok(())
}

#[test]
fn unknown_theme_renders_exactly_as_modern() -> Result<()> {
    let draft: PortfolioDraft = load_fixture_json("records/legacy_theme.json")?;
    assert_eq!(draft.theme.as_deref(), Some("foobar"));

    let fallback = generate_project(&draft)?;
    let modern = generate_project(&draft.clone().with_theme("modern"))?;
    assert_eq!(fallback, modern);
    Ok(())
}

#[test]
fn manifest_name_slugs_raw_name() -> Result<()> {
    let draft: PortfolioDraft = load_fixture_json("records/legacy_theme.json")?;
    let files = generate_project(&draft.with_theme("galaxy"))?;
    let manifest: PackageManifest = serde_json::from_str(&files["package.json"])?;
    assert_eq!(manifest.name, "a&b-nocodefolio-galaxy");
    assert!(manifest.private);
    assert_eq!(manifest.dependencies["next"], "14.1.3");
    Ok(())
}

#[test]
fn manifest_stays_valid_json_for_hostile_names() -> Result<()> {
    let draft: PortfolioDraft = load_fixture_json("records/hostile.json")?;
    let files = generate_project(&draft)?;
    let manifest: PackageManifest = serde_json::from_str(&files["package.json"])?;
    assert_eq!(manifest.name, "eve-`the`-${hacker}-nocodefolio-neon");
    Ok(())
}

#[test]
fn sequences_render_in_order_with_duplicates() -> Result<()> {
    let mut record = PortfolioRecord::starter();
    let mut first = record.work_experience[0].clone();
    first.title = "First".to_string();
    let mut second = first.clone();
    second.title = "Second".to_string();
    record.work_experience = vec![first.clone(), second, first];

    let files = ThemeId::Creative.generator().render(&record)?;
    let cooked = cooked_template_literals(&files["app/page.tsx"]).map_err(anyhow::Error::msg)?;
    let titles: Vec<&String> = cooked
        .iter()
        .filter(|v| *v == "First" || *v == "Second")
        .collect();
    assert_eq!(titles, vec!["First", "Second", "First"]);
    Ok(())
}

#[test]
fn optional_parts_are_resolved_at_generation_time() -> Result<()> {
    let files = generate_project(&PortfolioDraft::default())?;
    let page = &files["app/page.tsx"];
    assert!(!page.contains("alt=\"Avatar\""));
    assert!(!page.contains("Download CV"));
    assert!(!page.contains("mailto:"));
    assert!(!page.contains("&&"));

    let draft: PortfolioDraft = load_fixture_json("records/hostile.json")?;
    let files = generate_project(&draft)?;
    let page = &files["app/page.tsx"];
    assert!(page.contains("alt=\"Avatar\""));
    assert!(page.contains("{ \"tel:+1(555)010-9999\" }"));
    assert!(!page.contains(">LinkedIn<"));
    Ok(())
}

#[test]
fn generation_is_deterministic() -> Result<()> {
    let draft: PortfolioDraft = load_fixture_json("records/starter.json")?;
    for theme in ThemeId::iter() {
        let themed = draft.clone().with_theme(theme.as_ref());
        assert_eq!(generate_project(&themed)?, generate_project(&themed)?);
    }
    Ok(())
}
