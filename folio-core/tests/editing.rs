use anyhow::Result;
use folio::edit::{Collection, ProjectField, RecordField};
use folio::{apply_edit, EditError, PortfolioEdit, PortfolioRecord, ThemeId, ThemeGenerator};
use folio_test_utils::cooked_template_literals;

#[test]
fn edits_flow_through_to_generated_page() -> Result<()> {
    let record = PortfolioRecord::starter();
    let edits = vec![
        PortfolioEdit::SetField {
            field: RecordField::Name,
            value: "Ada <i>Lovelace</i>".to_string(),
        },
        PortfolioEdit::Append(Collection::Projects),
        PortfolioEdit::UpdateProject {
            index: 1,
            field: ProjectField::Title,
            value: "Analytical `Engine`".to_string(),
        },
        PortfolioEdit::Remove {
            collection: Collection::Projects,
            index: 0,
        },
        PortfolioEdit::SetTheme(ThemeId::Minimal),
    ];

    let edited = edits
        .into_iter()
        .try_fold(record.clone(), |current, edit| apply_edit(&current, edit))?;

    assert_eq!(edited.projects.len(), 1);
    assert_eq!(edited.projects[0].title, "Analytical `Engine`");
    assert_eq!(record, PortfolioRecord::starter());

    let files = edited.theme.generator().render(&edited)?;
    let cooked = cooked_template_literals(&files["app/page.tsx"]).map_err(anyhow::Error::msg)?;
    assert!(cooked.contains(&"Ada <i>Lovelace</i>".to_string()));
    assert!(cooked.contains(&"Analytical `Engine`".to_string()));
    assert!(!cooked.contains(&"Portfolio Engine".to_string()));
    assert!(files["package.json"].contains("ada-<i>lovelace</i>-nocodefolio-minimal"));
    Ok(())
}

#[test]
fn rejected_edit_leaves_no_record() {
    let record = PortfolioRecord::starter();
    let result = apply_edit(
        &record,
        PortfolioEdit::Remove {
            collection: Collection::Skills,
            index: 3,
        },
    );
    assert_eq!(
        result,
        Err(EditError::IndexOutOfRange {
            collection: "skills",
            index: 3,
            len: 3,
        })
    );
}
