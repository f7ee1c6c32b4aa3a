use crate::domain::Snapshot;
use crate::errors::AppError;

/// Draws a snapshot for the user. The session re-renders after every mutation.
pub trait Renderer {
    fn render(&self, snapshot: &Snapshot) -> Result<String, AppError>;
}

/// Two-section text listing with running row numbers.
pub struct TableRenderer;

/// Pretty-printed JSON of the whole snapshot.
pub struct JsonRenderer;

pub fn display_row(row: usize, name: &str, is_favorite: bool) -> String {
    let star = if is_favorite { "[*]" } else { "[ ]" };
    format!("{row:>3}. {name:<24} {star}")
}

impl Renderer for TableRenderer {
    fn render(&self, snapshot: &Snapshot) -> Result<String, AppError> {
        let mut lines: Vec<String> = Vec::new();
        let mut row = 0;

        for section in snapshot.sections() {
            lines.push(section.section.label().to_string());

            if section.contacts.is_empty() {
                lines.push("    (no contacts)".to_string());
            }

            for contact in &section.contacts {
                row += 1;
                lines.push(display_row(row, contact.name(), contact.is_favorite));
            }
        }

        Ok(lines.join("\n"))
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, snapshot: &Snapshot) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(snapshot)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroupedContactStore, Section};

    #[test]
    fn table_lists_both_sections() -> Result<(), AppError> {
        let mut store = GroupedContactStore::with_demo_seed();
        let bill = store.snapshot().handle_at(3).unwrap();
        store.toggle_favorite(bill)?;

        let output = TableRenderer.render(&store.snapshot())?;
        let expected = [
            "CEO".to_string(),
            display_row(1, "Elon Musk", false),
            display_row(2, "Tim Cook", false),
            "Peasant".to_string(),
            display_row(3, "Bill Gates", true),
        ]
        .join("\n");

        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn table_marks_empty_sections() -> Result<(), AppError> {
        let mut store = GroupedContactStore::new();
        store.add("Jeff Bezos", Section::Peasants)?;

        let output = TableRenderer.render(&store.snapshot())?;

        assert!(output.starts_with("CEO\n    (no contacts)\nPeasant\n"));
        assert!(output.ends_with(&display_row(1, "Jeff Bezos", false)));
        Ok(())
    }

    #[test]
    fn json_keeps_section_order() -> Result<(), AppError> {
        let store = GroupedContactStore::with_demo_seed();

        let output = JsonRenderer.render(&store.snapshot())?;
        let value: serde_json::Value = serde_json::from_str(&output)?;

        assert_eq!(value["sections"][0]["section"], "ceo");
        assert_eq!(value["sections"][1]["section"], "peasants");
        assert_eq!(value["sections"][1]["contacts"][0]["name"], "Bill Gates");
        assert_eq!(value["sections"][1]["contacts"][0]["is_favorite"], false);
        Ok(())
    }
}
