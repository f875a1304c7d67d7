//! Table widget
//!
//! Renders a bordered table into an existing container. Empty data swaps
//! in a centered warning-colored message instead of an empty grid.

use indexmap::IndexMap;
use opal_layout::prelude::*;
use opal_theme::{ColorToken, FontToken, SpacingToken, ThemeState};

use crate::text::localized;

/// Data handed to a render pass
#[derive(Clone, Debug, Default)]
pub struct TableProps {
    pub columns: Vec<String>,
    /// One map per row; cells are looked up by column name
    pub rows: Vec<IndexMap<String, String>>,
    pub empty_message: Option<String>,
}

/// A table mounted into a container element
pub struct Table {
    container: ElementId,
}

impl Table {
    /// Mount onto the container with the given `id` attribute; fails fast
    /// when no such element exists
    pub fn new(tree: &ElementTree, container_id: &str) -> Result<Self, LayoutError> {
        let container = tree.require_element(container_id)?;
        Ok(Self { container })
    }

    pub fn render(&self, tree: &mut ElementTree, props: &TableProps) {
        tree.clear_children(self.container);

        let theme = ThemeState::get();
        let body = theme.font(FontToken::Body).to_string();

        if props.rows.is_empty() {
            let warning = theme.color(ColorToken::Warning);
            let message = props
                .empty_message
                .clone()
                .unwrap_or_else(|| localized("table.empty", "No data available"));
            let empty = tree.create_element("p");
            tree.set_text(empty, message);
            tree.update_style(empty, |style| {
                style.text_align = Some(TextAlign::Center);
                style.color = Some(warning);
                style.font_family = Some(body);
            });
            tree.append_child(self.container, empty);
            return;
        }

        let foreground = theme.color(ColorToken::Foreground);
        let secondary = theme.color(ColorToken::Secondary);
        let background = theme.color(ColorToken::Background);
        let cell_padding = theme.spacing_value(SpacingToken::Sm);

        let table = tree.create_element("table");
        tree.update_style(table, |style| {
            style.width = Dimension::Percent(100.0);
            style.border_collapse = true;
            style.font_family = Some(body);
        });

        let thead = tree.create_element("thead");
        let header_row = tree.create_element("tr");
        for column in &props.columns {
            let th = tree.create_element("th");
            tree.set_text(th, column.as_str());
            tree.update_style(th, |style| {
                style.padding = EdgeInsets::uniform(cell_padding);
                style.border = Some(Border::new(1.0, foreground));
                style.background = Some(secondary);
                style.color = Some(background);
            });
            tree.append_child(header_row, th);
        }
        tree.append_child(thead, header_row);
        tree.append_child(table, thead);

        let tbody = tree.create_element("tbody");
        for row in &props.rows {
            let tr = tree.create_element("tr");
            for column in &props.columns {
                let td = tree.create_element("td");
                let cell = row.get(column).cloned().unwrap_or_default();
                tree.set_text(td, cell);
                tree.update_style(td, |style| {
                    style.padding = EdgeInsets::uniform(cell_padding);
                    style.border = Some(Border::new(1.0, foreground));
                });
                tree.append_child(tr, td);
            }
            tree.append_child(tbody, tr);
        }
        tree.append_child(table, tbody);

        tree.append_child(self.container, table);
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.clear_children(self.container);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_scheme;
    use opal_theme::ColorScheme;

    fn mount(tree: &mut ElementTree) -> Table {
        let container = tree.create_element("div");
        tree.set_attribute(container, "id", "grid");
        let root = tree.root();
        tree.append_child(root, container);
        Table::new(tree, "grid").unwrap()
    }

    fn row(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_container_fails_fast() {
        with_scheme(ColorScheme::Light, || {
            let tree = ElementTree::new();
            assert!(matches!(
                Table::new(&tree, "grid"),
                Err(LayoutError::ContainerNotFound { .. })
            ));
        });
    }

    #[test]
    fn test_empty_rows_render_warning_message() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let table = mount(&mut tree);
            table.render(
                &mut tree,
                &TableProps {
                    columns: vec!["name".to_string()],
                    ..Default::default()
                },
            );
            let children = tree.children(table.container());
            assert_eq!(children.len(), 1);
            assert_eq!(tree.text(children[0]), Some("No data available"));
            assert_eq!(
                tree.style(children[0]).unwrap().color,
                Some(Color::from_hex(0xF59E0B))
            );
        });
    }

    #[test]
    fn test_renders_header_and_cells() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let table = mount(&mut tree);
            table.render(
                &mut tree,
                &TableProps {
                    columns: vec!["name".to_string(), "role".to_string()],
                    rows: vec![
                        row(&[("name", "Ada"), ("role", "engineer")]),
                        row(&[("name", "Grace")]),
                    ],
                    empty_message: None,
                },
            );

            let grid = tree.children(table.container())[0];
            let thead = tree.children(grid)[0];
            let header_row = tree.children(thead)[0];
            let headers: Vec<&str> = tree
                .children(header_row)
                .iter()
                .filter_map(|&th| tree.text(th))
                .collect();
            assert_eq!(headers, vec!["name", "role"]);

            let tbody = tree.children(grid)[1];
            let second_row = tree.children(tbody)[1];
            let cells: Vec<&str> = tree
                .children(second_row)
                .iter()
                .map(|&td| tree.text(td).unwrap_or_default())
                .collect();
            // A missing cell renders empty, not skipped.
            assert_eq!(cells, vec!["Grace", ""]);
        });
    }

    #[test]
    fn test_rerender_replaces_content() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let table = mount(&mut tree);
            let props = TableProps {
                columns: vec!["name".to_string()],
                rows: vec![row(&[("name", "Ada")])],
                empty_message: None,
            };
            table.render(&mut tree, &props);
            table.render(&mut tree, &props);
            assert_eq!(tree.children(table.container()).len(), 1);
        });
    }
}
