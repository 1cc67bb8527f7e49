//! Category filter dialog component
//!
//! Lets the user pick a category to filter the catalog by, or go back to
//! all products. Each category row carries its accent color so the dialog
//! matches the pills shown in the list and grid.

use crate::action::Action;
use crate::component::Component;
use crate::components::accent::category_accent;
use crate::model::CATEGORY_ALL;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Category filter dialog
pub struct CategoryDialog {
    /// Available categories, in accent order
    pub categories: Vec<String>,
    /// Selected row index (0 is the "All products" entry)
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Currently applied category ("all" means no filter)
    pub current: String,
}

impl Default for CategoryDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            categories: Vec::new(),
            selected_index: 0,
            list_state,
            current: CATEGORY_ALL.to_string(),
        }
    }

    /// Set available categories and preselect the active filter
    pub fn set_categories(&mut self, categories: &[String], current: &str) {
        self.categories = categories.to_vec();
        self.current = current.to_string();

        // +1 because of the "All products" entry at the top
        if let Some(idx) = self.categories.iter().position(|c| c == current) {
            self.selected_index = idx + 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Get the selected category (None means "All products")
    pub fn get_selected(&self) -> Option<&str> {
        if self.selected_index == 0 {
            None
        } else {
            self.categories
                .get(self.selected_index - 1)
                .map(|s| s.as_str())
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < self.categories.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for CategoryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('c') => Some(Action::CloseModal),
            KeyCode::Enter => {
                if let Some(category) = self.get_selected() {
                    Some(Action::SetCategoryFilter(category.to_string()))
                } else {
                    Some(Action::ClearCategoryFilter)
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let content_height = if self.categories.is_empty() {
            5
        } else {
            self.categories.len() as u16 + 3
        };
        let popup_height = (content_height + 6).min(area.height.saturating_sub(4)).max(11);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Category list / empty message
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        // Header
        let header_text = if self.current == CATEGORY_ALL {
            "Showing all products".to_string()
        } else {
            format!("Current: {}", self.current)
        };

        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by Category ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        if self.categories.is_empty() {
            let empty_message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No categories in the catalog",
                    Style::default().fg(Color::Yellow),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(empty_message, main_chunks[1]);
        } else {
            let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(vec![
                Span::styled(
                    if self.current == CATEGORY_ALL {
                        "● "
                    } else {
                        "  "
                    },
                    Style::default().fg(Color::Green),
                ),
                Span::styled("All products", Style::default().fg(Color::DarkGray)),
            ]))];

            for category in &self.categories {
                let is_current = *category == self.current;
                let accent = category_accent(category, &self.categories);
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_current { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{} ", category),
                        if is_current {
                            Style::default().fg(accent).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(accent)
                        },
                    ),
                ])));
            }

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/c ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_categories_preselects_active_filter() {
        let mut dialog = CategoryDialog::new();
        dialog.set_categories(&categories(&["bags", "clothing"]), "clothing");

        assert_eq!(dialog.selected_index, 2);
        assert_eq!(dialog.get_selected(), Some("clothing"));
    }

    #[test]
    fn test_no_filter_selects_all_entry() {
        let mut dialog = CategoryDialog::new();
        dialog.set_categories(&categories(&["bags", "clothing"]), CATEGORY_ALL);

        assert_eq!(dialog.selected_index, 0);
        assert_eq!(dialog.get_selected(), None);
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut dialog = CategoryDialog::new();
        dialog.set_categories(&categories(&["bags"]), CATEGORY_ALL);

        dialog.select_prev();
        assert_eq!(dialog.selected_index, 0);

        dialog.select_next();
        dialog.select_next();
        assert_eq!(dialog.selected_index, 1);
        assert_eq!(dialog.get_selected(), Some("bags"));
    }
}
