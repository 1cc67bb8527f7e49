//! Sort order dialog component
//!
//! Picks one of the four sort orders for the visible product list.

use crate::action::Action;
use crate::component::Component;
use crate::model::SortOrder;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Sort order dialog
pub struct SortDialog {
    /// Selected row index into `SortOrder::all()`
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Currently applied sort order
    pub current: SortOrder,
}

impl Default for SortDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SortDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            current: SortOrder::None,
        }
    }

    /// Preselect the currently applied sort order
    pub fn set_current(&mut self, current: SortOrder) {
        self.current = current;
        self.selected_index = SortOrder::all()
            .iter()
            .position(|s| *s == current)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// Get the sort order under the cursor
    pub fn get_selected(&self) -> SortOrder {
        SortOrder::all()
            .get(self.selected_index)
            .copied()
            .unwrap_or(SortOrder::None)
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < SortOrder::all().len() {
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

impl Component for SortDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('s') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetSortOrder(self.get_selected())),
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

        let popup_width = 36u16.min(area.width.saturating_sub(4));
        let popup_height = 12u16.min(area.height.saturating_sub(4));

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(popup_area);

        let items: Vec<ListItem> = SortOrder::all()
            .iter()
            .map(|sort| {
                let is_current = *sort == self.current;
                ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_current { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        sort.label().to_string(),
                        if is_current {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Sort Products ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, main_chunks[0], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Apply  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/s ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_current_preselects_active_order() {
        let mut dialog = SortDialog::new();
        dialog.set_current(SortOrder::PriceDesc);

        assert_eq!(dialog.selected_index, 2);
        assert_eq!(dialog.get_selected(), SortOrder::PriceDesc);
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut dialog = SortDialog::new();
        dialog.set_current(SortOrder::None);

        dialog.select_prev();
        assert_eq!(dialog.get_selected(), SortOrder::None);

        for _ in 0..10 {
            dialog.select_next();
        }
        assert_eq!(dialog.get_selected(), SortOrder::RateDesc);
    }
}
