//! Product detail dialog component
//!
//! Full-record view for one product: title, category, price, rating, and
//! description. The product is captured when the dialog opens and released
//! when it closes.

use crate::action::Action;
use crate::component::Component;
use crate::model::Product;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Product detail dialog
pub struct DetailDialog {
    /// Current scroll offset
    scroll: usize,
    /// Product being shown, if any
    product: Option<Product>,
    /// Cached content lines built when the product is set
    content: Vec<Line<'static>>,
}

impl Default for DetailDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailDialog {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            product: None,
            content: Vec::new(),
        }
    }

    /// Capture the product to show and rebuild the content
    pub fn set_product(&mut self, product: Product, accent: Color, currency: &str) {
        self.scroll = 0;
        self.content = build_detail_lines(&product, accent, currency);
        self.product = Some(product);
    }

    /// Release the captured product when the dialog closes
    pub fn clear(&mut self) {
        self.product = None;
        self.content.clear();
        self.scroll = 0;
    }

    pub fn title(&self) -> String {
        match &self.product {
            Some(p) => format!(" {} ", p.title),
            None => " Product ".to_string(),
        }
    }
}

impl Component for DetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::PageDown => self.scroll = self.scroll.saturating_add(10),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(10),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let total = self.content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let paragraph = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title())
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the content lines for a product
fn build_detail_lines(product: &Product, accent: Color, currency: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        product.title.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        product.category.clone(),
        Style::default().fg(accent),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Price   ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            product.display_price(currency),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let rating_line = if product.rating.is_some() {
        Line::from(vec![
            Span::styled("Rating  ", Style::default().fg(Color::DarkGray)),
            Span::styled(product.stars(), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("  {:.1} ({} ratings)", product.rate(), product.rating_count()),
                Style::default().fg(Color::White),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("Rating  ", Style::default().fg(Color::DarkGray)),
            Span::styled("No ratings yet", Style::default().fg(Color::DarkGray)),
        ])
    };
    lines.push(rating_line);
    lines.push(Line::from(""));

    if !product.description.is_empty() {
        lines.push(Line::from(Span::styled(
            "Description",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::raw(product.description.clone())));
        lines.push(Line::from(""));
    }

    if !product.image.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Image   ", Style::default().fg(Color::DarkGray)),
            Span::styled(product.image.clone(), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" Esc/q ", Style::default().fg(Color::Yellow)),
        Span::raw("Close  "),
        Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
        Span::raw("Scroll"),
    ]));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;

    fn sample_product() -> Product {
        Product {
            id: 1,
            title: "Alpha Backpack".to_string(),
            price: 100.0,
            description: "Roomy and waterproof.".to_string(),
            category: "bags".to_string(),
            image: "https://example.test/1.jpg".to_string(),
            rating: Some(Rating {
                rate: 4.5,
                count: 12,
            }),
        }
    }

    #[test]
    fn test_set_and_clear_product() {
        let mut dialog = DetailDialog::new();
        assert!(dialog.content.is_empty());

        dialog.set_product(sample_product(), Color::Cyan, "£");
        assert!(!dialog.content.is_empty());
        assert_eq!(dialog.title(), " Alpha Backpack ");

        dialog.clear();
        assert!(dialog.content.is_empty());
        assert_eq!(dialog.title(), " Product ");
    }

    #[test]
    fn test_scroll_updates() {
        let mut dialog = DetailDialog::new();
        dialog.set_product(sample_product(), Color::Cyan, "£");

        dialog.update(Action::ScrollDown).unwrap();
        dialog.update(Action::ScrollDown).unwrap();
        assert_eq!(dialog.scroll, 2);

        dialog.update(Action::ScrollUp).unwrap();
        assert_eq!(dialog.scroll, 1);

        dialog.update(Action::PageUp).unwrap();
        assert_eq!(dialog.scroll, 0);
    }
}
