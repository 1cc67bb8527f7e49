//! Home component - Main browsing screen
//!
//! Displays the filter bar, the product grid or list, the status line, and
//! the help bar. Owns the browse state and all list navigation.

use crate::action::Action;
use crate::component::Component;
use crate::components::accent::category_accent;
use crate::components::calculate_main_layout;
use crate::model::{visible_products, BrowseState, Product, SortOrder, ViewMode, CATEGORY_ALL};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Grid card dimensions, borders included
const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main browsing view
/// Owns the browse state and handles product list interactions
pub struct HomeComponent {
    /// Current browse selections (query, category, sort, view)
    pub browse: BrowseState,

    /// List selection state
    pub list_state: ListState,

    /// Whether search mode is active
    pub search_mode: bool,

    /// Columns used by the last grid render; drives row-wise navigation
    grid_columns: usize,

    /// First visible grid row, kept so the selection stays on screen
    grid_offset: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            browse: BrowseState::new(),
            list_state: ListState::default(),
            search_mode: false,
            grid_columns: 1,
            grid_offset: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visible List & Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Products visible under the current browse state
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        visible_products(products, &self.browse)
    }

    /// The product currently under the cursor
    pub fn selected_product<'a>(&self, products: &'a [Product]) -> Option<&'a Product> {
        let index = self.list_state.selected()?;
        self.visible(products).get(index).copied()
    }

    /// Select the first visible product
    pub fn select_first(&mut self, products: &[Product]) {
        self.grid_offset = 0;
        if self.visible(products).is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Select the last visible product
    pub fn select_last(&mut self, products: &[Product]) {
        let len = self.visible(products).len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Move to the next product, wrapping at the end
    pub fn move_right(&mut self, products: &[Product]) {
        let len = self.visible(products).len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if current + 1 >= len { 0 } else { current + 1 };
        self.list_state.select(Some(next));
    }

    /// Move to the previous product, wrapping at the start
    pub fn move_left(&mut self, products: &[Product]) {
        let len = self.visible(products).len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// Move down: next item in list view, next row in grid view
    pub fn move_down(&mut self, products: &[Product]) {
        match self.browse.view() {
            ViewMode::List => self.move_right(products),
            ViewMode::Grid => {
                let len = self.visible(products).len();
                if len == 0 {
                    return;
                }
                let columns = self.grid_columns.max(1);
                let current = self.list_state.selected().unwrap_or(0);
                let next = current + columns;
                let next = if next < len {
                    next
                } else if current / columns < (len - 1) / columns {
                    // Shorter final row: land on the last product
                    len - 1
                } else {
                    current
                };
                self.list_state.select(Some(next));
            }
        }
    }

    /// Move up: previous item in list view, previous row in grid view
    pub fn move_up(&mut self, products: &[Product]) {
        match self.browse.view() {
            ViewMode::List => self.move_left(products),
            ViewMode::Grid => {
                let len = self.visible(products).len();
                if len == 0 {
                    return;
                }
                let columns = self.grid_columns.max(1);
                let current = self.list_state.selected().unwrap_or(0);
                let prev = current.saturating_sub(columns);
                self.list_state.select(Some(prev));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter search mode
    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Exit search mode; the query stays applied
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Add character to the search query
    pub fn search_input(&mut self, c: char, products: &[Product]) {
        let mut query = self.browse.query().to_string();
        query.push(c);
        self.browse.set_query(query);
        self.select_first(products);
    }

    /// Remove the last character from the search query
    pub fn search_backspace(&mut self, products: &[Product]) {
        let mut query = self.browse.query().to_string();
        query.pop();
        self.browse.set_query(query);
        self.select_first(products);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filters & View
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a category filter
    pub fn set_category(&mut self, category: String, products: &[Product]) {
        self.browse.set_category(category);
        self.select_first(products);
    }

    /// Clear the category filter
    pub fn clear_category(&mut self, products: &[Product]) {
        self.browse.set_category(CATEGORY_ALL);
        self.select_first(products);
    }

    /// Apply a sort order
    pub fn set_sort(&mut self, sort: SortOrder, products: &[Product]) {
        self.browse.set_sort(sort);
        self.select_first(products);
    }

    /// Toggle between grid and list view. The visible list is unchanged, so
    /// the selection is kept.
    pub fn toggle_view(&mut self) {
        self.browse.set_view(self.browse.view().toggled());
    }

    /// Restore all browse selections to their defaults
    pub fn reset_browse(&mut self, products: &[Product]) {
        self.browse.reset();
        self.search_mode = false;
        self.select_first(products);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveRight),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Browsing
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('c') => Some(Action::OpenCategoryFilter),
            KeyCode::Char('s') => Some(Action::OpenSortMenu),
            KeyCode::Char('v') => Some(Action::ToggleView),
            KeyCode::Char('x') => Some(Action::ResetBrowse),
            KeyCode::Enter => Some(Action::OpenDetail),

            // Catalog
            KeyCode::Char('R') => Some(Action::ReloadCatalog),

            // Dialogs
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Updates are handled by App which has access to the catalog;
        // App calls the navigation methods directly.
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub products: &'a [Product],
    pub categories: &'a [String],
    pub currency: &'a str,
    pub catalog_path: Option<&'a str>,
    pub loaded_at: Option<&'a DateTime<Local>>,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_filter_bar(frame, layout.filter_bar, home, ctx);

    if let Some(error) = ctx.error {
        render_error(frame, layout.body, error);
    } else {
        match home.browse.view() {
            ViewMode::Grid => render_product_grid(frame, layout.body, home, ctx),
            ViewMode::List => render_product_list(frame, layout.body, home, ctx),
        }
    }

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_filter_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, ctx: &HomeRenderContext) {
    let query = home.browse.query();
    let search_line = if home.search_mode {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}_", query),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if query.is_empty() {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
            Span::styled("press / to search", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
            Span::styled(query.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let category = home.browse.category();
    let category_span = if category == CATEGORY_ALL {
        Span::styled("All categories", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            category.to_string(),
            Style::default()
                .fg(category_accent(category, ctx.categories))
                .add_modifier(Modifier::BOLD),
        )
    };

    let visible_count = home.visible(ctx.products).len();
    let filter_line = Line::from(vec![
        category_span,
        Span::styled("  │  Sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            home.browse.sort().label().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("  │  View: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            home.browse.view().name().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  │  {}/{} products", visible_count, ctx.products.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(vec![search_line, filter_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" shop-tui ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_product_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let visible = visible_products(ctx.products, &home.browse);

    if visible.is_empty() {
        render_no_products(frame, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|product| {
            let accent = category_accent(&product.category, ctx.categories);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>10}  ", product.display_price(ctx.currency)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("{}  ", product.stars()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("{:<18}", truncate_to_width(&product.category, 16)),
                    Style::default().fg(accent),
                ),
                Span::styled(product.title.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Products ({}) ", visible.len()))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);
}

fn render_product_grid(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let visible = visible_products(ctx.products, &home.browse);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Products ({}) ", visible.len()))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No products found.",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let columns = (inner.width / CARD_WIDTH).max(1) as usize;
    home.grid_columns = columns;

    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = visible.len().div_ceil(columns);

    let selected = home
        .list_state
        .selected()
        .unwrap_or(0)
        .min(visible.len() - 1);
    let selected_row = selected / columns;

    // Keep the selected row on screen
    if selected_row < home.grid_offset {
        home.grid_offset = selected_row;
    } else if selected_row >= home.grid_offset + visible_rows {
        home.grid_offset = selected_row + 1 - visible_rows;
    }
    if home.grid_offset > total_rows.saturating_sub(visible_rows) {
        home.grid_offset = total_rows.saturating_sub(visible_rows);
    }

    for row in 0..visible_rows {
        let product_row = home.grid_offset + row;
        if product_row >= total_rows {
            break;
        }
        for col in 0..columns {
            let index = product_row * columns + col;
            if index >= visible.len() {
                break;
            }
            let cell = Rect::new(
                inner.x + (col as u16) * CARD_WIDTH,
                inner.y + (row as u16) * CARD_HEIGHT,
                CARD_WIDTH,
                CARD_HEIGHT,
            );
            render_card(frame, cell, visible[index], index == selected, ctx);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    product: &Product,
    selected: bool,
    ctx: &HomeRenderContext,
) {
    let border_style = if selected {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let accent = category_accent(&product.category, ctx.categories);

    let title_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&product.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_to_width(&product.category, inner_width),
            Style::default().fg(accent),
        )),
        Line::from(vec![
            Span::styled(
                product.display_price(ctx.currency),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} {:.1}", product.stars(), product.rate()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}

fn render_no_products(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No products found.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Products (0) ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let lines: Vec<Line> = error
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let mut spans = vec![];

    if ctx.error.is_some() {
        spans.push(Span::styled(
            " Catalog unavailable ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else {
        if let Some(path) = ctx.catalog_path {
            spans.push(Span::styled(
                format!(" {} ", path),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(
            format!("{} products", ctx.products.len()),
            Style::default().fg(Color::DarkGray),
        ));

        if let Some(loaded) = ctx.loaded_at {
            spans.push(Span::styled(
                format!("  loaded {}", loaded.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ));
        }

        if let Some(status) = ctx.status_message {
            spans.push(Span::styled(
                format!("  {}", status),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let help_spans = if home.search_mode {
        vec![
            Span::styled(
                " Esc/Enter ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Done  "),
            Span::styled(
                " Backspace ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Delete  "),
            Span::styled(
                format!("Search: {}", home.browse.query()),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            Span::styled(
                " q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit "),
            Span::styled(
                " / ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Search "),
            Span::styled(
                " c ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Category "),
            Span::styled(
                " s ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Sort "),
            Span::styled(
                " v ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("View "),
            Span::styled(
                " x ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Reset "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Details "),
            Span::styled(
                " R ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Reload "),
            Span::styled(
                " ? ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Help"),
        ]
    };

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// Truncate a string to a display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;

    fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Some(Rating {
                rate: 4.0,
                count: 5,
            }),
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            product(1, "Alpha Backpack", "bags", 100.0),
            product(2, "Beta Jacket", "clothing", 150.0),
            product(3, "Gamma Backpack", "bags", 80.0),
            product(4, "Delta Shirt", "clothing", 20.0),
            product(5, "Epsilon Bag", "bags", 45.0),
        ]
    }

    #[test]
    fn test_list_navigation_wraps() {
        let products = sample_products();
        let mut home = HomeComponent::new();
        home.browse.set_view(ViewMode::List);
        home.select_first(&products);

        home.move_up(&products);
        assert_eq!(home.list_state.selected(), Some(4));

        home.move_down(&products);
        assert_eq!(home.list_state.selected(), Some(0));
    }

    #[test]
    fn test_grid_navigation_moves_by_row() {
        let products = sample_products();
        let mut home = HomeComponent::new();
        home.grid_columns = 2;
        home.select_first(&products);

        home.move_down(&products);
        assert_eq!(home.list_state.selected(), Some(2));

        home.move_down(&products);
        assert_eq!(home.list_state.selected(), Some(4));

        // Last row: stays put
        home.move_down(&products);
        assert_eq!(home.list_state.selected(), Some(4));

        home.move_up(&products);
        assert_eq!(home.list_state.selected(), Some(2));
    }

    #[test]
    fn test_grid_move_down_into_shorter_row() {
        let products = sample_products();
        let mut home = HomeComponent::new();
        home.grid_columns = 2;
        home.list_state.select(Some(3));

        home.move_down(&products);
        assert_eq!(home.list_state.selected(), Some(4));
    }

    #[test]
    fn test_search_input_reselects_first_match() {
        let products = sample_products();
        let mut home = HomeComponent::new();
        home.select_first(&products);
        home.list_state.select(Some(3));

        home.enter_search_mode();
        for c in "backpack".chars() {
            home.search_input(c, &products);
        }

        assert_eq!(home.browse.query(), "backpack");
        let selected = home.selected_product(&products).unwrap();
        assert_eq!(selected.title, "Alpha Backpack");
    }

    #[test]
    fn test_search_backspace_updates_query() {
        let products = sample_products();
        let mut home = HomeComponent::new();
        home.search_input('z', &products);
        assert_eq!(home.list_state.selected(), None);

        home.search_backspace(&products);
        assert_eq!(home.browse.query(), "");
        assert_eq!(home.list_state.selected(), Some(0));
    }

    #[test]
    fn test_unknown_category_clears_selection() {
        let products = sample_products();
        let mut home = HomeComponent::new();
        home.select_first(&products);

        home.set_category("shoes".to_string(), &products);
        assert!(home.visible(&products).is_empty());
        assert_eq!(home.list_state.selected(), None);
        assert!(home.selected_product(&products).is_none());
    }

    #[test]
    fn test_reset_browse_restores_defaults() {
        let products = sample_products();
        let mut home = HomeComponent::new();
        home.search_input('x', &products);
        home.set_category("bags".to_string(), &products);
        home.set_sort(SortOrder::PriceAsc, &products);
        home.toggle_view();

        home.reset_browse(&products);

        assert_eq!(home.browse, BrowseState::default());
        assert_eq!(home.list_state.selected(), Some(0));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }
}
