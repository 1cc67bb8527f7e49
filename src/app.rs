//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App coordinates between components but does not contain
//! the filtering logic itself - that lives in the model layer.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    category_accent, CategoryDialog, DetailDialog, HelpDialog, HomeComponent, HomeRenderContext,
    QuitDialog, SortDialog,
};
use crate::config::Config;
use crate::model::domain::CatalogState;
use crate::model::modal::{Modal, ModalStack};
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════════════
// Error Message Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Generate user-friendly message when no catalog path is known
fn catalog_not_configured_error() -> String {
    "No catalog file configured.\n\n\
     Pass a path on the command line:\n\
     \x20 shop-tui path/to/products.json\n\n\
     or set \"catalog_path\" in ~/.shop-tui/config.json"
        .to_string()
}

/// Generate user-friendly message for catalog load failures
fn catalog_load_error(error: &str) -> String {
    format!(
        "Could not load the product catalog.\n\n\
         {}\n\n\
         The catalog must be a JSON array of product records:\n\
         \x20 [{{\"id\": 1, \"title\": \"...\", \"price\": 9.99, \"category\": \"...\"}}, ...]\n\n\
         Press 'R' to retry or 'q' to quit.",
        error
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (catalog data)
    pub domain: CatalogState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub detail: DetailDialog,
    pub category_dialog: CategoryDialog,
    pub sort_dialog: SortDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    /// Current config (for currency and the saved catalog path)
    pub config: Option<Config>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    ///
    /// The catalog path comes from the command line when given, otherwise
    /// from the saved config.
    pub fn new(catalog_arg: Option<String>) -> App {
        let config = Config::load();

        let catalog_path = catalog_arg.map(PathBuf::from).or_else(|| {
            config
                .as_ref()
                .filter(|c| !c.catalog_path.is_empty())
                .map(|c| PathBuf::from(&c.catalog_path))
        });

        let mut app = App {
            domain: CatalogState::new(),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            home: HomeComponent::new(),
            detail: DetailDialog::new(),
            category_dialog: CategoryDialog::new(),
            sort_dialog: SortDialog::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            config,
        };

        match catalog_path {
            Some(path) => {
                app.domain.catalog_path = Some(path);
                app.load_catalog();
                if app.error.is_none() {
                    app.remember_catalog_path();
                }
            }
            None => {
                app.error = Some(catalog_not_configured_error());
            }
        }

        app
    }

    /// Currency symbol for price display
    pub fn currency(&self) -> &str {
        self.config.as_ref().map(|c| c.currency.as_str()).unwrap_or("£")
    }

    /// Load (or reload) the catalog from the configured path
    fn load_catalog(&mut self) {
        let path = match &self.domain.catalog_path {
            Some(p) => p.clone(),
            None => {
                self.error = Some(catalog_not_configured_error());
                return;
            }
        };

        self.error = None;

        match services::load_catalog(&path) {
            Ok(products) => {
                self.domain.categories = services::distinct_categories(&products);
                self.domain.products = products;
                self.domain.loaded_at = Some(Local::now());
                self.home.select_first(&self.domain.products);
            }
            Err(e) => {
                self.error = Some(catalog_load_error(&e));
            }
        }
    }

    /// Persist the active catalog path so the next session can skip the
    /// command-line argument
    fn remember_catalog_path(&mut self) {
        let path = match &self.domain.catalog_path {
            Some(p) => p.to_string_lossy().to_string(),
            None => return,
        };

        let mut config = self.config.clone().unwrap_or_default();
        if config.catalog_path != path {
            config.catalog_path = path;
            let _ = config.save();
        }
        self.config = Some(config);
    }

    /// Handle key events when in error state (e.g., missing catalog)
    fn handle_error_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('R') | KeyCode::Char('r') => Ok(Some(Action::ReloadCatalog)),
            KeyCode::Char('q') | KeyCode::Esc => Ok(Some(Action::ForceQuit)),
            _ => Ok(None),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::ProductDetail { .. } => self.detail.handle_key_event(key),
            Modal::CategoryFilter { .. } => self.category_dialog.handle_key_event(key),
            Modal::SortMenu { .. } => self.sort_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::ProductDetail { .. } => self.detail.draw(frame, area)?,
            Modal::CategoryFilter { .. } => self.category_dialog.draw(frame, area)?,
            Modal::SortMenu { .. } => self.sort_dialog.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // If the catalog could not be loaded, only retry/quit make sense
        if self.error.is_some() && self.modals.is_empty() {
            return self.handle_error_key_event(key);
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.home.search_mode {
            self.handle_search_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::MoveUp => self.home.move_up(&self.domain.products),
            Action::MoveDown => self.home.move_down(&self.domain.products),
            Action::MoveLeft => self.home.move_left(&self.domain.products),
            Action::MoveRight => self.home.move_right(&self.domain.products),
            Action::FirstItem => self.home.select_first(&self.domain.products),
            Action::LastItem => self.home.select_last(&self.domain.products),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to the detail overlay)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                if matches!(self.modals.top(), Some(Modal::ProductDetail { .. })) {
                    self.detail.update(action)?;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDetail => {
                if let Some(product) = self.home.selected_product(&self.domain.products) {
                    let product = product.clone();
                    let accent = category_accent(&product.category, &self.domain.categories);
                    let currency = self.currency().to_string();
                    self.detail.set_product(product, accent, &currency);
                    self.modals.push(Modal::ProductDetail { scroll_offset: 0 });
                }
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenCategoryFilter => {
                self.category_dialog
                    .set_categories(&self.domain.categories, self.home.browse.category());
                self.modals.push(Modal::CategoryFilter {
                    selected_index: self.category_dialog.selected_index,
                });
            }
            Action::OpenSortMenu => {
                self.sort_dialog.set_current(self.home.browse.sort());
                self.modals.push(Modal::SortMenu {
                    selected_index: self.sort_dialog.selected_index,
                });
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                if matches!(self.modals.top(), Some(Modal::ProductDetail { .. })) {
                    self.detail.clear();
                }
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {
                // Dialogs already moved their own selection in
                // handle_key_event; nothing to coordinate here.
            }

            // ─────────────────────────────────────────────────────────────────
            // Browse State
            // ─────────────────────────────────────────────────────────────────
            Action::SetCategoryFilter(category) => {
                self.home.set_category(category, &self.domain.products);
                self.modals.pop();
            }
            Action::ClearCategoryFilter => {
                self.home.clear_category(&self.domain.products);
                self.modals.pop();
            }
            Action::SetSortOrder(sort) => {
                self.home.set_sort(sort, &self.domain.products);
                self.modals.pop();
            }
            Action::ToggleView => self.home.toggle_view(),
            Action::ResetBrowse => {
                self.home.reset_browse(&self.domain.products);
                self.status_message = Some("Filters reset".to_string());
            }

            // ─────────────────────────────────────────────────────────────────
            // Search (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.enter_search_mode(),
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::SearchInput(c) => self.home.search_input(c, &self.domain.products),
            Action::SearchBackspace => self.home.search_backspace(&self.domain.products),

            // ─────────────────────────────────────────────────────────────────
            // Catalog
            // ─────────────────────────────────────────────────────────────────
            Action::ReloadCatalog => {
                self.load_catalog();
                if self.error.is_none() {
                    self.remember_catalog_path();
                    self.status_message = Some(format!(
                        "Catalog reloaded ({} products)",
                        self.domain.products.len()
                    ));
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let currency = self.currency().to_string();
        let catalog_path = self
            .domain
            .catalog_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string());

        let ctx = HomeRenderContext {
            products: &self.domain.products,
            categories: &self.domain.categories,
            currency: &currency,
            catalog_path: catalog_path.as_deref(),
            loaded_at: self.domain.loaded_at.as_ref(),
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };

        crate::components::draw_home_screen(frame, area, &mut self.home, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }

        Ok(())
    }
}
