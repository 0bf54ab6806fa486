//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::analysis_screen::AnalysisScreen;
use super::creator_screen::CreatorScreen;
use super::dashboard_screen::DashboardScreen;
use super::market_screen::MarketScreen;
use super::notification_popup::NotificationPopup;
use super::router::{View, route};
use crate::application::use_cases::{
    DASHBOARD_LOAD_FAILED, MARKET_LOAD_FAILED, apply_suggestions,
};
use crate::application::wizard::NextOutcome;
use crate::application::{
    AppStore, CreateProductUseCase, GenerateSuggestionsUseCase, InitialLoadOutcome,
    LoadDashboardUseCase, LoadInitialProductsUseCase, LoadMarketIntelligenceUseCase,
    NotificationManager, Wizard,
};
use crate::domain::entities::{Product, WizardForm};
use crate::domain::keybinding::{Action, global_keybinds, resolve};
use crate::domain::ports::{FlavorDataPort, NotificationPort, TrendsQuery};
use crate::domain::Screen;
use crate::presentation::events::{AppMessage, EventResult, LoadTicket, is_press};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle, NavBar, NavBarStyle};

const APP_TITLE: &str = "FlavorForge";
const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(250);

/// Runtime knobs resolved from configuration.
#[derive(Clone)]
pub struct AppOptions {
    /// Screen shown at startup.
    pub initial_screen: Screen,
    /// Accent color string; see [`crate::presentation::theme::parse_color`].
    pub accent_color: String,
    /// How long each popup stays up.
    pub notification_duration: Duration,
    /// Port that also receives every popup, if any.
    pub desktop_notifications: Option<Arc<dyn NotificationPort>>,
    /// Whether created products are sent to the service.
    pub persist_created: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_screen: Screen::Dashboard,
            accent_color: "#F97316".to_string(),
            notification_duration: Duration::from_secs(5),
            desktop_notifications: None,
            persist_created: false,
        }
    }
}

/// Terminal application: owns the state, the views and the background fetches.
pub struct App {
    store: AppStore,
    wizard: Wizard,
    notifications: NotificationManager,
    theme: Theme,

    dashboard: DashboardScreen,
    analysis: AnalysisScreen,
    creator: CreatorScreen,
    market: MarketScreen,

    load_dashboard: LoadDashboardUseCase,
    load_market: LoadMarketIntelligenceUseCase,
    load_products: LoadInitialProductsUseCase,
    generate_suggestions: GenerateSuggestionsUseCase,
    create_product: CreateProductUseCase,

    mounted: Option<View>,
    generation: u64,
    view_task: Option<JoinHandle<()>>,
    suggestion_generation: u64,
    suggestion_task: Option<JoinHandle<()>>,

    message_tx: mpsc::UnboundedSender<AppMessage>,
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
    running: bool,
}

impl App {
    /// Builds the app over a data port. Nothing is fetched until the event loop starts.
    #[must_use]
    pub fn new(data: Arc<dyn FlavorDataPort>, options: AppOptions) -> Self {
        let theme = Theme::new(&options.accent_color);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut notifications = NotificationManager::new(options.notification_duration);
        if let Some(port) = options.desktop_notifications {
            notifications = notifications.with_forwarding(port);
        }

        let mut create_product = CreateProductUseCase::new();
        if options.persist_created {
            create_product = create_product.with_persistence(data.clone());
        }

        Self {
            store: AppStore::new().with_screen(options.initial_screen),
            wizard: Wizard::new(),
            notifications,
            theme,
            dashboard: DashboardScreen::new(),
            analysis: AnalysisScreen::new(&theme),
            creator: CreatorScreen::new(),
            market: MarketScreen::new(),
            load_dashboard: LoadDashboardUseCase::new(data.clone()),
            load_market: LoadMarketIntelligenceUseCase::new(data.clone()),
            load_products: LoadInitialProductsUseCase::new(data.clone()),
            generate_suggestions: GenerateSuggestionsUseCase::new(data),
            create_product,
            mounted: None,
            generation: 0,
            view_task: None,
            suggestion_generation: 0,
            suggestion_task: None,
            message_tx,
            message_rx,
            running: true,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start();
        self.run_event_loop(terminal).await?;
        self.shutdown();
        info!("Application exiting normally");
        Ok(())
    }

    /// Kicks off the one-time product load and mounts the initial view.
    fn start(&mut self) {
        if self.store.begin_initial_load() {
            let use_case = self.load_products.clone();
            let tx = self.message_tx.clone();
            tokio::spawn(async move {
                let result = use_case.execute().await;
                let _ = tx.send(AppMessage::InitialProductsLoaded(result));
            });
        }
        self.sync_view();
    }

    fn shutdown(&mut self) {
        if let Some(task) = self.view_task.take() {
            task.abort();
        }
        if let Some(task) = self.suggestion_task.take() {
            task.abort();
        }
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let terminal_event = terminal_events.next();

            tokio::select! {
                Some(message) = self.message_rx.recv() => {
                    self.handle_message(message);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = notification_interval.tick() => {
                    if self.notifications.tick() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(..) => EventResult::Consumed,
            _ => EventResult::Continue,
        }
    }

    fn current_view(&self) -> View {
        route(self.store.screen())
    }

    /// Mounts the routed view when the screen changed, tearing down the
    /// previous one first.
    fn sync_view(&mut self) {
        let view = self.current_view();
        if self.mounted == Some(view) {
            return;
        }

        if let Some(task) = self.view_task.take() {
            task.abort();
            self.store.set_loading(false);
            debug!(generation = self.generation, "Cancelled view fetch");
        }
        if self.mounted == Some(View::Creator) {
            self.cancel_suggestions();
        }

        self.generation += 1;
        self.mounted = Some(view);
        debug!(?view, generation = self.generation, "Mounting view");

        match view {
            View::Dashboard => {
                self.dashboard.clear();
                self.spawn_dashboard_fetch();
            }
            View::MarketIntelligence => {
                self.market.clear();
                self.spawn_market_fetch();
            }
            View::ProductAnalysis => self.analysis.sync(&self.store),
            View::Creator => self.creator.sync(&self.wizard),
        }
    }

    fn ticket(&self) -> LoadTicket {
        LoadTicket::new(self.store.screen().clone(), self.generation)
    }

    fn spawn_dashboard_fetch(&mut self) {
        self.store.begin_fetch();
        let ticket = self.ticket();
        let use_case = self.load_dashboard.clone();
        let tx = self.message_tx.clone();
        self.view_task = Some(tokio::spawn(async move {
            let result = use_case.execute().await;
            let _ = tx.send(AppMessage::DashboardLoaded { ticket, result });
        }));
    }

    fn spawn_market_fetch(&mut self) {
        self.store.begin_fetch();
        let ticket = self.ticket();
        let use_case = self.load_market.clone();
        let tx = self.message_tx.clone();
        self.view_task = Some(tokio::spawn(async move {
            let result = use_case.execute(TrendsQuery::default()).await;
            let _ = tx.send(AppMessage::MarketLoaded { ticket, result });
        }));
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && self.mounted == Some(route(&ticket.screen))
    }

    fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::DashboardLoaded { ticket, result } => {
                if !self.is_current(&ticket) {
                    debug!(?ticket, "Discarding stale dashboard result");
                    return;
                }
                self.view_task = None;
                self.store.finish_fetch(&result, DASHBOARD_LOAD_FAILED);
                self.dashboard.set_view(result.ok());
            }
            AppMessage::MarketLoaded { ticket, result } => {
                if !self.is_current(&ticket) {
                    debug!(?ticket, "Discarding stale market result");
                    return;
                }
                self.view_task = None;
                self.store.finish_fetch(&result, MARKET_LOAD_FAILED);
                self.market.set_view(result.ok());
            }
            AppMessage::InitialProductsLoaded(result) => {
                if let InitialLoadOutcome::Failed(message) =
                    self.store.complete_initial_load(result)
                {
                    self.notifications.error(message);
                }
            }
            AppMessage::SuggestionsLoaded { generation, result } => {
                if generation != self.suggestion_generation {
                    debug!(generation, "Discarding stale suggestions");
                    return;
                }
                self.suggestion_task = None;
                self.store.set_loading(false);
                apply_suggestions(&mut self.wizard, &mut self.notifications, result);
                self.creator.sync(&self.wizard);
            }
            AppMessage::ProductPersisted { name, result } => match result {
                Ok(Some(saved)) => info!(id = %saved.id(), %name, "Product saved to backend"),
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, %name, "Product was not saved to backend");
                    self.notifications
                        .warn(format!("Product \"{name}\" could not be saved to the server."));
                }
            },
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !is_press(&key) {
            return EventResult::Continue;
        }

        let view = self.current_view();
        if view == View::ProductAnalysis && self.analysis.is_search_focused() {
            let result = self.analysis.handle_key(key, &mut self.store);
            if result != EventResult::Continue {
                return result;
            }
        }

        match resolve(&key, &view.keybinds()) {
            Some(action) => self.handle_action(action),
            None => EventResult::Continue,
        }
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        let view = self.current_view();
        let result = match action {
            Action::Quit => {
                self.running = false;
                return EventResult::Exit;
            }
            Action::NextScreen => self.navigate(self.store.screen().next()),
            Action::PreviousScreen => self.navigate(self.store.screen().previous()),
            Action::GoDashboard => self.navigate(Screen::Dashboard),
            Action::GoCreator => self.navigate(Screen::Creator),
            Action::GoAnalysis | Action::ViewAllProducts => {
                self.navigate(Screen::ProductAnalysis)
            }
            Action::GoMarket => self.navigate(Screen::MarketIntelligence),
            Action::Refresh => self.refresh(view),
            Action::WizardNext => self.advance_wizard(),
            Action::WizardPrevious => {
                self.cancel_suggestions();
                self.wizard.previous();
                EventResult::Consumed
            }
            Action::CreateProduct => self.create(),
            Action::NavigateUp | Action::NavigateDown | Action::Select => match view {
                View::Creator => self.creator.handle_action(action, &mut self.wizard),
                View::ProductAnalysis => self.analysis.handle_action(action, &mut self.store),
                View::Dashboard | View::MarketIntelligence => EventResult::Continue,
            },
            Action::FocusSearch | Action::CycleCategoryFilter | Action::ClearFilters => {
                self.analysis.handle_action(action, &mut self.store)
            }
        };

        self.sync_view();
        result
    }

    fn navigate(&mut self, screen: Screen) -> EventResult {
        self.store.set_screen(screen);
        EventResult::Consumed
    }

    fn refresh(&mut self, view: View) -> EventResult {
        if !view.fetches_on_mount() {
            return EventResult::Continue;
        }
        self.mounted = None;
        EventResult::Consumed
    }

    fn advance_wizard(&mut self) -> EventResult {
        match self.wizard.next() {
            NextOutcome::FetchSuggestions(form) => self.spawn_suggestions(form),
            NextOutcome::Advanced(step) => debug!(?step, "Wizard advanced"),
            NextOutcome::Invalid(_) | NextOutcome::Busy | NextOutcome::Unchanged => {}
        }
        self.creator.sync(&self.wizard);
        EventResult::Consumed
    }

    fn spawn_suggestions(&mut self, form: WizardForm) {
        self.store.set_loading(true);
        self.suggestion_generation += 1;
        let generation = self.suggestion_generation;
        let use_case = self.generate_suggestions.clone();
        let tx = self.message_tx.clone();
        self.suggestion_task = Some(tokio::spawn(async move {
            let result = use_case.execute(&form).await;
            let _ = tx.send(AppMessage::SuggestionsLoaded { generation, result });
        }));
    }

    /// Abandons an in-flight suggestion request; the wizard keeps its step.
    fn cancel_suggestions(&mut self) {
        if let Some(task) = self.suggestion_task.take() {
            task.abort();
            self.suggestion_generation += 1;
        }
        if self.wizard.cancel_fetch() {
            self.store.set_loading(false);
            debug!("Suggestion request abandoned");
        }
    }

    fn create(&mut self) -> EventResult {
        match self
            .create_product
            .execute(&mut self.wizard, &mut self.store, &mut self.notifications)
        {
            Ok(product) => {
                self.creator.sync(&self.wizard);
                self.spawn_persist(product);
            }
            Err(e) => debug!(error = %e, "Create refused"),
        }
        EventResult::Consumed
    }

    fn spawn_persist(&self, product: Product) {
        if !self.create_product.persists() {
            return;
        }
        let use_case = self.create_product.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = use_case.persist(&product).await;
            let _ = tx.send(AppMessage::ProductPersisted {
                name: product.name().to_string(),
                result,
            });
        });
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [nav_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let view = self.current_view();
        let buf = frame.buffer_mut();

        NavBar::new(APP_TITLE, self.store.screen())
            .loading(self.store.is_loading())
            .style(NavBarStyle::from_theme(&self.theme))
            .render(nav_area, buf);

        match view {
            View::Dashboard => self.dashboard.render(content_area, buf, &self.store, &self.theme),
            View::Creator => self.creator.render(content_area, buf, &self.wizard, &self.theme),
            View::ProductAnalysis => {
                self.analysis.render(content_area, buf, &self.store, &self.theme);
            }
            View::MarketIntelligence => {
                self.market.render(content_area, buf, &self.store, &self.theme);
            }
        }

        let mut bindings = view.keybinds();
        bindings.extend(global_keybinds());
        let product_count = format!("{} products", self.store.products().len());
        FooterBar::new(&bindings)
            .context(view.context_label())
            .right_info(Some(product_count.as_str()))
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer_area, buf);

        if let Some(notification) = self.notifications.current_notification() {
            NotificationPopup::new(notification, &self.theme).render(area, buf);
        }
    }
}
