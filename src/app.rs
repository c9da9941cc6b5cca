//! Application orchestration layer
//!
//! Wires the document, navigator, render coordinator and canvas together. Commands move the
//! navigator; every resulting page goes through the coordinator on its own task so requests
//! that arrive while a render is running are coalesced rather than queued.

pub mod runtime;
pub mod view;

use crate::config::ViewerConfig;
use crate::document::{Document, LopdfLoader, PageNumber};
use crate::error::Result;
use crate::input::ViewerAction;
use crate::navigation::Navigator;
use crate::render::{
    Canvas, PageRenderer, RenderCoordinator, RenderEvent, RenderReport, SurfaceRenderer,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

pub use view::{StatusLine, ViewState};

/// Render capability as stored by the viewer
pub type DynRenderer = Arc<dyn PageRenderer>;

enum Step {
    Action(Option<ViewerAction>),
    Render(RenderEvent),
}

/// Single-document viewer
pub struct Viewer {
    navigator: Navigator,
    coordinator: Arc<RenderCoordinator<DynRenderer>>,
    canvas: Canvas,
    view_state: ViewState,
    snapshot: Option<PathBuf>,
    events: UnboundedReceiver<RenderEvent>,
    renders: Vec<JoinHandle<RenderReport>>,
}

impl Viewer {
    /// Wire a viewer around an already loaded document and render capability
    pub fn new(
        path: &Path,
        document: Arc<dyn Document>,
        renderer: DynRenderer,
        canvas: Canvas,
        config: &ViewerConfig,
    ) -> Result<Self> {
        config.validate()?;

        let (events_tx, events) = mpsc::unbounded_channel();
        let page_count = document.page_count();
        let coordinator = RenderCoordinator::new(renderer, document, config.fit())
            .with_events(events_tx);

        Ok(Self {
            navigator: Navigator::new(page_count),
            coordinator: Arc::new(coordinator),
            canvas,
            view_state: ViewState::new(path, page_count),
            snapshot: config.snapshot.clone(),
            events,
            renders: Vec::new(),
        })
    }

    /// Load `path` through lopdf and draw onto a fresh canvas
    pub async fn open(path: &Path, config: &ViewerConfig) -> Result<Self> {
        let document: Arc<dyn Document> = Arc::new(LopdfLoader::new().load_document(path).await?);
        let canvas = Canvas::default();
        let renderer: DynRenderer =
            Arc::new(SurfaceRenderer::new(Arc::clone(&document), canvas.clone()));
        Self::new(path, document, renderer, canvas, config)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn coordinator(&self) -> &Arc<RenderCoordinator<DynRenderer>> {
        &self.coordinator
    }

    /// Clamp `page` into the document, make it current and request a render
    pub fn go_to(&mut self, page: i64) -> PageNumber {
        let page = self.navigator.clamp_and_go(page);
        self.request(page);
        page
    }

    /// Run until `quit` or end of input, then wait for outstanding renders
    pub async fn run<W: Write>(
        &mut self,
        initial_page: i64,
        mut actions: UnboundedReceiver<ViewerAction>,
        out: &mut W,
    ) -> Result<()> {
        self.go_to(initial_page);

        loop {
            let step = tokio::select! {
                action = actions.recv() => Step::Action(action),
                Some(event) = self.events.recv() => Step::Render(event),
            };

            match step {
                Step::Action(Some(action)) => {
                    if !self.handle_action(action, out)? {
                        break;
                    }
                }
                Step::Action(None) => break,
                Step::Render(event) => self.handle_event(event, out)?,
            }
        }

        self.settle(out).await
    }

    /// Apply one action; returns false if the viewer should stop
    pub fn handle_action<W: Write>(&mut self, action: ViewerAction, out: &mut W) -> Result<bool> {
        match action {
            ViewerAction::Quit => return Ok(false),
            ViewerAction::NextPage => {
                let page = self.navigator.next();
                self.request(page);
            }
            ViewerAction::PreviousPage => {
                let page = self.navigator.previous();
                self.request(page);
            }
            ViewerAction::FirstPage => {
                let page = self.navigator.first();
                self.request(page);
            }
            ViewerAction::LastPage => {
                let page = self.navigator.last();
                self.request(page);
            }
            ViewerAction::GoToPage(page) => {
                self.go_to(page);
            }
            ViewerAction::Resize { width } => {
                self.coordinator.set_container_width(width);
                self.request(self.navigator.current());
            }
            ViewerAction::Refresh => self.request(self.navigator.current()),
            ViewerAction::Status => writeln!(out, "{}", self.view_state.format_status_line())?,
            ViewerAction::InvalidInput(input) => {
                self.view_state
                    .status_line
                    .set_message(format!("Unknown command: {input}"));
                writeln!(out, "{}", self.view_state.format_status_line())?;
            }
            ViewerAction::NoAction => {}
        }
        Ok(true)
    }

    /// Wait for every spawned render, then apply the events they produced
    pub async fn settle<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let renders = std::mem::take(&mut self.renders);
        for outcome in futures::future::join_all(renders).await {
            match outcome {
                Ok(report) if report.is_clean() => {
                    if let Some(page) = report.last_rendered() {
                        log::debug!("renders settled on page {page}");
                    }
                }
                Ok(report) => log::warn!(
                    "{} of {} renders failed",
                    report.failures.len(),
                    report.failures.len() + report.rendered.len()
                ),
                Err(err) => log::warn!("render task ended abnormally: {err}"),
            }
        }

        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event, out)?;
        }
        Ok(())
    }

    fn request(&mut self, page: PageNumber) {
        self.view_state.current_page = page;
        self.view_state.status_line.clear_message();
        self.renders.retain(|handle| !handle.is_finished());

        // Claimed here, on the command path, so pages reach the coordinator in command order
        let Some(claim) = self.coordinator.claim(page) else {
            return;
        };
        let coordinator = Arc::clone(&self.coordinator);
        self.renders
            .push(tokio::spawn(async move { coordinator.drive(claim).await }));
    }

    fn handle_event<W: Write>(&mut self, event: RenderEvent, out: &mut W) -> Result<()> {
        match event {
            RenderEvent::Started { page, scale } => {
                log::debug!("rendering page {page} at scale {scale:.3}");
                self.view_state.loading = true;
            }
            RenderEvent::Finished { page } => {
                self.view_state.loading = false;
                self.view_state.shown_page = Some(page);
                if let Some(path) = &self.snapshot {
                    if let Err(err) = self.canvas.save_png(path) {
                        log::warn!("snapshot to {} failed: {err}", path.display());
                        self.view_state
                            .status_line
                            .set_message(format!("snapshot failed: {err}"));
                    }
                }
                writeln!(out, "{}", self.view_state.format_status_line())?;
            }
            RenderEvent::Failed { page, message } => {
                self.view_state.loading = false;
                self.view_state
                    .status_line
                    .set_message(format!("page {page} failed: {message}"));
                writeln!(out, "{}", self.view_state.format_status_line())?;
            }
        }
        Ok(())
    }
}
