//! `wayfarer` viewer: opens a window, feeds keyboard and touch input to a
//! [`Showcase`] and logs what the navigation core does.
//!
//! ```text
//! wayfarer [NODES.json] [OPTIONS.toml]
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use wayfarer::error::WayfarerError;
use wayfarer::graph::NavigationGraph;
use wayfarer::input::{InputEvent, NullGamepad};
use wayfarer::options::Options;
use wayfarer::showcase::{DetailContent, Phase, Showcase, StaticDetails};
use wayfarer::util::frame_timing::FrameClock;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

const DEMO_GRAPH: &str = include_str!("../assets/demo_graph.json");

/// Longest frame delta fed to the showcase.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

struct ViewerApp {
    window: Option<Arc<Window>>,
    showcase: Showcase,
    clock: FrameClock,
    last_phase: Phase,
}

impl ViewerApp {
    fn new(showcase: Showcase) -> Self {
        Self {
            window: None,
            last_phase: showcase.phase(),
            showcase,
            clock: FrameClock::new(MAX_FRAME_DELTA),
        }
    }

    fn frame(&mut self) {
        let dt = self.clock.tick();
        self.showcase.frame(dt);

        for event in self.showcase.drain_events() {
            log::info!("{event:?}");
        }
        let phase = self.showcase.phase();
        if phase != self.last_phase {
            log::info!("phase {:?} -> {phase:?}", self.last_phase);
            self.last_phase = phase;
        }
        if let Some(window) = &self.window {
            window.set_title(&format!(
                "wayfarer - {} - {phase:?} - {:.0} fps",
                self.showcase.avatar().current_node(),
                self.clock.fps()
            ));
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title("wayfarer");
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.showcase.resize(size.width, size.height);
                window.request_redraw();
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.showcase.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => {
                self.showcase.handle_event(&InputEvent::FocusLost);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = InputEvent::from_winit_key(&event) {
                    self.showcase.handle_event(&input);
                }
            }
            WindowEvent::Touch(touch) => {
                self.showcase
                    .handle_event(&InputEvent::from_winit_touch(&touch));
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => (),
        }
    }
}

/// Every payload gets a placeholder link and a small carousel.
fn demo_details(graph: &NavigationGraph) -> StaticDetails {
    graph.iter().fold(StaticDetails::new(), |details, node| {
        let key = node.payload().as_str();
        details.with(
            key,
            DetailContent {
                links: vec![
                    format!("https://example.org/{key}"),
                    format!("https://example.org/{key}/source"),
                ],
                image_count: 3,
            },
        )
    })
}

fn run() -> Result<(), WayfarerError> {
    let mut args = std::env::args().skip(1);
    let graph = match args.next() {
        Some(path) => NavigationGraph::load(Path::new(&path))?,
        None => NavigationGraph::from_json(DEMO_GRAPH)?,
    };
    let options = match args.next() {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };
    let start = graph
        .iter()
        .next()
        .map(|n| n.id().clone())
        .ok_or_else(|| WayfarerError::GraphParse("dataset has no nodes".to_owned()))?;

    let details = demo_details(&graph);
    let showcase = Showcase::new(
        graph,
        &start,
        options,
        Box::new(NullGamepad),
        Box::new(details),
        16.0 / 9.0,
    )?;

    let mut app = ViewerApp::new(showcase);
    let event_loop = EventLoop::new().map_err(|e| WayfarerError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run_app(&mut app)
        .map_err(|e| WayfarerError::Viewer(e.to_string()))
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
