//! Main TUI application state and logic

use crate::config::{random_values, Config};
use crate::playback::{PlaybackError, Player, Speed};
use crate::sorting::{generate_sorting_trace, Algorithm, SortingStep};
use crate::structures::stack::DEFAULT_STACK;
use crate::structures::{MemoryLayout, Operation, QueueModel, StackModel};
use crate::traversal::{generate_traversal_trace, Graph, TraversalMode, VisitedState};
use crate::ui::panes::{
    render_bars_pane, render_details_pane, render_graph_pane, render_memory_pane,
    render_status_bar, render_tree_pane, GraphRenderData, MemoryRenderData, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Speed change per `+`/`-` press
const SPEED_STEP: u8 = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Sorting,
    Traversal,
    Memory,
}

impl FocusedPane {
    /// Move focus to the next pane (sorting -> traversal -> memory)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Sorting => FocusedPane::Traversal,
            FocusedPane::Traversal => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Sorting,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Sorting => FocusedPane::Memory,
            FocusedPane::Traversal => FocusedPane::Sorting,
            FocusedPane::Memory => FocusedPane::Traversal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FocusedPane::Sorting => "Sort",
            FocusedPane::Traversal => "Graph",
            FocusedPane::Memory => "Memory",
        }
    }
}

/// A playback request from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Forward,
    Backward,
    ForwardBy(usize),
    Start,
    End,
    Toggle,
}

fn apply_nav<S>(player: &mut Player<S>, nav: Nav, now: Instant) -> Result<String, PlaybackError> {
    if player.timeline.is_empty() {
        return Err(PlaybackError::Empty);
    }

    match nav {
        Nav::Forward => {
            player.pause();
            player.timeline.step_forward()?;
            Ok("Stepped forward".to_string())
        }
        Nav::Backward => {
            player.pause();
            player.timeline.step_backward()?;
            Ok("Stepped backward".to_string())
        }
        Nav::ForwardBy(n) => {
            player.pause();
            let stepped = player.timeline.step_forward_by(n);
            Ok(format!("Stepped forward {} step(s)", stepped))
        }
        Nav::Start => {
            player.reset();
            Ok("Jumped to start".to_string())
        }
        Nav::End => {
            player.pause();
            player.timeline.jump_to_end();
            Ok("Jumped to end".to_string())
        }
        Nav::Toggle => {
            player.toggle(now);
            if player.is_playing() {
                Ok("Playing...".to_string())
            } else {
                Ok("Paused".to_string())
            }
        }
    }
}

/// Trace steps for the traversal pane, or the reason there are none
fn traversal_steps(graph: &Graph, mode: TraversalMode) -> Result<Vec<Vec<VisitedState>>, String> {
    generate_traversal_trace(graph, mode)
        .map(|trace| trace.steps)
        .map_err(|e| {
            warn!(mode = mode.name(), error = %e, "traversal failed");
            format!("Traversal failed: {}", e)
        })
}

/// The main application state
pub struct App {
    /// Input array of the sorting trace
    pub values: Vec<i32>,
    pub algorithm: Algorithm,
    pub sorting: Player<SortingStep>,

    pub graph: Graph,
    pub traversal_mode: TraversalMode,
    pub traversal: Player<Vec<VisitedState>>,

    pub layout: MemoryLayout,
    pub stack: StackModel,
    pub queue: QueueModel,
    pub last_operation: Option<Operation>,

    /// Currently focused pane; playback keys act on it
    pub focused_pane: FocusedPane,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    rng: ChaCha8Rng,
    random_size: usize,
}

impl App {
    /// Build the initial traces from the command-line configuration
    pub fn new(config: &Config, mut rng: ChaCha8Rng) -> Self {
        let values = config.initial_values(&mut rng);
        let algorithm = config.algorithm();
        let speed = config.speed();
        let sorting = Player::new(generate_sorting_trace(&values, algorithm), speed);

        let graph = Graph::default_graph();
        let traversal_mode = config.traversal();
        let (visits, status_message, is_error) =
            match traversal_steps(&graph, traversal_mode) {
                Ok(steps) => (steps, String::from("Ready!"), false),
                Err(message) => (Vec::new(), message, true),
            };

        info!(
            algorithm = algorithm.name(),
            len = values.len(),
            sorting_steps = sorting.timeline.len(),
            traversal = traversal_mode.name(),
            traversal_steps = visits.len(),
            "app initialised"
        );

        App {
            values,
            algorithm,
            sorting,
            traversal: Player::new(visits, speed),
            graph,
            traversal_mode,
            layout: config.layout(),
            stack: StackModel::new(DEFAULT_STACK.to_vec()),
            queue: QueueModel::new(Vec::new()),
            last_operation: None,
            focused_pane: FocusedPane::Sorting,
            should_quit: false,
            status_message,
            is_error,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            rng,
            random_size: config.random_size(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let was_playing = self.sorting.is_playing() || self.traversal.is_playing();
            self.sorting.tick(now);
            self.traversal.tick(now);
            if was_playing && !self.sorting.is_playing() && !self.traversal.is_playing() {
                self.set_status("Playback complete".to_string());
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: bars (top) | tree and details (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        // Right column: traversal (top) | memory (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let sorting_focused = self.focused_pane == FocusedPane::Sorting;
        let step = self.sorting.timeline.current();

        render_bars_pane(frame, left_rows[0], step, self.algorithm, sorting_focused);

        if self.algorithm == Algorithm::Merge {
            let lower = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(left_rows[1]);
            render_tree_pane(frame, lower[0], step, sorting_focused);
            render_details_pane(frame, lower[1], step, self.algorithm, sorting_focused);
        } else {
            render_details_pane(frame, left_rows[1], step, self.algorithm, sorting_focused);
        }

        render_graph_pane(
            frame,
            right_rows[0],
            GraphRenderData {
                graph: &self.graph,
                mode: self.traversal_mode,
                visited: self
                    .traversal
                    .timeline
                    .current()
                    .map(Vec::as_slice)
                    .unwrap_or(&[]),
                position: self.traversal.timeline.position(),
                total_steps: self.traversal.timeline.len(),
            },
            self.focused_pane == FocusedPane::Traversal,
        );

        render_memory_pane(
            frame,
            right_rows[1],
            MemoryRenderData {
                layout: self.layout,
                values: &self.values,
                stack: &self.stack,
                queue: &self.queue,
                last_operation: self.last_operation.as_ref(),
            },
            self.focused_pane == FocusedPane::Memory,
        );

        let (position, total_steps, is_playing) = match self.focused_pane {
            FocusedPane::Traversal => (
                self.traversal.timeline.position(),
                self.traversal.timeline.len(),
                self.traversal.is_playing(),
            ),
            _ => (
                self.sorting.timeline.position(),
                self.sorting.timeline.len(),
                self.sorting.is_playing(),
            ),
        };
        let speed = self.sorting.speed();

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                focus: self.focused_pane.name(),
                position,
                total_steps,
                speed_label: speed.label(),
                speed: speed.value(),
                is_playing,
                is_error: self.is_error,
            },
        );
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.status_message = message;
        self.is_error = true;
    }

    /// Apply a playback request to the focused trace
    fn navigate(&mut self, nav: Nav) {
        let now = Instant::now();
        let result = match self.focused_pane {
            FocusedPane::Traversal => apply_nav(&mut self.traversal, nav, now),
            FocusedPane::Sorting | FocusedPane::Memory => apply_nav(&mut self.sorting, nav, now),
        };

        match result {
            Ok(message) => self.set_status(message),
            Err(e) => self.set_error(format!("Cannot move: {}", e)),
        }
    }

    fn set_speed(&mut self, speed: Speed) {
        self.sorting.set_speed(speed);
        self.traversal.set_speed(speed);
        self.set_status(format!("Speed: {} ({})", speed.label(), speed.value()));
    }

    /// Rebuild the sorting trace after the input or algorithm changed
    fn regenerate_sorting(&mut self) {
        let steps = generate_sorting_trace(&self.values, self.algorithm);
        info!(
            algorithm = self.algorithm.name(),
            len = self.values.len(),
            steps = steps.len(),
            "regenerated sorting trace"
        );
        self.set_status(format!(
            "{}: {} steps",
            self.algorithm.display_name(),
            steps.len()
        ));
        self.sorting.load(steps);
    }

    fn regenerate_traversal(&mut self) {
        match traversal_steps(&self.graph, self.traversal_mode) {
            Ok(steps) => {
                info!(
                    mode = self.traversal_mode.name(),
                    steps = steps.len(),
                    "regenerated traversal trace"
                );
                self.set_status(format!(
                    "{}: {} steps",
                    self.traversal_mode.display_name(),
                    steps.len()
                ));
                self.traversal.load(steps);
            }
            Err(message) => {
                self.traversal.load(Vec::new());
                self.set_error(message);
            }
        }
    }

    fn record(&mut self, operation: Operation) {
        debug!(kind = ?operation.kind, value = ?operation.value, "structure operation");
        if operation.succeeded() {
            self.set_status(operation.message.clone());
        } else {
            self.set_error(operation.message.clone());
        }
        self.last_operation = Some(operation);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                self.navigate(Nav::ForwardBy(n));
            }
            KeyCode::Left => self.navigate(Nav::Backward),
            KeyCode::Right => self.navigate(Nav::Forward),
            KeyCode::Enter => self.navigate(Nav::End),
            KeyCode::Backspace => self.navigate(Nav::Start),
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.navigate(Nav::Toggle);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_speed(self.sorting.speed().faster(SPEED_STEP));
            }
            KeyCode::Char('-') => {
                self.set_speed(self.sorting.speed().slower(SPEED_STEP));
            }
            KeyCode::Char('a') => {
                self.algorithm = self.algorithm.next();
                self.regenerate_sorting();
            }
            KeyCode::Char('A') => {
                self.algorithm = self.algorithm.prev();
                self.regenerate_sorting();
            }
            KeyCode::Char('r') => {
                self.values = random_values(self.random_size, &mut self.rng);
                self.regenerate_sorting();
            }
            KeyCode::Char('g') => {
                self.traversal_mode = self.traversal_mode.toggle();
                self.regenerate_traversal();
            }
            KeyCode::Char('m') => {
                self.layout = self.layout.next();
                self.set_status(format!("Layout: {}", self.layout.title()));
            }
            KeyCode::Char('p') => {
                let value = self.rng.gen_range(1..=99);
                let operation = self.stack.push(value);
                self.record(operation);
            }
            KeyCode::Char('o') => {
                let operation = self.stack.pop();
                self.record(operation);
            }
            KeyCode::Char('k') => {
                let operation = self.stack.peek();
                self.record(operation);
            }
            KeyCode::Char('e') => {
                let value = self.rng.gen_range(1..=99);
                let operation = self.queue.enqueue(value);
                self.record(operation);
            }
            KeyCode::Char('d') => {
                let operation = self.queue.dequeue();
                self.record(operation);
            }
            KeyCode::Char('f') => {
                let operation = self.queue.peek();
                self.record(operation);
            }
            KeyCode::Char('c') => {
                let operation = match self.focused_pane {
                    FocusedPane::Memory => {
                        self.queue.clear();
                        self.stack.clear()
                    }
                    _ => self.stack.clear(),
                };
                self.record(operation);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seeded_rng;
    use clap::Parser;
    use crossterm::event::KeyModifiers;

    fn app(args: &[&str]) -> App {
        let mut argv = vec!["algotty"];
        argv.extend_from_slice(args);
        let config = Config::parse_from(argv);
        let (rng, _) = seeded_rng(Some(3));
        App::new(&config, rng)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_initial_traces() {
        let app = app(&["--values", "5,3,8,1,9"]);
        assert_eq!(app.values, vec![5, 3, 8, 1, 9]);
        assert_eq!(app.sorting.timeline.len(), 19);
        assert_eq!(app.traversal.timeline.len(), 8);
        assert!(!app.is_error);
    }

    #[test]
    fn test_playback_keys_follow_focus() {
        let mut app = app(&["--values", "5,3,8,1,9"]);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.sorting.timeline.position(), 4);
        assert_eq!(app.traversal.timeline.position(), 0);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.traversal.timeline.position(), 7);
        assert_eq!(app.sorting.timeline.position(), 4);

        press(&mut app, KeyCode::Right);
        assert!(app.is_error);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.traversal.timeline.position(), 0);
        assert!(!app.is_error);
    }

    #[test]
    fn test_switching_algorithm_rewinds() {
        let mut app = app(&["--values", "5,3,8,1,9"]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.algorithm, Algorithm::Insertion);
        assert_eq!(app.sorting.timeline.position(), 0);
        assert_eq!(app.sorting.timeline.steps()[0].array, vec![5, 3, 8, 1, 9]);
    }

    #[test]
    fn test_traversal_toggle_and_speed() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.traversal_mode, TraversalMode::Dfs);
        assert_eq!(app.traversal.timeline.len(), 8);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.sorting.speed(), Speed::new(60));
        assert_eq!(app.traversal.speed(), Speed::new(60));
    }

    #[test]
    fn test_structure_keys() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.stack.items(), &[25, 8, 34]);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.is_error);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.queue.len(), 1);
        assert!(!app.is_error);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.layout, MemoryLayout::Vector);
    }
}
