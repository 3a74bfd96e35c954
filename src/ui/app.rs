//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::input::{action_for, HeldKeys};
use crate::entities::{Facing, ItemKind};
use crate::game::{Action, Dialogue, DirectionInput, GameController, GameEvent};
use crate::world::{Mode, Position, Tile};

/// Lines kept in the message log
const MAX_LOG: usize = 6;

const START_OPTIONS: [&str; 3] = ["New Game", "Load Code", "Quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    Inventory,
    PickUp,
    SaveCode,
    LoadCode,
    Reset,
    Close,
}

impl MenuEntry {
    fn label(&self) -> &'static str {
        match self {
            MenuEntry::Inventory => "Inventory",
            MenuEntry::PickUp => "Pick up",
            MenuEntry::SaveCode => "Save code",
            MenuEntry::LoadCode => "Load code",
            MenuEntry::Reset => "Reset game",
            MenuEntry::Close => "Close",
        }
    }
}

/// Which screen or overlay has focus
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    Start,
    Playing,
    Menu,
    Inventory,
    SaveCode(String),
    LoadCode { input: String, error: Option<String>, from_start: bool },
    Won,
}

/// Main UI application
pub struct App {
    screen: Screen,
    /// Cursor for whatever list is on screen
    cursor: usize,
    held: HeldKeys,
    log: Vec<String>,
}

impl App {
    pub fn new(hold_ticks: u32) -> Self {
        Self {
            screen: Screen::Start,
            cursor: 0,
            held: HeldKeys::new(hold_ticks),
            log: Vec::new(),
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        log::debug!("Screen: {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        self.cursor = 0;
    }

    fn push_log(&mut self, text: impl Into<String>) {
        self.log.push(text.into());
        if self.log.len() > MAX_LOG {
            self.log.remove(0);
        }
    }

    /// Handle a key press. Returns true if the app should quit.
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut GameController) -> Result<bool> {
        // Global quit shortcut
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            return Ok(true);
        }

        // Text entry sees raw keys before they become actions
        if let Screen::LoadCode { input, error, .. } = &mut self.screen {
            match key.code {
                KeyCode::Char(c) => {
                    input.push(c);
                    *error = None;
                    return Ok(false);
                }
                KeyCode::Backspace => {
                    input.pop();
                    return Ok(false);
                }
                _ => {}
            }
        }

        let Some(action) = action_for(key) else {
            return Ok(false);
        };

        match self.screen.clone() {
            Screen::Start => return self.handle_start(action, game),
            Screen::Playing => self.handle_playing(action, game),
            Screen::Menu => self.handle_menu(action, game)?,
            Screen::Inventory => self.handle_inventory(action, game),
            Screen::SaveCode(_) => self.set_screen(Screen::Playing),
            Screen::LoadCode { input, from_start, .. } => self.handle_load(action, game, &input, from_start),
            Screen::Won => match action {
                Action::Confirm | Action::Interact => {
                    game.new_game()?;
                    self.held.clear();
                    self.set_screen(Screen::Playing);
                }
                Action::Cancel => return Ok(true),
                _ => {}
            },
        }
        Ok(false)
    }

    fn move_cursor(&mut self, action: Action, len: usize) {
        match action {
            Action::MoveUp if self.cursor > 0 => self.cursor -= 1,
            Action::MoveDown if self.cursor + 1 < len => self.cursor += 1,
            _ => {}
        }
    }

    fn handle_start(&mut self, action: Action, game: &mut GameController) -> Result<bool> {
        match action {
            Action::Confirm | Action::Interact => match self.cursor {
                0 => {
                    game.new_game()?;
                    self.set_screen(Screen::Playing);
                }
                1 => self.set_screen(Screen::LoadCode { input: String::new(), error: None, from_start: true }),
                _ => return Ok(true),
            },
            Action::Cancel => return Ok(true),
            other => self.move_cursor(other, START_OPTIONS.len()),
        }
        Ok(false)
    }

    fn handle_playing(&mut self, action: Action, game: &mut GameController) {
        if let Some(dialogue) = game.dialogue() {
            let len = dialogue.options.len();
            match action {
                Action::Confirm | Action::Interact => {
                    game.choose(self.cursor);
                    self.cursor = 0;
                }
                Action::Cancel => game.close_dialogue(),
                other => self.move_cursor(other, len),
            }
            return;
        }

        match action {
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => self.held.press(action),
            Action::Interact | Action::Confirm => {
                game.interact();
                self.cursor = 0;
            }
            Action::OpenMenu | Action::Cancel => {
                self.held.clear();
                self.set_screen(Screen::Menu);
            }
        }
    }

    fn menu_entries(game: &GameController) -> Vec<MenuEntry> {
        let mut entries = vec![MenuEntry::Inventory];
        if game.player().has_pickup_ability {
            entries.push(MenuEntry::PickUp);
        }
        entries.extend([MenuEntry::SaveCode, MenuEntry::LoadCode, MenuEntry::Reset, MenuEntry::Close]);
        entries
    }

    fn handle_menu(&mut self, action: Action, game: &mut GameController) -> Result<()> {
        let entries = Self::menu_entries(game);
        match action {
            Action::Confirm | Action::Interact => match entries.get(self.cursor).copied().unwrap_or(MenuEntry::Close) {
                MenuEntry::Inventory => self.set_screen(Screen::Inventory),
                MenuEntry::PickUp => {
                    // Refusals arrive as message events
                    let _ = game.pick_up();
                    self.set_screen(Screen::Playing);
                }
                MenuEntry::SaveCode => match game.save_code() {
                    Ok(code) => self.set_screen(Screen::SaveCode(code)),
                    Err(e) => {
                        log::warn!("Could not build save code: {}", e);
                        self.push_log(format!("Could not build a save code: {}", e));
                        self.set_screen(Screen::Playing);
                    }
                },
                MenuEntry::LoadCode => {
                    self.set_screen(Screen::LoadCode { input: String::new(), error: None, from_start: false })
                }
                MenuEntry::Reset => {
                    game.new_game()?;
                    self.log.clear();
                    self.set_screen(Screen::Playing);
                }
                MenuEntry::Close => self.set_screen(Screen::Playing),
            },
            Action::Cancel | Action::OpenMenu => self.set_screen(Screen::Playing),
            other => self.move_cursor(other, entries.len()),
        }
        Ok(())
    }

    fn handle_inventory(&mut self, action: Action, game: &mut GameController) {
        let items = game.player().inventory.held();
        match action {
            Action::Confirm | Action::Interact => {
                if let Some((item, _)) = items.get(self.cursor) {
                    let _ = game.use_item(*item);
                }
                self.set_screen(Screen::Playing);
            }
            Action::Cancel => self.set_screen(Screen::Menu),
            Action::OpenMenu => self.set_screen(Screen::Playing),
            other => self.move_cursor(other, items.len()),
        }
    }

    fn handle_load(&mut self, action: Action, game: &mut GameController, input: &str, from_start: bool) {
        match action {
            Action::Confirm => match game.load_code(input) {
                Ok(_) => {
                    let next = if game.world().mode() == Mode::Start { Screen::Start } else { Screen::Playing };
                    self.held.clear();
                    self.set_screen(next);
                }
                Err(e) => {
                    if let Screen::LoadCode { error, .. } = &mut self.screen {
                        *error = Some(format!("Invalid code: {}", e));
                    }
                }
            },
            Action::Cancel => self.set_screen(if from_start { Screen::Start } else { Screen::Menu }),
            _ => {}
        }
    }

    /// Advance one frame: feed held directions and collect events
    pub fn tick(&mut self, game: &mut GameController) {
        let input = if self.screen == Screen::Playing { self.held.tick() } else { DirectionInput::default() };
        game.tick(input);

        for event in game.drain_events() {
            match event {
                GameEvent::Message(text) => self.push_log(text),
                GameEvent::Sound(sound) => {
                    log::debug!(
                        "Cue {} ({:?}, volume {:.1})",
                        sound.name(),
                        sound.category(),
                        sound.default_volume()
                    );
                }
                GameEvent::ScreenShake { ticks } => log::debug!("Screen shake for {} ticks", ticks),
                GameEvent::ModeChanged { mode, depth } => {
                    let track = game.music();
                    log::debug!("Music: {} at {:?} bpm", track.title().unwrap_or("silence"), track.bpm());
                    if mode == Mode::Cave {
                        self.push_log(format!("Entered cave depth {}.", depth));
                    }
                }
                GameEvent::Won => self.set_screen(Screen::Won),
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, game: &GameController) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        match &self.screen {
            Screen::Start => self.render_start(frame),
            Screen::Won => self.render_victory(frame, game),
            Screen::LoadCode { input, error, from_start: true } => {
                self.render_start(frame);
                self.render_load(frame, input, error.as_deref());
            }
            screen => {
                self.render_playing(frame, game);
                match screen {
                    Screen::Menu => self.render_menu(frame, game),
                    Screen::Inventory => self.render_inventory(frame, game),
                    Screen::SaveCode(code) => self.render_save_code(frame, code),
                    Screen::LoadCode { input, error, .. } => self.render_load(frame, input, error.as_deref()),
                    _ => {
                        if game.dialogue().is_some() {
                            self.render_dialogue(frame, game);
                        }
                    }
                }
            }
        }
    }

    fn render_start(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(35), Constraint::Percentage(30)])
            .split(area);

        let title = vec![
            Line::from(Span::styled(
                "S T O N E B O U N D",
                Style::default().fg(Color::Rgb(120, 200, 120)).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Wake the crystals. Follow the stones.",
                Style::default().fg(Color::Rgb(120, 120, 120)),
            )),
        ];
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

        let menu: Vec<Line> = START_OPTIONS
            .iter()
            .enumerate()
            .flat_map(|(i, label)| [Line::from(""), selectable(label, i == self.cursor)])
            .collect();
        frame.render_widget(Paragraph::new(menu).alignment(Alignment::Center), chunks[1]);

        let version = Paragraph::new(format!("v{}", env!("CARGO_PKG_VERSION")))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(version, chunks[2]);
    }

    fn render_playing(&self, frame: &mut Frame, game: &GameController) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(32)])
            .split(frame.area());
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(MAX_LOG as u16 + 2)])
            .split(columns[0]);

        self.render_map(frame, left[0], game);
        self.render_log(frame, left[1]);
        self.render_status(frame, columns[1], game);
    }

    fn render_map(&self, frame: &mut Frame, area: Rect, game: &GameController) {
        let world = game.world();
        let title = match world.mode() {
            Mode::Cave => format!(" Cave - depth {} ", world.depth()),
            mode => format!(" {} ", mode.name()),
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(grid) = world.active() else {
            return;
        };

        // Each cell is two columns wide
        let cols = i32::from(inner.width / 2);
        let rows = i32::from(inner.height);
        let player = game.player();
        let center = player.cell();
        let shake = match game.shake_ticks() {
            0 => 0,
            t if t % 4 < 2 => 1,
            _ => -1,
        };
        let left = center.x - cols / 2 + shake;
        let top = center.y - rows / 2;

        let lines: Vec<Line> = (0..rows)
            .map(|dy| {
                let spans: Vec<Span> = (0..cols)
                    .map(|dx| {
                        let pos = Position::new(left + dx, top + dy);
                        match grid.get(pos) {
                            Some(tile) if pos == center => player_span(player.dir, player.wearing_hat, tile, world.mode()),
                            Some(tile) => tile_span(tile, world.mode()),
                            None => Span::raw("  "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_log(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.log.iter().map(|text| Line::from(text.as_str())).collect();
        let log = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Messages "))
            .wrap(Wrap { trim: true });
        frame.render_widget(log, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, game: &GameController) {
        let player = game.player();
        let (active, total) = game.crystal_progress();
        let label = Style::default().fg(Color::Gray);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Crystals ", label),
                Span::styled(format!("{}/{}", active, total), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::styled("Music    ", label),
                Span::raw(game.music().title().unwrap_or("-")),
            ]),
            Line::from(""),
            Line::from(Span::styled("Inventory", Style::default().add_modifier(Modifier::BOLD))),
        ];
        let held = player.inventory.held();
        if held.is_empty() {
            lines.push(Line::from(Span::styled("  (empty)", Style::default().fg(Color::DarkGray))));
        }
        lines.extend(held.iter().map(|(item, count)| Line::from(format!("  {}", item_label(*item, *count)))));

        lines.push(Line::from(""));
        if player.wearing_hat {
            lines.push(Line::from(Span::styled("Wearing the Explorer Hat", Style::default().fg(Color::Yellow))));
        }
        if player.has_activated_stonehenge {
            lines.push(Line::from(Span::styled("The ritual is complete", Style::default().fg(Color::Magenta))));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("arrows/wasd move", label)));
        lines.push(Line::from(Span::styled("e/space interact", label)));
        lines.push(Line::from(Span::styled("tab menu   ctrl+q quit", label)));

        let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Explorer "));
        frame.render_widget(panel, area);
    }

    fn render_dialogue(&self, frame: &mut Frame, game: &GameController) {
        let Some(dialogue) = game.dialogue() else {
            return;
        };
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);

        let mut lines = vec![Line::from(dialogue.text.as_str()), Line::from("")];
        if let Some(image) = &dialogue.image {
            lines.push(Line::from(Span::styled(
                format!("[diagram: {}]", image),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        lines.extend(
            dialogue
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| selectable(&option.label, i == self.cursor)),
        );

        let popup = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(dialogue_title(dialogue)))
            .wrap(Wrap { trim: true });
        frame.render_widget(popup, area);
    }

    fn render_menu(&self, frame: &mut Frame, game: &GameController) {
        let lines: Vec<Line> = Self::menu_entries(game)
            .iter()
            .enumerate()
            .map(|(i, entry)| selectable(entry.label(), i == self.cursor))
            .collect();
        popup(frame, " Menu ", lines, 30, 40);
    }

    fn render_inventory(&self, frame: &mut Frame, game: &GameController) {
        let held = game.player().inventory.held();
        let lines: Vec<Line> = if held.is_empty() {
            vec![Line::from("Nothing here yet.")]
        } else {
            held.iter()
                .enumerate()
                .map(|(i, (item, count))| selectable(&item_label(*item, *count), i == self.cursor))
                .collect()
        };
        popup(frame, " Inventory ", lines, 40, 60);
    }

    fn render_save_code(&self, frame: &mut Frame, code: &str) {
        let lines = vec![
            Line::from("Write this code down to continue later:"),
            Line::from(""),
            Line::from(Span::styled(code, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled("Press any key", Style::default().fg(Color::DarkGray))),
        ];
        popup(frame, " Save Code ", lines, 70, 60);
    }

    fn render_load(&self, frame: &mut Frame, input: &str, error: Option<&str>) {
        let mut lines = vec![
            Line::from("Type a save code and press Enter:"),
            Line::from(""),
            Line::from(Span::styled(format!("{}_", input), Style::default().fg(Color::Cyan))),
        ];
        if let Some(error) = error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(error, Style::default().fg(Color::Red))));
        }
        popup(frame, " Load Code ", lines, 70, 40);
    }

    fn render_victory(&self, frame: &mut Frame, game: &GameController) {
        let (active, total) = game.crystal_progress();
        let lines = vec![
            Line::from(Span::styled(
                "THE STONES AWAKEN",
                Style::default().fg(Color::Rgb(200, 160, 255)).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("The ancient circle hums with the power of the deep."),
            Line::from(format!("Crystals energized: {}/{}", active, total)),
            Line::from(""),
            Line::from(Span::styled("[Enter] New Game   [Esc] Quit", Style::default().fg(Color::Gray))),
        ];
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

fn selectable(label: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {}", label),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!("  {}", label))
    }
}

fn item_label(item: ItemKind, count: u32) -> String {
    if item.shows_count() {
        format!("{} x{}", item.name(), count)
    } else {
        item.name().to_string()
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn tile_span(tile: Tile, mode: Mode) -> Span<'static> {
    let glyph = tile.glyph();
    Span::styled(
        format!("{}{}", glyph, glyph),
        Style::default().fg(rgb(tile.fg_color())).bg(rgb(tile.bg_color(mode))),
    )
}

fn player_span(dir: Facing, hat: bool, under: Tile, mode: Mode) -> Span<'static> {
    let text = match dir {
        Facing::Up => "@^",
        Facing::Down => "@v",
        Facing::Left => "<@",
        Facing::Right => "@>",
    };
    let fg = if hat { Color::Yellow } else { Color::White };
    Span::styled(text, Style::default().fg(fg).bg(rgb(under.bg_color(mode))).add_modifier(Modifier::BOLD))
}

/// Draw a bordered popup in the middle of the screen
fn popup(frame: &mut Frame, title: &str, lines: Vec<Line>, percent_x: u16, percent_y: u16) {
    let area = centered_rect(percent_x, percent_y, frame.area());
    frame.render_widget(Clear, area);
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn dialogue_title(dialogue: &Dialogue) -> String {
    match dialogue.speaker {
        Some(npc) => format!(" {} ", npc.name()),
        None => " Dialogue ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataManager;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn press(app: &mut App, game: &mut GameController, code: KeyCode) -> bool {
        app.handle_input(KeyEvent::new(code, KeyModifiers::NONE), game).unwrap()
    }

    fn session() -> (App, GameController) {
        (App::new(4), GameController::with_seed(DataManager::default(), 1).unwrap())
    }

    #[test]
    fn test_start_new_game_and_walk() {
        let (mut app, mut game) = session();
        assert!(!press(&mut app, &mut game, KeyCode::Enter));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(game.world().mode(), Mode::Overworld);

        let x = game.player().screen_x;
        press(&mut app, &mut game, KeyCode::Right);
        for _ in 0..10 {
            app.tick(&mut game);
        }
        assert_eq!(game.player().screen_x, x + 4 * 5);
    }

    #[test]
    fn test_cheat_from_start_screen() {
        let (mut app, mut game) = session();
        press(&mut app, &mut game, KeyCode::Down);
        press(&mut app, &mut game, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::LoadCode { from_start: true, .. }));

        for c in "green gems!".chars() {
            press(&mut app, &mut game, KeyCode::Char(c));
        }
        press(&mut app, &mut game, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);
        app.tick(&mut game);
        assert!(app.log.iter().any(|line| line.starts_with("CHEAT ACTIVATED")));
    }

    #[test]
    fn test_bad_code_shows_error() {
        let (mut app, mut game) = session();
        press(&mut app, &mut game, KeyCode::Down);
        press(&mut app, &mut game, KeyCode::Enter);
        press(&mut app, &mut game, KeyCode::Char('0'));
        press(&mut app, &mut game, KeyCode::Enter);
        match &app.screen {
            Screen::LoadCode { error: Some(error), .. } => assert!(error.starts_with("Invalid code")),
            other => panic!("unexpected screen {:?}", other),
        }
        press(&mut app, &mut game, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Start);
    }

    #[test]
    fn test_menu_save_code() {
        let (mut app, mut game) = session();
        press(&mut app, &mut game, KeyCode::Enter);
        press(&mut app, &mut game, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Menu);
        press(&mut app, &mut game, KeyCode::Down);
        press(&mut app, &mut game, KeyCode::Enter);
        let Screen::SaveCode(code) = app.screen.clone() else {
            panic!("expected save code screen");
        };
        assert!(game.load_code(&code).is_ok());
    }

    #[test]
    fn test_dialogue_title_names_speaker() {
        let mut player = crate::entities::Player::new();
        let book = crate::data::dialogue::default_dialogue();
        let d = crate::game::dialogue::open(crate::entities::NpcKind::Rex, &mut player, &book, &mut Vec::new());
        assert_eq!(dialogue_title(&d), " Rex ");
        assert_eq!(dialogue_title(&Dialogue::message("Hi")), " Dialogue ");
    }

    #[test]
    fn test_every_screen_renders() {
        let (mut app, mut game) = session();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| app.render(f, &game)).unwrap();

        press(&mut app, &mut game, KeyCode::Enter);
        terminal.draw(|f| app.render(f, &game)).unwrap();
        press(&mut app, &mut game, KeyCode::Tab);
        terminal.draw(|f| app.render(f, &game)).unwrap();
        press(&mut app, &mut game, KeyCode::Enter);
        terminal.draw(|f| app.render(f, &game)).unwrap();
        app.set_screen(Screen::Won);
        terminal.draw(|f| app.render(f, &game)).unwrap();
    }
}
