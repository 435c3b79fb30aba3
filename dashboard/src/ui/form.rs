use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use gateway::catalog;

use super::{format, theme::Theme, Action};
use crate::state::form::{Field, FormState, Outcome};

const TITLE: &str = "House Rent Prediction";
const SUBTITLE: &str = "Fill in the details below to predict the estimated rent.";

pub fn handle_key(state: &mut FormState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('p') => Action::Submit,
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            state.focus = state.focus.next();
            Action::None
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            state.focus = state.focus.prev();
            Action::None
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
            match state.focus {
                Field::Bhk => state.bhk_up(),
                Field::Sqft => state.sqft_up(),
                Field::Locality => state.select_next(),
                Field::Predict => {}
            }
            Action::None
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
            match state.focus {
                Field::Bhk => state.bhk_down(),
                Field::Sqft => state.sqft_down(),
                Field::Locality => state.select_prev(),
                Field::Predict => {}
            }
            Action::None
        }
        KeyCode::Enter => match state.focus {
            Field::Predict => Action::Submit,
            _ => {
                state.focus = state.focus.next();
                Action::None
            }
        },
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &FormState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_columns(70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(state.options().len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    draw_title(f, chunks[0]);
    draw_steppers(f, chunks[1], state);
    draw_localities(f, chunks[2], state);
    draw_button(f, chunks[3], state.focus == Field::Predict);
    draw_outcome(f, chunks[4], state.outcome.as_ref());
    draw_hint(f, chunks[6]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, Theme::title())),
        Line::from(Span::styled(SUBTITLE, Theme::dim())),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_steppers(f: &mut Frame, area: Rect, state: &FormState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bhk = state.bhk.to_string();
    let sqft = format!("{:.0}", state.sqft);

    f.render_widget(
        stepper(" BHK ", &bhk, state.focus == Field::Bhk),
        cols[0],
    );
    f.render_widget(
        stepper(" Square Feet ", &sqft, state.focus == Field::Sqft),
        cols[1],
    );
}

fn stepper<'a>(title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let arrows = if focused { Theme::text() } else { Theme::muted() };

    Paragraph::new(Line::from(vec![
        Span::styled("◀  ", arrows),
        Span::styled(value, Theme::title()),
        Span::styled("  ▶", arrows),
    ]))
    .alignment(Alignment::Center)
    .block(panel(title, focused))
}

fn draw_localities(f: &mut Frame, area: Rect, state: &FormState) {
    let focused = state.focus == Field::Locality;

    let items: Vec<ListItem> = state
        .options()
        .iter()
        .map(|&name| {
            let style = if catalog::is_placeholder(name) {
                Theme::muted()
            } else {
                Theme::text()
            };
            ListItem::new(Span::styled(name, style))
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Main Locality ", focused))
        .highlight_style(if focused { Theme::highlight() } else { Theme::title() })
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected()));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_button(f: &mut Frame, area: Rect, focused: bool) {
    let style = if focused { Theme::highlight() } else { Theme::title() };

    let button = Paragraph::new(Span::styled("  Predict Rent  ", style))
        .alignment(Alignment::Center)
        .block(panel("", focused));

    f.render_widget(button, area);
}

fn draw_outcome(f: &mut Frame, area: Rect, outcome: Option<&Outcome>) {
    let (text, style) = match outcome {
        Some(Outcome::Success(value)) => (
            format!("Predicted Rent: {}", format::rupees(*value)),
            Theme::ok(),
        ),
        Some(Outcome::Warning(msg)) => (format!("Warning: {msg}"), Theme::warn()),
        Some(Outcome::Error(msg)) => (format!("Error: {msg}"), Theme::error()),
        None => (String::new(), Theme::muted()),
    };

    let paragraph = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel(" Result ", false));

    f.render_widget(paragraph, area);
}

fn draw_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("tab / ↑↓", Theme::dim()),
        Span::styled("  move    ", Theme::muted()),
        Span::styled("← →", Theme::dim()),
        Span::styled("  change    ", Theme::muted()),
        Span::styled("p", Theme::dim()),
        Span::styled("  predict    ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(hint, area);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border: Style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .title_style(Theme::title())
}

fn centered_columns(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}
