use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::profile::{MatchOutcome, PlayerProfile};
use crate::search::ViewState;

use super::app::App;
use super::presenters::{
    self, ChampionPanel, MatchPanel, NO_CHAMPIONS, NO_MATCHES, profile_header,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, app: &App) {
    let status_height = match app.state() {
        ViewState::Success(_) => 0,
        _ => 3,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(status_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_search_bar(frame, chunks[1], app);

    match app.state() {
        ViewState::Idle => draw_notice(
            frame,
            chunks[2],
            "Enter a Riot ID (Name#TAG) to search.",
            Style::default().fg(MUTED),
        ),
        ViewState::Loading => {
            let spinner = SPINNER[app.spinner % SPINNER.len()];
            draw_notice(
                frame,
                chunks[2],
                &format!("{spinner} Querying the profile service..."),
                Style::default().fg(Color::Yellow),
            );
        }
        ViewState::Failure(err) => draw_error(frame, chunks[2], &err.to_string()),
        ViewState::Success(profile) => draw_profile(frame, chunks[3], profile, app),
    }

    draw_footer(frame, chunks[4]);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "LoL Profile Viewer",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn draw_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32),
            Constraint::Min(20),
            Constraint::Length(16),
        ])
        .split(area);

    let loading = app.is_loading();
    let enabled = if loading {
        Style::default().fg(MUTED)
    } else {
        Style::default()
    };

    let region = Paragraph::new(format!(
        "< {} > {}",
        app.region,
        app.region.display_name()
    ))
    .style(enabled)
    .block(Block::default().borders(Borders::ALL).title(" Region [Tab] "));
    frame.render_widget(region, chunks[0]);

    let input_line = if app.input.is_empty() {
        Line::from(Span::styled("Name#TAG", Style::default().fg(MUTED)))
    } else if loading {
        Line::from(Span::styled(app.input.as_str(), enabled))
    } else {
        Line::from(vec![
            Span::raw(app.input.as_str()),
            Span::styled("_", Style::default().fg(ACCENT)),
        ])
    };
    let input = Paragraph::new(input_line)
        .block(Block::default().borders(Borders::ALL).title(" Riot ID "));
    frame.render_widget(input, chunks[1]);

    let (label, style) = if loading {
        ("Searching...", Style::default().fg(MUTED))
    } else {
        (
            "Search [Enter]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, chunks[2]);
}

fn draw_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let notice = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default());
    frame.render_widget(notice, area);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("Error: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]))
    .style(Style::default().fg(Color::Red))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn draw_profile(frame: &mut Frame, area: Rect, profile: &PlayerProfile, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    draw_header(frame, chunks[0], profile);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_champions(frame, panels[0], profile);
    draw_matches(frame, panels[1], profile, &app.ddragon_version);
}

fn draw_header(frame: &mut Frame, area: Rect, profile: &PlayerProfile) {
    let header = profile_header(profile);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", header.initial),
                Style::default().fg(Color::Black).bg(Color::Blue),
            ),
            Span::styled(
                header.riot_id,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(header.level, Style::default().fg(MUTED))),
        Line::from(Span::styled(
            header.rank,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(win_rate) = header.win_rate {
        lines.push(Line::from(Span::styled(win_rate, Style::default().fg(MUTED))));
    }
    lines.push(Line::from(Span::styled(
        header.icon.current().to_string(),
        Style::default().fg(MUTED),
    )));

    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_champions(frame: &mut Frame, area: Rect, profile: &PlayerProfile) {
    let block = Block::default().borders(Borders::ALL).title(" Main Champions ");

    let rows = match presenters::champion_table(profile) {
        ChampionPanel::Empty => {
            frame.render_widget(Paragraph::new(NO_CHAMPIONS).block(block), area);
            return;
        }
        ChampionPanel::Rows(rows) => rows,
    };

    let header = Row::new(["Champion", "Games", "Winrate", "KDA"]).style(
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    );
    let rows = rows.into_iter().map(|row| {
        Row::new([
            Cell::from(row.name).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(row.games),
            Cell::from(row.win_rate),
            Cell::from(row.kda),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn draw_matches(frame: &mut Frame, area: Rect, profile: &PlayerProfile, ddragon_version: &str) {
    let block = Block::default().borders(Borders::ALL).title(" Recent Matches ");

    let entries = match presenters::match_history(profile, ddragon_version) {
        MatchPanel::Empty => {
            frame.render_widget(Paragraph::new(NO_MATCHES).block(block), area);
            return;
        }
        MatchPanel::Entries(entries) => entries,
    };

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let result_style = match entry.outcome {
                MatchOutcome::Victory => Style::default().fg(Color::Blue),
                MatchOutcome::Defeat => Style::default().fg(Color::Red),
                MatchOutcome::Unknown => Style::default().fg(MUTED),
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<8}", entry.result_label()), result_style),
                    Span::styled(
                        format!("{:<14}", entry.champion),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(entry.kda.clone()),
                ]),
                Line::from(Span::styled(
                    match &entry.champion_icon_url {
                        Some(icon) => format!("  {}  {}", entry.match_id, icon),
                        None => format!("  {}", entry.match_id),
                    },
                    Style::default().fg(MUTED),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("Data from the Riot Games API via the profile service  |  Esc to quit")
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::profile::Region;
    use crate::profile::types::dummy_profile;
    use crate::ui::app::Action;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for line in buffer.content.chunks(buffer.area.width as usize) {
            for cell in line {
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    fn loaded_app(profile: PlayerProfile) -> App {
        let mut app = App::new(Region::Las, "16.1.1");
        for c in "Le Conservateur#3012".chars() {
            app.update(Action::Input(c));
        }
        app.update(Action::Submit);
        app.resolve(Ok(profile));
        app
    }

    #[test]
    fn idle_view_shows_prompt_and_region() {
        let screen = render(&App::new(Region::Las, "16.1.1"));

        assert!(screen.contains("Enter a Riot ID (Name#TAG) to search."));
        assert!(screen.contains("LAS"));
        assert!(screen.contains("Search [Enter]"));
    }

    #[test]
    fn loading_view_disables_submit() {
        let mut app = App::new(Region::Las, "16.1.1");
        for c in "Chalop#3012".chars() {
            app.update(Action::Input(c));
        }
        app.update(Action::Submit);

        let screen = render(&app);

        assert!(screen.contains("Searching..."));
        assert!(screen.contains("Querying the profile service..."));
    }

    #[test]
    fn failure_view_shows_error_banner() {
        let mut app = App::new(Region::Las, "16.1.1");
        app.update(Action::Submit);

        let screen = render(&app);

        assert!(screen.contains("Error: Enter a Riot ID to search."));
    }

    #[test]
    fn success_view_renders_all_panels() {
        let screen = render(&loaded_app(dummy_profile()));

        assert!(screen.contains("Le Conservateur#3012"));
        assert!(screen.contains("GOLD IV (57 LP)"));
        assert!(screen.contains("Main Champions"));
        assert!(screen.contains("Lux"));
        assert!(screen.contains("Victory"));
        assert!(screen.contains("Defeat"));
        assert!(screen.contains("LA2_2"));
        assert!(!screen.contains("Enter a Riot ID"));
    }

    #[test]
    fn unloadable_icon_renders_error_placeholder() {
        let mut profile = dummy_profile();
        profile.profile_icon_url = Some("not a url".into());

        let screen = render(&loaded_app(profile));

        assert!(screen.contains("placehold.co/128x128/cccccc/ffffff?text=Error"));
        assert!(!screen.contains("not a url"));
    }

    #[test]
    fn success_view_renders_empty_panel_messages() {
        let mut profile = dummy_profile();
        profile.main_champions = None;
        profile.match_history = Some(vec![]);

        let screen = render(&loaded_app(profile));

        assert!(screen.contains(NO_CHAMPIONS));
        assert!(screen.contains(NO_MATCHES));
    }
}
