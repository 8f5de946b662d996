use crate::db::storage::KeyValueStorage;
use crate::models::category::find_category;
use crate::models::transaction::{Transaction, TransactionType};
use crate::operations::add::add_transaction_to_store;
use crate::operations::format::{format_amount, format_signed};
use crate::operations::remove::remove_transaction_from_store;
use crate::operations::summary::{self, CategoryTotal, DailyTotals, RECENT_LIMIT};
use crate::store::TransactionStore;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::{Alignment, Color, Constraint, Direction, Layout, Modifier, Rect, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::max;
use std::io;

const INCOME_COLOR: Color = Color::Rgb(0x10, 0xB9, 0x81);
const EXPENSE_COLOR: Color = Color::Rgb(0xEF, 0x44, 0x44);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Dashboard,
    Transactions,
}

impl View {
    fn toggle(self) -> Self {
        match self {
            View::Dashboard => View::Transactions,
            View::Transactions => View::Dashboard,
        }
    }

    fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Transactions => "Transactions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    AddInput,
}

struct DashboardState {
    view: View,
    mode: Mode,
    today: NaiveDate,

    table_state: TableState,

    input_buffer: String,
    input_error: Option<String>,

    status: Option<String>,

    last_page_size: usize,
}

impl DashboardState {
    fn new(today: NaiveDate, len: usize) -> Self {
        let mut state = Self {
            view: View::Dashboard,
            mode: Mode::Normal,
            today,
            table_state: TableState::default(),
            input_buffer: String::new(),
            input_error: None,
            status: None,
            last_page_size: 10,
        };
        state.clamp_selection(len);
        state
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0).min(len - 1);
            self.table_state.select(Some(selected));
        }
    }

    fn move_selection(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }

        let current = self.table_state.selected().unwrap_or(0) as i32;
        let max_index = len.saturating_sub(1) as i32;
        let next = (current + delta).clamp(0, max_index) as usize;
        self.table_state.select(Some(next));
    }

    fn start_input(&mut self) {
        self.input_buffer = format!("{}, ", self.today.format("%Y-%m-%d"));
        self.input_error = None;
        self.mode = Mode::AddInput;
    }

    fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.input_error = None;
        self.mode = Mode::Normal;
    }

    fn commit_input<S: KeyValueStorage>(&mut self, store: &mut TransactionStore<S>) {
        match add_transaction_to_store(store, &self.input_buffer) {
            Ok(id) => {
                self.status = Some(format!("Added transaction {}", short_id(&id)));
                self.cancel_input();
                self.view = View::Dashboard;
                self.table_state.select(Some(0));
            }
            Err(e) => self.input_error = Some(e),
        }
    }

    fn remove_selected<S: KeyValueStorage>(&mut self, store: &mut TransactionStore<S>) {
        let Some(id) = self
            .table_state
            .selected()
            .and_then(|idx| store.transactions().get(idx))
            .map(|t| t.id.clone())
        else {
            return;
        };

        self.status = Some(match remove_transaction_from_store(store, &id) {
            Ok(true) => format!("Removed transaction {}", short_id(&id)),
            Ok(false) => format!("Transaction {} not found", short_id(&id)),
            Err(e) => e,
        });
        self.clamp_selection(store.transactions().len());
    }
}

pub fn run_dashboard<S: KeyValueStorage>(
    store: &mut TransactionStore<S>,
    today: NaiveDate,
) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Failed to enter alternate screen: {}", e))?;

    let result = (|| {
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = ratatui::Terminal::new(backend)
            .map_err(|e| format!("Failed to initialize terminal: {}", e))?;

        let mut state = DashboardState::new(today, store.transactions().len());

        loop {
            terminal
                .draw(|frame| {
                    let size = frame.area();
                    let layout = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(3),
                            Constraint::Min(10),
                            Constraint::Length(3),
                        ])
                        .split(size);

                    render_header(frame, layout[0], &state);
                    match state.view {
                        View::Dashboard => render_dashboard(frame, layout[1], store, &state),
                        View::Transactions => {
                            render_transactions(frame, layout[1], store.transactions(), &mut state)
                        }
                    }
                    render_footer(frame, layout[2], &state);

                    if state.mode == Mode::AddInput {
                        render_input_modal(frame, size, &state);
                    }
                })
                .map_err(|e| format!("Failed to draw terminal UI: {}", e))?;

            if event::poll(std::time::Duration::from_millis(200))
                .map_err(|e| format!("Failed to poll input: {}", e))?
            {
                let event = event::read().map_err(|e| format!("Failed to read input: {}", e))?;
                if let Event::Key(key) = event {
                    if handle_key(store, &mut state, key) {
                        break;
                    }
                }
            }
        }

        Ok(())
    })();

    disable_raw_mode().map_err(|e| format!("Failed to disable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)
        .map_err(|e| format!("Failed to leave alternate screen: {}", e))?;

    result
}

/// Returns true when the user asked to leave.
fn handle_key<S: KeyValueStorage>(
    store: &mut TransactionStore<S>,
    state: &mut DashboardState,
    key: KeyEvent,
) -> bool {
    // Many terminals emit both a Press and a Release event. Only act on Press/Repeat.
    if key.kind == KeyEventKind::Release {
        return false;
    }

    match state.mode {
        Mode::Normal => {
            let len = store.transactions().len();
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Tab => state.view = state.view.toggle(),
                KeyCode::Char('a') => state.start_input(),
                _ if state.view == View::Transactions => match key.code {
                    KeyCode::Up => state.move_selection(-1, len),
                    KeyCode::Down => state.move_selection(1, len),
                    KeyCode::PageUp => state.move_selection(-(max(1, state.last_page_size) as i32), len),
                    KeyCode::PageDown => state.move_selection(max(1, state.last_page_size) as i32, len),
                    KeyCode::Home => {
                        if len > 0 {
                            state.table_state.select(Some(0));
                        }
                    }
                    KeyCode::End => {
                        if len > 0 {
                            state.table_state.select(Some(len - 1));
                        }
                    }
                    KeyCode::Char('x') | KeyCode::Delete => state.remove_selected(store),
                    _ => {}
                },
                _ => {}
            }
        }
        Mode::AddInput => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            {
                state.cancel_input();
                return false;
            }

            match key.code {
                KeyCode::Esc => state.cancel_input(),
                KeyCode::Enter => state.commit_input(store),
                KeyCode::Backspace => {
                    state.input_buffer.pop();
                }
                KeyCode::Char(ch) => state.input_buffer.push(ch),
                _ => {}
            }
        }
    }

    false
}

fn render_header(frame: &mut ratatui::Frame, area: Rect, state: &DashboardState) {
    let mut spans = vec![
        Span::styled(
            "FINO",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for view in [View::Dashboard, View::Transactions] {
        let style = if view == state.view {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", view.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(format!(" |  Today: {}", state.today.format("%Y-%m-%d"))));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut ratatui::Frame, area: Rect, state: &DashboardState) {
    let hint = match (state.mode, state.view) {
        (Mode::AddInput, _) => "Type, Enter save, Esc cancel".to_string(),
        (Mode::Normal, View::Dashboard) => "Tab transactions  a add  q/Esc exit".to_string(),
        (Mode::Normal, View::Transactions) => {
            "↑/↓ move  PgUp/PgDn page  x/Del delete  a add  Tab dashboard  q/Esc exit".to_string()
        }
    };
    let text = match state.status {
        Some(ref status) => format!("{}  |  {}", status, hint),
        None => hint,
    };

    frame.render_widget(
        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_dashboard<S: KeyValueStorage>(
    frame: &mut ratatui::Frame,
    area: Rect,
    store: &TransactionStore<S>,
    state: &DashboardState,
) {
    let transactions = store.transactions();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(RECENT_LIMIT as u16 + 2),
        ])
        .split(area);

    render_overview_cards(frame, layout[0], transactions, state.today);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout[1]);

    render_daily_chart(frame, middle[0], &summary::daily_series(transactions));
    render_category_breakdown(
        frame,
        middle[1],
        &summary::category_breakdown(transactions, store.categories()),
    );
    render_recent(frame, layout[2], store);
}

fn render_overview_cards(
    frame: &mut ratatui::Frame,
    area: Rect,
    transactions: &[Transaction],
    today: NaiveDate,
) {
    let overview = summary::overview(transactions, today);
    let balance_color = if overview.balance >= Decimal::ZERO {
        INCOME_COLOR
    } else {
        EXPENSE_COLOR
    };
    let cards = [
        ("Balance", overview.balance, balance_color),
        ("Income", overview.income, INCOME_COLOR),
        ("Expenses", overview.expenses, EXPENSE_COLOR),
        ("This month", overview.monthly_expenses, Color::LightBlue),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (column, (title, value, color)) in columns.iter().zip(cards) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format_amount(value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().title(title).borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, *column);
    }
}

fn render_daily_chart(frame: &mut ratatui::Frame, area: Rect, series: &[DailyTotals]) {
    let block = Block::default()
        .title("Income vs expenses (last 7 dates)")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if series.is_empty() {
        frame.render_widget(
            Paragraph::new("No transactions yet").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let max_value = series
        .iter()
        .flat_map(|d| [d.income, d.expense])
        .map(|v| v.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max)
        .max(1.0);
    // date label and amount take roughly 22 columns
    let bar_room = inner.width.saturating_sub(22).max(1) as f64;

    let mut lines = Vec::new();
    for day in series {
        for (index, (value, color)) in [(day.income, INCOME_COLOR), (day.expense, EXPENSE_COLOR)]
            .into_iter()
            .enumerate()
        {
            let label = if index == 0 {
                day.date.format("%m-%d").to_string()
            } else {
                String::new()
            };
            let width = (value.to_f64().unwrap_or(0.0) / max_value * bar_room).round() as usize;
            lines.push(Line::from(vec![
                Span::raw(format!("{:6}", label)),
                Span::styled("█".repeat(width), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(format_amount(value), Style::default().fg(color)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn render_category_breakdown(frame: &mut ratatui::Frame, area: Rect, breakdown: &[CategoryTotal]) {
    let block = Block::default()
        .title("Expenses by category")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if breakdown.is_empty() {
        frame.render_widget(
            Paragraph::new("No expense data available").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let total = breakdown
        .iter()
        .fold(Decimal::ZERO, |acc, entry| acc.saturating_add(entry.total));

    let lines: Vec<Line> = breakdown
        .iter()
        .map(|entry| {
            let color = entry
                .category
                .rgb()
                .map(|(r, g, b)| Color::Rgb(r, g, b))
                .unwrap_or(Color::White);
            let share = (entry.total / total * Decimal::ONE_HUNDRED).round_dp(1);
            Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::raw(format!("{} {:16}", entry.category.icon, entry.category.name)),
                Span::styled(
                    format!("{:>14}", format_amount(entry.total)),
                    Style::default().fg(color),
                ),
                Span::raw(format!("  {:>5}%", share.to_string())),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn render_recent<S: KeyValueStorage>(
    frame: &mut ratatui::Frame,
    area: Rect,
    store: &TransactionStore<S>,
) {
    let block = Block::default()
        .title("Recent transactions")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let recent = summary::recent(store.transactions(), RECENT_LIMIT);
    if recent.is_empty() {
        frame.render_widget(
            Paragraph::new("No recent transactions").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = recent
        .iter()
        .map(|tx| {
            let color = type_color(tx.transaction_type);
            let icon = find_category(store.categories(), &tx.category)
                .map(|c| c.icon)
                .unwrap_or("•");
            Line::from(vec![
                Span::styled(format!("{:>16}", format_signed(tx)), Style::default().fg(color)),
                Span::raw("  "),
                Span::raw(format!("{} {:30}", icon, truncate(&tx.description, 30))),
                Span::styled(
                    format!("[{}]", tx.category),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(format!("  {}", tx.date.format("%Y-%m-%d"))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn render_transactions(
    frame: &mut ratatui::Frame,
    area: Rect,
    transactions: &[Transaction],
    state: &mut DashboardState,
) {
    let block = Block::default()
        .title(format!("Transactions ({})", transactions.len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new([
        Cell::from("Date").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Id").style(bold),
    ])
    .style(Style::default().fg(Color::White));

    let rows = transactions.iter().map(|tx| {
        Row::new([
            Cell::from(tx.date.format("%Y-%m-%d").to_string()),
            Cell::from(truncate(&tx.description, 42)),
            Cell::from(format_signed(tx)).style(Style::default().fg(type_color(tx.transaction_type))),
            Cell::from(tx.transaction_type.as_str()),
            Cell::from(tx.category.clone()),
            Cell::from(short_id(&tx.id).to_string()),
        ])
    });

    // Leave room for the header row.
    state.last_page_size = max(1, inner.height.saturating_sub(2) as usize);

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(40),
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ")
        .column_spacing(1);

    frame.render_stateful_widget(table, inner, &mut state.table_state);

    if transactions.is_empty() {
        let empty = Paragraph::new("No transactions. Press a to add one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
    }
}

fn render_input_modal(frame: &mut ratatui::Frame, area: Rect, state: &DashboardState) {
    let popup_area = centered_rect(80, 30, area);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(
            "New Transaction",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("date, description, amount, type(income/expense), category"),
        Line::from(""),
        Line::from(Span::styled(
            format!("> {}", state.input_buffer),
            Style::default().fg(Color::Yellow),
        )),
    ];

    if let Some(ref err) = state.input_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title("Input");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

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

fn type_color(transaction_type: TransactionType) -> Color {
    match transaction_type {
        TransactionType::Income => INCOME_COLOR,
        TransactionType::Expense => EXPENSE_COLOR,
    }
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::db::storage::SqliteStorage;

    fn create_test_store() -> TransactionStore<SqliteStorage> {
        TransactionStore::load(SqliteStorage::new(establish_test_connection().unwrap()))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn test_quit_keys() {
        let mut store = create_test_store();
        let mut state = DashboardState::new(today(), store.transactions().len());

        assert!(handle_key(&mut store, &mut state, press(KeyCode::Char('q'))));
        assert!(handle_key(&mut store, &mut state, press(KeyCode::Esc)));
    }

    #[test]
    fn test_delete_selected_transaction() {
        let mut store = create_test_store();
        let mut state = DashboardState::new(today(), store.transactions().len());

        handle_key(&mut store, &mut state, press(KeyCode::Tab));
        assert_eq!(state.view, View::Transactions);
        handle_key(&mut store, &mut state, press(KeyCode::Down));
        handle_key(&mut store, &mut state, press(KeyCode::Char('x')));

        assert!(store.get("2").is_none());
        assert_eq!(store.transactions().len(), 4);
        assert_eq!(state.table_state.selected(), Some(1));
        assert_eq!(state.status.as_deref(), Some("Removed transaction 2"));
    }

    #[test]
    fn test_delete_is_ignored_on_dashboard_view() {
        let mut store = create_test_store();
        let mut state = DashboardState::new(today(), store.transactions().len());

        handle_key(&mut store, &mut state, press(KeyCode::Char('x')));
        assert_eq!(store.transactions().len(), 5);
    }

    #[test]
    fn test_delete_last_row_moves_selection_up() {
        let mut store = create_test_store();
        let mut state = DashboardState::new(today(), store.transactions().len());
        state.view = View::Transactions;

        handle_key(&mut store, &mut state, press(KeyCode::End));
        assert_eq!(state.table_state.selected(), Some(4));
        handle_key(&mut store, &mut state, press(KeyCode::Delete));

        assert!(store.get("5").is_none());
        assert_eq!(state.table_state.selected(), Some(3));
    }

    #[test]
    fn test_add_through_input_modal() {
        let mut store = create_test_store();
        let mut state = DashboardState::new(today(), store.transactions().len());

        handle_key(&mut store, &mut state, press(KeyCode::Char('a')));
        assert_eq!(state.mode, Mode::AddInput);
        assert_eq!(state.input_buffer, "2025-01-20, ");

        for ch in "Taxi, 25000, expense, transporte".chars() {
            handle_key(&mut store, &mut state, press(KeyCode::Char(ch)));
        }
        assert!(!handle_key(&mut store, &mut state, press(KeyCode::Enter)));

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(store.transactions().len(), 6);
        let added = &store.transactions()[0];
        assert_eq!(added.description, "Taxi");
        assert_eq!(added.category, "Transporte");
        assert_eq!(added.date, today());
    }

    #[test]
    fn test_add_with_invalid_input_keeps_modal_open() {
        let mut store = create_test_store();
        let mut state = DashboardState::new(today(), store.transactions().len());

        handle_key(&mut store, &mut state, press(KeyCode::Char('a')));
        for ch in "Taxi".chars() {
            handle_key(&mut store, &mut state, press(KeyCode::Char(ch)));
        }
        handle_key(&mut store, &mut state, press(KeyCode::Enter));

        assert_eq!(state.mode, Mode::AddInput);
        assert!(state.input_error.is_some());
        assert_eq!(store.transactions().len(), 5);

        handle_key(&mut store, &mut state, press(KeyCode::Esc));
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.input_error.is_none());
    }

    #[test]
    fn test_typing_q_in_modal_does_not_quit() {
        let mut store = create_test_store();
        let mut state = DashboardState::new(today(), store.transactions().len());

        handle_key(&mut store, &mut state, press(KeyCode::Char('a')));
        assert!(!handle_key(&mut store, &mut state, press(KeyCode::Char('q'))));
        assert!(state.input_buffer.ends_with('q'));
    }

    #[test]
    fn test_short_id_and_truncate() {
        assert_eq!(short_id("1"), "1");
        assert_eq!(short_id("0f8fad5b-d9cb-469f-a165-70867728950e"), "0f8fad5b");
        assert_eq!(truncate("Cine y cena", 30), "Cine y cena");
        assert_eq!(truncate("Alimentación semanal completa", 10), "Aliment...");
    }
}
