use engine::{CATEGORIES, TransactionKind, UNKNOWN_CATEGORY, category, filtered_expense_total};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    app::{AppState, EntryField, EntryForm, ExpensesMode},
    store::Ledger,
    ui::{
        components::{
            card::Card,
            form::{centered_box, panel, render_input, render_message, render_note},
            money::styled_amount,
        },
        screens::dashboard::truncate,
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, ledger: &Ledger, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let expenses = &state.expenses;
    let visible = ledger.filtered(&expenses.filter);

    render_filters(frame, layout[0], state, &visible, theme);

    let card = Card::new("Transactions", theme).focused(expenses.mode == ExpensesMode::List);
    let inner = card.inner(layout[1]);
    card.render_frame(frame, layout[1]);

    if visible.is_empty() {
        let text = if ledger.transactions().is_empty() {
            "No transactions yet. Press n to add one."
        } else {
            "Nothing matches these filters. Press f to reset."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(theme.text_muted))),
            inner,
        );
    } else {
        let rows: Vec<Row<'static>> = visible
            .iter()
            .map(|tx| {
                let name = category(&tx.category).map_or(UNKNOWN_CATEGORY, |c| c.name);
                Row::new(vec![
                    Cell::from(tx.date.format("%Y-%m-%d").to_string()),
                    Cell::from(name),
                    Cell::from(truncate(&tx.description, 40)),
                    Cell::from(Line::from(styled_amount(tx.amount, tx.kind, theme))),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(18),
                Constraint::Min(16),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(["Date", "Category", "Description", "Amount"])
                .style(Style::default().fg(theme.text_muted)),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme.border)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
        let mut table_state = TableState::default()
            .with_selected(Some(expenses.selected.min(visible.len() - 1)));
        frame.render_stateful_widget(table, inner, &mut table_state);
    }

    match expenses.mode {
        ExpensesMode::Entry => render_entry(frame, area, &expenses.entry, theme),
        ExpensesMode::ConfirmDelete => render_confirm(frame, area, state, ledger, theme),
        _ => {}
    }
}

fn render_filters(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    visible: &[&engine::Transaction],
    theme: &Theme,
) {
    let filter = &state.expenses.filter;
    let searching = state.expenses.mode == ExpensesMode::Search;
    let card = Card::new("Filters", theme).focused(searching);

    let category_label = filter
        .category
        .as_deref()
        .map(|id| category(id).map_or(id, |c| c.name))
        .unwrap_or("All");
    let kind_label = match filter.kind {
        None => "All",
        Some(TransactionKind::Expense) => "Expenses",
        Some(TransactionKind::Income) => "Income",
    };
    let cursor = if searching { "│" } else { "" };
    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.text_muted));

    let line = Line::from(vec![
        label("Search: "),
        Span::styled(
            format!("{}{cursor}  ", filter.search),
            Style::default().fg(theme.text),
        ),
        label("Category: "),
        Span::styled(format!("{category_label}  "), Style::default().fg(theme.text)),
        label("Type: "),
        Span::styled(format!("{kind_label}  "), Style::default().fg(theme.text)),
        label("Shown: "),
        Span::styled(format!("{}  ", visible.len()), Style::default().fg(theme.text)),
        label("Spent: "),
        Span::styled(
            filtered_expense_total(visible).to_string(),
            Style::default().fg(theme.negative),
        ),
    ]);
    card.render_with(frame, area, Paragraph::new(line));
}

fn render_entry(frame: &mut Frame<'_>, area: Rect, entry: &EntryForm, theme: &Theme) {
    let title = if entry.editing.is_some() {
        "Edit transaction"
    } else {
        "Add transaction"
    };
    let inner = panel(frame, centered_box(60, 13, area), title, theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Date
            Constraint::Length(1),
            Constraint::Length(1), // Message
            Constraint::Length(1),
            Constraint::Length(1), // Keys
        ])
        .margin(1)
        .split(inner);

    let kind = match entry.kind {
        TransactionKind::Expense => "◀ Expense ▶",
        TransactionKind::Income => "◀ Income ▶",
    };
    let category_label = entry
        .category
        .and_then(|at| CATEGORIES.get(at))
        .map_or_else(
            || "◀ choose ▶".to_string(),
            |c| format!("◀ {} {} ▶", c.icon, c.name),
        );

    render_input(frame, rows[0], "Type", kind, false, entry.focus == EntryField::Kind, theme);
    render_input(
        frame,
        rows[1],
        "Amount ₹",
        &entry.amount,
        false,
        entry.focus == EntryField::Amount,
        theme,
    );
    render_input(
        frame,
        rows[2],
        "Category",
        &category_label,
        false,
        entry.focus == EntryField::Category,
        theme,
    );
    render_input(
        frame,
        rows[3],
        "Description",
        &entry.description,
        false,
        entry.focus == EntryField::Description,
        theme,
    );
    render_input(
        frame,
        rows[4],
        "Date",
        &entry.date,
        false,
        entry.focus == EntryField::Date,
        theme,
    );
    render_message(frame, rows[6], entry.message.as_deref(), false, theme);
    render_note(frame, rows[8], "Tab next  ←→ pick  Enter save  Esc cancel", theme);
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, state: &AppState, ledger: &Ledger, theme: &Theme) {
    let visible = ledger.filtered(&state.expenses.filter);
    let Some(tx) = visible.get(state.expenses.selected) else {
        return;
    };
    let inner = panel(frame, centered_box(50, 7, area), "Delete transaction", theme);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}  ", truncate(&tx.description, 24)),
                Style::default().fg(theme.text),
            ),
            styled_amount(tx.amount, tx.kind, theme),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "This cannot be undone. y delete  n keep",
            Style::default().fg(theme.warning),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
