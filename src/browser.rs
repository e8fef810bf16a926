//! Interactive page browser: one table-driven view that serves every
//! dashboard page through the type-erased `Page` interface — summary cards
//! on top, the filtered table in the middle, search and form overlays on
//! demand.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::error::{DaftarError, FieldError};
use crate::filter::Selection;
use crate::form::{FieldKind, Form};
use crate::pages::{FilterMeta, Page, PageId, RowView};
use crate::settings::remember_last_page;
use crate::tui::{
    stat_span, wrap_text, PageView, ViewAction, ERROR_STYLE, FOOTER_STYLE, HEADER_STYLE,
    SELECTED_STYLE,
};

const PAGE_SIZE: usize = 20;
const MAX_COL_WIDTH: u16 = 32;

enum Mode {
    Normal,
    Search(String),
    Form {
        form: Form,
        /// Some(id) when editing, None when creating.
        editing: Option<String>,
        errors: Vec<FieldError>,
    },
}

pub struct PageBrowser {
    page_id: PageId,
    page: Box<dyn Page>,
    filters: Vec<FilterMeta>,
    selections: Vec<Selection>,
    active_filter: usize,
    query: String,
    offset: usize,
    selected: usize,
    mode: Mode,
    status_message: Option<String>,
    table_state: TableState,
}

impl PageBrowser {
    pub fn open(page_id: PageId) -> Self {
        Self::with_page(page_id, page_id.open())
    }

    pub fn with_page(page_id: PageId, page: Box<dyn Page>) -> Self {
        let filters = page.filters();
        let selections = vec![Selection::Any; filters.len()];
        Self {
            page_id,
            page,
            filters,
            selections,
            active_filter: 0,
            query: String::new(),
            offset: 0,
            selected: 0,
            mode: Mode::Normal,
            status_message: None,
            table_state: TableState::default(),
        }
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.page.visible(&self.query, &self.selections)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self, idx: usize) -> &Selection {
        &self.selections[idx]
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self.mode, Mode::Form { .. })
    }

    pub fn record_count(&self) -> usize {
        self.page.len()
    }

    fn switch_page(&mut self, page_id: PageId) {
        self.page_id = page_id;
        self.page = page_id.open();
        self.filters = self.page.filters();
        self.selections = vec![Selection::Any; self.filters.len()];
        self.active_filter = 0;
        self.query.clear();
        self.offset = 0;
        self.selected = 0;
        self.status_message = None;
        remember_last_page(page_id.slug());
    }

    /// Step the active filter through Any and each concrete option.
    fn cycle_filter(&mut self, forward: bool) {
        let Some(meta) = self.filters.get(self.active_filter) else {
            return;
        };
        let cycle: Vec<Selection> = std::iter::once(Selection::Any)
            .chain(meta.options.iter().map(|o| Selection::Only(o.clone())))
            .collect();
        let current = cycle
            .iter()
            .position(|s| *s == self.selections[self.active_filter])
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % cycle.len()
        } else {
            (current + cycle.len() - 1) % cycle.len()
        };
        self.selections[self.active_filter] = cycle[next].clone();
        self.offset = 0;
        self.selected = 0;
    }

    fn filter_label(&self, idx: usize) -> String {
        match &self.selections[idx] {
            Selection::Any => self.filters[idx].all_label.to_string(),
            Selection::Only(value) => value.clone(),
        }
    }

    fn selected_id(&self) -> Option<String> {
        self.rows().get(self.offset + self.selected).map(|r| r.id.clone())
    }

    fn export(&mut self) {
        let path = crate::export::default_export_path(self.page.slug());
        match crate::export::export_csv(self.page.as_ref(), &self.query, &self.selections, &path)
        {
            Ok(count) => {
                self.status_message =
                    Some(format!("تم تصدير {count} سجل إلى {}", path.display()));
            }
            Err(e) => self.status_message = Some(format!("فشل التصدير: {e}")),
        }
    }

    fn submit_form(&mut self) {
        let (form, editing) = match &self.mode {
            Mode::Form { form, editing, .. } => (form.clone(), editing.clone()),
            _ => return,
        };
        let result = match editing {
            Some(id) => self.page.submit_edit(&id, &form).map(|_| id),
            None => self.page.submit_create(&form),
        };
        match result {
            Ok(id) => {
                self.status_message = Some(format!("تم الحفظ: {id}"));
                self.mode = Mode::Normal;
                self.offset = 0;
                self.selected = 0;
            }
            Err(DaftarError::Validation(errors)) => {
                // Keep the draft on screen so nothing typed is lost.
                if let Mode::Form { errors: slot, .. } = &mut self.mode {
                    *slot = errors;
                }
            }
            Err(e) => {
                self.status_message = Some(format!("خطأ: {e}"));
                self.mode = Mode::Normal;
            }
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> ViewAction {
        let row_count = self.rows().len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            KeyCode::Down => {
                if self.offset + self.selected + 1 < row_count {
                    if self.selected + 1 < PAGE_SIZE {
                        self.selected += 1;
                    } else {
                        self.offset += 1;
                    }
                }
            }
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                } else if self.offset > 0 {
                    self.offset -= 1;
                }
            }
            KeyCode::PageDown => {
                if self.offset + PAGE_SIZE < row_count {
                    self.offset += PAGE_SIZE;
                    self.selected = 0;
                }
            }
            KeyCode::PageUp => {
                self.offset = self.offset.saturating_sub(PAGE_SIZE);
                self.selected = 0;
            }
            KeyCode::Home => {
                self.offset = 0;
                self.selected = 0;
            }
            KeyCode::Char('n') => self.switch_page(self.page_id.next()),
            KeyCode::Char('p') => self.switch_page(self.page_id.prev()),
            KeyCode::Char('/') => self.mode = Mode::Search(self.query.clone()),
            KeyCode::Char('f') => {
                if !self.filters.is_empty() {
                    self.active_filter = (self.active_filter + 1) % self.filters.len();
                }
            }
            KeyCode::Right => self.cycle_filter(true),
            KeyCode::Left => self.cycle_filter(false),
            KeyCode::Char('a') => {
                if let Some(form) = self.page.blank_form() {
                    self.mode = Mode::Form { form, editing: None, errors: vec![] };
                } else {
                    self.status_message = Some("هذه الصفحة للعرض فقط".into());
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    if let Some(form) = self.page.edit_form(&id) {
                        self.mode = Mode::Form { form, editing: Some(id), errors: vec![] };
                    } else if !self.page.can_edit() {
                        self.status_message = Some("هذه الصفحة للعرض فقط".into());
                    }
                }
            }
            KeyCode::Char('x') => self.export(),
            _ => {}
        }
        ViewAction::Continue
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        let Mode::Search(input) = &mut self.mode else {
            return;
        };
        match code {
            KeyCode::Enter => {
                self.query = input.clone();
                self.offset = 0;
                self.selected = 0;
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => {
                self.query.clear();
                self.offset = 0;
                self.selected = 0;
                self.mode = Mode::Normal;
            }
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_form(),
            KeyCode::Esc => self.mode = Mode::Normal,
            other => {
                if let Mode::Form { form, .. } = &mut self.mode {
                    form.handle_key(other);
                }
            }
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let Mode::Form { form, editing, errors } = &self.mode else {
            return;
        };
        let mut lines = Vec::new();
        let heading = match editing {
            Some(id) => format!("تعديل {id}"),
            None => "سجل جديد".to_string(),
        };
        lines.push(Line::from(Span::styled(heading, HEADER_STYLE)));
        lines.push(Line::from(""));
        for (i, field) in form.fields.iter().enumerate() {
            let marker = if i == form.focused { ">" } else { " " };
            let rendered = match &field.kind {
                FieldKind::Selector { .. } => {
                    format!("{marker} {}: \u{2190} {} \u{2192}", field.label, field.value)
                }
                _ if i == form.focused => {
                    format!("{marker} {}: {}\u{2588}", field.label, field.value)
                }
                _ => format!("{marker} {}: {}", field.label, field.value),
            };
            lines.push(Line::from(rendered));
        }
        if !errors.is_empty() {
            lines.push(Line::from(""));
            let width = area.width.saturating_sub(2) as usize;
            for error in errors {
                let (wrapped, _) = wrap_text(&error.to_string(), width);
                for part in wrapped.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {part}"),
                        ERROR_STYLE,
                    )));
                }
            }
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn column_widths(&self, rows: &[RowView]) -> Vec<Constraint> {
        let headers = self.page.headers();
        headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let mut width = header.chars().count() as u16;
                for row in rows.iter().take(PAGE_SIZE) {
                    if let Some(cell) = row.cells.get(i) {
                        width = width.max(cell.chars().count() as u16);
                    }
                }
                Constraint::Length(width.min(MAX_COL_WIDTH) + 1)
            })
            .collect()
    }
}

impl PageView for PageBrowser {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let areas = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // stats
            Constraint::Length(1), // query + filters
            Constraint::Fill(1),   // table or form
            Constraint::Length(1), // status
            Constraint::Length(1), // keys
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(format!("دفتر · {}", self.page.title())).style(HEADER_STYLE),
            areas[0],
        );

        let mut stat_spans: Vec<Span> = Vec::new();
        for (i, stat) in self.page.stats().iter().enumerate() {
            if i > 0 {
                stat_spans.push(Span::raw("  |  "));
            }
            stat_spans.push(stat_span(stat));
        }
        frame.render_widget(Paragraph::new(Line::from(stat_spans)), areas[1]);

        let mut filter_line = if self.query.is_empty() {
            String::from("بحث: -")
        } else {
            format!("بحث: {}", self.query)
        };
        for (i, _) in self.filters.iter().enumerate() {
            let marker = if i == self.active_filter { "*" } else { "" };
            filter_line.push_str(&format!("   [{}{marker}]", self.filter_label(i)));
        }
        frame.render_widget(
            Paragraph::new(filter_line).style(FOOTER_STYLE),
            areas[2],
        );

        if matches!(self.mode, Mode::Form { .. }) {
            self.draw_form(frame, areas[3]);
        } else {
            let rows = self.rows();
            let widths = self.column_widths(&rows);
            let rendered: Vec<Row> = rows
                .iter()
                .skip(self.offset)
                .take(PAGE_SIZE)
                .map(|r| Row::new(r.cells.iter().map(|c| Cell::from(c.clone()))))
                .collect();
            self.table_state.select(Some(self.selected));
            let table = Table::new(rendered, widths)
                .header(
                    Row::new(self.page.headers())
                        .style(HEADER_STYLE)
                        .bottom_margin(1),
                )
                .column_spacing(1)
                .row_highlight_style(SELECTED_STYLE);
            frame.render_stateful_widget(table, areas[3], &mut self.table_state);
        }

        let rows_total = self.rows().len();
        let status = match (&self.mode, &self.status_message) {
            (Mode::Search(input), _) => format!("بحث: {input}\u{2588}"),
            (_, Some(msg)) => msg.clone(),
            _ => format!(
                "{} من {} سجل  |  صفحة {}",
                rows_total,
                self.page.len(),
                self.page_id.slug()
            ),
        };
        frame.render_widget(Paragraph::new(status).style(FOOTER_STYLE), areas[4]);

        let keys = match self.mode {
            Mode::Normal => {
                "\u{2191}/\u{2193}:اختيار  n/p:الصفحة  /:بحث  f:الفلتر  \u{2190}/\u{2192}:قيمة الفلتر  a:إضافة  e:تعديل  x:تصدير  q:خروج"
            }
            Mode::Search(_) => "Enter:تطبيق  Esc:مسح البحث",
            Mode::Form { .. } => "Tab:التالي  \u{2190}/\u{2192}:الخيارات  Enter:حفظ  Esc:إلغاء",
        };
        frame.render_widget(Paragraph::new(keys).style(FOOTER_STYLE), areas[5]);
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        if !matches!(self.mode, Mode::Search(_)) {
            self.status_message = None;
        }
        if matches!(self.mode, Mode::Normal) {
            return self.handle_normal_key(code);
        }
        if matches!(self.mode, Mode::Search(_)) {
            self.handle_search_key(code);
        } else {
            self.handle_form_key(code);
        }
        ViewAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{invoices, PageStore};

    fn browser(dir: &std::path::Path) -> PageBrowser {
        let page = PageStore::open_at(invoices::spec(), dir.join("invoices.json"));
        PageBrowser::with_page(PageId::Invoices, Box::new(page))
    }

    fn type_str(browser: &mut PageBrowser, text: &str) {
        for c in text.chars() {
            browser.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        b.handle_key(KeyCode::Down);
        b.handle_key(KeyCode::Down);
        assert_eq!(b.selected, 2);
        b.handle_key(KeyCode::Up);
        assert_eq!(b.selected, 1);
    }

    #[test]
    fn test_selection_stops_at_last_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        for _ in 0..20 {
            b.handle_key(KeyCode::Down);
        }
        assert_eq!(b.offset + b.selected, b.rows().len() - 1);
    }

    #[test]
    fn test_search_narrows_rows_live_on_enter() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        b.handle_key(KeyCode::Char('/'));
        type_str(&mut b, "النور");
        b.handle_key(KeyCode::Enter);
        let rows = b.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "INV-002");
    }

    #[test]
    fn test_escape_clears_search() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        b.handle_key(KeyCode::Char('/'));
        type_str(&mut b, "zzz");
        b.handle_key(KeyCode::Esc);
        assert_eq!(b.query(), "");
        assert_eq!(b.rows().len(), 5);
    }

    #[test]
    fn test_filter_cycles_through_any_and_options() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        assert!(b.selection(0).is_any());
        b.handle_key(KeyCode::Right);
        assert_eq!(*b.selection(0), Selection::Only("مدفوعة".into()));
        assert_eq!(b.rows().len(), 2);
        b.handle_key(KeyCode::Left);
        assert!(b.selection(0).is_any());
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        let before = b.record_count();
        b.handle_key(KeyCode::Char('a'));
        assert!(b.is_form_open());
        type_str(&mut b, "عميل");
        b.handle_key(KeyCode::Tab);
        type_str(&mut b, "abc");
        b.handle_key(KeyCode::Enter);
        assert!(b.is_form_open());
        assert_eq!(b.record_count(), before);
        if let Mode::Form { errors, .. } = &b.mode {
            assert!(!errors.is_empty());
        } else {
            panic!("form should stay open");
        }
    }

    #[test]
    fn test_valid_submit_adds_record_and_closes_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        b.handle_key(KeyCode::Char('a'));
        type_str(&mut b, "عميل جديد");
        b.handle_key(KeyCode::Tab);
        type_str(&mut b, "1500");
        b.handle_key(KeyCode::Enter);
        assert!(!b.is_form_open());
        assert_eq!(b.rows()[0].id, "INV-006");
    }

    #[test]
    fn test_edit_prefills_selected_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        b.handle_key(KeyCode::Down);
        b.handle_key(KeyCode::Char('e'));
        let Mode::Form { form, editing, .. } = &b.mode else {
            panic!("expected form");
        };
        assert_eq!(editing.as_deref(), Some("INV-002"));
        assert_eq!(form.value("client"), "مؤسسة النور للتجارة");
    }

    #[test]
    fn test_q_closes_browser() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = browser(dir.path());
        assert!(matches!(b.handle_key(KeyCode::Char('q')), ViewAction::Close));
    }
}
