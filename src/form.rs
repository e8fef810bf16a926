use chrono::Local;
use crossterm::event::KeyCode;

use crate::error::FieldError;

#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    /// Free-typed numeric input; validated on submit.
    Number,
    /// YYYY-MM-DD, blank defaults to today on submit.
    Date,
    Selector { options: Vec<String>, selected: usize },
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, value: String::new(), kind: FieldKind::Text }
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self { name, label, value: String::new(), kind: FieldKind::Number }
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self { name, label, value: String::new(), kind: FieldKind::Date }
    }

    pub fn selector(name: &'static str, label: &'static str, options: &[&str]) -> Self {
        Self {
            name,
            label,
            value: options.first().map(|s| s.to_string()).unwrap_or_default(),
            kind: FieldKind::Selector {
                options: options.iter().map(|s| s.to_string()).collect(),
                selected: 0,
            },
        }
    }

    pub fn selector_owned(name: &'static str, label: &'static str, options: Vec<String>) -> Self {
        Self {
            name,
            label,
            value: options.first().cloned().unwrap_or_default(),
            kind: FieldKind::Selector { options, selected: 0 },
        }
    }

}

/// A draft create/edit form: field values plus focus. Key handling mutates
/// the draft only; nothing is validated until submit.
#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            let value = value.into();
            if let FieldKind::Selector { options, selected } = &mut field.kind {
                if let Some(idx) = options.iter().position(|o| *o == value) {
                    *selected = idx;
                }
            }
            field.value = value;
        }
    }

    /// Handle a keypress inside the form. Enter and Esc are the caller's
    /// concern; everything else (focus movement, selector cycling, typing)
    /// is handled here.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.fields.is_empty() {
            return;
        }
        match code {
            KeyCode::Tab | KeyCode::Down => {
                self.focused = (self.focused + 1) % self.fields.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused = if self.focused == 0 {
                    self.fields.len() - 1
                } else {
                    self.focused - 1
                };
            }
            KeyCode::Left => {
                let field = &mut self.fields[self.focused];
                if let FieldKind::Selector { options, selected } = &mut field.kind {
                    *selected = if *selected == 0 { options.len() - 1 } else { *selected - 1 };
                    field.value = options[*selected].clone();
                }
            }
            KeyCode::Right => {
                let field = &mut self.fields[self.focused];
                if let FieldKind::Selector { options, selected } = &mut field.kind {
                    *selected = (*selected + 1) % options.len();
                    field.value = options[*selected].clone();
                }
            }
            KeyCode::Char(c) => {
                let field = &mut self.fields[self.focused];
                if !matches!(field.kind, FieldKind::Selector { .. }) {
                    field.value.push(c);
                }
            }
            KeyCode::Backspace => {
                let field = &mut self.fields[self.focused];
                if !matches!(field.kind, FieldKind::Selector { .. }) {
                    field.value.pop();
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Validation helpers — used by the per-page record builders
// ---------------------------------------------------------------------------

/// Accumulate a field result into `errors`, keeping the value when valid.
/// The page builders run every field so the user sees all problems at once.
pub fn gather<T>(
    errors: &mut Vec<FieldError>,
    result: Result<T, FieldError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

pub fn require(form: &Form, name: &'static str, label: &str) -> Result<String, FieldError> {
    let value = form.value(name).trim().to_string();
    if value.is_empty() {
        Err(FieldError::new(label, "حقل مطلوب"))
    } else {
        Ok(value)
    }
}

pub fn optional(form: &Form, name: &str, default: &str) -> String {
    let value = form.value(name).trim().to_string();
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Parse a mandatory monetary amount: finite and non-negative.
pub fn parse_amount(form: &Form, name: &'static str, label: &str) -> Result<f64, FieldError> {
    let raw = form.value(name).trim();
    if raw.is_empty() {
        return Err(FieldError::new(label, "حقل مطلوب"));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(FieldError::new(label, "قيمة رقمية غير صالحة")),
    }
}

/// Parse an optional amount, defaulting blank input to `default`.
pub fn parse_amount_or(
    form: &Form,
    name: &'static str,
    label: &str,
    default: f64,
) -> Result<f64, FieldError> {
    let raw = form.value(name).trim();
    if raw.is_empty() {
        return Ok(default);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(FieldError::new(label, "قيمة رقمية غير صالحة")),
    }
}

/// Parse an optional whole count (items, stock), defaulting blank to zero.
pub fn parse_count(form: &Form, name: &'static str, label: &str) -> Result<u32, FieldError> {
    let raw = form.value(name).trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>()
        .map_err(|_| FieldError::new(label, "عدد صحيح غير صالح"))
}

/// Blank dates default to today (YYYY-MM-DD), like the dashboard forms.
pub fn date_or_today(form: &Form, name: &str) -> String {
    let raw = form.value(name).trim();
    if raw.is_empty() {
        Local::now().format("%Y-%m-%d").to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> Form {
        Form::new(vec![
            FormField::text("client", "اسم العميل"),
            FormField::number("amount", "المبلغ"),
            FormField::selector("status", "الحالة", &["قيد الانتظار", "مدفوعة"]),
            FormField::date("date", "التاريخ"),
        ])
    }

    #[test]
    fn test_empty_form_ignores_keys() {
        let mut form = Form::new(vec![]);
        form.handle_key(KeyCode::Tab);
        form.handle_key(KeyCode::BackTab);
        form.handle_key(KeyCode::Char('x'));
        assert!(form.fields.is_empty());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = sample_form();
        form.handle_key(KeyCode::Char('ن'));
        form.handle_key(KeyCode::Char('و'));
        form.handle_key(KeyCode::Char('ر'));
        assert_eq!(form.value("client"), "نور");
        form.handle_key(KeyCode::Backspace);
        assert_eq!(form.value("client"), "نو");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut form = sample_form();
        form.handle_key(KeyCode::Tab);
        assert_eq!(form.focused, 1);
        form.handle_key(KeyCode::BackTab);
        form.handle_key(KeyCode::BackTab);
        assert_eq!(form.focused, 3);
    }

    #[test]
    fn test_selector_cycles_with_arrows() {
        let mut form = sample_form();
        form.focused = 2;
        assert_eq!(form.value("status"), "قيد الانتظار");
        form.handle_key(KeyCode::Right);
        assert_eq!(form.value("status"), "مدفوعة");
        form.handle_key(KeyCode::Right);
        assert_eq!(form.value("status"), "قيد الانتظار");
        form.handle_key(KeyCode::Left);
        assert_eq!(form.value("status"), "مدفوعة");
    }

    #[test]
    fn test_selector_ignores_typed_chars() {
        let mut form = sample_form();
        form.focused = 2;
        form.handle_key(KeyCode::Char('x'));
        assert_eq!(form.value("status"), "قيد الانتظار");
    }

    #[test]
    fn test_require_rejects_blank() {
        let form = sample_form();
        let err = require(&form, "client", "اسم العميل").unwrap_err();
        assert_eq!(err.field, "اسم العميل");
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        let mut form = sample_form();
        form.set_value("amount", "abc");
        assert!(parse_amount(&form, "amount", "المبلغ").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative_and_non_finite() {
        let mut form = sample_form();
        form.set_value("amount", "-5");
        assert!(parse_amount(&form, "amount", "المبلغ").is_err());
        form.set_value("amount", "inf");
        assert!(parse_amount(&form, "amount", "المبلغ").is_err());
    }

    #[test]
    fn test_parse_amount_or_defaults_blank() {
        let form = sample_form();
        assert_eq!(parse_amount_or(&form, "amount", "المبلغ", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_date_or_today_defaults_blank() {
        let form = sample_form();
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(date_or_today(&form, "date"), today);
        let mut form = sample_form();
        form.set_value("date", "2026-01-15");
        assert_eq!(date_or_today(&form, "date"), "2026-01-15");
    }

    #[test]
    fn test_set_value_syncs_selector_index() {
        let mut form = sample_form();
        form.set_value("status", "مدفوعة");
        let field = &form.fields[2];
        if let FieldKind::Selector { selected, .. } = field.kind {
            assert_eq!(selected, 1);
        } else {
            panic!("expected selector");
        }
        assert_eq!(field.value, "مدفوعة");
    }
}
