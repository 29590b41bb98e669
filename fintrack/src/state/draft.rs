use chrono::{Local, Months, NaiveDate};
use fintrack_api::endpoints::{transactions::NewTransaction, Milliunits};
use std::str::FromStr;

/// Placeholder shown by the type dropdown before a real choice is made.
pub const TYPE_PLACEHOLDER: &str = "Select type";
/// Placeholder shown by the category dropdown before a real choice is made.
pub const CATEGORY_PLACEHOLDER: &str = "Select category";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest date the date input accepts (1970-01-01).
pub fn earliest_date() -> NaiveDate {
    NaiveDate::default()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Fields of a transaction draft, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Type,
    Category,
    Detail,
    Amount,
    Date,
}

impl DraftField {
    /// Name used to address the field (`set_field_by_name`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Category => "category",
            Self::Detail => "detail",
            Self::Amount => "amount",
            Self::Date => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Category => "Category",
            Self::Detail => "Detail",
            Self::Amount => "Amount",
            Self::Date => "Date",
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self, Self::Type | Self::Category)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Detail | Self::Amount)
    }

    /// Character filter for text fields. Amount only takes what can make up
    /// a decimal number.
    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            Self::Detail => !c.is_control(),
            Self::Amount => c.is_ascii_digit() || c == '.' || c == '-',
            _ => false,
        }
    }
}

impl FromStr for DraftField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(Self::Type),
            "category" => Ok(Self::Category),
            "detail" => Ok(Self::Detail),
            "amount" => Ok(Self::Amount),
            "date" => Ok(Self::Date),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction field '{0}'")]
pub struct UnknownFieldError(pub String);

/// In-progress transaction, as typed and selected by the user.
///
/// Every field is kept as entered; nothing is validated on mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    /// `YYYY-MM-DD`
    pub date: String,
    pub category: String,
    pub kind: String,
    pub detail: String,
    pub amount: String,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::dated(today())
    }

    pub fn dated(date: NaiveDate) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            category: CATEGORY_PLACEHOLDER.to_string(),
            kind: TYPE_PLACEHOLDER.to_string(),
            detail: String::new(),
            amount: String::new(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Type => &self.kind,
            DraftField::Category => &self.category,
            DraftField::Detail => &self.detail,
            DraftField::Amount => &self.amount,
            DraftField::Date => &self.date,
        }
    }

    /// Replaces one field and leaves the others untouched.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Type => self.kind = value,
            DraftField::Category => self.category = value,
            DraftField::Detail => self.detail = value,
            DraftField::Amount => self.amount = value,
            DraftField::Date => self.date = value,
        }
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownFieldError> {
        let field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn push_char(&mut self, field: DraftField, c: char) {
        if !field.accepts_char(c) {
            return;
        }
        let mut value = self.get(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    pub fn pop_char(&mut self, field: DraftField) {
        if !field.is_text() {
            return;
        }
        let mut value = self.get(field).to_string();
        value.pop();
        self.set_field(field, value);
    }

    pub fn clear(&mut self, field: DraftField) {
        match field {
            DraftField::Type => self.set_field(field, TYPE_PLACEHOLDER),
            DraftField::Category => self.set_field(field, CATEGORY_PLACEHOLDER),
            DraftField::Detail | DraftField::Amount => self.set_field(field, ""),
            DraftField::Date => self.set_field(field, today().format(DATE_FORMAT).to_string()),
        }
    }

    /// Moves a dropdown field through `[placeholder, options...]`, wrapping at
    /// both ends. A value that is not in the list restarts at the placeholder.
    pub fn cycle_option(&mut self, field: DraftField, options: &[String], forward: bool) {
        let placeholder = match field {
            DraftField::Type => TYPE_PLACEHOLDER,
            DraftField::Category => CATEGORY_PLACEHOLDER,
            _ => return,
        };

        let choices: Vec<&str> = std::iter::once(placeholder)
            .chain(options.iter().map(String::as_str))
            .collect();
        let current = choices
            .iter()
            .position(|choice| *choice == self.get(field))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % choices.len()
        } else if current == 0 {
            choices.len() - 1
        } else {
            current - 1
        };

        self.set_field(field, choices[next]);
    }

    /// Parsed date, if the field holds a valid `YYYY-MM-DD` value.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Steps the date by whole days, clamped to `[1970-01-01, today]`.
    pub fn step_date_days(&mut self, days: i64, today: NaiveDate) {
        let current = self.parsed_date().unwrap_or(today);
        let stepped = current
            .checked_add_signed(chrono::Duration::days(days))
            .unwrap_or(current);
        self.set_date_clamped(stepped, today);
    }

    /// Steps the date by whole months, clamped to `[1970-01-01, today]`.
    pub fn step_date_months(&mut self, months: i32, today: NaiveDate) {
        let current = self.parsed_date().unwrap_or(today);
        let delta = Months::new(months.unsigned_abs());
        let stepped = if months >= 0 {
            current.checked_add_months(delta)
        } else {
            current.checked_sub_months(delta)
        }
        .unwrap_or(current);
        self.set_date_clamped(stepped, today);
    }

    fn set_date_clamped(&mut self, date: NaiveDate, today: NaiveDate) {
        let clamped = date.clamp(earliest_date(), today);
        self.set_field(DraftField::Date, clamped.format(DATE_FORMAT).to_string());
    }

    /// Numeric value of the amount text. Empty, non-numeric and non-finite
    /// input counts as zero.
    pub fn amount_number(&self) -> f64 {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }

    /// The amount in milliunits, or `None` when it cannot be carried exactly.
    pub fn amount_value(&self) -> Option<Milliunits> {
        Milliunits::from_decimal(self.amount_number())
    }

    /// Builds the create payload. The date is only sent by surfaces that
    /// show a date input. Returns `None` when the amount is not representable,
    /// which [`validate`](super::validate) reports before submission.
    pub fn to_payload(&self, include_date: bool) -> Option<NewTransaction> {
        let payload = NewTransaction::new(
            self.category.clone(),
            self.kind.clone(),
            self.detail.clone(),
            self.amount_value()?,
        );

        Some(match self.parsed_date() {
            Some(date) if include_date => payload.with_date(date),
            _ => payload,
        })
    }
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn options() -> Vec<String> {
        vec!["Income".to_string(), "Expense".to_string()]
    }

    #[test]
    fn test_new_draft_uses_placeholders() {
        let draft = TransactionDraft::dated(date("2024-05-01"));
        assert_eq!(draft.date, "2024-05-01");
        assert_eq!(draft.kind, TYPE_PLACEHOLDER);
        assert_eq!(draft.category, CATEGORY_PLACEHOLDER);
        assert!(draft.detail.is_empty());
        assert!(draft.amount.is_empty());
    }

    #[test]
    fn test_set_field_replaces_only_that_field() {
        let mut draft = TransactionDraft::dated(date("2024-05-01"));
        draft.set_field(DraftField::Detail, "Lunch");
        let before = draft.clone();

        draft.set_field(DraftField::Amount, "12");

        assert_eq!(draft.amount, "12");
        assert_eq!(draft.detail, before.detail);
        assert_eq!(draft.kind, before.kind);
        assert_eq!(draft.category, before.category);
        assert_eq!(draft.date, before.date);
    }

    #[test]
    fn test_set_field_by_name() {
        let mut draft = TransactionDraft::new();
        draft.set_field_by_name("type", "Expense").unwrap();
        assert_eq!(draft.kind, "Expense");

        let untouched = draft.clone();
        let err = draft.set_field_by_name("payee", "Cafe").unwrap_err();
        assert_eq!(err, UnknownFieldError("payee".to_string()));
        assert_eq!(draft, untouched);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in [
            DraftField::Type,
            DraftField::Category,
            DraftField::Detail,
            DraftField::Amount,
            DraftField::Date,
        ] {
            assert_eq!(field.name().parse::<DraftField>(), Ok(field));
        }
    }

    #[test]
    fn test_amount_rejects_letters() {
        let mut draft = TransactionDraft::new();
        for c in "1a2.5x".chars() {
            draft.push_char(DraftField::Amount, c);
        }
        assert_eq!(draft.amount, "12.5");

        draft.pop_char(DraftField::Amount);
        assert_eq!(draft.amount, "12.");
    }

    #[test]
    fn test_amount_number_treats_garbage_as_zero() {
        let mut draft = TransactionDraft::new();
        for (text, expected) in [
            ("", 0.0),
            ("abc", 0.0),
            ("0", 0.0),
            ("-0", 0.0),
            ("0.0004", 0.0004),
            ("12", 12.0),
            (" 7.25 ", 7.25),
            ("-3", -3.0),
            ("inf", 0.0),
            ("NaN", 0.0),
        ] {
            draft.set_field(DraftField::Amount, text);
            assert_eq!(draft.amount_number(), expected, "amount {text:?}");
        }
    }

    #[test]
    fn test_amount_value_is_exact_or_absent() {
        let mut draft = TransactionDraft::new();
        for (text, expected) in [
            ("12", Some(12_000)),
            (" 7.25 ", Some(7_250)),
            ("-3", Some(-3_000)),
            ("0.0004", None),
            ("99999999999999999", None),
        ] {
            draft.set_field(DraftField::Amount, text);
            assert_eq!(
                draft.amount_value().map(|m| m.inner()),
                expected,
                "amount {text:?}"
            );
        }
    }

    #[test]
    fn test_cycle_option_wraps_through_placeholder() {
        let mut draft = TransactionDraft::new();
        let options = options();

        draft.cycle_option(DraftField::Type, &options, true);
        assert_eq!(draft.kind, "Income");
        draft.cycle_option(DraftField::Type, &options, true);
        assert_eq!(draft.kind, "Expense");
        draft.cycle_option(DraftField::Type, &options, true);
        assert_eq!(draft.kind, TYPE_PLACEHOLDER);
        draft.cycle_option(DraftField::Type, &options, false);
        assert_eq!(draft.kind, "Expense");
    }

    #[test]
    fn test_cycle_option_ignores_text_fields() {
        let mut draft = TransactionDraft::new();
        draft.cycle_option(DraftField::Detail, &options(), true);
        assert!(draft.detail.is_empty());
    }

    #[test]
    fn test_date_stepping_is_clamped() {
        let today = date("2024-05-01");
        let mut draft = TransactionDraft::dated(today);

        draft.step_date_days(1, today);
        assert_eq!(draft.date, "2024-05-01");

        draft.step_date_days(-1, today);
        assert_eq!(draft.date, "2024-04-30");

        draft.step_date_months(-1, today);
        assert_eq!(draft.date, "2024-03-30");

        draft.set_field(DraftField::Date, "1970-01-15");
        draft.step_date_months(-1, today);
        assert_eq!(draft.date, "1970-01-01");
    }

    #[test]
    fn test_payload_date_depends_on_surface() {
        let mut draft = TransactionDraft::dated(date("2024-05-01"));
        draft.set_field(DraftField::Type, "Expense");
        draft.set_field(DraftField::Category, "Food");
        draft.set_field(DraftField::Detail, "Lunch");
        draft.set_field(DraftField::Amount, "12");

        let without = draft.to_payload(false).unwrap();
        assert_eq!(without.date, None);
        assert_eq!(without.kind, "Expense");
        assert_eq!(without.amount, Milliunits::new(12_000));

        let with = draft.to_payload(true).unwrap();
        assert_eq!(with.date, Some(date("2024-05-01")));

        draft.set_field(DraftField::Amount, "99999999999999999");
        assert_eq!(draft.to_payload(true), None);
    }
}
