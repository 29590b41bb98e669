use super::draft::{DraftField, TransactionDraft, CATEGORY_PLACEHOLDER, TYPE_PLACEHOLDER};
use fintrack_api::endpoints::Milliunits;
use std::collections::BTreeMap;

pub const TYPE_REQUIRED: &str = "Type is required";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const DETAIL_REQUIRED: &str = "Detail is required";
pub const AMOUNT_REQUIRED: &str = "Amount is required";
pub const AMOUNT_TOO_LARGE: &str = "Amount is too large";
pub const AMOUNT_TOO_PRECISE: &str = "Amount has more than 3 decimal places";

/// Field-level problems found in a draft. A field only appears when it is
/// invalid, so an empty set means the draft can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    /// Errors in form order: type, category, detail, amount.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.values().map(String::as_str).collect()
    }

    fn insert(&mut self, field: DraftField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Checks the required fields of a draft. Each rule is independent, so a
/// draft can fail any subset of them.
pub fn validate(draft: &TransactionDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.kind == TYPE_PLACEHOLDER {
        errors.insert(DraftField::Type, TYPE_REQUIRED);
    }
    if draft.category == CATEGORY_PLACEHOLDER {
        errors.insert(DraftField::Category, CATEGORY_REQUIRED);
    }
    if draft.detail.is_empty() {
        errors.insert(DraftField::Detail, DETAIL_REQUIRED);
    }
    let amount = draft.amount_number();
    if amount == 0.0 {
        errors.insert(DraftField::Amount, AMOUNT_REQUIRED);
    } else if draft.amount_value().is_none() {
        let message = if amount.abs() > Milliunits::max_decimal() {
            AMOUNT_TOO_LARGE
        } else {
            AMOUNT_TOO_PRECISE
        };
        errors.insert(DraftField::Amount, message);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TransactionDraft {
        let mut draft = TransactionDraft::new();
        draft.set_field(DraftField::Type, "Expense");
        draft.set_field(DraftField::Category, "Food");
        draft.set_field(DraftField::Detail, "Lunch");
        draft.set_field(DraftField::Amount, "12");
        draft
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_valid_drafts_across_options() {
        for kind in ["Income", "Expense"] {
            for category in ["Food", "Transport", "Other"] {
                for amount in ["1", "-1", "0.01", "99999"] {
                    let mut draft = valid_draft();
                    draft.set_field(DraftField::Type, kind);
                    draft.set_field(DraftField::Category, category);
                    draft.set_field(DraftField::Amount, amount);
                    assert!(
                        validate(&draft).is_empty(),
                        "{kind}/{category}/{amount} should be valid"
                    );
                }
            }
        }
    }

    #[test]
    fn test_each_missing_field_reports_exactly_one_error() {
        let cases = [
            (DraftField::Type, TYPE_PLACEHOLDER, TYPE_REQUIRED),
            (DraftField::Category, CATEGORY_PLACEHOLDER, CATEGORY_REQUIRED),
            (DraftField::Detail, "", DETAIL_REQUIRED),
            (DraftField::Amount, "0", AMOUNT_REQUIRED),
        ];

        for (field, value, message) in cases {
            let mut draft = valid_draft();
            draft.set_field(field, value);

            let errors = validate(&draft);
            assert_eq!(errors.len(), 1, "missing {field:?}");
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn test_empty_draft_reports_all_four_in_order() {
        let errors = validate(&TransactionDraft::new());
        assert_eq!(
            errors.messages(),
            vec![TYPE_REQUIRED, CATEGORY_REQUIRED, DETAIL_REQUIRED, AMOUNT_REQUIRED]
        );
    }

    #[test]
    fn test_non_numeric_amount_counts_as_zero() {
        let mut draft = valid_draft();
        draft.set_field(DraftField::Amount, "twelve");
        assert!(validate(&draft).contains(DraftField::Amount));
    }

    #[test]
    fn test_tiny_nonzero_amount_is_not_missing() {
        let mut draft = valid_draft();
        draft.set_field(DraftField::Amount, "0.0004");
        assert_eq!(validate(&draft).messages(), vec![AMOUNT_TOO_PRECISE]);

        draft.set_field(DraftField::Amount, "0.001");
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_huge_amount_is_rejected() {
        let mut draft = valid_draft();
        draft.set_field(DraftField::Amount, "99999999999999999");
        assert_eq!(validate(&draft).messages(), vec![AMOUNT_TOO_LARGE]);

        draft.set_field(DraftField::Amount, "-99999999999999999");
        assert_eq!(validate(&draft).messages(), vec![AMOUNT_TOO_LARGE]);
    }

    #[test]
    fn test_negative_amount_and_odd_dates_are_not_rejected() {
        let mut draft = valid_draft();
        draft.set_field(DraftField::Amount, "-40");
        draft.set_field(DraftField::Date, "not a date");
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_validate_is_pure() {
        let draft = TransactionDraft::new();
        let snapshot = draft.clone();

        let first = validate(&draft);
        let second = validate(&draft);

        assert_eq!(first, second);
        assert_eq!(draft, snapshot);
    }
}
