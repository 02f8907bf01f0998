use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeStatus {
    Paid,
    Due,
    Overdue,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "PAID",
            FeeStatus::Due => "DUE",
            FeeStatus::Overdue => "OVERDUE",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, FeeStatus::Paid)
    }
}

/// An invoice billed to one student. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeInvoice {
    pub id: String,
    pub title: String,
    pub amount: u32,
    pub due_date: NaiveDate,
    pub status: FeeStatus,
    pub student_id: String,
}

/// Paid and outstanding totals over a set of invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSummary {
    pub collected: u64,
    pub outstanding: u64,
}

impl FeeSummary {
    pub fn from_invoices<'a>(invoices: impl IntoIterator<Item = &'a FeeInvoice>) -> Self {
        invoices
            .into_iter()
            .fold(FeeSummary::default(), |mut summary, fee| {
                if fee.status.is_paid() {
                    summary.collected += u64::from(fee.amount);
                } else {
                    summary.outstanding += u64::from(fee.amount);
                }
                summary
            })
    }
}

/// Format a whole amount with thousands separators: 45200 -> "$45,200".
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(amount: u32, status: FeeStatus) -> FeeInvoice {
        FeeInvoice {
            id: "f".into(),
            title: "Fee".into(),
            amount,
            due_date: NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            status,
            student_id: "u3".into(),
        }
    }

    #[test]
    fn summary_splits_paid_and_unpaid() {
        let fees = [
            invoice(1500, FeeStatus::Paid),
            invoice(300, FeeStatus::Due),
            invoice(200, FeeStatus::Overdue),
        ];
        let summary = FeeSummary::from_invoices(&fees);
        assert_eq!(summary.collected, 1500);
        assert_eq!(summary.outstanding, 500);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(FeeSummary::from_invoices(&[]), FeeSummary::default());
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(300), "$300");
        assert_eq!(format_currency(1500), "$1,500");
        assert_eq!(format_currency(45200), "$45,200");
        assert_eq!(format_currency(1234567), "$1,234,567");
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&FeeStatus::Overdue).unwrap(), "\"OVERDUE\"");
    }
}
