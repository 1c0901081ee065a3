use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `credit_default` table as stored. Field names pass through
/// to the wire unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CreditRecord {
    pub id: i64,
    pub limit_balance: Option<f64>,
    pub sex: Option<i64>,
    pub education: Option<i64>,
    pub marriage: Option<i64>,
    pub age: Option<i64>,
    pub pay_0: Option<i64>,
    pub pay_2: Option<i64>,
    pub pay_3: Option<i64>,
    pub pay_4: Option<i64>,
    pub pay_5: Option<i64>,
    pub pay_6: Option<i64>,
    pub bill_amt1: Option<f64>,
    pub bill_amt2: Option<f64>,
    pub bill_amt3: Option<f64>,
    pub bill_amt4: Option<f64>,
    pub bill_amt5: Option<f64>,
    pub bill_amt6: Option<f64>,
    pub pay_amt1: Option<f64>,
    pub pay_amt2: Option<f64>,
    pub pay_amt3: Option<f64>,
    pub pay_amt4: Option<f64>,
    pub pay_amt5: Option<f64>,
    pub pay_amt6: Option<f64>,
    pub default_next_month: Option<i64>,
}

/// Caller-supplied field set for create and partial update. `id` is never
/// accepted from the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditRecordInput {
    pub limit_balance: Option<f64>,
    pub sex: Option<i64>,
    pub education: Option<i64>,
    pub marriage: Option<i64>,
    pub age: Option<i64>,
    pub pay_0: Option<i64>,
    pub pay_2: Option<i64>,
    pub pay_3: Option<i64>,
    pub pay_4: Option<i64>,
    pub pay_5: Option<i64>,
    pub pay_6: Option<i64>,
    pub bill_amt1: Option<f64>,
    pub bill_amt2: Option<f64>,
    pub bill_amt3: Option<f64>,
    pub bill_amt4: Option<f64>,
    pub bill_amt5: Option<f64>,
    pub bill_amt6: Option<f64>,
    pub pay_amt1: Option<f64>,
    pub pay_amt2: Option<f64>,
    pub pay_amt3: Option<f64>,
    pub pay_amt4: Option<f64>,
    pub pay_amt5: Option<f64>,
    pub pay_amt6: Option<f64>,
    pub default_next_month: Option<i64>,
}

/// A bound value for dynamic statement assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Real(f64),
}

impl CreditRecordInput {
    /// The minimal subset a create must supply.
    pub const REQUIRED: [&'static str; 5] =
        ["limit_balance", "sex", "education", "marriage", "age"];

    /// First required field absent from the input, if any.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.limit_balance.is_none() {
            Some("limit_balance")
        } else if self.sex.is_none() {
            Some("sex")
        } else if self.education.is_none() {
            Some("education")
        } else if self.marriage.is_none() {
            Some("marriage")
        } else if self.age.is_none() {
            Some("age")
        } else {
            None
        }
    }

    /// Present fields in column order, for dynamic INSERT/UPDATE lists.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut out = Vec::new();
        macro_rules! real {
            ($name:ident) => {
                if let Some(v) = self.$name {
                    out.push((stringify!($name), FieldValue::Real(v)));
                }
            };
        }
        macro_rules! int {
            ($name:ident) => {
                if let Some(v) = self.$name {
                    out.push((stringify!($name), FieldValue::Int(v)));
                }
            };
        }
        real!(limit_balance);
        int!(sex);
        int!(education);
        int!(marriage);
        int!(age);
        int!(pay_0);
        int!(pay_2);
        int!(pay_3);
        int!(pay_4);
        int!(pay_5);
        int!(pay_6);
        real!(bill_amt1);
        real!(bill_amt2);
        real!(bill_amt3);
        real!(bill_amt4);
        real!(bill_amt5);
        real!(bill_amt6);
        real!(pay_amt1);
        real!(pay_amt2);
        real!(pay_amt3);
        real!(pay_amt4);
        real!(pay_amt5);
        real!(pay_amt6);
        int!(default_next_month);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_field_reports_first_gap() {
        let mut input = CreditRecordInput {
            limit_balance: Some(20000.0),
            sex: Some(2),
            education: Some(2),
            marriage: Some(1),
            age: Some(24),
            ..Default::default()
        };
        assert_eq!(input.missing_required_field(), None);

        input.education = None;
        assert_eq!(input.missing_required_field(), Some("education"));
    }

    #[test]
    fn fields_lists_only_present_values_in_column_order() {
        let input = CreditRecordInput {
            age: Some(40),
            limit_balance: Some(1000.0),
            pay_amt3: Some(12.5),
            ..Default::default()
        };
        assert_eq!(
            input.fields(),
            vec![
                ("limit_balance", FieldValue::Real(1000.0)),
                ("age", FieldValue::Int(40)),
                ("pay_amt3", FieldValue::Real(12.5)),
            ]
        );
    }
}
