//! SQL DDL for initializing the credit_default table.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (store-assigned, immutable)
/// - Demographic and billing columns mirrored from the UCI credit-default
///   dataset; the repayment-status columns skip `pay_1` (dataset quirk)
/// - Every non-identity column nullable; presence of the required create
///   subset is enforced in the gateway, not the schema
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS credit_default (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    limit_balance REAL NULL,
    sex INTEGER NULL,
    education INTEGER NULL,
    marriage INTEGER NULL,
    age INTEGER NULL,
    pay_0 INTEGER NULL,
    pay_2 INTEGER NULL,
    pay_3 INTEGER NULL,
    pay_4 INTEGER NULL,
    pay_5 INTEGER NULL,
    pay_6 INTEGER NULL,
    bill_amt1 REAL NULL,
    bill_amt2 REAL NULL,
    bill_amt3 REAL NULL,
    bill_amt4 REAL NULL,
    bill_amt5 REAL NULL,
    bill_amt6 REAL NULL,
    pay_amt1 REAL NULL,
    pay_amt2 REAL NULL,
    pay_amt3 REAL NULL,
    pay_amt4 REAL NULL,
    pay_amt5 REAL NULL,
    pay_amt6 REAL NULL,
    default_next_month INTEGER NULL
);
"#;
