use fbwire::{Result, SqlType, XSqlVar, calc_blr, calc_blr_strict};

use crate::hex;

pub fn main() -> Result<()> {
    let xsqlda = [
        XSqlVar::new(SqlType::Varying).with_len(40).with_names("NAME", "EMPLOYEE", "NAME"),
        XSqlVar::new(SqlType::Int64).with_scale(-2).with_names("SALARY", "EMPLOYEE", "SALARY"),
        XSqlVar::new(SqlType::Timestamp).with_names("HIRED", "EMPLOYEE", "HIRED"),
    ];
    let blr = calc_blr_strict(&xsqlda)?;
    tracing::info!(blr = %hex(&blr), "columns");

    // INT128, skipped and logged
    let blr = calc_blr(&[XSqlVar::from_code(32752)]);
    tracing::info!(blr = %hex(&blr), "unknown column");

    Ok(())
}
