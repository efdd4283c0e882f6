use crate::models::{ClaimSummaryRow, Dashboard, EmployeeCountRow, PremiumTotalRow};

pub fn format_employee_counts_markdown(rows: &[EmployeeCountRow]) -> String {
    let mut out = String::from("## Employees by Organization\n\n| Organization ID | Organization | Employees |\n|---|---|---|\n");
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            row.organization_id,
            escape_cell(&row.organization_name),
            row.employee_count
        ));
    }
    let total: u64 = rows.iter().map(|r| r.employee_count).sum();
    out.push_str(&format!("| | **Total** | **{}** |\n", total));
    out
}

pub fn format_premium_totals_markdown(rows: &[PremiumTotalRow]) -> String {
    let mut out = String::from("## Premium Collected\n\n| Organization ID | Organization | Total Premium |\n|---|---|---|\n");
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            row.organization_id,
            escape_cell(&row.organization_name),
            row.total_premium_collected
        ));
    }
    out
}

pub fn format_claim_summaries_markdown(rows: &[ClaimSummaryRow]) -> String {
    let mut out = String::from("## Claims by Enrollment\n\n| Enrollment ID | Claims | Approved Amount |\n|---|---|---|\n");
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            row.enrollment_id, row.total_claims, row.total_approved_amount
        ));
    }
    out
}

pub fn format_dashboard_markdown(dashboard: &Dashboard) -> String {
    [
        format_employee_counts_markdown(&dashboard.employee_counts),
        format_premium_totals_markdown(&dashboard.premium_totals),
        format_claim_summaries_markdown(&dashboard.claim_summaries),
    ]
    .join("\n")
}

// Pipes would split the cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_employee_counts_table_with_total() {
        let rows = vec![
            EmployeeCountRow { organization_id: 1, organization_name: "A".into(), employee_count: 5 },
            EmployeeCountRow { organization_id: 2, organization_name: "B".into(), employee_count: 0 },
        ];
        let table = format_employee_counts_markdown(&rows);
        assert!(table.contains("| 1 | A | 5 |"));
        assert!(table.contains("| 2 | B | 0 |"));
        assert!(table.contains("**5**"));
    }

    #[test]
    fn test_dashboard_sections_and_amounts() {
        let dashboard = Dashboard {
            employee_counts: vec![],
            premium_totals: vec![PremiumTotalRow {
                organization_id: 3,
                organization_name: "Pipe|Works".into(),
                total_premium_collected: Decimal::new(120_050, 2),
            }],
            claim_summaries: vec![ClaimSummaryRow {
                enrollment_id: 9,
                total_claims: 3,
                total_approved_amount: Decimal::new(15_000, 2),
            }],
        };
        let text = format_dashboard_markdown(&dashboard);
        assert!(text.contains("## Employees by Organization"));
        assert!(text.contains("| 3 | Pipe\\|Works | 1200.50 |"));
        assert!(text.contains("| 9 | 3 | 150.00 |"));
    }
}
