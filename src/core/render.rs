use crate::core::form::{FormState, ResultPanel};
use crate::domain::model::{CampusEntry, SalaryResult};
use crate::utils::currency::CurrencyFormatter;
use crate::utils::error::SUBMISSION_ERROR_NOTICE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Html,
    Text,
}

/// campus 輸入列的 HTML，與頁面原本的 Bootstrap 版面相同
pub fn render_campus_rows(entries: &[CampusEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        html.push_str(&format!(
            r#"<div class="row mb-3 campus-field" data-row="{id}">
  <div class="col-12 col-md-6 mb-2 mb-md-0">
    <input type="text" class="form-control" placeholder="Nome do Campus" name="campus" value="{name}" required>
  </div>
  <div class="col-12 col-md-4 mb-2 mb-md-0">
    <input type="number" step="0.1" min="0" class="form-control" placeholder="Horas Semanais" name="hours" value="{hours}" required>
  </div>
  <div class="col-12 col-md-2">
    <button type="button" class="btn btn-danger w-100 remove-campus" data-row="{id}">Remover</button>
  </div>
</div>
"#,
            id = entry.id,
            name = escape_html(&entry.name),
            hours = escape_html(&entry.hours),
        ));
    }
    html
}

pub fn render_result_html(result: &SalaryResult, formatter: &CurrencyFormatter) -> String {
    let mut html = String::from("<h2>Resultado</h2>");
    html.push_str(&format!(
        "<p><strong>Salário Semanal Total:</strong> {}</p>",
        formatter.format(result.overall_weekly_salary)
    ));
    html.push_str(&format!(
        "<p><strong>Salário Mensal Total:</strong> {}</p>",
        formatter.format(result.overall_monthly_salary)
    ));
    html.push_str("<h3>Detalhamento por Campus</h3>");
    html.push_str(r#"<ul class="list-group">"#);
    for item in &result.details {
        html.push_str(&format!(
            r#"<li class="list-group-item"><strong>{}</strong>: {} (semana), {} (mês)</li>"#,
            escape_html(&item.campus),
            formatter.format(item.weekly_salary),
            formatter.format(item.monthly_salary)
        ));
    }
    html.push_str("</ul>");
    html
}

pub fn render_error_html() -> String {
    format!(
        r#"<div class="alert alert-danger">{}</div>"#,
        SUBMISSION_ERROR_NOTICE
    )
}

/// 結果區塊由狀態推導，不保留任何額外的畫面狀態
pub fn render_result_panel(state: &FormState, formatter: &CurrencyFormatter) -> String {
    match state.panel() {
        ResultPanel::Empty => String::new(),
        ResultPanel::Rendered(result) => render_result_html(result, formatter),
        ResultPanel::ErrorNotice => render_error_html(),
    }
}

pub fn render_text(panel: &ResultPanel, formatter: &CurrencyFormatter) -> String {
    match panel {
        ResultPanel::Empty => String::new(),
        ResultPanel::ErrorNotice => SUBMISSION_ERROR_NOTICE.to_string(),
        ResultPanel::Rendered(result) => {
            let mut lines = vec![
                "Resultado".to_string(),
                format!(
                    "Salário Semanal Total: {}",
                    formatter.format(result.overall_weekly_salary)
                ),
                format!(
                    "Salário Mensal Total: {}",
                    formatter.format(result.overall_monthly_salary)
                ),
                "Detalhamento por Campus".to_string(),
            ];
            for item in &result.details {
                let hours = match (item.weekly_hours, item.monthly_hours) {
                    (Some(weekly), Some(monthly)) => {
                        format!(" [{}h/semana, {}h/mês]", weekly, monthly)
                    }
                    _ => String::new(),
                };
                lines.push(format!(
                    "- {}: {} (semana), {} (mês){}",
                    item.campus,
                    formatter.format(item.weekly_salary),
                    formatter.format(item.monthly_salary),
                    hours
                ));
            }
            lines.join("\n")
        }
    }
}

pub fn render(state: &FormState, format: OutputFormat, formatter: &CurrencyFormatter) -> String {
    match format {
        OutputFormat::Html => render_result_panel(state, formatter),
        OutputFormat::Text => render_text(state.panel(), formatter),
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{ClickTarget, FormEvent};
    use crate::domain::model::CampusSalary;

    fn main_campus_result() -> SalaryResult {
        SalaryResult::from_json(
            r#"{"overall_weekly_salary":800,"overall_monthly_salary":3466.67,"details":[{"campus":"Main","weekly_salary":800,"monthly_salary":3466.67}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_result_html_contains_formatted_currency() {
        let html = render_result_html(&main_campus_result(), &CurrencyFormatter::brl());

        assert!(html.starts_with("<h2>Resultado</h2>"));
        assert!(html.contains("<strong>Salário Semanal Total:</strong> R$\u{a0}800,00"));
        assert!(html.contains("<strong>Salário Mensal Total:</strong> R$\u{a0}3.466,67"));
        assert!(html.contains(
            "<strong>Main</strong>: R$\u{a0}800,00 (semana), R$\u{a0}3.466,67 (mês)"
        ));
    }

    #[test]
    fn test_details_render_in_response_order() {
        let result = SalaryResult {
            overall_weekly_salary: 30.0,
            overall_monthly_salary: 120.0,
            details: ["Zeta", "Alfa"]
                .iter()
                .map(|campus| CampusSalary {
                    campus: campus.to_string(),
                    weekly_salary: 15.0,
                    monthly_salary: 60.0,
                    weekly_hours: None,
                    monthly_hours: None,
                })
                .collect(),
        };

        let html = render_result_html(&result, &CurrencyFormatter::brl());
        assert!(html.find("Zeta").unwrap() < html.find("Alfa").unwrap());
    }

    #[test]
    fn test_campus_names_are_escaped() {
        let mut result = main_campus_result();
        result.details[0].campus = "<script>alert(1)</script>".to_string();

        let html = render_result_html(&result, &CurrencyFormatter::brl());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_panel_follows_state() {
        let mut state = FormState::default();
        let formatter = CurrencyFormatter::brl();
        assert_eq!(render_result_panel(&state, &formatter), "");

        state.apply(FormEvent::EditHourlyRate("20".to_string()));
        let id = match state.apply(FormEvent::Submit) {
            Some(crate::core::form::Command::Send { id, .. }) => id,
            None => panic!("expected submission"),
        };
        state.apply(FormEvent::SubmissionSettled {
            id,
            outcome: Err(crate::utils::error::FormError::MalformedResponse {
                message: "eof".to_string(),
            }),
        });

        let html = render_result_panel(&state, &formatter);
        assert_eq!(html, render_error_html());
        assert!(!html.contains("Resultado"));
    }

    #[test]
    fn test_campus_rows_markup() {
        let mut state = FormState::default();
        state.apply(FormEvent::Click(ClickTarget::AddCampus));
        state.apply(FormEvent::Click(ClickTarget::AddCampus));

        let html = render_campus_rows(state.entries());
        assert_eq!(html.matches("campus-field").count(), 2);
        assert_eq!(html.matches("remove-campus").count(), 2);
        assert_eq!(html.matches(" required>").count(), 4);
    }

    #[test]
    fn test_campus_rows_keep_insertion_order_after_removals() {
        let mut state = FormState::default();
        let mut rows = Vec::new();
        for name in ["Centro", "Norte", "Sul"] {
            state.apply(FormEvent::Click(ClickTarget::AddCampus));
            let row = state.last_entry().unwrap().id;
            state.apply(FormEvent::EditCampusName {
                row,
                value: name.to_string(),
            });
            rows.push(row);
        }
        state.apply(FormEvent::Click(ClickTarget::RemoveCampus(rows[1])));
        state.apply(FormEvent::Click(ClickTarget::AddCampus));
        let row = state.last_entry().unwrap().id;
        state.apply(FormEvent::EditCampusName {
            row,
            value: "Leste".to_string(),
        });
        state.apply(FormEvent::Click(ClickTarget::RemoveCampus(rows[0])));

        let html = render_campus_rows(state.entries());
        assert_eq!(html.matches("campus-field").count(), 2);
        assert!(!html.contains(r#"value="Centro""#));
        assert!(!html.contains(r#"value="Norte""#));
        let sul = html.find(r#"value="Sul""#).unwrap();
        let leste = html.find(r#"value="Leste""#).unwrap();
        assert!(sul < leste);
    }

    #[test]
    fn test_text_rendering() {
        let panel = ResultPanel::Rendered(main_campus_result());
        let text = render_text(&panel, &CurrencyFormatter::brl());

        assert!(text.contains("Salário Semanal Total: R$\u{a0}800,00"));
        assert!(text.contains("- Main: R$\u{a0}800,00 (semana), R$\u{a0}3.466,67 (mês)"));
        assert_eq!(
            render_text(&ResultPanel::ErrorNotice, &CurrencyFormatter::brl()),
            SUBMISSION_ERROR_NOTICE
        );
    }
}
