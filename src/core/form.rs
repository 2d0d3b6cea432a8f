use crate::domain::model::{CampusEntry, CampusHours, RowId, SalaryRequest, SalaryResult};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::number::{is_valid_floating_point_number, parse_decimal};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 點擊事件的來源元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    AddCampus,
    RemoveCampus(RowId),
    Other,
}

#[derive(Debug)]
pub enum FormEvent {
    Click(ClickTarget),
    EditHourlyRate(String),
    EditCampusName { row: RowId, value: String },
    EditHours { row: RowId, value: String },
    Submit,
    SubmissionSettled {
        id: SubmissionId,
        outcome: Result<SalaryResult>,
    },
}

/// 狀態機要求外部執行的動作
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Send {
        id: SubmissionId,
        request: SalaryRequest,
    },
}

/// 結果區塊目前顯示的內容
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Empty,
    Rendered(SalaryResult),
    ErrorNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Rendered,
    ErrorShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HourlyRate,
    CampusName(RowId),
    CampusHours(RowId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    NotANumber,
    BelowMinimum,
}

/// 瀏覽器層級的欄位檢查結果 (required / type=number / min)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub violation: Violation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub block_concurrent_submissions: bool,
    pub enforce_field_constraints: bool,
}

impl FormSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            block_concurrent_submissions: config.block_concurrent_submissions(),
            enforce_field_constraints: config.enforce_field_constraints(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            block_concurrent_submissions: false,
            enforce_field_constraints: true,
        }
    }
}

#[derive(Debug, Clone)]
struct InFlight {
    id: SubmissionId,
    started_at: DateTime<Utc>,
}

/// 表單的完整 UI 狀態，只能透過 [`FormState::apply`] 改變
#[derive(Debug, Clone)]
pub struct FormState {
    settings: FormSettings,
    hourly_rate: String,
    entries: Vec<CampusEntry>,
    next_row: u64,
    next_submission: u64,
    in_flight: Vec<InFlight>,
    panel: ResultPanel,
    violations: Vec<FieldViolation>,
}

impl FormState {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            settings,
            hourly_rate: String::new(),
            entries: Vec::new(),
            next_row: 1,
            next_submission: 1,
            in_flight: Vec::new(),
            panel: ResultPanel::Empty,
            violations: Vec::new(),
        }
    }

    /// 事件分派：每種事件對應一個處理函式
    pub fn apply(&mut self, event: FormEvent) -> Option<Command> {
        match event {
            FormEvent::Click(ClickTarget::AddCampus) => {
                self.add_entry();
                None
            }
            FormEvent::Click(ClickTarget::RemoveCampus(row)) => {
                self.remove_entry(row);
                None
            }
            FormEvent::Click(ClickTarget::Other) => None,
            FormEvent::EditHourlyRate(value) => {
                self.hourly_rate = value;
                None
            }
            FormEvent::EditCampusName { row, value } => {
                match self.entry_mut(row) {
                    Some(entry) => entry.name = value,
                    None => tracing::warn!("Ignoring name edit for unknown row {}", row),
                }
                None
            }
            FormEvent::EditHours { row, value } => {
                match self.entry_mut(row) {
                    Some(entry) => entry.hours = value,
                    None => tracing::warn!("Ignoring hours edit for unknown row {}", row),
                }
                None
            }
            FormEvent::Submit => self.submit(),
            FormEvent::SubmissionSettled { id, outcome } => {
                self.settle(id, outcome);
                None
            }
        }
    }

    fn add_entry(&mut self) -> RowId {
        let id = RowId(self.next_row);
        self.next_row += 1;
        self.entries.push(CampusEntry {
            id,
            name: String::new(),
            hours: String::new(),
        });
        tracing::debug!("➕ Added campus row {} ({} rows)", id, self.entries.len());
        id
    }

    fn remove_entry(&mut self, row: RowId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != row);
        let removed = self.entries.len() < before;
        if removed {
            tracing::debug!("➖ Removed campus row {} ({} rows)", row, self.entries.len());
        }
        removed
    }

    fn entry_mut(&mut self, row: RowId) -> Option<&mut CampusEntry> {
        self.entries.iter_mut().find(|entry| entry.id == row)
    }

    fn submit(&mut self) -> Option<Command> {
        if self.settings.block_concurrent_submissions && !self.in_flight.is_empty() {
            tracing::info!(
                "⏳ Submission ignored, {} request(s) still in flight",
                self.in_flight.len()
            );
            return None;
        }

        if self.settings.enforce_field_constraints {
            self.violations = self.check_constraints();
            if !self.violations.is_empty() {
                tracing::info!(
                    "🚫 Submission blocked by {} field constraint(s)",
                    self.violations.len()
                );
                return None;
            }
        }

        let request = self.build_request();
        let id = SubmissionId(self.next_submission);
        self.next_submission += 1;
        self.in_flight.push(InFlight {
            id,
            started_at: Utc::now(),
        });

        tracing::info!(
            "📤 Submission {} with {} campus entries",
            id,
            request.campuses.len()
        );
        Some(Command::Send { id, request })
    }

    fn settle(&mut self, id: SubmissionId, outcome: Result<SalaryResult>) {
        let Some(position) = self.in_flight.iter().position(|pending| pending.id == id) else {
            tracing::warn!("Ignoring settlement for unknown submission {}", id);
            return;
        };
        let pending = self.in_flight.remove(position);
        let elapsed_ms = (Utc::now() - pending.started_at).num_milliseconds();

        // 最後完成的請求覆蓋畫面，不論送出的先後
        match outcome {
            Ok(result) => {
                tracing::info!(
                    "✅ Submission {} rendered {} campus details in {}ms",
                    id,
                    result.details.len(),
                    elapsed_ms
                );
                self.panel = ResultPanel::Rendered(result);
            }
            Err(e) => {
                tracing::error!(
                    "❌ Submission {} failed after {}ms: {} (Category: {:?})",
                    id,
                    elapsed_ms,
                    e,
                    e.category()
                );
                self.panel = ResultPanel::ErrorNotice;
            }
        }
    }

    /// 依畫面順序讀取所有列；數值以 parseFloat 規則解析，不另外檢查 NaN
    pub fn build_request(&self) -> SalaryRequest {
        SalaryRequest {
            hourly_rate: parse_decimal(&self.hourly_rate),
            campuses: self
                .entries
                .iter()
                .map(|entry| CampusHours {
                    campus: entry.name.clone(),
                    hours: parse_decimal(&entry.hours),
                })
                .collect(),
        }
    }

    pub fn check_constraints(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if let Some(violation) = check_number(&self.hourly_rate, None) {
            violations.push(FieldViolation {
                field: Field::HourlyRate,
                violation,
            });
        }

        for entry in &self.entries {
            if entry.name.is_empty() {
                violations.push(FieldViolation {
                    field: Field::CampusName(entry.id),
                    violation: Violation::Missing,
                });
            }
            if let Some(violation) = check_number(&entry.hours, Some(0.0)) {
                violations.push(FieldViolation {
                    field: Field::CampusHours(entry.id),
                    violation,
                });
            }
        }

        violations
    }

    pub fn status(&self) -> SubmissionStatus {
        if !self.in_flight.is_empty() {
            return SubmissionStatus::Submitting;
        }
        match self.panel {
            ResultPanel::Empty => SubmissionStatus::Idle,
            ResultPanel::Rendered(_) => SubmissionStatus::Rendered,
            ResultPanel::ErrorNotice => SubmissionStatus::ErrorShown,
        }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn hourly_rate(&self) -> &str {
        &self.hourly_rate
    }

    pub fn entries(&self) -> &[CampusEntry] {
        &self.entries
    }

    pub fn last_entry(&self) -> Option<&CampusEntry> {
        self.entries.last()
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormSettings::default())
    }
}

fn check_number(value: &str, min: Option<f64>) -> Option<Violation> {
    if value.trim().is_empty() {
        return Some(Violation::Missing);
    }
    if !is_valid_floating_point_number(value) {
        return Some(Violation::NotANumber);
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => match min {
            Some(min) if number < min => Some(Violation::BelowMinimum),
            _ => None,
        },
        _ => Some(Violation::NotANumber),
    }
}
