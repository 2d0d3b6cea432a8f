use crate::core::form::{ClickTarget, Command, FormEvent, FormSettings, FormState, SubmissionId};
use crate::domain::model::{RowId, SalaryResult};
use crate::domain::ports::SalaryCalculator;
use crate::utils::error::{FormError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::{self, JoinSet};

/// 把 [`FormState`] 的命令交給計算服務執行，並把結果送回狀態機
pub struct FormController<C: SalaryCalculator + 'static> {
    state: FormState,
    calculator: Arc<C>,
    requests: JoinSet<(SubmissionId, Result<SalaryResult>)>,
    task_ids: HashMap<task::Id, SubmissionId>,
}

impl<C: SalaryCalculator + 'static> FormController<C> {
    pub fn new(calculator: C, settings: FormSettings) -> Self {
        Self::with_shared(Arc::new(calculator), settings)
    }

    pub fn with_shared(calculator: Arc<C>, settings: FormSettings) -> Self {
        Self {
            state: FormState::new(settings),
            calculator,
            requests: JoinSet::new(),
            task_ids: HashMap::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// 套用事件；若產生送出命令就在背景執行請求並回傳其編號
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmissionId> {
        match self.state.apply(event)? {
            Command::Send { id, request } => {
                let calculator = Arc::clone(&self.calculator);
                let handle = self.requests.spawn(async move {
                    let outcome = calculator.calculate(&request).await;
                    (id, outcome)
                });
                self.task_ids.insert(handle.id(), id);
                Some(id)
            }
        }
    }

    /// 新增一列並填入內容
    pub fn add_campus(&mut self, name: &str, hours: &str) -> Option<RowId> {
        self.dispatch(FormEvent::Click(ClickTarget::AddCampus));
        let row = self.state.last_entry()?.id;
        self.dispatch(FormEvent::EditCampusName {
            row,
            value: name.to_string(),
        });
        self.dispatch(FormEvent::EditHours {
            row,
            value: hours.to_string(),
        });
        Some(row)
    }

    /// 等待下一個完成的請求 (依完成順序) 並回饋給狀態機
    pub async fn settle_next(&mut self) -> Option<SubmissionId> {
        let (id, outcome) = match self.requests.join_next_with_id().await? {
            Ok((task_id, (id, outcome))) => {
                self.task_ids.remove(&task_id);
                (id, outcome)
            }
            Err(join_error) => {
                let id = self.task_ids.remove(&join_error.id())?;
                let outcome = Err(FormError::TaskError {
                    message: join_error.to_string(),
                });
                (id, outcome)
            }
        };

        self.state.apply(FormEvent::SubmissionSettled { id, outcome });
        Some(id)
    }

    pub async fn settle_all(&mut self) {
        while !self.requests.is_empty() {
            if self.settle_next().await.is_none() {
                tracing::warn!("Submission task finished without a known id");
            }
        }
    }

    /// 送出表單並等待所有進行中的請求完成
    pub async fn submit(&mut self) -> Option<SubmissionId> {
        let id = self.dispatch(FormEvent::Submit);
        self.settle_all().await;
        id
    }
}
