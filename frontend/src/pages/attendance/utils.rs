use super::types::{AttendanceRecord, EntryMode, RecordField, RecordId, SheetError};
use chrono::{NaiveDate, Utc};

/// Ordered, in-memory list of rows for one table. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSheet {
    records: Vec<AttendanceRecord>,
}

impl AttendanceSheet {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            records: vec![AttendanceRecord::blank(RecordId::seed(), today)],
        }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&AttendanceRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn add_row(&mut self, id: RecordId, today: NaiveDate) -> &AttendanceRecord {
        self.records.push(AttendanceRecord::blank(id, today));
        &self.records[self.records.len() - 1]
    }

    /// Removes the row unless it is the only one left.
    pub fn delete_row(&mut self, id: &RecordId) -> Result<AttendanceRecord, SheetError> {
        if self.records.len() <= 1 {
            return Err(SheetError::LastRowRequired);
        }
        let index = self
            .records
            .iter()
            .position(|record| &record.id == id)
            .ok_or_else(|| SheetError::RecordNotFound(id.clone()))?;
        Ok(self.records.remove(index))
    }

    pub fn update_field(
        &mut self,
        id: &RecordId,
        field: RecordField,
        value: impl Into<String>,
    ) -> Result<(), SheetError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| SheetError::RecordNotFound(id.clone()))?;
        record.set_field(field, value.into());
        Ok(())
    }
}

/// Issues creation-timestamp identifiers, bumped so two rows added within
/// the same millisecond still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct RecordIdGenerator {
    last: i64,
}

impl RecordIdGenerator {
    pub fn next_id(&mut self) -> RecordId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, millis: i64) -> RecordId {
        let value = millis.max(self.last.saturating_add(1));
        self.last = value;
        RecordId::new(value.to_string())
    }
}

pub trait PlannedLookup {
    fn planned_value(&self, id: &RecordId, field: RecordField) -> Option<&str>;
}

struct PlannedSample {
    key: &'static str,
    project_name: &'static str,
    start_time: &'static str,
    end_time: &'static str,
    break_time: &'static str,
    work_content: &'static str,
}

const SAMPLE_PLANNED: [PlannedSample; 2] = [
    PlannedSample {
        key: "0",
        project_name: "プロジェクトA",
        start_time: "09:00",
        end_time: "18:00",
        break_time: "1:00",
        work_content: "要件定義",
    },
    PlannedSample {
        key: "1",
        project_name: "プロジェクトA",
        start_time: "09:00",
        end_time: "18:00",
        break_time: "1:00",
        work_content: "設計作業",
    },
];

/// Static planned entries keyed by row identifier. Only rows that still
/// carry one of the sample keys ever receive a hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePlannedData;

impl PlannedLookup for SamplePlannedData {
    fn planned_value(&self, id: &RecordId, field: RecordField) -> Option<&str> {
        let sample = SAMPLE_PLANNED
            .iter()
            .find(|sample| sample.key == id.as_str())?;
        let value = match field {
            RecordField::Date => return None,
            RecordField::ProjectName => sample.project_name,
            RecordField::StartTime => sample.start_time,
            RecordField::EndTime => sample.end_time,
            RecordField::BreakTime => sample.break_time,
            RecordField::WorkContent => sample.work_content,
        };
        Some(value)
    }
}

pub fn placeholder_for(
    mode: EntryMode,
    lookup: &impl PlannedLookup,
    id: &RecordId,
    field: RecordField,
) -> String {
    match mode {
        EntryMode::Actual => lookup
            .planned_value(id, field)
            .unwrap_or_default()
            .to_string(),
        EntryMode::Planned => String::new(),
    }
}

/// Text shown in an empty input: the planned value in actual mode, a fixed
/// example in planned mode.
pub fn input_hint(mode: EntryMode, placeholder: &str, field: RecordField) -> String {
    match mode {
        EntryMode::Actual => placeholder.to_string(),
        EntryMode::Planned => match field {
            RecordField::BreakTime => "例: 1:00".to_string(),
            RecordField::WorkContent => "作業内容を入力".to_string(),
            _ => String::new(),
        },
    }
}

pub fn project_prompt(placeholder: &str) -> String {
    if placeholder.is_empty() {
        "選択してください".to_string()
    } else {
        placeholder.to_string()
    }
}
