use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const PROJECTS: [&str; 5] = [
    "プロジェクトA",
    "プロジェクトB",
    "プロジェクトC",
    "運用保守",
    "社内業務",
];

/// Opaque row identifier. Never displayed; only used to address a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub const SEED: &'static str = "0";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identifier of the row every sheet starts with.
    pub fn seed() -> Self {
        Self::new(Self::SEED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Date,
    ProjectName,
    StartTime,
    EndTime,
    BreakTime,
    WorkContent,
}

impl RecordField {
    pub const ALL: [RecordField; 6] = [
        RecordField::Date,
        RecordField::ProjectName,
        RecordField::StartTime,
        RecordField::EndTime,
        RecordField::BreakTime,
        RecordField::WorkContent,
    ];

    pub fn column_label(&self) -> &'static str {
        match self {
            RecordField::Date => "日付",
            RecordField::ProjectName => "案件名",
            RecordField::StartTime => "開始時間",
            RecordField::EndTime => "終了時間",
            RecordField::BreakTime => "休憩時間",
            RecordField::WorkContent => "作業内容",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub date: String,
    pub project_name: String,
    pub start_time: String,
    pub end_time: String,
    pub break_time: String,
    pub work_content: String,
}

impl AttendanceRecord {
    pub fn blank(id: RecordId, date: NaiveDate) -> Self {
        Self {
            id,
            date: date.format("%Y-%m-%d").to_string(),
            project_name: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            break_time: String::new(),
            work_content: String::new(),
        }
    }

    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Date => &self.date,
            RecordField::ProjectName => &self.project_name,
            RecordField::StartTime => &self.start_time,
            RecordField::EndTime => &self.end_time,
            RecordField::BreakTime => &self.break_time,
            RecordField::WorkContent => &self.work_content,
        }
    }

    pub fn set_field(&mut self, field: RecordField, value: String) {
        let slot = match field {
            RecordField::Date => &mut self.date,
            RecordField::ProjectName => &mut self.project_name,
            RecordField::StartTime => &mut self.start_time,
            RecordField::EndTime => &mut self.end_time,
            RecordField::BreakTime => &mut self.break_time,
            RecordField::WorkContent => &mut self.work_content,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    #[default]
    Actual,
    Planned,
}

impl EntryMode {
    pub const ALL: [EntryMode; 2] = [EntryMode::Actual, EntryMode::Planned];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Actual => "actual",
            EntryMode::Planned => "planned",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            EntryMode::Actual => "勤怠実績",
            EntryMode::Planned => "勤怠予定",
        }
    }

    pub fn saved_title(&self) -> &'static str {
        match self {
            EntryMode::Actual => "実績を保存しました",
            EntryMode::Planned => "予定を保存しました",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("最低1行は必要です")]
    LastRowRequired,
    #[error("record {0} not found")]
    RecordNotFound(RecordId),
}
