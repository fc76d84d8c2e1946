use super::enums::{Faction, MajorOrderType, RewardType, ValueType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Major order (assignment) from `/api/v1/assignments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    #[serde(default)]
    pub progress: Vec<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub briefing: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub reward: Option<Reward>,
    pub expiration: DateTime<Utc>,
}

impl Assignment {
    /// Whether the task at `index` has reached its goal.
    /// Progress entries are paired positionally with tasks.
    pub fn is_task_complete(&self, index: usize) -> bool {
        let Some(task) = self.tasks.get(index) else {
            return false;
        };
        let progress = self.progress.get(index).copied().unwrap_or(0);
        match task.decoded().goal {
            Some(goal) => progress >= goal,
            None => progress > 0,
        }
    }

    /// Planet indices named by any task, first occurrence first.
    pub fn planet_indices(&self) -> Vec<i32> {
        let mut indices = Vec::new();
        for task in &self.tasks {
            for index in task.decoded().planet_indices {
                if let Ok(index) = i32::try_from(index)
                    && !indices.contains(&index)
                {
                    indices.push(index);
                }
            }
        }
        indices
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "type")]
    pub task_type: i32,
    #[serde(default)]
    pub values: Vec<i64>,
    #[serde(rename = "valueTypes", default)]
    pub value_types: Vec<i32>,
}

/// Task values keyed by their meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskValues {
    pub race: Option<Faction>,
    pub goal: Option<i64>,
    pub liberate: Option<i64>,
    pub planet_indices: Vec<i64>,
    /// Values whose type code is unrecognized or explicitly "unknown".
    pub unknown: Vec<i64>,
}

impl Task {
    pub fn kind(&self) -> Option<MajorOrderType> {
        MajorOrderType::parse(self.task_type)
    }

    /// Pairs `values` with `value_types`. Planet indices accumulate,
    /// every other type keeps the last value seen.
    pub fn decoded(&self) -> TaskValues {
        let mut decoded = TaskValues::default();

        for (position, value) in self.values.iter().copied().enumerate() {
            let value_type = self
                .value_types
                .get(position)
                .and_then(|code| ValueType::parse(*code))
                .unwrap_or(ValueType::Unknown);

            match value_type {
                ValueType::Race => decoded.race = i32::try_from(value).ok().and_then(Faction::parse),
                ValueType::Goal => decoded.goal = Some(value),
                ValueType::Liberate => decoded.liberate = Some(value),
                ValueType::PlanetIndex => decoded.planet_indices.push(value),
                ValueType::Unknown => decoded.unknown.push(value),
            }
        }

        decoded
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(rename = "type")]
    pub reward_type: i32,
    #[serde(default)]
    pub amount: u64,
}

impl Reward {
    pub fn kind(&self) -> Option<RewardType> {
        RewardType::parse(self.reward_type)
    }
}
