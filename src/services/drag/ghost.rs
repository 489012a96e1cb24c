// Drag preview
//
// Read by the views each frame while a drag is active; nothing is drawn
// before the first tentative placement exists.

use chrono::NaiveDate;

use super::session::{DragSession, Tentative};
use crate::models::color::ColorToken;
use crate::services::layout::{clip_to_week, week_range, TimeScale, WeekSpan};
use crate::utils::date::TimeUnit;

#[derive(Clone, Debug, PartialEq)]
pub enum Ghost {
    /// Outline in a time-grid column.
    Block(BlockGhost),
    /// Bar across one or more week rows.
    Bar(BarGhost),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockGhost {
    /// Column the outline is drawn in.
    pub date: NaiveDate,
    pub start_minute: i64,
    pub duration_minutes: i64,
    /// `HH:MM - HH:MM`
    pub label: String,
    pub title: String,
    pub color: ColorToken,
}

impl BlockGhost {
    pub fn top_px(&self, scale: &TimeScale) -> f32 {
        scale.minutes_to_px(self.start_minute)
    }

    pub fn height_px(&self, scale: &TimeScale) -> f32 {
        scale.block_height(self.duration_minutes)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGhost {
    pub placement: Tentative,
    pub title: String,
    pub color: ColorToken,
}

impl BarGhost {
    /// Visible piece of the bar in each of the given week rows.
    pub fn segments(
        &self,
        week_starts: impl IntoIterator<Item = NaiveDate>,
    ) -> Vec<(NaiveDate, WeekSpan)> {
        week_starts
            .into_iter()
            .filter_map(|week_start| {
                let (start, end) = week_range(week_start);
                clip_to_week(self.placement.start, self.placement.end, start, end)
                    .map(|span| (week_start, span))
            })
            .collect()
    }
}

impl Ghost {
    pub(super) fn for_session(session: &DragSession) -> Option<Self> {
        let placement = session.tentative?;
        let ghost = if session.is_timed() {
            Ghost::Block(BlockGhost {
                date: placement.start.date(),
                start_minute: placement.start.minutes_from_midnight(),
                duration_minutes: placement.end.diff(placement.start, TimeUnit::Minute),
                label: format!(
                    "{} - {}",
                    placement.start.format("%H:%M"),
                    placement.end.format("%H:%M")
                ),
                title: session.title.clone(),
                color: session.color,
            })
        } else {
            Ghost::Bar(BarGhost {
                placement,
                title: session.title.clone(),
                color: session.color,
            })
        };
        Some(ghost)
    }

    pub fn title(&self) -> &str {
        match self {
            Ghost::Block(block) => &block.title,
            Ghost::Bar(bar) => &bar.title,
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            Ghost::Block(block) => block.color,
            Ghost::Bar(bar) => bar.color,
        }
    }
}
