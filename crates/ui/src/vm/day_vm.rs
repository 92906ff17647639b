use services::DayOverview;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayOptionVm {
    pub index: usize,
    pub text: String,
}

impl From<&DayOverview> for DayOptionVm {
    fn from(day: &DayOverview) -> Self {
        let noun = if day.word_count == 1 { "word" } else { "words" };
        Self {
            index: day.index,
            text: format!("{} ({} {noun})", day.label, day.word_count),
        }
    }
}

#[must_use]
pub fn map_day_options(days: &[DayOverview]) -> Vec<DayOptionVm> {
    days.iter().map(DayOptionVm::from).collect()
}
