mod day_vm;
mod quiz_vm;

pub use day_vm::{DayOptionVm, map_day_options};
pub use quiz_vm::{
    ChoiceMark, ChoiceVm, EndScreenVm, FeedbackVm, GameScreenVm, QuizIntent, QuizPhase,
    QuizScreenVm, QuizVm,
};
