use crate::{
    field::{Int, Key, Loc},
    file::DbcTable,
};

#[derive(Debug, Clone, Copy)]
pub struct GMSurveyAnswers;

impl DbcTable for GMSurveyAnswers {
    const TABLE_NAME: &'static str = "GMSurveyAnswers";
    const FIELD_COUNT: u32 = 20;
    const RECORD_SIZE: usize = 80;
}

impl GMSurveyAnswers {
    pub const ID: Key = Key::at(0);
    pub const SORT_INDEX: Int = Int::at(4);
    pub const GM_SURVEY_QUESTION_ID: Int = Int::at(8);
    pub const ANSWER: Loc = Loc::at(12);
}
