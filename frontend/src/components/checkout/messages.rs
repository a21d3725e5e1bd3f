use common::checkout::SubmitOutcome;
use common::model::field::Field;

pub enum Msg {
    SelectConcert(u32),
    UpdateField(Field, String),
    Submit,
    SubmitFinished(SubmitOutcome),
}
